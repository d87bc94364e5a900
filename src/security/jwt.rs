use crate::api::config::Config;
use crate::data::models::user::User;
use crate::security::errors::AuthError;
use serde::{Deserialize, Serialize};

pub struct JwtService;

impl JwtService {
    pub fn new() -> Self {
        JwtService
    }

    /// Issues an access token for the given user record.
    pub fn generate_token(&self, user: &User) -> Result<String, AuthError> {
        let curr_time = chrono::Utc::now().timestamp() as usize;
        let config = Config::default();

        let claims = AccessClaims {
            sub: user.id as usize,
            iat: curr_time,
            exp: curr_time + (config.jwt_expiration_minutes * 60) as usize,
        };

        jsonwebtoken::encode(
            &jsonwebtoken::Header::default(),
            &claims,
            &jsonwebtoken::EncodingKey::from_secret(config.jwt_secret.as_ref()),
        )
        .map_err(|_| AuthError::TokenCreationError)
    }

    pub fn decode_token<T: for<'de> Deserialize<'de>>(&self, token: &str) -> Result<T, AuthError> {
        let validation = jsonwebtoken::Validation::default();

        let token_data = jsonwebtoken::decode::<T>(
            token,
            &jsonwebtoken::DecodingKey::from_secret(Config::default().jwt_secret.as_ref()),
            &validation,
        )
        .map_err(|_| AuthError::InvalidToken)?;

        Ok(token_data.claims)
    }
}

impl Default for JwtService {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AccessClaims {
    /// Subject (user ID)
    pub sub: usize,
    /// Issued at (as UTC timestamp)
    pub iat: usize,
    /// Expiration time (as UTC timestamp)
    pub exp: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::models::user::UserRole;

    fn test_user() -> User {
        User {
            id: 42,
            username: "carol".to_string(),
            password_hash: "x".to_string(),
            role: UserRole::Member,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    #[serial_test::serial]
    fn token_round_trips_subject_claim() {
        std::env::set_var("JWT_SECRET", "test-secret");

        let service = JwtService::new();
        let token = service.generate_token(&test_user()).expect("token");
        let claims: AccessClaims = service.decode_token(&token).expect("claims");

        assert_eq!(claims.sub, 42);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    #[serial_test::serial]
    fn tampered_token_is_rejected() {
        std::env::set_var("JWT_SECRET", "test-secret");

        let service = JwtService::new();
        let mut token = service.generate_token(&test_user()).expect("token");
        token.push('x');

        assert!(service.decode_token::<AccessClaims>(&token).is_err());
    }
}
