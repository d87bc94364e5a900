use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use axum_extra::headers::authorization::Bearer;
use axum_extra::headers::Authorization;
use axum_extra::TypedHeader;

use crate::security::jwt::{AccessClaims, JwtService};
use crate::services::user_service::UserService;

/// Best-effort identity resolution, run once per request.
///
/// Decodes the bearer token, resolves the subject claim to a user record and
/// attaches it to the request extensions. Never rejects: a missing or invalid
/// token simply means no user is attached, and endpoint-level extractors
/// decide whether that matters.
pub async fn user_authentication(
    bearer: Option<TypedHeader<Authorization<Bearer>>>,
    mut request: Request,
    next: Next,
) -> Response {
    if let Some(TypedHeader(Authorization(bearer))) = bearer {
        match JwtService::new().decode_token::<AccessClaims>(bearer.token()) {
            Ok(claims) => {
                match UserService::new().get_user_by_id(claims.sub as i32).await {
                    Ok(Some(user)) => {
                        request.extensions_mut().insert(user);
                    }
                    Ok(None) => {
                        tracing::debug!("Token subject {} has no user record", claims.sub);
                    }
                    Err(e) => {
                        tracing::warn!("User lookup failed during authentication: {}", e);
                    }
                }
            }
            Err(e) => {
                tracing::debug!("Rejected bearer token: {}", e);
            }
        }
    }

    next.run(request).await
}
