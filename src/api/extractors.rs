use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::api::errors::APIErrors;
use crate::data::models::user::User;

/// The user record the authentication middleware resolved for this request.
///
/// Handlers that take this extractor require an authenticated caller; the
/// request is rejected with 401 when the middleware attached nothing.
pub struct CurrentUser(pub User);

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = APIErrors;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<User>()
            .cloned()
            .map(CurrentUser)
            .ok_or(APIErrors::Unauthorized)
    }
}
