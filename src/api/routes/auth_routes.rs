use crate::api::controllers::user_controller::{login, register_user};
use axum::routing::post;
use axum::Router;

pub fn routes() -> Router<()> {
    Router::new()
        .route("/users/register", post(register_user))
        .route("/users/login", post(login))
}
