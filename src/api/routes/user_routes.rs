use crate::api::controllers::user_controller;
use crate::api::controllers::user_controller::{delete_user, edit_user, get_user_by_name};
use axum::routing::{delete, get, post};
use axum::Router;

pub fn routes() -> Router<()> {
    Router::new()
        .route("/", get(user_controller::get_all_users))
        .route("/search", get(get_user_by_name))
        .route("/{id}", get(user_controller::get_user))
        .route("/{id}", post(edit_user))
        .route("/{id}", delete(delete_user))
        .route("/{id}/orders", get(user_controller::get_user_orders))
}
