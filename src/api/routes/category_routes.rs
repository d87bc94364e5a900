use crate::api::controllers::category_controller;
use axum::routing::{delete, get, post, put};
use axum::Router;

pub fn routes() -> Router<()> {
    Router::new()
        .route("/", get(category_controller::get_categories))
        .route("/", post(category_controller::add_category))
        .route("/{id}", get(category_controller::get_category))
        .route("/{id}", put(category_controller::edit_category))
        .route("/{id}", delete(category_controller::delete_category))
}
