use crate::api::controllers::advertisement_controller;
use axum::routing::{delete, get, post};
use axum::Router;

pub fn routes() -> Router<()> {
    Router::new()
        .route(
            "/search",
            post(advertisement_controller::search_advertisements),
        )
        .route(
            "/{id}",
            get(advertisement_controller::get_advertisement_by_id),
        )
        .route(
            "/create",
            post(advertisement_controller::create_advertisement),
        )
        .route(
            "/delete/{id}",
            delete(advertisement_controller::delete_advertisement),
        )
}
