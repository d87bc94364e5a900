use crate::api::middleware::user_authentication;
use crate::api::routes::{advertisement_routes, auth_routes, category_routes, user_routes};
use axum::routing::get;
use axum::Router;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

pub async fn start() {
    let cors_layer = CorsLayer::new().allow_origin(Any);

    let router = Router::new()
        .route("/", get(|| async { "Classifieds API is running!" }))
        .nest("/advertisements", advertisement_routes::routes())
        .nest("/categories", category_routes::routes())
        .nest("/users", user_routes::routes())
        .merge(auth_routes::routes())
        .layer(axum::middleware::from_fn(user_authentication))
        .layer(cors_layer);

    let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 3000)))
        .await
        .expect("Failed to bind to address");

    println!("Server running on http://127.0.0.1:3000");

    axum::serve(listener, router)
        .await
        .expect("Failed to start the server");
}
