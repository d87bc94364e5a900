use classifieds_server_lib::api;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=info,axum=info"));

    fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .init();

    api::server::start().await;
}
