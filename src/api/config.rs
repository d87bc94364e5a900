use dotenvy::dotenv;
use once_cell::sync::Lazy;

// API Config goes here
#[derive(Debug, Clone)]
pub struct Config {
    pub jwt_secret: String,
    pub jwt_expiration_minutes: u64,
    pub media_storage_root: String,
    pub media_base_url: String,
}

impl Config {
    pub fn new() -> Self {
        CONFIG.clone()
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

static CONFIG: Lazy<Config> = Lazy::new(|| {
    dotenv().ok();

    let jwt_secret = std::env::var("JWT_SECRET").expect("JWT_SECRET must be set");
    let jwt_expiration_minutes = std::env::var("JWT_EXPIRATION_MINUTES")
        .unwrap_or_else(|_| "60".to_string())
        .parse()
        .expect("JWT_EXPIRATION_MINUTES must be a valid u64");
    let media_storage_root =
        std::env::var("MEDIA_STORAGE_ROOT").unwrap_or_else(|_| "media".to_string());
    let media_base_url = std::env::var("MEDIA_BASE_URL")
        .unwrap_or_else(|_| "http://127.0.0.1:3000/media".to_string());

    tracing::info!("Config loaded");

    Config {
        jwt_secret,
        jwt_expiration_minutes,
        media_storage_root,
        media_base_url,
    }
});
