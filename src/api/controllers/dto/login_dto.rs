use serde::{Deserialize, Serialize};

#[derive(Deserialize, Debug, Clone)]
pub struct LoginDTO {
    pub username: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct LoginResponse {
    pub token: String,
    pub message: String,
}
