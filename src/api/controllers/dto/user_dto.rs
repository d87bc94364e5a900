use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UserDTO {
    pub id: i32,
    pub username: String,
    pub role: String,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Deserialize, Validate, Debug, Clone)]
pub struct NewUserDTO {
    #[validate(length(min = 1, max = 50))]
    pub username: String,
    #[validate(length(min = 8, max = 128))]
    pub password: String,
}

#[derive(Deserialize, Validate, Debug, Clone)]
pub struct UpdateUserDTO {
    #[validate(length(min = 1, max = 50))]
    pub username: Option<String>,
    #[validate(length(min = 8, max = 128))]
    pub password: Option<String>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct UserQueryParams {
    pub username: Option<String>,
}
