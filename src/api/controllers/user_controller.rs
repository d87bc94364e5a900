use crate::api::controllers::dto::login_dto::{LoginDTO, LoginResponse};
use crate::api::controllers::dto::order_dto::OrderResponse;
use crate::api::controllers::dto::user_dto::{
    NewUserDTO, UpdateUserDTO, UserDTO, UserQueryParams,
};
use crate::api::extractors::CurrentUser;
use crate::data::models::user::{NewUser, UpdateUser, UserRole};
use crate::security::auth::AuthService;
use crate::security::jwt::JwtService;
use crate::services::errors::UserServiceError;
use crate::services::user_service::UserService;
use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use validator::Validate;

/// Register a new member account
pub async fn register_user(Json(new_user): Json<NewUserDTO>) -> impl IntoResponse {
    if let Err(errors) = new_user.validate() {
        return (StatusCode::BAD_REQUEST, Json(errors)).into_response();
    }

    let auth = AuthService::new();
    let users = UserService::new();

    let hashed_password = match auth.hash_password(&new_user.password).await {
        Ok(hash) => hash,
        Err(e) => {
            tracing::error!("Error hashing password: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to process password",
            )
                .into_response();
        }
    };

    let user = NewUser {
        username: &new_user.username,
        password_hash: &hashed_password,
        role: UserRole::Member,
    };

    match users.create_user(user).await {
        Ok(_) => (StatusCode::CREATED, "User created").into_response(),
        Err(UserServiceError::UserAlreadyExists) => {
            (StatusCode::CONFLICT, "Username is already taken").into_response()
        }
        Err(e) => {
            tracing::error!("Error creating user: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to create user").into_response()
        }
    }
}

/// Verify credentials and issue an access token
pub async fn login(Json(login_user): Json<LoginDTO>) -> impl IntoResponse {
    let auth = AuthService::new();
    let users = UserService::new();

    let user = match users.get_user_by_username(&login_user.username).await {
        Ok(Some(user)) => user,
        Ok(None) => return (StatusCode::NOT_FOUND, "User not found").into_response(),
        Err(e) => {
            tracing::error!("Error fetching user: {}", e);
            return (StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch user").into_response();
        }
    };

    match auth
        .verify_password(&login_user.password, &user.password_hash)
        .await
    {
        Ok(true) => match JwtService::new().generate_token(&user) {
            Ok(token) => (
                StatusCode::OK,
                Json(LoginResponse {
                    token,
                    message: "Login successful".to_string(),
                }),
            )
                .into_response(),
            Err(e) => {
                tracing::error!("Error generating token: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Failed to issue token").into_response()
            }
        },
        Ok(false) => (StatusCode::UNAUTHORIZED, "Invalid credentials").into_response(),
        Err(e) => {
            tracing::error!("Error verifying password: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to verify password",
            )
                .into_response()
        }
    }
}

/// Get all users
pub async fn get_all_users(CurrentUser(_user): CurrentUser) -> impl IntoResponse {
    let users = UserService::new();

    match users.get_all_users().await {
        Ok(all_users) => {
            let dtos: Vec<UserDTO> = all_users.iter().map(UserDTO::from).collect();
            (StatusCode::OK, Json(dtos)).into_response()
        }
        Err(e) => {
            tracing::error!("Error fetching users: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch users").into_response()
        }
    }
}

/// Get user by ID
pub async fn get_user(
    CurrentUser(_user): CurrentUser,
    Path(user_id): Path<i32>,
) -> impl IntoResponse {
    let users = UserService::new();

    match users.get_user_by_id(user_id).await {
        Ok(Some(user)) => (StatusCode::OK, Json(UserDTO::from(&user))).into_response(),
        Ok(None) => (StatusCode::NOT_FOUND, "User not found").into_response(),
        Err(e) => {
            tracing::error!("Error fetching user: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch user").into_response()
        }
    }
}

/// Get user by name using query params
pub async fn get_user_by_name(
    CurrentUser(_user): CurrentUser,
    Query(params): Query<UserQueryParams>,
) -> impl IntoResponse {
    let users = UserService::new();

    let username = match params.username {
        Some(name) => name,
        None => {
            return (
                StatusCode::BAD_REQUEST,
                "Username query parameter is required",
            )
                .into_response();
        }
    };

    match users.get_user_by_username(&username).await {
        Ok(Some(user)) => (StatusCode::OK, Json(UserDTO::from(&user))).into_response(),
        Ok(None) => (StatusCode::NOT_FOUND, "User not found").into_response(),
        Err(e) => {
            tracing::error!("Error fetching user: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch user").into_response()
        }
    }
}

/// Update user by ID (self or Admin-or-above)
pub async fn edit_user(
    CurrentUser(current_user): CurrentUser,
    Path(user_id): Path<i32>,
    Json(update_dto): Json<UpdateUserDTO>,
) -> impl IntoResponse {
    if current_user.id != user_id && !current_user.role.is_at_least(UserRole::Admin) {
        return StatusCode::UNAUTHORIZED.into_response();
    }

    if let Err(errors) = update_dto.validate() {
        return (StatusCode::BAD_REQUEST, Json(errors)).into_response();
    }

    let auth = AuthService::new();
    let users = UserService::new();

    let hashed_password = if let Some(ref password) = update_dto.password {
        match auth.hash_password(password).await {
            Ok(hash) => Some(hash),
            Err(e) => {
                tracing::error!("Error hashing password: {}", e);
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to process password",
                )
                    .into_response();
            }
        }
    } else {
        None
    };

    let update = UpdateUser {
        username: update_dto.username.as_deref(),
        password_hash: hashed_password.as_deref(),
        role: None,
    };

    match users.update_user(user_id, update).await {
        Ok(_) => (StatusCode::OK, "User updated").into_response(),
        Err(UserServiceError::UserNotFound) => {
            (StatusCode::NOT_FOUND, "User not found").into_response()
        }
        Err(e) => {
            tracing::error!("Error updating user: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to update user").into_response()
        }
    }
}

/// Delete user by ID (self or Admin-or-above)
pub async fn delete_user(
    CurrentUser(current_user): CurrentUser,
    Path(user_id): Path<i32>,
) -> impl IntoResponse {
    if current_user.id != user_id && !current_user.role.is_at_least(UserRole::Admin) {
        return StatusCode::UNAUTHORIZED.into_response();
    }

    let users = UserService::new();

    match users.delete_user(user_id).await {
        Ok(_) => (StatusCode::OK, "User deleted").into_response(),
        Err(UserServiceError::UserNotFound) => {
            (StatusCode::NOT_FOUND, "User not found").into_response()
        }
        Err(e) => {
            tracing::error!("Error deleting user: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to delete user").into_response()
        }
    }
}

/// Get a user's orders (self or Admin-or-above)
pub async fn get_user_orders(
    CurrentUser(current_user): CurrentUser,
    Path(user_id): Path<i32>,
) -> impl IntoResponse {
    if current_user.id != user_id && !current_user.role.is_at_least(UserRole::Admin) {
        return StatusCode::UNAUTHORIZED.into_response();
    }

    let users = UserService::new();

    match users.get_user_orders(user_id).await {
        Ok(Some(orders)) => {
            let dtos: Vec<OrderResponse> = orders.into_iter().map(OrderResponse::from).collect();
            (StatusCode::OK, Json(dtos)).into_response()
        }
        Ok(None) => (StatusCode::NOT_FOUND, "User not found").into_response(),
        Err(e) => {
            tracing::error!("Error fetching orders: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch orders").into_response()
        }
    }
}
