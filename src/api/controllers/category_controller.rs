use crate::api::controllers::dto::category_dto::{
    CategoryResponse, CategoryWithChildrenResponse, NewCategoryInput, UpdateCategoryInput,
};
use crate::api::extractors::CurrentUser;
use crate::data::models::user::UserRole;
use crate::services::category_service::CategoryService;
use crate::services::errors::CategoryServiceError;
use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use validator::Validate;

/// List all categories
pub async fn get_categories() -> impl IntoResponse {
    let service = CategoryService::new();

    match service.get_all_categories().await {
        Ok(categories) => {
            let dtos: Vec<CategoryResponse> = categories
                .into_iter()
                .map(CategoryResponse::from)
                .collect();
            (StatusCode::OK, Json(dtos)).into_response()
        }
        Err(e) => {
            tracing::error!("Error fetching categories: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to fetch categories",
            )
                .into_response()
        }
    }
}

/// Get one category with its direct children
pub async fn get_category(Path(category_id): Path<i32>) -> impl IntoResponse {
    let service = CategoryService::new();

    match service.get_category_with_children(category_id).await {
        Ok(Some((category, children))) => {
            let response = CategoryWithChildrenResponse {
                id: category.id,
                name: category.name,
                parent_category_id: category.parent_category_id,
                child_categories: children.into_iter().map(CategoryResponse::from).collect(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Ok(None) => (StatusCode::NOT_FOUND, "Category not found").into_response(),
        Err(e) => {
            tracing::error!("Error fetching category: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to fetch category",
            )
                .into_response()
        }
    }
}

/// Create a category (Admin-or-above)
pub async fn add_category(
    CurrentUser(current_user): CurrentUser,
    Json(input): Json<NewCategoryInput>,
) -> impl IntoResponse {
    if !current_user.role.is_at_least(UserRole::Admin) {
        return StatusCode::UNAUTHORIZED.into_response();
    }

    if let Err(errors) = input.validate() {
        return (StatusCode::BAD_REQUEST, Json(errors)).into_response();
    }

    let service = CategoryService::new();

    match service
        .create_category(&input.name, input.parent_category_id)
        .await
    {
        Ok(category) => {
            (StatusCode::CREATED, Json(CategoryResponse::from(category))).into_response()
        }
        Err(CategoryServiceError::ParentCategoryNotFound) => {
            (StatusCode::BAD_REQUEST, "Parent category not found").into_response()
        }
        Err(e) => {
            tracing::error!("Error creating category: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to create category",
            )
                .into_response()
        }
    }
}

/// Update a category (Admin-or-above)
pub async fn edit_category(
    CurrentUser(current_user): CurrentUser,
    Path(category_id): Path<i32>,
    Json(input): Json<UpdateCategoryInput>,
) -> impl IntoResponse {
    if !current_user.role.is_at_least(UserRole::Admin) {
        return StatusCode::UNAUTHORIZED.into_response();
    }

    if let Err(errors) = input.validate() {
        return (StatusCode::BAD_REQUEST, Json(errors)).into_response();
    }

    let service = CategoryService::new();

    match service
        .update_category(category_id, input.name.as_deref(), input.parent_category_id)
        .await
    {
        Ok(_) => (StatusCode::OK, "Category updated").into_response(),
        Err(CategoryServiceError::CategoryNotFound) => {
            (StatusCode::NOT_FOUND, "Category not found").into_response()
        }
        Err(CategoryServiceError::ParentCategoryNotFound) => {
            (StatusCode::BAD_REQUEST, "Parent category not found").into_response()
        }
        Err(CategoryServiceError::CategoryCycle) => (
            StatusCode::BAD_REQUEST,
            "Category cannot be its own ancestor",
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Error updating category: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to update category",
            )
                .into_response()
        }
    }
}

/// Delete a category (Admin-or-above)
pub async fn delete_category(
    CurrentUser(current_user): CurrentUser,
    Path(category_id): Path<i32>,
) -> impl IntoResponse {
    if !current_user.role.is_at_least(UserRole::Admin) {
        return StatusCode::UNAUTHORIZED.into_response();
    }

    let service = CategoryService::new();

    match service.delete_category(category_id).await {
        Ok(_) => (StatusCode::OK, "Category deleted").into_response(),
        Err(CategoryServiceError::CategoryNotFound) => {
            (StatusCode::NOT_FOUND, "Category not found").into_response()
        }
        Err(e) => {
            tracing::error!("Error deleting category: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to delete category",
            )
                .into_response()
        }
    }
}
