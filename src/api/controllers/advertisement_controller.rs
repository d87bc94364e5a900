use crate::api::controllers::dto::advertisement_dto::{
    AdvertisementResponse, AdvertisementSearchInput, MediaFileResponse, NewAdvertisementInput,
};
use crate::api::errors::ErrorResponse;
use crate::api::extractors::CurrentUser;
use crate::api::pagination::PagedOutput;
use crate::data::models::advertisement::NewAdvertisement;
use crate::data::models::media_file::NewMediaFile;
use crate::services::advertisement_media_service::AdvertisementMediaService;
use crate::services::advertisement_service::AdvertisementService;
use crate::services::errors::MediaServiceError;
use crate::services::user_service::UserService;
use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use validator::Validate;

/// Search advertisements by free-text filter and optional category,
/// returning one page of the full result set.
pub async fn search_advertisements(
    Json(input): Json<AdvertisementSearchInput>,
) -> impl IntoResponse {
    if let Err(errors) = input.validate() {
        return (StatusCode::BAD_REQUEST, Json(errors)).into_response();
    }

    let service = AdvertisementService::new();

    match service
        .get_advertisements_by_filter(&input.filter, input.category_id)
        .await
    {
        Ok(advertisements) => {
            let records: Vec<AdvertisementResponse> = advertisements
                .into_iter()
                .map(AdvertisementResponse::from)
                .collect();

            let paged = PagedOutput::paginate(records, input.page_number, input.page_size);

            (StatusCode::OK, Json(paged)).into_response()
        }
        Err(e) => {
            tracing::error!("Error searching advertisements: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to search advertisements",
            )
                .into_response()
        }
    }
}

/// Get one advertisement with its media files
pub async fn get_advertisement_by_id(
    CurrentUser(_user): CurrentUser,
    Path(advertisement_id): Path<i32>,
) -> impl IntoResponse {
    let service = AdvertisementService::new();
    let media_service = AdvertisementMediaService::new();

    match service.get_advertisement_by_id(advertisement_id).await {
        Ok(Some(advertisement)) => {
            let mut response = AdvertisementResponse::from(advertisement);

            match media_service
                .get_media_for_advertisement(response.id)
                .await
            {
                Ok(media_files) => {
                    response.media_files = media_files
                        .into_iter()
                        .map(MediaFileResponse::from)
                        .collect();
                }
                Err(e) => {
                    tracing::error!("Error loading media files: {}", e);
                    return (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Failed to load media files",
                    )
                        .into_response();
                }
            }

            (StatusCode::OK, Json(response)).into_response()
        }
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::new(
                "Advertisement not found.",
                "Advertisement may be not active or is deleted.",
            )),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Error fetching advertisement: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to fetch advertisement",
            )
                .into_response()
        }
    }
}

/// Create an advertisement owned by the caller, then upload and link each
/// attached media file.
pub async fn create_advertisement(
    CurrentUser(user): CurrentUser,
    Json(input): Json<NewAdvertisementInput>,
) -> impl IntoResponse {
    if let Err(errors) = input.validate() {
        return (StatusCode::BAD_REQUEST, Json(errors)).into_response();
    }

    let service = AdvertisementService::new();
    let media_service = AdvertisementMediaService::new();

    let new_advertisement = NewAdvertisement {
        category_id: input.category_id,
        user_id: user.id,
        title: &input.title,
        short_description: &input.short_description,
        description: &input.description,
    };

    let advertisement = match service.create_advertisement(new_advertisement).await {
        Ok(advertisement) => advertisement,
        Err(e) => {
            tracing::error!("Error creating advertisement: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to create advertisement",
            )
                .into_response();
        }
    };

    // The advertisement row already exists at this point; media failures are
    // reported to the caller but do not roll it back.
    for file in &input.media_files {
        let url = match media_service
            .upload_media_file(&file.file_name, &file.content)
            .await
        {
            Ok(url) => url,
            Err(MediaServiceError::InvalidContent) => {
                return (
                    StatusCode::BAD_REQUEST,
                    "Media file content is not valid base64",
                )
                    .into_response();
            }
            Err(e) => {
                tracing::error!("Error uploading media file: {}", e);
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to upload media file",
                )
                    .into_response();
            }
        };

        let media_file = NewMediaFile {
            advertisement_id: advertisement.id,
            url: &url,
        };

        if let Err(e) = media_service.create_media_file(media_file).await {
            tracing::error!("Error persisting media file: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to persist media file",
            )
                .into_response();
        }
    }

    let mut response = AdvertisementResponse::from(advertisement);

    match media_service
        .get_media_for_advertisement(response.id)
        .await
    {
        Ok(media_files) => {
            response.media_files = media_files
                .into_iter()
                .map(MediaFileResponse::from)
                .collect();
        }
        Err(e) => {
            tracing::error!("Error loading media files: {}", e);
        }
    }

    (StatusCode::OK, Json(response)).into_response()
}

/// Delete an advertisement; permitted for its owner or Admin-or-above.
pub async fn delete_advertisement(
    CurrentUser(current_user): CurrentUser,
    Path(advertisement_id): Path<i32>,
) -> impl IntoResponse {
    let users = UserService::new();
    let advertisements = AdvertisementService::new();

    let user = match users.get_user_by_id(current_user.id).await {
        Ok(Some(user)) => user,
        Ok(None) => return StatusCode::NOT_FOUND.into_response(),
        Err(e) => {
            tracing::error!("Error fetching user: {}", e);
            return (StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch user").into_response();
        }
    };

    let advertisement = match advertisements
        .get_advertisement_by_id(advertisement_id)
        .await
    {
        Ok(Some(advertisement)) => advertisement,
        Ok(None) => return StatusCode::NOT_FOUND.into_response(),
        Err(e) => {
            tracing::error!("Error fetching advertisement: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to fetch advertisement",
            )
                .into_response();
        }
    };

    if !advertisements.can_delete(&user, &advertisement) {
        return StatusCode::UNAUTHORIZED.into_response();
    }

    match advertisements.delete_advertisement(advertisement.id).await {
        Ok(_) => StatusCode::OK.into_response(),
        Err(e) => {
            tracing::error!("Error deleting advertisement: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to delete advertisement",
            )
                .into_response()
        }
    }
}
