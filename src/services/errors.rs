#[derive(Debug, PartialEq)]
pub enum AdvertisementServiceError {
    AdvertisementNotFound,
    AdvertisementCreationFailed,
    AdvertisementDeletionFailed,
    DatabaseError,
}

impl std::error::Error for AdvertisementServiceError {}

impl std::fmt::Display for AdvertisementServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AdvertisementServiceError::AdvertisementNotFound => {
                write!(f, "Advertisement not found")
            }
            AdvertisementServiceError::AdvertisementCreationFailed => {
                write!(f, "Advertisement creation failed")
            }
            AdvertisementServiceError::AdvertisementDeletionFailed => {
                write!(f, "Advertisement deletion failed")
            }
            AdvertisementServiceError::DatabaseError => write!(f, "Database error"),
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum MediaServiceError {
    /// Attached content was not valid base64.
    InvalidContent,
    /// The storage backend refused or failed the upload.
    StorageError,
    MediaCreationFailed,
    DatabaseError,
}

impl std::error::Error for MediaServiceError {}

impl std::fmt::Display for MediaServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MediaServiceError::InvalidContent => write!(f, "Media content is not valid base64"),
            MediaServiceError::StorageError => write!(f, "Media upload failed"),
            MediaServiceError::MediaCreationFailed => write!(f, "Media record creation failed"),
            MediaServiceError::DatabaseError => write!(f, "Database error"),
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum UserServiceError {
    UserNotFound,
    UserAlreadyExists,
    UserCreationFailed,
    UserUpdateFailed,
    UserDeletionFailed,
    DatabaseError,
}

impl std::error::Error for UserServiceError {}

impl std::fmt::Display for UserServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserServiceError::UserNotFound => write!(f, "User not found"),
            UserServiceError::UserAlreadyExists => write!(f, "User already exists"),
            UserServiceError::UserCreationFailed => write!(f, "User creation failed"),
            UserServiceError::UserUpdateFailed => write!(f, "User update failed"),
            UserServiceError::UserDeletionFailed => write!(f, "User deletion failed"),
            UserServiceError::DatabaseError => write!(f, "Database error"),
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum CategoryServiceError {
    CategoryNotFound,
    ParentCategoryNotFound,
    /// The requested parent would make the category its own ancestor.
    CategoryCycle,
    CategoryCreationFailed,
    CategoryUpdateFailed,
    CategoryDeletionFailed,
    DatabaseError,
}

impl std::error::Error for CategoryServiceError {}

impl std::fmt::Display for CategoryServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CategoryServiceError::CategoryNotFound => write!(f, "Category not found"),
            CategoryServiceError::ParentCategoryNotFound => write!(f, "Parent category not found"),
            CategoryServiceError::CategoryCycle => {
                write!(f, "Category cannot be its own ancestor")
            }
            CategoryServiceError::CategoryCreationFailed => write!(f, "Category creation failed"),
            CategoryServiceError::CategoryUpdateFailed => write!(f, "Category update failed"),
            CategoryServiceError::CategoryDeletionFailed => write!(f, "Category deletion failed"),
            CategoryServiceError::DatabaseError => write!(f, "Database error"),
        }
    }
}
