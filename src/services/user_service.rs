use crate::data::models::order::Order;
use crate::data::models::user::{NewUser, UpdateUser, User};
use crate::data::repos::implementors::order_repo::OrderRepo;
use crate::data::repos::implementors::user_repo::UserRepo;
use crate::data::repos::traits::repository::Repository;
use crate::services::errors::UserServiceError;

/// Thin wrapper over the user repository; no business rules beyond
/// passthrough and the missing-user check on order lookups.
pub struct UserService;

impl UserService {
    pub fn new() -> Self {
        UserService
    }

    pub async fn get_user_by_id(&self, user_id: i32) -> Result<Option<User>, UserServiceError> {
        let repo = UserRepo::new();
        repo.get_by_id(user_id)
            .await
            .map_err(|_| UserServiceError::DatabaseError)
    }

    pub async fn get_user_by_username(
        &self,
        username: &str,
    ) -> Result<Option<User>, UserServiceError> {
        let repo = UserRepo::new();
        repo.get_by_username(username)
            .await
            .map_err(|_| UserServiceError::DatabaseError)
    }

    pub async fn create_user<'a>(&self, user: NewUser<'a>) -> Result<(), UserServiceError> {
        let repo = UserRepo::new();

        if repo
            .get_by_username(user.username)
            .await
            .map_err(|_| UserServiceError::DatabaseError)?
            .is_some()
        {
            return Err(UserServiceError::UserAlreadyExists);
        }

        repo.add(user)
            .await
            .map_err(|_| UserServiceError::UserCreationFailed)
    }

    pub async fn update_user<'a>(
        &self,
        user_id: i32,
        update: UpdateUser<'a>,
    ) -> Result<(), UserServiceError> {
        let repo = UserRepo::new();

        repo.get_by_id(user_id)
            .await
            .map_err(|_| UserServiceError::DatabaseError)?
            .ok_or(UserServiceError::UserNotFound)?;

        repo.update(user_id, update)
            .await
            .map_err(|_| UserServiceError::UserUpdateFailed)
    }

    pub async fn delete_user(&self, user_id: i32) -> Result<(), UserServiceError> {
        let repo = UserRepo::new();

        repo.get_by_id(user_id)
            .await
            .map_err(|_| UserServiceError::DatabaseError)?
            .ok_or(UserServiceError::UserNotFound)?;

        repo.delete(user_id)
            .await
            .map_err(|_| UserServiceError::UserDeletionFailed)
    }

    pub async fn get_all_users(&self) -> Result<Vec<User>, UserServiceError> {
        let repo = UserRepo::new();
        let users = repo
            .get_all()
            .await
            .map_err(|_| UserServiceError::DatabaseError)?;
        Ok(users.unwrap_or_default())
    }

    /// Returns `None` when the user does not exist, the user's orders
    /// otherwise (possibly empty).
    pub async fn get_user_orders(
        &self,
        user_id: i32,
    ) -> Result<Option<Vec<Order>>, UserServiceError> {
        let user_repo = UserRepo::new();
        let order_repo = OrderRepo::new();

        if user_repo
            .get_by_id(user_id)
            .await
            .map_err(|_| UserServiceError::DatabaseError)?
            .is_none()
        {
            return Ok(None);
        }

        let orders = order_repo
            .get_by_user_id(user_id)
            .await
            .map_err(|_| UserServiceError::DatabaseError)?;

        Ok(Some(orders))
    }
}

impl Default for UserService {
    fn default() -> Self {
        Self::new()
    }
}
