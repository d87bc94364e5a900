use crate::data::models::advertisement::{Advertisement, NewAdvertisement};
use crate::data::models::user::{User, UserRole};
use crate::data::repos::implementors::advertisement_repo::AdvertisementRepo;
use crate::data::repos::traits::repository::Repository;
use crate::services::errors::AdvertisementServiceError;

pub struct AdvertisementService;

impl AdvertisementService {
    pub fn new() -> Self {
        AdvertisementService
    }

    /// Fetches every advertisement matching the filter/category. Pagination
    /// happens at the controller, over the full result set.
    pub async fn get_advertisements_by_filter(
        &self,
        filter: &str,
        category_id: Option<i32>,
    ) -> Result<Vec<Advertisement>, AdvertisementServiceError> {
        let repo = AdvertisementRepo::new();
        repo.get_by_filter(filter, category_id)
            .await
            .map_err(|_| AdvertisementServiceError::DatabaseError)
    }

    pub async fn get_advertisement_by_id(
        &self,
        advertisement_id: i32,
    ) -> Result<Option<Advertisement>, AdvertisementServiceError> {
        let repo = AdvertisementRepo::new();
        repo.get_by_id(advertisement_id)
            .await
            .map_err(|_| AdvertisementServiceError::DatabaseError)
    }

    pub async fn create_advertisement<'a>(
        &self,
        advertisement: NewAdvertisement<'a>,
    ) -> Result<Advertisement, AdvertisementServiceError> {
        let repo = AdvertisementRepo::new();
        repo.add_returning(advertisement)
            .await
            .map_err(|_| AdvertisementServiceError::AdvertisementCreationFailed)
    }

    pub async fn delete_advertisement(
        &self,
        advertisement_id: i32,
    ) -> Result<(), AdvertisementServiceError> {
        let repo = AdvertisementRepo::new();

        repo.get_by_id(advertisement_id)
            .await
            .map_err(|_| AdvertisementServiceError::DatabaseError)?
            .ok_or(AdvertisementServiceError::AdvertisementNotFound)?;

        repo.delete(advertisement_id)
            .await
            .map_err(|_| AdvertisementServiceError::AdvertisementDeletionFailed)
    }

    /// Deletion is permitted for the owner, or for callers whose privilege
    /// level is Admin or above.
    pub fn can_delete(&self, user: &User, advertisement: &Advertisement) -> bool {
        advertisement.user_id == user.id || user.role.is_at_least(UserRole::Admin)
    }
}

impl Default for AdvertisementService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: i32, role: UserRole) -> User {
        User {
            id,
            username: format!("user{}", id),
            password_hash: "hash".to_string(),
            role,
            created_at: None,
            updated_at: None,
        }
    }

    fn advertisement(id: i32, owner: i32) -> Advertisement {
        Advertisement {
            id,
            category_id: 1,
            user_id: owner,
            title: "Wooden chair".to_string(),
            short_description: "A chair".to_string(),
            description: "A sturdy wooden chair".to_string(),
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn owner_can_delete_own_advertisement() {
        let service = AdvertisementService::new();
        assert!(service.can_delete(&user(1, UserRole::Member), &advertisement(10, 1)));
    }

    #[test]
    fn other_member_cannot_delete() {
        let service = AdvertisementService::new();
        assert!(!service.can_delete(&user(2, UserRole::Member), &advertisement(10, 1)));
    }

    #[test]
    fn admin_can_delete_any_advertisement() {
        let service = AdvertisementService::new();
        assert!(service.can_delete(&user(2, UserRole::Admin), &advertisement(10, 1)));
        assert!(service.can_delete(&user(3, UserRole::SuperAdmin), &advertisement(10, 1)));
    }
}
