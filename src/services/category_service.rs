use crate::data::models::category::{Category, NewCategory, UpdateCategory};
use crate::data::repos::implementors::category_repo::CategoryRepo;
use crate::data::repos::traits::repository::Repository;
use crate::services::errors::CategoryServiceError;

pub struct CategoryService;

impl CategoryService {
    pub fn new() -> Self {
        CategoryService
    }

    pub async fn get_all_categories(&self) -> Result<Vec<Category>, CategoryServiceError> {
        let repo = CategoryRepo::new();
        let categories = repo
            .get_all()
            .await
            .map_err(|_| CategoryServiceError::DatabaseError)?;
        Ok(categories.unwrap_or_default())
    }

    pub async fn get_category_with_children(
        &self,
        category_id: i32,
    ) -> Result<Option<(Category, Vec<Category>)>, CategoryServiceError> {
        let repo = CategoryRepo::new();

        let category = match repo
            .get_by_id(category_id)
            .await
            .map_err(|_| CategoryServiceError::DatabaseError)?
        {
            Some(category) => category,
            None => return Ok(None),
        };

        let children = repo
            .get_children(category_id)
            .await
            .map_err(|_| CategoryServiceError::DatabaseError)?;

        Ok(Some((category, children)))
    }

    pub async fn create_category(
        &self,
        name: &str,
        parent_category_id: Option<i32>,
    ) -> Result<Category, CategoryServiceError> {
        let repo = CategoryRepo::new();

        if let Some(parent_id) = parent_category_id {
            repo.get_by_id(parent_id)
                .await
                .map_err(|_| CategoryServiceError::DatabaseError)?
                .ok_or(CategoryServiceError::ParentCategoryNotFound)?;
        }

        repo.add_returning(NewCategory {
            name,
            parent_category_id,
        })
        .await
        .map_err(|_| CategoryServiceError::CategoryCreationFailed)
    }

    /// Re-parenting walks the ancestor chain of the requested parent; if the
    /// category itself shows up the move would close a cycle and is refused.
    pub async fn update_category(
        &self,
        category_id: i32,
        name: Option<&str>,
        parent_category_id: Option<Option<i32>>,
    ) -> Result<(), CategoryServiceError> {
        let repo = CategoryRepo::new();

        repo.get_by_id(category_id)
            .await
            .map_err(|_| CategoryServiceError::DatabaseError)?
            .ok_or(CategoryServiceError::CategoryNotFound)?;

        if let Some(Some(new_parent_id)) = parent_category_id {
            self.ensure_no_cycle(&repo, category_id, new_parent_id)
                .await?;
        }

        repo.update(
            category_id,
            UpdateCategory {
                name,
                parent_category_id,
            },
        )
        .await
        .map_err(|_| CategoryServiceError::CategoryUpdateFailed)
    }

    pub async fn delete_category(&self, category_id: i32) -> Result<(), CategoryServiceError> {
        let repo = CategoryRepo::new();

        repo.get_by_id(category_id)
            .await
            .map_err(|_| CategoryServiceError::DatabaseError)?
            .ok_or(CategoryServiceError::CategoryNotFound)?;

        repo.delete(category_id)
            .await
            .map_err(|_| CategoryServiceError::CategoryDeletionFailed)
    }

    async fn ensure_no_cycle(
        &self,
        repo: &CategoryRepo,
        category_id: i32,
        new_parent_id: i32,
    ) -> Result<(), CategoryServiceError> {
        let mut current = Some(new_parent_id);

        while let Some(ancestor_id) = current {
            if ancestor_id == category_id {
                return Err(CategoryServiceError::CategoryCycle);
            }

            let ancestor = repo
                .get_by_id(ancestor_id)
                .await
                .map_err(|_| CategoryServiceError::DatabaseError)?
                .ok_or(CategoryServiceError::ParentCategoryNotFound)?;

            current = ancestor.parent_category_id;
        }

        Ok(())
    }
}

impl Default for CategoryService {
    fn default() -> Self {
        Self::new()
    }
}
