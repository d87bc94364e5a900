use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Deserialize, Validate, Debug, Clone)]
pub struct NewCategoryInput {
    #[validate(length(min = 1, max = 50))]
    pub name: String,
    pub parent_category_id: Option<i32>,
}

#[derive(Deserialize, Validate, Debug, Clone)]
pub struct UpdateCategoryInput {
    #[validate(length(min = 1, max = 50))]
    pub name: Option<String>,
    /// Present-and-null moves the category to the top level; absent leaves
    /// the parent untouched.
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub parent_category_id: Option<Option<i32>>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct CategoryResponse {
    pub id: i32,
    pub name: String,
    pub parent_category_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct CategoryWithChildrenResponse {
    pub id: i32,
    pub name: String,
    pub parent_category_id: Option<i32>,
    pub child_categories: Vec<CategoryResponse>,
}
