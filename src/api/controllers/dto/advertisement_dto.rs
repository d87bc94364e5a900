use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Deserialize, Validate, Debug)]
pub struct AdvertisementSearchInput {
    #[serde(default)]
    pub filter: String,
    pub category_id: Option<i32>,
    #[validate(range(min = 1))]
    pub page_number: u32,
    #[validate(range(min = 1))]
    pub page_size: u32,
}

#[derive(Deserialize, Validate, Debug)]
pub struct NewAdvertisementInput {
    pub category_id: i32,
    #[validate(length(min = 1, max = 100))]
    pub title: String,
    #[validate(length(min = 1, max = 255))]
    pub short_description: String,
    #[validate(length(min = 1))]
    pub description: String,
    #[serde(default)]
    #[validate(nested)]
    pub media_files: Vec<MediaFileInput>,
}

/// One attached file: name plus base64-encoded content.
#[derive(Deserialize, Validate, Debug)]
pub struct MediaFileInput {
    #[validate(length(min = 1, max = 255))]
    pub file_name: String,
    #[validate(length(min = 1))]
    pub content: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct AdvertisementResponse {
    pub id: i32,
    pub category_id: i32,
    pub user_id: i32,
    pub title: String,
    pub short_description: String,
    pub description: String,
    pub media_files: Vec<MediaFileResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct MediaFileResponse {
    pub id: i32,
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input() -> NewAdvertisementInput {
        NewAdvertisementInput {
            category_id: 3,
            title: "Wooden chair".to_string(),
            short_description: "A chair".to_string(),
            description: "A sturdy wooden chair, barely used".to_string(),
            media_files: vec![],
        }
    }

    #[test]
    fn valid_input_passes_validation() {
        assert!(valid_input().validate().is_ok());
    }

    #[test]
    fn missing_title_fails_validation() {
        let mut input = valid_input();
        input.title = String::new();

        let errors = input.validate().expect_err("should fail");
        assert!(errors.field_errors().contains_key("title"));
    }

    #[test]
    fn overlong_title_fails_validation() {
        let mut input = valid_input();
        input.title = "x".repeat(101);

        assert!(input.validate().is_err());
    }

    #[test]
    fn media_file_without_content_fails_validation() {
        let mut input = valid_input();
        input.media_files.push(MediaFileInput {
            file_name: "chair.jpg".to_string(),
            content: String::new(),
        });

        assert!(input.validate().is_err());
    }

    #[test]
    fn zero_page_size_fails_validation() {
        let input = AdvertisementSearchInput {
            filter: "chair".to_string(),
            category_id: None,
            page_number: 1,
            page_size: 0,
        };

        let errors = input.validate().expect_err("should fail");
        assert!(errors.field_errors().contains_key("page_size"));
    }

    #[test]
    fn zero_page_number_fails_validation() {
        let input = AdvertisementSearchInput {
            filter: String::new(),
            category_id: Some(3),
            page_number: 0,
            page_size: 10,
        };

        assert!(input.validate().is_err());
    }
}
