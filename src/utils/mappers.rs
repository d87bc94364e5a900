use crate::api::controllers::dto::advertisement_dto::{AdvertisementResponse, MediaFileResponse};
use crate::api::controllers::dto::category_dto::CategoryResponse;
use crate::api::controllers::dto::order_dto::OrderResponse;
use crate::api::controllers::dto::user_dto::UserDTO;
use crate::data::models::advertisement::Advertisement;
use crate::data::models::category::Category;
use crate::data::models::media_file::AdvertisementMediaFile;
use crate::data::models::order::Order;
use crate::data::models::user::{User, UserRole};
use diesel::deserialize::FromSql;
use diesel::mysql::{Mysql, MysqlValue};
use diesel::serialize::{Output, ToSql};
use diesel::sql_types::SmallInt;
use diesel::{deserialize, serialize};
use std::io::Write;

impl ToSql<SmallInt, Mysql> for UserRole {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Mysql>) -> serialize::Result {
        out.write_all(&i16::from(*self).to_ne_bytes())?;
        Ok(serialize::IsNull::No)
    }
}

impl FromSql<SmallInt, Mysql> for UserRole {
    fn from_sql(bytes: MysqlValue<'_>) -> deserialize::Result<Self> {
        let value = <i16 as FromSql<SmallInt, Mysql>>::from_sql(bytes)?;
        UserRole::try_from(value).map_err(|e| e.into())
    }
}

impl From<Advertisement> for AdvertisementResponse {
    fn from(advertisement: Advertisement) -> Self {
        AdvertisementResponse {
            id: advertisement.id,
            category_id: advertisement.category_id,
            user_id: advertisement.user_id,
            title: advertisement.title,
            short_description: advertisement.short_description,
            description: advertisement.description,
            media_files: Vec::new(),
            created_at: advertisement
                .created_at
                .map(|dt| dt.format("%d/%m/%Y").to_string()),
        }
    }
}

impl From<AdvertisementMediaFile> for MediaFileResponse {
    fn from(media_file: AdvertisementMediaFile) -> Self {
        MediaFileResponse {
            id: media_file.id,
            url: media_file.url,
        }
    }
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        CategoryResponse {
            id: category.id,
            name: category.name,
            parent_category_id: category.parent_category_id,
            created_at: category
                .created_at
                .map(|dt| dt.format("%d/%m/%Y").to_string()),
        }
    }
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        OrderResponse {
            id: order.id,
            user_id: order.user_id,
            total_amount: order.total_amount,
            status: order.status,
            created_at: order.created_at.map(|dt| dt.format("%d/%m/%Y").to_string()),
            updated_at: order.updated_at.map(|dt| dt.format("%d/%m/%Y").to_string()),
        }
    }
}

impl From<&User> for UserDTO {
    fn from(user: &User) -> Self {
        UserDTO {
            id: user.id,
            username: user.username.clone(),
            role: user.role.as_str().to_string(),
            created_at: user.created_at.map(|dt| dt.format("%d/%m/%Y").to_string()),
            updated_at: user.updated_at.map(|dt| dt.format("%d/%m/%Y").to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advertisement_response_carries_no_media_by_default() {
        let advertisement = Advertisement {
            id: 7,
            category_id: 3,
            user_id: 1,
            title: "Wooden chair".to_string(),
            short_description: "A chair".to_string(),
            description: "A sturdy wooden chair".to_string(),
            created_at: None,
            updated_at: None,
        };

        let response = AdvertisementResponse::from(advertisement);

        assert_eq!(response.id, 7);
        assert!(response.media_files.is_empty());
        assert!(response.created_at.is_none());
    }

    #[test]
    fn user_dto_exposes_role_as_string() {
        let user = User {
            id: 1,
            username: "alice".to_string(),
            password_hash: "hash".to_string(),
            role: UserRole::Admin,
            created_at: None,
            updated_at: None,
        };

        let dto = UserDTO::from(&user);

        assert_eq!(dto.role, "ADMIN");
        assert_eq!(dto.username, "alice");
    }
}
