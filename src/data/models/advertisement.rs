use crate::data::models::category::Category;
use crate::data::models::schema::*;
use crate::data::models::user::User;
use diesel::prelude::*;

#[derive(Queryable, Selectable, Identifiable, Associations, PartialEq, Debug, Clone)]
#[diesel(table_name = advertisements)]
#[diesel(belongs_to(Category, foreign_key = category_id))]
#[diesel(belongs_to(User, foreign_key = user_id))]
#[diesel(check_for_backend(diesel::mysql::Mysql))]
#[diesel(treat_none_as_null = true)]
pub struct Advertisement {
    pub id: i32,
    pub category_id: i32,
    pub user_id: i32,
    pub title: String,
    pub short_description: String,
    pub description: String,
    pub created_at: Option<chrono::NaiveDateTime>,
    pub updated_at: Option<chrono::NaiveDateTime>,
}

#[derive(Insertable, PartialEq, Debug)]
#[diesel(table_name = advertisements)]
pub struct NewAdvertisement<'a> {
    pub category_id: i32,
    pub user_id: i32,
    pub title: &'a str,
    pub short_description: &'a str,
    pub description: &'a str,
}

#[derive(AsChangeset, PartialEq, Debug)]
#[diesel(table_name = advertisements)]
pub struct UpdateAdvertisement<'a> {
    pub category_id: Option<i32>,
    pub title: Option<&'a str>,
    pub short_description: Option<&'a str>,
    pub description: Option<&'a str>,
}
