use crate::data::models::advertisement::Advertisement;
use crate::data::models::schema::*;
use diesel::prelude::*;

#[derive(Queryable, Selectable, Identifiable, Associations, PartialEq, Debug, Clone)]
#[diesel(table_name = advertisement_media_files)]
#[diesel(belongs_to(Advertisement, foreign_key = advertisement_id))]
#[diesel(check_for_backend(diesel::mysql::Mysql))]
#[diesel(treat_none_as_null = true)]
pub struct AdvertisementMediaFile {
    pub id: i32,
    pub advertisement_id: i32,
    pub url: String,
    pub created_at: Option<chrono::NaiveDateTime>,
}

#[derive(Insertable, PartialEq, Debug)]
#[diesel(table_name = advertisement_media_files)]
pub struct NewMediaFile<'a> {
    pub advertisement_id: i32,
    pub url: &'a str,
}
