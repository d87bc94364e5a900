use crate::data::models::schema::*;
use diesel::prelude::*;

#[derive(Queryable, Selectable, Identifiable, PartialEq, Debug, Clone)]
#[diesel(table_name = categories)]
#[diesel(check_for_backend(diesel::mysql::Mysql))]
#[diesel(treat_none_as_null = true)]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub parent_category_id: Option<i32>,
    pub created_at: Option<chrono::NaiveDateTime>,
}

#[derive(Insertable, PartialEq, Debug)]
#[diesel(table_name = categories)]
pub struct NewCategory<'a> {
    pub name: &'a str,
    pub parent_category_id: Option<i32>,
}

#[derive(AsChangeset, PartialEq, Debug)]
#[diesel(table_name = categories)]
pub struct UpdateCategory<'a> {
    pub name: Option<&'a str>,
    pub parent_category_id: Option<Option<i32>>,
}
