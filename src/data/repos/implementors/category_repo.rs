use crate::data::database::Database;
use crate::data::models::category::{Category, NewCategory, UpdateCategory};
use crate::data::repos::last_insert_id;
use crate::data::repos::traits::repository::Repository;
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};

pub struct CategoryRepo {}

impl CategoryRepo {
    pub fn new() -> Self {
        CategoryRepo {}
    }

    pub async fn get_children(&self, parent_query: i32) -> Result<Vec<Category>, result::Error> {
        use crate::data::models::schema::categories::dsl::{categories, id, parent_category_id};

        let mut conn = Database::connection().await?;

        categories
            .filter(parent_category_id.eq(parent_query))
            .order(id.asc())
            .load::<Category>(&mut conn)
            .await
    }

    pub async fn add_returning<'a>(
        &self,
        item: NewCategory<'a>,
    ) -> Result<Category, result::Error> {
        use crate::data::models::schema::categories::dsl::{categories, id};

        let mut conn = Database::connection().await?;

        conn.transaction(|connection| {
            async move {
                diesel::insert_into(categories)
                    .values(&item)
                    .execute(connection)
                    .await?;

                let new_id = diesel::select(last_insert_id())
                    .get_result::<u64>(connection)
                    .await?;

                categories
                    .filter(id.eq(new_id as i32))
                    .first::<Category>(connection)
                    .await
            }
            .scope_boxed()
        })
        .await
    }
}

impl Default for CategoryRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Repository for CategoryRepo {
    type Id = i32;
    type Item = Category;
    type NewItem<'a> = NewCategory<'a>;
    type UpdateForm<'a> = UpdateCategory<'a>;

    async fn get_all(&self) -> Result<Option<Vec<Self::Item>>, result::Error> {
        use crate::data::models::schema::categories::dsl::categories;

        let mut conn = Database::connection().await?;

        match categories.load::<Self::Item>(&mut conn).await {
            Ok(value) if value.is_empty() => Ok(None),
            Ok(value) => Ok(Some(value)),
            Err(result::Error::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn get_by_id(&self, id_query: Self::Id) -> Result<Option<Self::Item>, result::Error> {
        use crate::data::models::schema::categories::dsl::{categories, id};

        let mut conn = Database::connection().await?;

        match categories
            .filter(id.eq(id_query))
            .first::<Self::Item>(&mut conn)
            .await
        {
            Ok(value) => Ok(Some(value)),
            Err(result::Error::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn add<'a>(&self, item: Self::NewItem<'a>) -> Result<(), result::Error> {
        use crate::data::models::schema::categories::dsl::categories;

        let mut conn = Database::connection().await?;

        conn.transaction(|connection| {
            async move {
                diesel::insert_into(categories)
                    .values(&item)
                    .execute(connection)
                    .await?;
                Ok(())
            }
            .scope_boxed()
        })
        .await
    }

    async fn update<'a>(
        &self,
        id_query: Self::Id,
        item: Self::UpdateForm<'a>,
    ) -> Result<(), result::Error> {
        use crate::data::models::schema::categories::dsl::{categories, id};

        let mut conn = Database::connection().await?;

        conn.transaction(|connection| {
            async move {
                diesel::update(categories.filter(id.eq(id_query)))
                    .set(&item)
                    .execute(connection)
                    .await?;
                Ok(())
            }
            .scope_boxed()
        })
        .await
    }

    async fn delete(&self, id_query: Self::Id) -> Result<(), result::Error> {
        use crate::data::models::schema::categories::dsl::{categories, id};

        let mut conn = Database::connection().await?;

        conn.transaction(|connection| {
            async move {
                diesel::delete(categories.filter(id.eq(id_query)))
                    .execute(connection)
                    .await?;
                Ok(())
            }
            .scope_boxed()
        })
        .await
    }
}
