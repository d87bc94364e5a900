use crate::data::database::Database;
use crate::data::models::user::{NewUser, UpdateUser, User};
use crate::data::repos::traits::repository::Repository;
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};

pub struct UserRepo {}

impl UserRepo {
    pub fn new() -> Self {
        UserRepo {}
    }

    pub async fn get_by_username(
        &self,
        username_query: &str,
    ) -> Result<Option<User>, result::Error> {
        use crate::data::models::schema::users::dsl::{username, users};

        let mut conn = Database::connection().await?;

        match users
            .filter(username.eq(username_query))
            .first::<User>(&mut conn)
            .await
        {
            Ok(value) => Ok(Some(value)),
            Err(result::Error::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }
}

impl Default for UserRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Repository for UserRepo {
    type Id = i32;
    type Item = User;
    type NewItem<'a> = NewUser<'a>;
    type UpdateForm<'a> = UpdateUser<'a>;

    async fn get_all(&self) -> Result<Option<Vec<Self::Item>>, result::Error> {
        use crate::data::models::schema::users::dsl::users;

        let mut conn = Database::connection().await?;

        match users.load::<Self::Item>(&mut conn).await {
            Ok(value) if value.is_empty() => Ok(None),
            Ok(value) => Ok(Some(value)),
            Err(result::Error::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn get_by_id(&self, id_query: Self::Id) -> Result<Option<Self::Item>, result::Error> {
        use crate::data::models::schema::users::dsl::{id, users};

        let mut conn = Database::connection().await?;

        match users
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
        use crate::data::models::schema::users::dsl::users;

        let mut conn = Database::connection().await?;

        conn.transaction(|connection| {
            async move {
                diesel::insert_into(users)
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
        use crate::data::models::schema::users::dsl::{id, users};

        let mut conn = Database::connection().await?;

        conn.transaction(|connection| {
            async move {
                diesel::update(users.filter(id.eq(id_query)))
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
        use crate::data::models::schema::users::dsl::{id, users};

        let mut conn = Database::connection().await?;

        conn.transaction(|connection| {
            async move {
                diesel::delete(users.filter(id.eq(id_query)))
                    .execute(connection)
                    .await?;
                Ok(())
            }
            .scope_boxed()
        })
        .await
    }
}
