use crate::data::database::Database;
use crate::data::models::advertisement::{Advertisement, NewAdvertisement, UpdateAdvertisement};
use crate::data::repos::last_insert_id;
use crate::data::repos::traits::repository::Repository;
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};

pub struct AdvertisementRepo {}

impl AdvertisementRepo {
    pub fn new() -> Self {
        AdvertisementRepo {}
    }

    /// Loads every advertisement matching the free-text filter and, when
    /// given, the category. The filter is matched with LIKE against title,
    /// short description and description; an empty filter matches everything.
    pub async fn get_by_filter(
        &self,
        filter: &str,
        category: Option<i32>,
    ) -> Result<Vec<Advertisement>, result::Error> {
        use crate::data::models::schema::advertisements::dsl::{
            advertisements, category_id, description, id, short_description, title,
        };

        let mut conn = Database::connection().await?;

        let mut query = advertisements.into_boxed();

        if !filter.is_empty() {
            let pattern = format!("%{}%", filter);
            query = query.filter(
                title
                    .like(pattern.clone())
                    .or(short_description.like(pattern.clone()))
                    .or(description.like(pattern)),
            );
        }

        if let Some(category_query) = category {
            query = query.filter(category_id.eq(category_query));
        }

        query.order(id.asc()).load::<Advertisement>(&mut conn).await
    }

    /// Inserts the advertisement and returns the stored row, reading the
    /// generated key back inside the insert transaction.
    pub async fn add_returning<'a>(
        &self,
        item: NewAdvertisement<'a>,
    ) -> Result<Advertisement, result::Error> {
        use crate::data::models::schema::advertisements::dsl::{advertisements, id};

        let mut conn = Database::connection().await?;

        conn.transaction(|connection| {
            async move {
                diesel::insert_into(advertisements)
                    .values(&item)
                    .execute(connection)
                    .await?;

                let new_id = diesel::select(last_insert_id())
                    .get_result::<u64>(connection)
                    .await?;

                advertisements
                    .filter(id.eq(new_id as i32))
                    .first::<Advertisement>(connection)
                    .await
            }
            .scope_boxed()
        })
        .await
    }
}

impl Default for AdvertisementRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Repository for AdvertisementRepo {
    type Id = i32;
    type Item = Advertisement;
    type NewItem<'a> = NewAdvertisement<'a>;
    type UpdateForm<'a> = UpdateAdvertisement<'a>;

    async fn get_all(&self) -> Result<Option<Vec<Self::Item>>, result::Error> {
        use crate::data::models::schema::advertisements::dsl::advertisements;

        let mut conn = Database::connection().await?;

        match advertisements.load::<Self::Item>(&mut conn).await {
            Ok(value) if value.is_empty() => Ok(None),
            Ok(value) => Ok(Some(value)),
            Err(result::Error::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn get_by_id(&self, id_query: Self::Id) -> Result<Option<Self::Item>, result::Error> {
        use crate::data::models::schema::advertisements::dsl::{advertisements, id};

        let mut conn = Database::connection().await?;

        match advertisements
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
        use crate::data::models::schema::advertisements::dsl::advertisements;

        let mut conn = Database::connection().await?;

        conn.transaction(|connection| {
            async move {
                diesel::insert_into(advertisements)
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
        use crate::data::models::schema::advertisements::dsl::{advertisements, id};

        let mut conn = Database::connection().await?;

        conn.transaction(|connection| {
            async move {
                diesel::update(advertisements.filter(id.eq(id_query)))
                    .set(&item)
                    .execute(connection)
                    .await?;
                Ok(())
            }
            .scope_boxed()
        })
        .await
    }

    /// Deleting an advertisement also removes its media file rows; both
    /// statements run in one transaction.
    async fn delete(&self, id_query: Self::Id) -> Result<(), result::Error> {
        use crate::data::models::schema::advertisement_media_files::dsl::{
            advertisement_id, advertisement_media_files,
        };
        use crate::data::models::schema::advertisements::dsl::{advertisements, id};

        let mut conn = Database::connection().await?;

        conn.transaction(|connection| {
            async move {
                diesel::delete(advertisement_media_files.filter(advertisement_id.eq(id_query)))
                    .execute(connection)
                    .await?;
                diesel::delete(advertisements.filter(id.eq(id_query)))
                    .execute(connection)
                    .await?;
                Ok(())
            }
            .scope_boxed()
        })
        .await
    }
}
