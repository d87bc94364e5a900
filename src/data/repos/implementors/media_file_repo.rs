use crate::data::database::Database;
use crate::data::models::media_file::{AdvertisementMediaFile, NewMediaFile};
use diesel::prelude::*;
use diesel::result;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};

pub struct MediaFileRepo {}

impl MediaFileRepo {
    pub fn new() -> Self {
        MediaFileRepo {}
    }

    pub async fn get_by_advertisement_id(
        &self,
        advertisement_query: i32,
    ) -> Result<Vec<AdvertisementMediaFile>, result::Error> {
        use crate::data::models::schema::advertisement_media_files::dsl::{
            advertisement_id, advertisement_media_files, id,
        };

        let mut conn = Database::connection().await?;

        advertisement_media_files
            .filter(advertisement_id.eq(advertisement_query))
            .order(id.asc())
            .load::<AdvertisementMediaFile>(&mut conn)
            .await
    }

    pub async fn add<'a>(&self, item: NewMediaFile<'a>) -> Result<(), result::Error> {
        use crate::data::models::schema::advertisement_media_files::dsl::advertisement_media_files;

        let mut conn = Database::connection().await?;

        conn.transaction(|connection| {
            async move {
                diesel::insert_into(advertisement_media_files)
                    .values(&item)
                    .execute(connection)
                    .await?;
                Ok(())
            }
            .scope_boxed()
        })
        .await
    }

    pub async fn delete(&self, id_query: i32) -> Result<(), result::Error> {
        use crate::data::models::schema::advertisement_media_files::dsl::{
            advertisement_media_files, id,
        };

        let mut conn = Database::connection().await?;

        conn.transaction(|connection| {
            async move {
                diesel::delete(advertisement_media_files.filter(id.eq(id_query)))
                    .execute(connection)
                    .await?;
                Ok(())
            }
            .scope_boxed()
        })
        .await
    }
}

impl Default for MediaFileRepo {
    fn default() -> Self {
        Self::new()
    }
}
