use crate::data::database::Database;
use crate::data::models::order::{NewOrder, Order, UpdateOrder};
use crate::data::repos::traits::repository::Repository;
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};

pub struct OrderRepo {}

impl OrderRepo {
    pub fn new() -> Self {
        OrderRepo {}
    }

    pub async fn get_by_user_id(&self, user_query: i32) -> Result<Vec<Order>, result::Error> {
        use crate::data::models::schema::orders::dsl::{id, orders, user_id};

        let mut conn = Database::connection().await?;

        orders
            .filter(user_id.eq(user_query))
            .order(id.asc())
            .load::<Order>(&mut conn)
            .await
    }
}

impl Default for OrderRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Repository for OrderRepo {
    type Id = i32;
    type Item = Order;
    type NewItem<'a> = NewOrder;
    type UpdateForm<'a> = UpdateOrder<'a>;

    async fn get_all(&self) -> Result<Option<Vec<Self::Item>>, result::Error> {
        use crate::data::models::schema::orders::dsl::orders;

        let mut conn = Database::connection().await?;

        match orders.load::<Self::Item>(&mut conn).await {
            Ok(value) if value.is_empty() => Ok(None),
            Ok(value) => Ok(Some(value)),
            Err(result::Error::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn get_by_id(&self, id_query: Self::Id) -> Result<Option<Self::Item>, result::Error> {
        use crate::data::models::schema::orders::dsl::{id, orders};

        let mut conn = Database::connection().await?;

        match orders
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
        use crate::data::models::schema::orders::dsl::orders;

        let mut conn = Database::connection().await?;

        conn.transaction(|connection| {
            async move {
                diesel::insert_into(orders)
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
        use crate::data::models::schema::orders::dsl::{id, orders};

        let mut conn = Database::connection().await?;

        conn.transaction(|connection| {
            async move {
                diesel::update(orders.filter(id.eq(id_query)))
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
        use crate::data::models::schema::orders::dsl::{id, orders};

        let mut conn = Database::connection().await?;

        conn.transaction(|connection| {
            async move {
                diesel::delete(orders.filter(id.eq(id_query)))
                    .execute(connection)
                    .await?;
                Ok(())
            }
            .scope_boxed()
        })
        .await
    }
}
