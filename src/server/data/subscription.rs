//! Subscription repository: which users follow which authors.

use std::collections::HashSet;

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, JoinType,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

use crate::server::model::{pagination::PageRequest, user::User};

pub struct SubscriptionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SubscriptionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records that `user_id` follows `author_id`.
    pub async fn create(&self, user_id: i32, author_id: i32) -> Result<(), DbErr> {
        entity::subscription::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            author_id: ActiveValue::Set(author_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    /// Removes a subscription.
    ///
    /// # Returns
    /// - `Ok(true)` - The subscription existed and was removed
    /// - `Ok(false)` - `user_id` did not follow `author_id`
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, user_id: i32, author_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Subscription::delete_many()
            .filter(entity::subscription::Column::UserId.eq(user_id))
            .filter(entity::subscription::Column::AuthorId.eq(author_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn exists(&self, user_id: i32, author_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Subscription::find()
            .filter(entity::subscription::Column::UserId.eq(user_id))
            .filter(entity::subscription::Column::AuthorId.eq(author_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Returns the subset of `author_ids` that `user_id` follows.
    ///
    /// Used to fill `is_subscribed` for a whole page of users with one query.
    pub async fn followed_among(
        &self,
        user_id: i32,
        author_ids: &[i32],
    ) -> Result<HashSet<i32>, DbErr> {
        if author_ids.is_empty() {
            return Ok(HashSet::new());
        }

        let rows = entity::prelude::Subscription::find()
            .filter(entity::subscription::Column::UserId.eq(user_id))
            .filter(entity::subscription::Column::AuthorId.is_in(author_ids.to_vec()))
            .all(self.db)
            .await?;

        Ok(rows.into_iter().map(|s| s.author_id).collect())
    }

    /// Gets one page of the authors `user_id` follows, ordered by username.
    ///
    /// # Returns
    /// - `Ok((authors, total))` - Authors on the page and the total followed count
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_authors_paginated(
        &self,
        user_id: i32,
        request: PageRequest,
    ) -> Result<(Vec<User>, u64), DbErr> {
        let paginator = entity::prelude::User::find()
            .join(
                JoinType::InnerJoin,
                entity::subscription::Relation::Author.def().rev(),
            )
            .filter(entity::subscription::Column::UserId.eq(user_id))
            .order_by_asc(entity::user::Column::Username)
            .order_by_asc(entity::user::Column::Id)
            .paginate(self.db, request.per_page);

        let total = paginator.num_items().await?;
        if request.index().saturating_mul(request.per_page) >= total {
            return Ok((Vec::new(), total));
        }

        let authors = paginator
            .fetch_page(request.index())
            .await?
            .into_iter()
            .map(User::from_entity)
            .collect();

        Ok((authors, total))
    }
}
