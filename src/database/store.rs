use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::{
    models::{UpdateWatchlistRequest, User, WatchlistEntry},
    utils::error::StoreError,
};

/// Persistence for the `users` collection.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    async fn insert_user(&self, user: &User) -> Result<(), StoreError>;
}

/// Persistence for the `watchlist` collection. Every read and mutation is
/// keyed by the owning user.
#[async_trait]
pub trait WatchlistStore: Send + Sync {
    async fn find_by_movie(
        &self,
        user_id: &ObjectId,
        movie_name: &str,
    ) -> Result<Option<WatchlistEntry>, StoreError>;

    async fn insert_entry(&self, entry: &WatchlistEntry) -> Result<(), StoreError>;

    async fn list_by_user(&self, user_id: &ObjectId) -> Result<Vec<WatchlistEntry>, StoreError>;

    /// Returns false when no entry with `entry_id` is owned by `user_id`.
    async fn update_owned(
        &self,
        user_id: &ObjectId,
        entry_id: &ObjectId,
        patch: &UpdateWatchlistRequest,
    ) -> Result<bool, StoreError>;

    /// Returns false when nothing was removed.
    async fn delete_owned(&self, user_id: &ObjectId, entry_id: &ObjectId)
        -> Result<bool, StoreError>;
}
