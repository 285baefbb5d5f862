mod store;
#[cfg(test)]
pub mod memory;

pub use store::{UserStore, WatchlistStore};

use async_trait::async_trait;
use futures::stream::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, Document},
    options::ClientOptions,
    Client, Collection, Database, IndexModel,
};
use std::{future::IntoFuture, time::Duration};

use crate::{
    models::{owned_entry_filter, UpdateWatchlistRequest, User, WatchlistEntry},
    utils::error::StoreError,
};

pub const USERS_COLLECTION: &str = "users";
pub const WATCHLIST_COLLECTION: &str = "watchlist";

/// Bound for the initial connect + ping.
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(20);
/// Bound for every data operation.
pub const OPERATION_TIMEOUT: Duration = Duration::from_secs(10);

/// Shared MongoDB handle. Built once in `main` and injected into the
/// handlers through the store traits.
#[derive(Clone)]
pub struct MongoDB {
    db: Database,
}

impl MongoDB {
    pub async fn new(uri: &str, db_name: &str) -> Result<Self, StoreError> {
        let mut client_options = ClientOptions::parse(uri).await?;

        client_options.app_name = Some("watchlist-service".to_string());
        client_options.connect_timeout = Some(CONNECT_TIMEOUT);
        client_options.server_selection_timeout = Some(CONNECT_TIMEOUT);

        let client = Client::with_options(client_options)?;
        let db = client.database(db_name);

        // Test connection
        bounded(CONNECT_TIMEOUT, db.run_command(doc! { "ping": 1 })).await?;

        let mongodb = Self { db };
        mongodb.ensure_indexes().await?;

        Ok(mongodb)
    }

    /// Creates the lookup indexes used by the handlers. Uniqueness is not
    /// enforced here; signup and add check for existing documents first.
    async fn ensure_indexes(&self) -> Result<(), StoreError> {
        log::info!("🔧 Creating database indexes...");

        let indexes = [
            (USERS_COLLECTION, doc! { "email": 1 }),
            (WATCHLIST_COLLECTION, doc! { "user_id": 1 }),
            (WATCHLIST_COLLECTION, doc! { "user_id": 1, "movie_name": 1 }),
        ];

        for (collection, keys) in indexes {
            let model = IndexModel::builder().keys(keys.clone()).build();
            match bounded(
                OPERATION_TIMEOUT,
                self.collection::<Document>(collection).create_index(model),
            )
            .await
            {
                Ok(_) => log::info!("   ✅ Index created: {}({:?})", collection, keys),
                Err(e) => log::debug!("   ℹ️  Index not created: {}", e),
            }
        }

        log::info!("✅ Database indexes ready");

        Ok(())
    }

    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.db.collection(name)
    }
}

/// Applies `limit` to a driver call, turning expiry into `StoreError::Timeout`.
pub async fn bounded<T, F>(limit: Duration, op: F) -> Result<T, StoreError>
where
    F: IntoFuture<Output = mongodb::error::Result<T>>,
{
    match tokio::time::timeout(limit, op.into_future()).await {
        Ok(result) => result.map_err(StoreError::from),
        Err(_) => Err(StoreError::Timeout(limit)),
    }
}

#[async_trait]
impl UserStore for MongoDB {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let users = self.collection::<User>(USERS_COLLECTION);
        bounded(OPERATION_TIMEOUT, users.find_one(doc! { "email": email })).await
    }

    async fn insert_user(&self, user: &User) -> Result<(), StoreError> {
        let users = self.collection::<User>(USERS_COLLECTION);
        bounded(OPERATION_TIMEOUT, users.insert_one(user)).await?;
        Ok(())
    }
}

#[async_trait]
impl WatchlistStore for MongoDB {
    async fn find_by_movie(
        &self,
        user_id: &ObjectId,
        movie_name: &str,
    ) -> Result<Option<WatchlistEntry>, StoreError> {
        let watchlist = self.collection::<WatchlistEntry>(WATCHLIST_COLLECTION);
        bounded(
            OPERATION_TIMEOUT,
            watchlist.find_one(doc! { "user_id": user_id, "movie_name": movie_name }),
        )
        .await
    }

    async fn insert_entry(&self, entry: &WatchlistEntry) -> Result<(), StoreError> {
        let watchlist = self.collection::<WatchlistEntry>(WATCHLIST_COLLECTION);
        bounded(OPERATION_TIMEOUT, watchlist.insert_one(entry)).await?;
        Ok(())
    }

    async fn list_by_user(&self, user_id: &ObjectId) -> Result<Vec<WatchlistEntry>, StoreError> {
        let watchlist = self.collection::<WatchlistEntry>(WATCHLIST_COLLECTION);
        bounded(OPERATION_TIMEOUT, async {
            let cursor = watchlist.find(doc! { "user_id": user_id }).await?;
            let entries: Vec<WatchlistEntry> = cursor.try_collect().await?;
            Ok::<_, mongodb::error::Error>(entries)
        })
        .await
    }

    async fn update_owned(
        &self,
        user_id: &ObjectId,
        entry_id: &ObjectId,
        patch: &UpdateWatchlistRequest,
    ) -> Result<bool, StoreError> {
        let watchlist = self.collection::<WatchlistEntry>(WATCHLIST_COLLECTION);
        let result = bounded(
            OPERATION_TIMEOUT,
            watchlist.update_one(
                owned_entry_filter(user_id, entry_id),
                doc! { "$set": patch.to_set_document() },
            ),
        )
        .await?;
        Ok(result.matched_count > 0)
    }

    async fn delete_owned(
        &self,
        user_id: &ObjectId,
        entry_id: &ObjectId,
    ) -> Result<bool, StoreError> {
        let watchlist = self.collection::<WatchlistEntry>(WATCHLIST_COLLECTION);
        let result = bounded(
            OPERATION_TIMEOUT,
            watchlist.delete_one(owned_entry_filter(user_id, entry_id)),
        )
        .await?;
        Ok(result.deleted_count > 0)
    }
}
