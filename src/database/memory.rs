use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Mutex,
};

use super::{UserStore, WatchlistStore, OPERATION_TIMEOUT};
use crate::{
    models::{UpdateWatchlistRequest, User, WatchlistEntry},
    utils::error::StoreError,
};

/// In-process stand-in for MongoDB used by the handler tests.
#[derive(Default)]
pub struct MemoryStore {
    users: Mutex<Vec<User>>,
    entries: Mutex<Vec<WatchlistEntry>>,
}

impl MemoryStore {
    pub fn users(&self) -> Vec<User> {
        self.users.lock().unwrap().clone()
    }

    pub fn entries(&self) -> Vec<WatchlistEntry> {
        self.entries.lock().unwrap().clone()
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        Ok(self.users.lock().unwrap().iter().find(|u| u.email == email).cloned())
    }

    async fn insert_user(&self, user: &User) -> Result<(), StoreError> {
        self.users.lock().unwrap().push(user.clone());
        Ok(())
    }
}

#[async_trait]
impl WatchlistStore for MemoryStore {
    async fn find_by_movie(
        &self,
        user_id: &ObjectId,
        movie_name: &str,
    ) -> Result<Option<WatchlistEntry>, StoreError> {
        Ok(self
            .entries
            .lock()
            .unwrap()
            .iter()
            .find(|e| &e.user_id == user_id && e.movie_name == movie_name)
            .cloned())
    }

    async fn insert_entry(&self, entry: &WatchlistEntry) -> Result<(), StoreError> {
        self.entries.lock().unwrap().push(entry.clone());
        Ok(())
    }

    async fn list_by_user(&self, user_id: &ObjectId) -> Result<Vec<WatchlistEntry>, StoreError> {
        Ok(self
            .entries
            .lock()
            .unwrap()
            .iter()
            .filter(|e| &e.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn update_owned(
        &self,
        user_id: &ObjectId,
        entry_id: &ObjectId,
        patch: &UpdateWatchlistRequest,
    ) -> Result<bool, StoreError> {
        let mut entries = self.entries.lock().unwrap();
        match entries
            .iter_mut()
            .find(|e| &e.id == entry_id && &e.user_id == user_id)
        {
            Some(entry) => {
                patch.apply_to(entry);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_owned(
        &self,
        user_id: &ObjectId,
        entry_id: &ObjectId,
    ) -> Result<bool, StoreError> {
        let mut entries = self.entries.lock().unwrap();
        let before = entries.len();
        entries.retain(|e| !(&e.id == entry_id && &e.user_id == user_id));
        Ok(entries.len() < before)
    }
}

/// Store whose every call times out, for exercising the 500 path.
/// Counts the writes that reached it.
#[derive(Default)]
pub struct FailingStore {
    writes: AtomicUsize,
}

impl FailingStore {
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    fn write<T>(&self) -> Result<T, StoreError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        Err(StoreError::Timeout(OPERATION_TIMEOUT))
    }
}

#[async_trait]
impl UserStore for FailingStore {
    async fn find_by_email(&self, _email: &str) -> Result<Option<User>, StoreError> {
        Err(StoreError::Timeout(OPERATION_TIMEOUT))
    }

    async fn insert_user(&self, _user: &User) -> Result<(), StoreError> {
        self.write()
    }
}

#[async_trait]
impl WatchlistStore for FailingStore {
    async fn find_by_movie(
        &self,
        _user_id: &ObjectId,
        _movie_name: &str,
    ) -> Result<Option<WatchlistEntry>, StoreError> {
        Err(StoreError::Timeout(OPERATION_TIMEOUT))
    }

    async fn insert_entry(&self, _entry: &WatchlistEntry) -> Result<(), StoreError> {
        self.write()
    }

    async fn list_by_user(&self, _user_id: &ObjectId) -> Result<Vec<WatchlistEntry>, StoreError> {
        Err(StoreError::Timeout(OPERATION_TIMEOUT))
    }

    async fn update_owned(
        &self,
        _user_id: &ObjectId,
        _entry_id: &ObjectId,
        _patch: &UpdateWatchlistRequest,
    ) -> Result<bool, StoreError> {
        self.write()
    }

    async fn delete_owned(
        &self,
        _user_id: &ObjectId,
        _entry_id: &ObjectId,
    ) -> Result<bool, StoreError> {
        self.write()
    }
}
