use mongodb::bson::{doc, oid::ObjectId, Document};
use serde::{Deserialize, Serialize};

/// Documento da collection "watchlist"
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct WatchlistEntry {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    /// Dono da entrada
    pub user_id: ObjectId,
    pub movie_name: String,
    #[serde(default)]
    pub watched: bool,
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddWatchlistRequest {
    #[serde(alias = "movie_name")]
    pub movie_name: String,
    #[serde(default)]
    pub watched: bool,
}

/// Partial update. Absent fields keep their stored value.
#[derive(Debug, Default, Clone, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWatchlistRequest {
    #[serde(default, alias = "movie_name")]
    pub movie_name: Option<String>,
    #[serde(default)]
    pub watched: Option<bool>,
}

impl UpdateWatchlistRequest {
    pub fn is_empty(&self) -> bool {
        self.movie_name.is_none() && self.watched.is_none()
    }

    /// Fields to `$set`, keyed by their stored names.
    pub fn to_set_document(&self) -> Document {
        let mut set = Document::new();
        if let Some(movie_name) = &self.movie_name {
            set.insert("movie_name", movie_name.clone());
        }
        if let Some(watched) = self.watched {
            set.insert("watched", watched);
        }
        set
    }

    pub fn apply_to(&self, entry: &mut WatchlistEntry) {
        if let Some(movie_name) = &self.movie_name {
            entry.movie_name = movie_name.clone();
        }
        if let Some(watched) = self.watched {
            entry.watched = watched;
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WatchlistEntryResponse {
    pub id: String,
    pub user_id: String,
    pub movie_name: String,
    pub watched: bool,
}

impl From<WatchlistEntry> for WatchlistEntryResponse {
    fn from(entry: WatchlistEntry) -> Self {
        Self {
            id: entry.id.to_hex(),
            user_id: entry.user_id.to_hex(),
            movie_name: entry.movie_name,
            watched: entry.watched,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Filter matching one entry only when it belongs to `user_id`.
pub fn owned_entry_filter(user_id: &ObjectId, entry_id: &ObjectId) -> Document {
    doc! { "_id": entry_id, "user_id": user_id }
}
