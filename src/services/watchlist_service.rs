// ==================== WATCHLIST ====================
// Every operation is scoped to the authenticated caller: lookups, updates
// and deletes always filter on the owner id taken from the auth gate.

use mongodb::bson::oid::ObjectId;

use crate::{
    database::WatchlistStore,
    middleware::auth::AuthenticatedUser,
    models::{AddWatchlistRequest, UpdateWatchlistRequest, WatchlistEntry, WatchlistEntryResponse},
    utils::error::ApiError,
};

/// Path ids that are not valid ObjectIds cannot match any entry.
fn parse_entry_id(entry_id: &str) -> Result<ObjectId, ApiError> {
    ObjectId::parse_str(entry_id)
        .map_err(|_| ApiError::NotFound("No watchlist found with that ID".to_string()))
}

/// POST /watchlist
pub async fn add_entry(
    store: &dyn WatchlistStore,
    user: &AuthenticatedUser,
    request: AddWatchlistRequest,
) -> Result<WatchlistEntryResponse, ApiError> {
    let user_id = user.object_id()?;
    let movie_name = request.movie_name.trim().to_string();

    if movie_name.is_empty() {
        return Err(ApiError::BadRequest("movieName is required".to_string()));
    }

    if store.find_by_movie(&user_id, &movie_name).await?.is_some() {
        return Err(ApiError::Conflict("Movie already in the watchlist".to_string()));
    }

    let entry = WatchlistEntry {
        id: ObjectId::new(),
        user_id,
        movie_name,
        watched: request.watched,
    };

    store.insert_entry(&entry).await?;

    Ok(entry.into())
}

/// GET /watchlist
pub async fn list_entries(
    store: &dyn WatchlistStore,
    user: &AuthenticatedUser,
) -> Result<Vec<WatchlistEntryResponse>, ApiError> {
    let user_id = user.object_id()?;
    let entries = store.list_by_user(&user_id).await?;

    Ok(entries.into_iter().map(WatchlistEntryResponse::from).collect())
}

/// PATCH /watchlist/{id}
pub async fn update_entry(
    store: &dyn WatchlistStore,
    user: &AuthenticatedUser,
    entry_id: &str,
    mut patch: UpdateWatchlistRequest,
) -> Result<(), ApiError> {
    let user_id = user.object_id()?;
    let entry_id = parse_entry_id(entry_id)?;

    if patch.is_empty() {
        return Err(ApiError::BadRequest("No fields to update".to_string()));
    }

    if let Some(name) = patch.movie_name.take() {
        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(ApiError::BadRequest("movieName cannot be empty".to_string()));
        }

        // Renaming onto another of the caller's titles breaks per-user uniqueness.
        if let Some(existing) = store.find_by_movie(&user_id, &name).await? {
            if existing.id != entry_id {
                return Err(ApiError::Conflict("Movie already in the watchlist".to_string()));
            }
        }

        patch.movie_name = Some(name);
    }

    if !store.update_owned(&user_id, &entry_id, &patch).await? {
        return Err(ApiError::NotFound("No watchlist found with that ID".to_string()));
    }

    Ok(())
}

/// DELETE /watchlist/{id}
pub async fn delete_entry(
    store: &dyn WatchlistStore,
    user: &AuthenticatedUser,
    entry_id: &str,
) -> Result<(), ApiError> {
    let user_id = user.object_id()?;
    let entry_id = parse_entry_id(entry_id)?;

    if !store.delete_owned(&user_id, &entry_id).await? {
        return Err(ApiError::NotFound("No watchlist to delete".to_string()));
    }

    Ok(())
}
