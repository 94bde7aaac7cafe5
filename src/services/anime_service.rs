//! Domain service for the anime catalog.
//!
//! [`AnimeService`] is the repository contract the HTTP handlers depend on.
//! Not-found conditions and storage failures come back as [`AnimeError`]
//! variants instead of panics or sentinel values.

use crate::domain::{AnimeId, PageRequest};
use crate::entities::animes;
use crate::models::anime::{Anime, AnimeChanges, AnimeFilter, NewAnime};
use thiserror::Error;

/// Domain errors for anime operations.
#[derive(Debug, Error)]
pub enum AnimeError {
    #[error("Anime not found. Id: {0}")]
    NotFound(AnimeId),

    #[error("Persistence error: {0}")]
    Persistence(String),
}

impl From<sea_orm::DbErr> for AnimeError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Persistence(err.to_string())
    }
}

/// Catalog operations over the single `animes` table.
///
/// # Examples
///
/// ```rust,ignore
/// use anime_catalog::services::{AnimeError, AnimeService};
/// use anime_catalog::domain::AnimeId;
/// use std::sync::Arc;
///
/// async fn deactivate_first(service: Arc<dyn AnimeService>) -> Result<(), AnimeError> {
///     service.soft_delete(AnimeId::new(1)).await
/// }
/// ```
#[async_trait::async_trait]
pub trait AnimeService: Send + Sync {
    /// Persists a new record and returns it with its generated id.
    ///
    /// # Errors
    ///
    /// Returns [`AnimeError::Persistence`] when the insert fails.
    async fn add(&self, anime: NewAnime) -> Result<Anime, AnimeError>;

    /// Lists active records matching every given substring filter, one page at a time.
    ///
    /// # Errors
    ///
    /// Returns [`AnimeError::Persistence`] on storage failures.
    async fn list(&self, filter: &AnimeFilter, page: PageRequest)
    -> Result<Vec<Anime>, AnimeError>;

    /// Direct lookup by id. Soft-deleted records are returned too.
    ///
    /// # Errors
    ///
    /// Returns [`AnimeError::Persistence`] on storage failures. A missing id is `Ok(None)`.
    async fn get_by_id(&self, id: AnimeId) -> Result<Option<Anime>, AnimeError>;

    /// Overwrites the fields present in `changes`.
    ///
    /// # Errors
    ///
    /// - Returns [`AnimeError::NotFound`] if the id does not exist
    /// - Returns [`AnimeError::Persistence`] on storage failures
    async fn update(&self, id: AnimeId, changes: AnimeChanges) -> Result<Anime, AnimeError>;

    /// Marks a record inactive. Records are never physically removed.
    ///
    /// # Errors
    ///
    /// - Returns [`AnimeError::NotFound`] if the id does not exist
    /// - Returns [`AnimeError::Persistence`] on storage failures
    async fn soft_delete(&self, id: AnimeId) -> Result<(), AnimeError>;
}

impl From<animes::Model> for Anime {
    fn from(model: animes::Model) -> Self {
        Self {
            id: AnimeId::new(model.id),
            name: model.name,
            summary: model.summary,
            director: model.director,
            active: model.active,
        }
    }
}
