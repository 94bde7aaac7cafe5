//! `SeaORM` implementation of the `AnimeService` trait.

use crate::db::Store;
use crate::domain::{AnimeId, PageRequest};
use crate::models::anime::{Anime, AnimeChanges, AnimeFilter, NewAnime};
use crate::services::anime_service::{AnimeError, AnimeService};
use tracing::{error, info, warn};

/// SeaORM-backed [`AnimeService`].
///
/// The store handle is injected at construction; there is no global context.
pub struct SeaOrmAnimeService {
    store: Store,
}

impl SeaOrmAnimeService {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }

    /// Loads a record or fails with [`AnimeError::NotFound`].
    async fn require(&self, id: AnimeId) -> Result<crate::entities::animes::Model, AnimeError> {
        match self.store.get_anime(id).await {
            Ok(Some(model)) => Ok(model),
            Ok(None) => {
                let err = AnimeError::NotFound(id);
                warn!(anime_id = %id, "{err}");
                Err(err)
            }
            Err(e) => {
                error!(anime_id = %id, error = %e, "Failed to load anime");
                Err(e.into())
            }
        }
    }
}

#[async_trait::async_trait]
impl AnimeService for SeaOrmAnimeService {
    async fn add(&self, anime: NewAnime) -> Result<Anime, AnimeError> {
        match self.store.insert_anime(&anime).await {
            Ok(model) => {
                info!(anime_id = model.id, name = %model.name, "Anime added");
                Ok(model.into())
            }
            Err(e) => {
                error!(name = %anime.name, error = %e, "Failed to add anime");
                Err(e.into())
            }
        }
    }

    async fn list(
        &self,
        filter: &AnimeFilter,
        page: PageRequest,
    ) -> Result<Vec<Anime>, AnimeError> {
        match self.store.list_active_anime(filter, page).await {
            Ok(rows) => {
                info!(
                    total = rows.len(),
                    page = page.page,
                    page_size = page.page_size,
                    "Listed anime"
                );
                Ok(rows.into_iter().map(Anime::from).collect())
            }
            Err(e) => {
                error!(error = %e, "Failed to list anime");
                Err(e.into())
            }
        }
    }

    async fn get_by_id(&self, id: AnimeId) -> Result<Option<Anime>, AnimeError> {
        self.store
            .get_anime(id)
            .await
            .map(|model| model.map(Anime::from))
            .map_err(|e| {
                error!(anime_id = %id, error = %e, "Failed to fetch anime");
                e.into()
            })
    }

    async fn update(&self, id: AnimeId, changes: AnimeChanges) -> Result<Anime, AnimeError> {
        let current = self.require(id).await?;
        info!(anime_id = %id, name = %current.name, "Anime found for update");

        match self.store.apply_anime_changes(current, &changes).await {
            Ok(model) => {
                info!(anime_id = %id, "Anime updated");
                Ok(model.into())
            }
            Err(e) => {
                error!(anime_id = %id, error = %e, "Failed to update anime");
                Err(e.into())
            }
        }
    }

    async fn soft_delete(&self, id: AnimeId) -> Result<(), AnimeError> {
        let current = self.require(id).await?;

        match self.store.deactivate_anime(current).await {
            Ok(_) => {
                info!(anime_id = %id, "Anime deactivated");
                Ok(())
            }
            Err(e) => {
                error!(anime_id = %id, error = %e, "Failed to deactivate anime");
                Err(e.into())
            }
        }
    }
}
