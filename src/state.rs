use std::sync::Arc;

use crate::config::Config;
use crate::db::Store;
use crate::services::{AnimeService, SeaOrmAnimeService};

/// Composition root: the store handle and the services built on top of it.
#[derive(Clone)]
pub struct SharedState {
    pub config: Arc<Config>,

    pub store: Store,

    pub anime_service: Arc<dyn AnimeService>,
}

impl SharedState {
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let store = Store::with_pool_options(
            &config.general.database_path,
            config.general.max_db_connections,
            config.general.min_db_connections,
        )
        .await?;

        let anime_service: Arc<dyn AnimeService> =
            Arc::new(SeaOrmAnimeService::new(store.clone()));

        Ok(Self {
            config: Arc::new(config),
            store,
            anime_service,
        })
    }

    /// Swaps the anime service, keeping config and store.
    #[must_use]
    pub fn with_anime_service(mut self, anime_service: Arc<dyn AnimeService>) -> Self {
        self.anime_service = anime_service;
        self
    }
}
