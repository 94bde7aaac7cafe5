use crate::domain::{AnimeId, PageRequest};
use crate::models::anime::{AnimeChanges, AnimeFilter, NewAnime};
use anyhow::Result;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr, Statement};
use std::path::Path;
use std::time::Duration;
use tracing::info;

use crate::entities::animes;

const MEMORY_CONNECTION_LIFETIME: Duration = Duration::from_secs(60 * 60 * 24 * 365 * 100);

pub mod migrator;
pub mod repositories;

/// Persistence context: owns the connection pool for the `animes` table.
#[derive(Clone)]
pub struct Store {
    pub conn: DatabaseConnection,
}

impl Store {
    pub async fn new(db_url: &str) -> Result<Self> {
        Self::with_pool_options(db_url, 5, 1).await
    }

    pub async fn with_pool_options(
        db_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self> {
        use sea_orm_migration::MigratorTrait;

        let in_memory = is_in_memory(db_url);

        if !in_memory {
            let path_str = db_url.trim_start_matches("sqlite://").trim_start_matches("sqlite:");
            let path_str = path_str.split('?').next().unwrap_or(path_str);
            if let Some(parent) = Path::new(path_str).parent() {
                tokio::fs::create_dir_all(parent).await.ok();
            }
            if !Path::new(path_str).exists() {
                std::fs::File::create(path_str)?;
            }
        }

        let mut opt = ConnectOptions::new(db_url.to_string());
        opt.connect_timeout(Duration::from_secs(10))
            .acquire_timeout(Duration::from_secs(10))
            .sqlx_logging(false);

        // Every sqlite memory connection is its own database, so the pool is
        // pinned to a single connection that is never recycled.
        let (max_connections, min_connections) = if in_memory {
            opt.idle_timeout(MEMORY_CONNECTION_LIFETIME)
                .max_lifetime(MEMORY_CONNECTION_LIFETIME);
            (1, 1)
        } else {
            opt.idle_timeout(Duration::from_secs(300))
                .max_lifetime(Duration::from_secs(600));
            (max_connections, min_connections)
        };
        opt.max_connections(max_connections)
            .min_connections(min_connections);

        let conn = Database::connect(opt).await?;

        migrator::Migrator::up(&conn, None).await?;

        info!(
            in_memory,
            "Database connected & migrations applied (pool: {}-{})",
            min_connections,
            max_connections
        );

        Ok(Self { conn })
    }

    pub async fn ping(&self) -> Result<()> {
        let backend = self.conn.get_database_backend();
        self.conn
            .query_one(Statement::from_string(backend, "SELECT 1".to_string()))
            .await?;
        Ok(())
    }

    fn anime_repo(&self) -> repositories::anime::AnimeRepository {
        repositories::anime::AnimeRepository::new(self.conn.clone())
    }

    pub async fn insert_anime(&self, anime: &NewAnime) -> Result<animes::Model, DbErr> {
        self.anime_repo().insert(anime).await
    }

    pub async fn get_anime(&self, id: AnimeId) -> Result<Option<animes::Model>, DbErr> {
        self.anime_repo().get(id).await
    }

    pub async fn list_active_anime(
        &self,
        filter: &AnimeFilter,
        page: PageRequest,
    ) -> Result<Vec<animes::Model>, DbErr> {
        self.anime_repo().list_active(filter, page).await
    }

    pub async fn apply_anime_changes(
        &self,
        current: animes::Model,
        changes: &AnimeChanges,
    ) -> Result<animes::Model, DbErr> {
        self.anime_repo().apply_changes(current, changes).await
    }

    pub async fn deactivate_anime(&self, current: animes::Model) -> Result<animes::Model, DbErr> {
        self.anime_repo().deactivate(current).await
    }
}

fn is_in_memory(db_url: &str) -> bool {
    db_url.contains(":memory:") || db_url.contains("mode=memory")
}
