use crate::models::movie::{Movie, MovieChanges, NewMovie};
use anyhow::{Context, Result};
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Statement, TransactionTrait,
};
use sea_orm_migration::MigratorTrait;
use std::path::Path;
use std::time::Duration;
use tracing::info;

pub mod migrator;
pub mod repositories;
pub mod seed;

use migrator::Migrator;

#[derive(Clone)]
pub struct Store {
    pub conn: DatabaseConnection,
}

/// Applied/pending state of a single migration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationState {
    pub name: String,
    pub applied: bool,
}

impl Store {
    pub async fn new(db_url: &str) -> Result<Self> {
        Self::with_pool_options(db_url, 5, 1).await
    }

    /// Connects and brings the schema up to date.
    pub async fn with_pool_options(
        db_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self> {
        let store = Self::connect(db_url, max_connections, min_connections).await?;

        Migrator::up(&store.conn, None).await?;

        info!(
            "Database connected & migrations applied (pool: {}-{})",
            min_connections, max_connections
        );

        Ok(store)
    }

    /// Connects without touching the schema.
    pub async fn connect(db_url: &str, max_connections: u32, min_connections: u32) -> Result<Self> {
        if !db_url.contains(":memory:") {
            let path_str = db_url.trim_start_matches("sqlite://").trim_start_matches("sqlite:");
            let path_str = path_str.split('?').next().unwrap_or(path_str);
            if let Some(parent) = Path::new(path_str).parent() {
                tokio::fs::create_dir_all(parent).await.ok();
            }
            if !Path::new(path_str).exists() {
                std::fs::File::create(path_str)
                    .with_context(|| format!("Failed to create database file: {path_str}"))?;
            }
        }

        let mut opt = ConnectOptions::new(db_url.to_string());
        opt.max_connections(max_connections)
            .min_connections(min_connections)
            .connect_timeout(Duration::from_secs(10))
            .acquire_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .max_lifetime(Duration::from_secs(600))
            .sqlx_logging(false);

        let conn = Database::connect(opt).await?;

        Ok(Self { conn })
    }

    pub async fn ping(&self) -> Result<()> {
        let backend = self.conn.get_database_backend();
        self.conn
            .query_one(Statement::from_string(backend, "SELECT 1".to_string()))
            .await?;
        Ok(())
    }

    fn movie_repo(&self) -> repositories::movie::MovieRepository {
        repositories::movie::MovieRepository::new(self.conn.clone())
    }

    // ========== Movie Repository Methods ==========

    pub async fn list_movies(&self) -> Result<Vec<Movie>> {
        self.movie_repo().list_all().await
    }

    pub async fn get_movie(&self, id: i32) -> Result<Option<Movie>> {
        self.movie_repo().get(id).await
    }

    pub async fn count_movies(&self) -> Result<u64> {
        self.movie_repo().count().await
    }

    pub async fn create_movie(&self, movie: &NewMovie) -> Result<Movie> {
        self.movie_repo().create(movie).await
    }

    pub async fn update_movie(&self, id: i32, changes: &MovieChanges) -> Result<Option<Movie>> {
        self.movie_repo().update(id, changes).await
    }

    pub async fn delete_movie(&self, id: i32) -> Result<Option<Movie>> {
        self.movie_repo().delete(id).await
    }

    // ========== Schema & Fixture Management ==========

    pub async fn migrate_up(&self) -> Result<()> {
        Migrator::up(&self.conn, None).await?;
        Ok(())
    }

    /// Rolls back every applied migration.
    pub async fn migrate_down(&self) -> Result<()> {
        Migrator::down(&self.conn, None).await?;
        Ok(())
    }

    /// Drops all tables and reapplies every migration.
    pub async fn migrate_fresh(&self) -> Result<()> {
        Migrator::fresh(&self.conn).await?;
        Ok(())
    }

    pub async fn migration_status(&self) -> Result<Vec<MigrationState>> {
        let applied: Vec<String> = Migrator::get_applied_migrations(&self.conn)
            .await?
            .iter()
            .map(|m| m.name().to_string())
            .collect();

        let pending: Vec<String> = Migrator::get_pending_migrations(&self.conn)
            .await?
            .iter()
            .map(|m| m.name().to_string())
            .collect();

        Ok(applied
            .into_iter()
            .map(|name| MigrationState {
                name,
                applied: true,
            })
            .chain(pending.into_iter().map(|name| MigrationState {
                name,
                applied: false,
            }))
            .collect())
    }

    /// Replaces the contents of `movies` with the fixture rows.
    pub async fn seed(&self) -> Result<usize> {
        let txn = self.conn.begin().await?;
        let count = seed::run(&txn).await?;
        txn.commit().await?;
        Ok(count)
    }

    /// Rolls the schema back, reapplies it, and seeds fixtures.
    pub async fn reset(&self) -> Result<usize> {
        self.migrate_down().await?;
        self.migrate_up().await?;
        self.seed().await
    }
}
