//! Domain service for the movie catalogue.
//!
//! Owns input validation for create/update and translates storage outcomes
//! into [`MovieError`] values the HTTP layer can map to status codes.

use crate::models::movie::{Movie, MovieInput};
use thiserror::Error;

/// Errors specific to movie operations.
#[derive(Debug, Error)]
pub enum MovieError {
    #[error("Movie not found: {0}")]
    NotFound(i32),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sea_orm::DbErr> for MovieError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Database(err.to_string())
    }
}

impl From<anyhow::Error> for MovieError {
    fn from(err: anyhow::Error) -> Self {
        Self::Database(format!("{err:#}"))
    }
}

/// Domain service trait for movies.
#[async_trait::async_trait]
pub trait MovieService: Send + Sync {
    /// Lists every movie in storage order.
    async fn list(&self) -> Result<Vec<Movie>, MovieError>;

    /// Gets a single movie by id.
    async fn get(&self, id: i32) -> Result<Movie, MovieError>;

    /// Creates a movie. All four fields must be present.
    async fn create(&self, input: MovieInput) -> Result<Movie, MovieError>;

    /// Applies the fields present in `input` to an existing movie.
    async fn update(&self, id: i32, input: MovieInput) -> Result<Movie, MovieError>;

    /// Deletes a movie and returns its last stored values.
    async fn delete(&self, id: i32) -> Result<Movie, MovieError>;
}
