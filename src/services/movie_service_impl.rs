//! `SeaORM` implementation of the `MovieService` trait.

use crate::db::Store;
use crate::models::movie::{Movie, MovieChanges, MovieInput, NewMovie};
use crate::services::movie_service::{MovieError, MovieService};
use async_trait::async_trait;
use sea_orm::{DbErr, SqlErr};

pub struct SeaOrmMovieService {
    store: Store,
}

impl SeaOrmMovieService {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }

    fn validate_text(field: &str, value: String) -> Result<String, MovieError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(MovieError::Validation(format!("{field} cannot be empty")));
        }
        Ok(trimmed.to_string())
    }

    fn validate_new(input: MovieInput) -> Result<NewMovie, MovieError> {
        let missing: Vec<&str> = [
            ("name", input.name.is_none()),
            ("genre", input.genre.is_none()),
            ("rating", input.rating.is_none()),
            ("explicit", input.explicit.is_none()),
        ]
        .into_iter()
        .filter_map(|(field, absent)| absent.then_some(field))
        .collect();

        match input {
            MovieInput {
                name: Some(name),
                genre: Some(genre),
                rating: Some(rating),
                explicit: Some(explicit),
            } => Ok(NewMovie {
                name: Self::validate_text("name", name)?,
                genre: Self::validate_text("genre", genre)?,
                rating,
                explicit,
            }),
            _ => Err(MovieError::Validation(format!(
                "Missing required field(s): {}",
                missing.join(", ")
            ))),
        }
    }

    fn validate_changes(input: MovieInput) -> Result<MovieChanges, MovieError> {
        Ok(MovieChanges {
            name: input
                .name
                .map(|n| Self::validate_text("name", n))
                .transpose()?,
            genre: input
                .genre
                .map(|g| Self::validate_text("genre", g))
                .transpose()?,
            rating: input.rating,
            explicit: input.explicit,
        })
    }

    /// Maps a unique-constraint violation on `name` to a validation error.
    fn map_write_error(err: anyhow::Error, name: Option<&str>) -> MovieError {
        let duplicate = err
            .downcast_ref::<DbErr>()
            .and_then(DbErr::sql_err)
            .is_some_and(|e| matches!(e, SqlErr::UniqueConstraintViolation(_)));

        match (duplicate, name) {
            (true, Some(name)) => {
                MovieError::Validation(format!("A movie named '{name}' already exists."))
            }
            _ => MovieError::from(err),
        }
    }
}

#[async_trait]
impl MovieService for SeaOrmMovieService {
    async fn list(&self) -> Result<Vec<Movie>, MovieError> {
        Ok(self.store.list_movies().await?)
    }

    async fn get(&self, id: i32) -> Result<Movie, MovieError> {
        self.store
            .get_movie(id)
            .await?
            .ok_or(MovieError::NotFound(id))
    }

    async fn create(&self, input: MovieInput) -> Result<Movie, MovieError> {
        let movie = Self::validate_new(input)?;

        self.store
            .create_movie(&movie)
            .await
            .map_err(|e| Self::map_write_error(e, Some(&movie.name)))
    }

    async fn update(&self, id: i32, input: MovieInput) -> Result<Movie, MovieError> {
        let changes = Self::validate_changes(input)?;

        self.store
            .update_movie(id, &changes)
            .await
            .map_err(|e| Self::map_write_error(e, changes.name.as_deref()))?
            .ok_or(MovieError::NotFound(id))
    }

    async fn delete(&self, id: i32) -> Result<Movie, MovieError> {
        self.store
            .delete_movie(id)
            .await?
            .ok_or(MovieError::NotFound(id))
    }
}
