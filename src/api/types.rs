use serde::Serialize;

use crate::models::movie::Movie;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Error,
}

/// Uniform response envelope: `status` plus either `data` or `message`.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub status: ResponseStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub const fn success(data: T) -> Self {
        Self {
            status: ResponseStatus::Success,
            data: Some(data),
            message: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Error,
            data: None,
            message: Some(message.into()),
        }
    }
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct MovieDto {
    pub id: i32,
    pub name: String,
    pub genre: String,
    pub rating: i32,
    pub explicit: bool,
}

impl From<Movie> for MovieDto {
    fn from(movie: Movie) -> Self {
        Self {
            id: movie.id,
            name: movie.name,
            genre: movie.genre,
            rating: movie.rating,
            explicit: movie.explicit,
        }
    }
}
