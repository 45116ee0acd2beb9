use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use std::sync::Arc;

use super::validation::parse_movie_id;
use super::{ApiError, ApiResponse, AppState, MovieDto};
use crate::models::movie::MovieInput;

type MovieListResponse = Json<ApiResponse<Vec<MovieDto>>>;

fn single(movie: crate::models::movie::Movie) -> MovieListResponse {
    Json(ApiResponse::success(vec![MovieDto::from(movie)]))
}

/// `GET /api/v1/movies`
pub async fn list_movies(
    State(state): State<Arc<AppState>>,
) -> Result<MovieListResponse, ApiError> {
    let movies = state.movies().list().await?;
    let dtos: Vec<MovieDto> = movies.into_iter().map(MovieDto::from).collect();
    Ok(Json(ApiResponse::success(dtos)))
}

/// `GET /api/v1/movies/{id}`
pub async fn get_movie(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<MovieListResponse, ApiError> {
    let id = parse_movie_id(&id)?;
    let movie = state.movies().get(id).await?;
    Ok(single(movie))
}

/// `POST /api/v1/movies`
pub async fn create_movie(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<MovieInput>, JsonRejection>,
) -> Result<(StatusCode, MovieListResponse), ApiError> {
    let Json(input) = payload?;
    let movie = state.movies().create(input).await?;
    Ok((StatusCode::CREATED, single(movie)))
}

/// `PUT /api/v1/movies/{id}`
///
/// Fields missing from the body keep their stored values.
pub async fn update_movie(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    payload: Result<Json<MovieInput>, JsonRejection>,
) -> Result<MovieListResponse, ApiError> {
    let id = parse_movie_id(&id)?;
    let Json(input) = payload?;
    let movie = state.movies().update(id, input).await?;
    Ok(single(movie))
}

/// `DELETE /api/v1/movies/{id}`
pub async fn delete_movie(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<MovieListResponse, ApiError> {
    let id = parse_movie_id(&id)?;
    let movie = state.movies().delete(id).await?;
    Ok(single(movie))
}
