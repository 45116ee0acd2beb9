pub mod movie_service;
pub mod movie_service_impl;

pub use movie_service::{MovieError, MovieService};
pub use movie_service_impl::SeaOrmMovieService;
