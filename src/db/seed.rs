//! Fixture rows used for local development and the test suite.

use crate::entities::{movies, prelude::*};
use crate::models::movie::NewMovie;
use sea_orm::{ConnectionTrait, EntityTrait, Set};
use tracing::info;

#[must_use]
pub fn fixture_movies() -> Vec<NewMovie> {
    vec![
        NewMovie {
            name: "The Land Before Time".to_string(),
            genre: "Fantasy".to_string(),
            rating: 7,
            explicit: false,
        },
        NewMovie {
            name: "Jurassic Park".to_string(),
            genre: "Science Fiction".to_string(),
            rating: 8,
            explicit: true,
        },
        NewMovie {
            name: "Ice Age: Dawn of the Dinosaurs".to_string(),
            genre: "Action/Romance".to_string(),
            rating: 9,
            explicit: false,
        },
    ]
}

/// Replaces every row in `movies` with the fixture set.
pub async fn run<C: ConnectionTrait>(conn: &C) -> Result<usize, sea_orm::DbErr> {
    Movies::delete_many().exec(conn).await?;

    let fixtures = fixture_movies();
    let count = fixtures.len();

    let rows = fixtures.into_iter().map(|m| movies::ActiveModel {
        name: Set(m.name),
        genre: Set(m.genre),
        rating: Set(m.rating),
        explicit: Set(m.explicit),
        ..Default::default()
    });

    Movies::insert_many(rows).exec(conn).await?;

    info!("Seeded {} movies", count);
    Ok(count)
}
