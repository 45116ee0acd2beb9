use crate::entities::{movies, prelude::*};
use crate::models::movie::{Movie, MovieChanges, NewMovie};
use anyhow::Result;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, NotSet, PaginatorTrait, QueryOrder,
    Set, Unchanged,
};
use tracing::{debug, info};

/// Repository for movie operations
pub struct MovieRepository {
    conn: DatabaseConnection,
}

impl MovieRepository {
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    fn map_model(m: movies::Model) -> Movie {
        Movie {
            id: m.id,
            name: m.name,
            genre: m.genre,
            rating: m.rating,
            explicit: m.explicit,
        }
    }

    pub async fn list_all(&self) -> Result<Vec<Movie>> {
        let rows = Movies::find()
            .order_by_asc(movies::Column::Id)
            .all(&self.conn)
            .await?;

        Ok(rows.into_iter().map(Self::map_model).collect())
    }

    pub async fn get(&self, id: i32) -> Result<Option<Movie>> {
        let row = Movies::find_by_id(id).one(&self.conn).await?;
        Ok(row.map(Self::map_model))
    }

    pub async fn count(&self) -> Result<u64> {
        Ok(Movies::find().count(&self.conn).await?)
    }

    pub async fn create(&self, movie: &NewMovie) -> Result<Movie> {
        let active_model = movies::ActiveModel {
            name: Set(movie.name.clone()),
            genre: Set(movie.genre.clone()),
            rating: Set(movie.rating),
            explicit: Set(movie.explicit),
            ..Default::default()
        };

        let model = active_model.insert(&self.conn).await?;
        info!("Added movie {}: {}", model.id, model.name);
        Ok(Self::map_model(model))
    }

    /// Applies `changes` to the movie with `id`. Returns `None` when the movie
    /// does not exist.
    ///
    /// Issued as one autocommit `UPDATE`. SQLite refuses to upgrade a read
    /// transaction to a write lock while another writer holds it.
    pub async fn update(&self, id: i32, changes: &MovieChanges) -> Result<Option<Movie>> {
        if changes.is_empty() {
            debug!("No changes supplied for movie {}", id);
            return self.get(id).await;
        }

        let active = movies::ActiveModel {
            id: Unchanged(id),
            name: changes.name.clone().map_or(NotSet, Set),
            genre: changes.genre.clone().map_or(NotSet, Set),
            rating: changes.rating.map_or(NotSet, Set),
            explicit: changes.explicit.map_or(NotSet, Set),
        };

        match Movies::update(active).exec(&self.conn).await {
            Ok(updated) => {
                info!("Updated movie {}", id);
                Ok(Some(Self::map_model(updated)))
            }
            Err(DbErr::RecordNotUpdated | DbErr::RecordNotFound(_)) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Deletes the movie with `id` and returns its last stored values.
    pub async fn delete(&self, id: i32) -> Result<Option<Movie>> {
        let Some(existing) = Movies::find_by_id(id).one(&self.conn).await? else {
            return Ok(None);
        };

        let result = Movies::delete_by_id(id).exec(&self.conn).await?;
        if result.rows_affected == 0 {
            // Removed by a concurrent request after the read
            return Ok(None);
        }

        info!("Deleted movie {}: {}", existing.id, existing.name);
        Ok(Some(Self::map_model(existing)))
    }
}
