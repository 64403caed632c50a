// Movie data access
//
// Handlers only see the MovieRepository trait; PgMovieRepository is the
// production implementation backed by the deadpool connection pool.

use crate::db::queries::{DELETE_ALL_MOVIES, DELETE_MOVIE, INSERT_MOVIE, PING, SELECT_MOVIES};
use crate::error::AppError;
use crate::models::Movie;
use async_trait::async_trait;
use deadpool_postgres::Pool;
use tokio_postgres::Row;

// One statement per call; implementations must be shareable across requests
#[async_trait]
pub trait MovieRepository: Send + Sync {
    // cheap round trip, used by the health check
    async fn ping(&self) -> Result<(), AppError>;

    async fn list_movies(&self) -> Result<Vec<Movie>, AppError>;

    // returns the surrogate id of the new row
    async fn insert_movie(&self, movie: &Movie) -> Result<i64, AppError>;

    // returns how many rows carried the id
    async fn delete_movie(&self, movie_id: &str) -> Result<u64, AppError>;

    async fn delete_all_movies(&self) -> Result<u64, AppError>;
}

pub struct PgMovieRepository {
    pool: Pool,
}

impl PgMovieRepository {
    pub fn new(pool: Pool) -> Self {
        Self { pool }
    }
}

fn movie_from_row(row: &Row) -> Result<Movie, AppError> {
    Ok(Movie {
        movie_id: row.try_get("movie_id")?,
        movie_name: row.try_get("movie_name")?,
    })
}

#[async_trait]
impl MovieRepository for PgMovieRepository {
    async fn ping(&self) -> Result<(), AppError> {
        let client = self.pool.get().await?;
        client.query_one(PING, &[]).await?;
        Ok(())
    }

    async fn list_movies(&self) -> Result<Vec<Movie>, AppError> {
        // the pooled client goes back to the pool when it drops, error or not
        let client = self.pool.get().await?;
        let rows = client.query(SELECT_MOVIES, &[]).await?;

        rows.iter().map(movie_from_row).collect()
    }

    async fn insert_movie(&self, movie: &Movie) -> Result<i64, AppError> {
        let client = self.pool.get().await?;
        let row = client
            .query_one(INSERT_MOVIE, &[&movie.movie_id, &movie.movie_name])
            .await?;

        Ok(row.try_get(0)?)
    }

    async fn delete_movie(&self, movie_id: &str) -> Result<u64, AppError> {
        let client = self.pool.get().await?;
        Ok(client.execute(DELETE_MOVIE, &[&movie_id]).await?)
    }

    async fn delete_all_movies(&self) -> Result<u64, AppError> {
        let client = self.pool.get().await?;
        Ok(client.execute(DELETE_ALL_MOVIES, &[]).await?)
    }
}
