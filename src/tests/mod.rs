// Router-level tests. The real router runs against in-memory repositories so
// no database is needed.


use crate::db::MovieRepository;
use crate::error::AppError;
use crate::models::Movie;
use async_trait::async_trait;
use deadpool_postgres::PoolError;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

// --- Manual Mock: MovieRepository ---
// keeps the "table" in a Vec so insertion order is storage order
#[derive(Default)]
pub struct MemoryMovieRepository {
    rows: Mutex<Vec<(i64, Movie)>>,
    next_id: AtomicUsize,
    pub calls: AtomicUsize,
}

impl MemoryMovieRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_movies(movies: &[(&str, &str)]) -> Self {
        let repo = Self::new();
        {
            let mut rows = repo.rows.lock().unwrap();
            for (movie_id, movie_name) in movies {
                let id = repo.next_id.fetch_add(1, Ordering::SeqCst) as i64 + 1;
                rows.push((id, Movie::new(*movie_id, *movie_name)));
            }
        }
        repo
    }

    pub fn snapshot(&self) -> Vec<Movie> {
        let rows = self.rows.lock().unwrap();
        rows.iter().map(|(_, movie)| movie.clone()).collect()
    }

    fn touch(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl MovieRepository for MemoryMovieRepository {
    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }

    async fn list_movies(&self) -> Result<Vec<Movie>, AppError> {
        self.touch();
        Ok(self.snapshot())
    }

    async fn insert_movie(&self, movie: &Movie) -> Result<i64, AppError> {
        self.touch();
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) as i64 + 1;
        self.rows.lock().unwrap().push((id, movie.clone()));
        Ok(id)
    }

    async fn delete_movie(&self, movie_id: &str) -> Result<u64, AppError> {
        self.touch();
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|(_, movie)| movie.movie_id != movie_id);
        Ok((before - rows.len()) as u64)
    }

    async fn delete_all_movies(&self) -> Result<u64, AppError> {
        self.touch();
        let mut rows = self.rows.lock().unwrap();
        let deleted = rows.len() as u64;
        rows.clear();
        Ok(deleted)
    }
}

// --- Manual Mock: unreachable database ---
// fails every call while `down` is set, then delegates to an in-memory table
#[derive(Default)]
pub struct FlakyMovieRepository {
    pub down: AtomicBool,
    inner: MemoryMovieRepository,
}

impl FlakyMovieRepository {
    pub fn down() -> Self {
        let repo = Self::default();
        repo.down.store(true, Ordering::SeqCst);
        repo
    }

    fn check(&self) -> Result<(), AppError> {
        if self.down.load(Ordering::SeqCst) {
            Err(AppError::Pool(PoolError::Closed))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl MovieRepository for FlakyMovieRepository {
    async fn ping(&self) -> Result<(), AppError> {
        self.check()
    }

    async fn list_movies(&self) -> Result<Vec<Movie>, AppError> {
        self.check()?;
        self.inner.list_movies().await
    }

    async fn insert_movie(&self, movie: &Movie) -> Result<i64, AppError> {
        self.check()?;
        self.inner.insert_movie(movie).await
    }

    async fn delete_movie(&self, movie_id: &str) -> Result<u64, AppError> {
        self.check()?;
        self.inner.delete_movie(movie_id).await
    }

    async fn delete_all_movies(&self) -> Result<u64, AppError> {
        self.check()?;
        self.inner.delete_all_movies().await
    }
}
