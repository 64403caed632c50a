//! Movie route handlers
//!
//! Each handler runs a single statement through the movie repository and
//! answers with an envelope.

use crate::error::{validation_error, ApiResult};
use crate::models::{
    CreateMovieForm, Envelope, ALL_MOVIES_DELETED, MISSING_MOVIE_FIELDS, MISSING_MOVIE_ID,
    MOVIE_DELETED, MOVIE_INSERTED,
};
use crate::state::SharedState;
use axum::{
    extract::{Path, State},
    Json,
};
use tracing::{debug, info};
use validator::Validate;

/// List every movie in storage order
pub async fn list_movies(State(state): State<SharedState>) -> ApiResult<Json<Envelope>> {
    debug!("Getting movies");

    let movies = state.movies.list_movies().await?;

    info!("Listed {} movies", movies.len());

    Ok(Json(Envelope::with_data(movies)))
}

/// Insert one movie from the `movieid` / `moviename` form fields
pub async fn create_movie(
    State(state): State<SharedState>,
    form: CreateMovieForm,
) -> ApiResult<Json<Envelope>> {
    form.validate()
        .map_err(|_| validation_error(MISSING_MOVIE_FIELDS))?;

    let movie = form.into_movie();
    debug!(movie_id = %movie.movie_id, movie_name = %movie.movie_name, "Inserting movie");

    let id = state.movies.insert_movie(&movie).await?;

    info!(id, movie_id = %movie.movie_id, "Movie inserted");

    Ok(Json(Envelope::success(MOVIE_INSERTED)))
}

/// Delete every row carrying the given movie id
///
/// Succeeds whether or not anything matched.
pub async fn delete_movie(
    State(state): State<SharedState>,
    Path(movie_id): Path<String>,
) -> ApiResult<Json<Envelope>> {
    // the route never yields an empty segment, handlers can still be called directly
    if movie_id.is_empty() {
        return Err(validation_error(MISSING_MOVIE_ID));
    }

    debug!(%movie_id, "Deleting movie");

    let deleted = state.movies.delete_movie(&movie_id).await?;

    info!(%movie_id, deleted, "Movie delete finished");

    Ok(Json(Envelope::success(MOVIE_DELETED)))
}

/// Delete the whole table
pub async fn delete_all_movies(State(state): State<SharedState>) -> ApiResult<Json<Envelope>> {
    debug!("Deleting all movies");

    let deleted = state.movies.delete_all_movies().await?;

    info!(deleted, "{}", ALL_MOVIES_DELETED);

    Ok(Json(Envelope::success(ALL_MOVIES_DELETED)))
}
