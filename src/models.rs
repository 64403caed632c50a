//! Data models and DTOs (Data Transfer Objects)
//!
//! Contains the movie entity, the response envelope every endpoint returns,
//! and the form accepted by the create endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

pub const MISSING_MOVIE_FIELDS: &str = "You are missing MovieID or MovieName";
pub const MISSING_MOVIE_ID: &str = "Missing Movie Id";
pub const MOVIE_INSERTED: &str = "Movie has been successfully inserted";
pub const MOVIE_DELETED: &str = "Successfully deleted movie from DB";
pub const ALL_MOVIES_DELETED: &str = "All movies have been deleted successfully";

/// A row of the `movies` table, without its surrogate key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    #[serde(rename = "movieid")]
    pub movie_id: String,
    #[serde(rename = "moviename")]
    pub movie_name: String,
}

impl Movie {
    pub fn new(movie_id: impl Into<String>, movie_name: impl Into<String>) -> Self {
        Self {
            movie_id: movie_id.into(),
            movie_name: movie_name.into(),
        }
    }
}

/// Status tag carried by every envelope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseType {
    Success,
    Error,
}

/// Uniform response wrapper: either a list of movies or a message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    #[serde(rename = "type")]
    pub kind: ResponseType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<Movie>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Envelope {
    /// Successful listing; an empty list still serializes as `[]`
    pub fn with_data(movies: Vec<Movie>) -> Self {
        Self {
            kind: ResponseType::Success,
            data: Some(movies),
            message: None,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: ResponseType::Success,
            data: None,
            message: Some(message.into()),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: ResponseType::Error,
            data: None,
            message: Some(message.into()),
        }
    }
}

/// Fields accepted by `POST /movies/`
///
/// Decoded from a url-encoded or multipart body and the query string, see
/// [`crate::extractors`]. Absent fields decode as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct CreateMovieForm {
    #[validate(length(min = 1, message = "movieid is required"))]
    pub movie_id: String,

    #[validate(length(min = 1, message = "moviename is required"))]
    pub movie_name: String,
}

impl CreateMovieForm {
    pub fn into_movie(self) -> Movie {
        Movie::new(self.movie_id, self.movie_name)
    }
}
