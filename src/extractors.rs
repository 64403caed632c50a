//! Request extractors
//!
//! `CreateMovieForm` is read the way HTML forms are: from a url-encoded or
//! multipart body and from the query string. Body values take precedence over
//! query values, and the first occurrence of a key wins within each source.
//! File parts of a multipart body are skipped.

use crate::error::AppError;
use crate::models::CreateMovieForm;
use axum::{
    body::Bytes,
    extract::{FromRequest, Multipart, Request},
    http::{header, HeaderMap},
};

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";
const MULTIPART_CONTENT_TYPE: &str = "multipart/form-data";

pub const MOVIE_ID_FIELD: &str = "movieid";
pub const MOVIE_NAME_FIELD: &str = "moviename";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BodyKind {
    UrlEncoded,
    Multipart,
    Other,
}

/// Classify the body by media type, ignoring parameters and case
fn body_kind(headers: &HeaderMap) -> BodyKind {
    let media_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|ct| ct.split(';').next())
        .map(str::trim)
        .unwrap_or("");

    if media_type.eq_ignore_ascii_case(FORM_CONTENT_TYPE) {
        BodyKind::UrlEncoded
    } else if media_type.eq_ignore_ascii_case(MULTIPART_CONTENT_TYPE) {
        BodyKind::Multipart
    } else {
        BodyKind::Other
    }
}

impl<S> FromRequest<S> for CreateMovieForm
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let query = req.uri().query().map(str::to_owned);
        let kind = body_kind(req.headers());
        let mut fields = FormFields::default();

        match kind {
            BodyKind::UrlEncoded => {
                let body = Bytes::from_request(req, state)
                    .await
                    .map_err(|e| AppError::BadRequest(e.body_text()))?;
                fields.fill(&body);
            }
            BodyKind::Multipart => {
                let mut multipart = Multipart::from_request(req, state)
                    .await
                    .map_err(|e| AppError::BadRequest(e.body_text()))?;

                while let Some(field) = multipart
                    .next_field()
                    .await
                    .map_err(|e| AppError::BadRequest(e.body_text()))?
                {
                    if field.file_name().is_some() {
                        continue;
                    }
                    let Some(name) = field.name().map(str::to_owned) else {
                        continue;
                    };
                    let value = field
                        .text()
                        .await
                        .map_err(|e| AppError::BadRequest(e.body_text()))?;
                    fields.offer(&name, value);
                }
            }
            BodyKind::Other => {}
        }

        if let Some(query) = query {
            fields.fill(query.as_bytes());
        }

        Ok(fields.into_form())
    }
}

/// Values seen so far; `None` means the key has not appeared yet
#[derive(Default)]
struct FormFields {
    movie_id: Option<String>,
    movie_name: Option<String>,
}

impl FormFields {
    fn fill(&mut self, encoded: &[u8]) {
        for (key, value) in url::form_urlencoded::parse(encoded) {
            self.offer(&key, value.into_owned());
        }
    }

    fn offer(&mut self, key: &str, value: String) {
        let slot = match key {
            MOVIE_ID_FIELD => &mut self.movie_id,
            MOVIE_NAME_FIELD => &mut self.movie_name,
            _ => return,
        };
        if slot.is_none() {
            *slot = Some(value);
        }
    }

    fn into_form(self) -> CreateMovieForm {
        CreateMovieForm {
            movie_id: self.movie_id.unwrap_or_default(),
            movie_name: self.movie_name.unwrap_or_default(),
        }
    }
}
