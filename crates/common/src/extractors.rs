//! Custom axum extractors for Antiquarium

use axum::{
    extract::{rejection::PathRejection, FromRequestParts, Path},
    http::request::Parts,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::Error;

/// Path extractor that validates the deserialized value automatically.
///
/// Replaces `Path<T>` + manual `.validate()` calls in handlers.
/// Requires `T: DeserializeOwned + Validate`.
///
/// All input errors (malformed segment + validation) return 400.
#[derive(Debug)]
pub struct ValidatedPath<T>(pub T);

/// Rejection type for `ValidatedPath`:
/// - Path deserialization errors → 400 (via `Error::Validation`)
/// - Validation errors → 400 (via `Error::Validation`)
#[derive(Debug)]
pub enum ValidatedPathRejection {
    Path(PathRejection),
    Validation(Error),
}

impl IntoResponse for ValidatedPathRejection {
    fn into_response(self) -> Response {
        match self {
            ValidatedPathRejection::Path(e) => Error::Validation(e.body_text()).into_response(),
            ValidatedPathRejection::Validation(e) => e.into_response(),
        }
    }
}

impl<T, S> FromRequestParts<S> for ValidatedPath<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = ValidatedPathRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(ValidatedPathRejection::Path)?;
        value.validate().map_err(|e| {
            ValidatedPathRejection::Validation(Error::Validation(format!(
                "Validation failed: {}",
                e
            )))
        })?;
        Ok(ValidatedPath(value))
    }
}
