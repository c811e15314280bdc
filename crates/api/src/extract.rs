//! Request extractors.

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use cardledger_shared::AppError;
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// Query-string extractor whose rejection is an [`AppError::InvalidFilter`].
///
/// A repeated parameter, or `kind` given together with its `type` alias,
/// fails deserialization and comes back as the usual JSON error body.
#[derive(Debug, Clone, Default)]
pub struct ApiQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ApiQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Query::<T>::from_request_parts(parts, state)
            .await
            .map(|Query(value)| Self(value))
            .map_err(|rejection| ApiError(AppError::InvalidFilter(rejection.body_text())))
    }
}
