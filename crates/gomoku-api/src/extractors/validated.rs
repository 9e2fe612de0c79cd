//! `ValidatedJson` extractor: deserializes a JSON body, then runs its
//! `validator` rules.

use axum::Json;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use validator::Validate;

use gomoku_core::error::AppError;

use crate::error::ApiError;

/// A JSON body that passed both deserialization and validation.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::validation(rejection.body_text()))?;
        validate(&value)?;
        Ok(Self(value))
    }
}

/// Runs `value`'s validation rules, mapping failures to a validation error.
pub fn validate<T: Validate>(value: &T) -> Result<(), ApiError> {
    value
        .validate()
        .map_err(|e| ApiError::from(AppError::validation(e.to_string())))
}
