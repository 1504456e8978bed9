//! Body extractors that reject with `AppError`
//!
//! axum's own `Form` and `Json` reject with plain-text bodies; these keep
//! every client error in the `{"detail": ...}` shape.

use crate::error::AppError;
use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    Form,
};
use serde::de::DeserializeOwned;

/// URL-encoded form body
#[derive(Debug)]
pub struct FormBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for FormBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Form(value) = Form::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                log::warn!("Form body rejected: {}", rejection.body_text());
                AppError::InvalidInput(rejection.body_text())
            })?;
        Ok(Self(value))
    }
}

/// JSON body, parsed whatever the request's `Content-Type`
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| AppError::InvalidInput(rejection.body_text()))?;

        let value = serde_json::from_slice(&bytes).map_err(|e| {
            log::warn!("JSON body rejected: {}", e);
            AppError::InvalidInput(e.to_string())
        })?;
        Ok(Self(value))
    }
}
