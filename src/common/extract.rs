// src/common/extract.rs

// Extratores que falham com o mesmo corpo JSON `{error, details?}` do resto
// da API, no lugar das rejeições em texto puro do axum.

use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Query, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::common::error::AppError;

/// Corpo JSON. Corpo vazio é lido como `null`, então `JsonBody<Option<T>>`
/// aceita requisições sem corpo e `JsonBody<T>` as recusa com 400.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| AppError::InvalidRequest(rejection.body_text()))?;

        let body: &[u8] = if bytes.trim_ascii().is_empty() {
            b"null"
        } else {
            &bytes
        };

        serde_json::from_slice(body).map(JsonBody).map_err(|e| {
            tracing::debug!("🚫 Corpo JSON recusado: {}", e);
            AppError::InvalidRequest(format!("The request body is not valid JSON: {}", e))
        })
    }
}

/// Query string desserializada e validada. Valores de filtro desconhecidos
/// voltam como erro do próprio campo em `details`.
#[derive(Debug, Clone)]
pub struct ValidQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for ValidQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::try_from_uri(&parts.uri)
            .map_err(|rejection| AppError::InvalidRequest(rejection.body_text()))?;

        value.validate()?;
        Ok(ValidQuery(value))
    }
}
