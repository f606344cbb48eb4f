// src/middleware/auth.rs

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
    middleware::Next,
    response::Response,
};

use crate::{common::error::AppError, gateway::Session};

// O middleware em si: sem Bearer, a requisição nem chega ao handler
// (e portanto nenhuma chamada ao upstream é feita).
pub async fn session_guard(
    mut request: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    let session = Session::from_authorization(auth_header);
    if !session.is_authenticated() {
        tracing::debug!("🔒 Requisição sem token bloqueada: {}", request.uri().path());
        return Err(AppError::MissingToken);
    }

    // Insere a sessão nos "extensions" da requisição
    request.extensions_mut().insert(session);
    Ok(next.run(request).await)
}

// Extrator para obter a sessão diretamente nos handlers.
// Fora do guard, cai para o cabeçalho (e o gateway recusa se faltar token).
impl<S> FromRequestParts<S> for Session
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        if let Some(session) = parts.extensions.get::<Session>() {
            return Ok(session.clone());
        }
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok());
        Ok(Session::from_authorization(auth_header))
    }
}
