// src/gateway/client.rs

use std::time::Duration;

use reqwest::{Client, Method, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::common::error::AppError;
use super::session::Session;

// Cliente HTTP da API principal. Barato de clonar (o reqwest::Client usa Arc).
#[derive(Debug, Clone)]
pub struct ApiGateway {
    client: Client,
    base_url: String,
}

impl ApiGateway {
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self, AppError> {
        let mut builder = Client::builder();
        // Sem timeout configurado, vale o padrão do reqwest (nenhum).
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| anyhow::anyhow!("Falha ao montar o cliente HTTP: {}", e))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // GET que decodifica o corpo. JSON fora do formato esperado é erro.
    pub async fn get<T: DeserializeOwned>(&self, session: &Session, path: &str) -> Result<T, AppError> {
        let response = self.send::<()>(session, Method::GET, path, None).await?;
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    // Mutações: o corpo de sucesso é ignorado, a verdade vem do re-fetch.
    pub async fn put<B: Serialize>(&self, session: &Session, path: &str, body: &B) -> Result<(), AppError> {
        self.send(session, Method::PUT, path, Some(body)).await?;
        Ok(())
    }

    pub async fn delete(&self, session: &Session, path: &str) -> Result<(), AppError> {
        self.send::<()>(session, Method::DELETE, path, None).await?;
        Ok(())
    }

    async fn send<B: Serialize>(
        &self,
        session: &Session,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<reqwest::Response, AppError> {
        // 1. Sem token, para aqui (antes de qualquer chamada de rede)
        let token = session.bearer()?;

        // 2. Monta a requisição
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        tracing::debug!("➡️  {} {}", method, url);

        let mut request = self.client.request(method.clone(), &url).bearer_auth(token);
        if let Some(body) = body {
            request = request.json(body);
        }

        // 3. Envia e trata o status
        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = server_message(status, &text);
            tracing::warn!("⚠️  {} {} -> {}: {}", method, url, status.as_u16(), message);
            return Err(AppError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response)
    }
}

// Extrai a mensagem que o servidor mandou: campo `error`/`message` do JSON,
// senão o texto cru, senão a descrição padrão do status.
pub(crate) fn server_message(status: StatusCode, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<Value>(body) {
        for key in ["error", "message", "msg"] {
            if let Some(msg) = value.get(key).and_then(Value::as_str) {
                if !msg.trim().is_empty() {
                    return msg.to_string();
                }
            }
        }
    }

    let trimmed = body.trim();
    if !trimmed.is_empty() && !trimmed.starts_with('{') {
        return trimmed.to_string();
    }

    status
        .canonical_reason()
        .unwrap_or("Request failed")
        .to_string()
}
