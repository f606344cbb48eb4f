// src/common/error.rs

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use thiserror::Error;

// Nosso tipo de erro, com `thiserror` para melhor ergonomia.
// Cada variante corresponde a uma das quatro famílias de falha:
// autenticação local, conectividade, resposta não-2xx e validação local.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Sessão sem token de autenticação")]
    MissingToken,

    #[error("Falha de rede: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Upstream respondeu {status}: {message}")]
    Upstream { status: u16, message: String },

    #[error("Resposta JSON malformada: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    #[error("Requisição malformada: {0}")]
    InvalidRequest(String),

    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("Ação '{action}' indisponível para o status '{status}'")]
    TransitionNotAvailable { action: &'static str, status: String },

    #[error("Exclusão não confirmada")]
    ConfirmationRequired,

    #[error("Status do membro bloqueado até a definição da senha")]
    MemberStatusLocked,

    #[error("Agendamento não encontrado: {0}")]
    BookingNotFound(String),

    #[error("Candidatura não encontrada: {0}")]
    ApplicationNotFound(i64),

    #[error("Membro não encontrado: {0}")]
    MemberNotFound(i64),

    #[error("Administrador não encontrado: {0}")]
    AdminNotFound(i64),

    // Variante genérica para qualquer outro erro inesperado
    #[error("Erro interno do servidor")]
    InternalServerError(#[from] anyhow::Error),
}

// O corpo que o front-end mostra como notificação ("toast").
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub error: String,
    pub details: Option<Value>,
}

impl ApiError {
    pub fn new(status: StatusCode, error: impl Into<String>) -> Self {
        Self {
            status,
            error: error.into(),
            details: None,
        }
    }
}

impl AppError {
    pub fn to_api_error(&self) -> ApiError {
        match self {
            // Retorna todos os detalhes da validação, campo a campo.
            AppError::ValidationError(errors) => {
                let mut details = std::collections::BTreeMap::new();
                for (field, field_errors) in errors.field_errors() {
                    let messages: Vec<String> = field_errors
                        .iter()
                        .map(|e| {
                            e.message
                                .as_ref()
                                .map(|m| m.to_string())
                                .unwrap_or_else(|| e.code.to_string())
                        })
                        .collect();
                    details.insert(field.to_string(), messages);
                }
                ApiError {
                    status: StatusCode::BAD_REQUEST,
                    error: "One or more fields are invalid.".to_string(),
                    details: Some(json!(details)),
                }
            }
            AppError::InvalidRequest(message) => {
                ApiError::new(StatusCode::BAD_REQUEST, message.clone())
            }
            AppError::MissingToken => ApiError::new(
                StatusCode::UNAUTHORIZED,
                "You are not signed in. Please log in again.",
            ),
            AppError::Network(e) => {
                tracing::error!("🔥 Falha de rede ao falar com o upstream: {}", e);
                ApiError::new(
                    StatusCode::BAD_GATEWAY,
                    "Could not reach the server. Check your connection and try again.",
                )
            }
            // 4xx do upstream passa adiante com a mensagem do servidor; 5xx vira 502.
            AppError::Upstream { status, message } => {
                let status = StatusCode::from_u16(*status)
                    .ok()
                    .filter(|s| s.is_client_error())
                    .unwrap_or_else(|| {
                        tracing::error!("🔥 Upstream falhou com {}: {}", status, message);
                        StatusCode::BAD_GATEWAY
                    });
                ApiError::new(status, message.clone())
            }
            AppError::MalformedResponse(e) => {
                tracing::error!("🔥 Upstream devolveu JSON inesperado: {}", e);
                ApiError::new(
                    StatusCode::BAD_GATEWAY,
                    "The server returned data in an unexpected format.",
                )
            }
            AppError::TransitionNotAvailable { action, status } => ApiError::new(
                StatusCode::CONFLICT,
                format!("Cannot {} an item whose status is {}.", action, status),
            ),
            AppError::ConfirmationRequired => ApiError::new(
                StatusCode::PRECONDITION_REQUIRED,
                "Please confirm the deletion. This action cannot be undone.",
            ),
            AppError::MemberStatusLocked => ApiError::new(
                StatusCode::CONFLICT,
                "Status cannot be changed until the member has set up a password.",
            ),
            AppError::BookingNotFound(id) => {
                ApiError::new(StatusCode::NOT_FOUND, format!("Booking {} not found.", id))
            }
            AppError::ApplicationNotFound(id) => {
                ApiError::new(StatusCode::NOT_FOUND, format!("Application {} not found.", id))
            }
            AppError::MemberNotFound(id) => {
                ApiError::new(StatusCode::NOT_FOUND, format!("Member {} not found.", id))
            }
            AppError::AdminNotFound(id) => {
                ApiError::new(StatusCode::NOT_FOUND, format!("Admin {} not found.", id))
            }
            AppError::InternalServerError(e) => {
                tracing::error!("Erro Interno do Servidor: {:?}", e);
                ApiError::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An unexpected error occurred.",
                )
            }
        }
    }
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        err.to_api_error()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = match self.details {
            Some(details) => json!({ "error": self.error, "details": details }),
            None => json!({ "error": self.error }),
        };
        (self.status, Json(body)).into_response()
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.to_api_error().into_response()
    }
}
