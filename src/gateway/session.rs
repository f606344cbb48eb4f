// src/gateway/session.rs

use crate::common::error::AppError;

// A sessão de quem chama: o token é lido do cabeçalho a cada requisição
// e passado explicitamente para o gateway.
#[derive(Debug, Clone, Default)]
pub struct Session {
    token: Option<String>,
}

impl Session {
    pub fn new(token: impl Into<String>) -> Self {
        let token = token.into();
        let token = token.trim();
        Self {
            token: (!token.is_empty()).then(|| token.to_string()),
        }
    }

    pub fn anonymous() -> Self {
        Self { token: None }
    }

    pub fn from_authorization(header: Option<&str>) -> Self {
        header
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(Session::new)
            .unwrap_or_default()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    // Sem token, nenhuma chamada de rede deve acontecer.
    pub fn bearer(&self) -> Result<&str, AppError> {
        self.token.as_deref().ok_or(AppError::MissingToken)
    }
}
