// src/models/confirmation.rs

use serde::Deserialize;
use utoipa::ToSchema;

// Exclusões só seguem com confirmação explícita do usuário.
#[derive(Debug, Clone, Copy, Default, Deserialize, ToSchema)]
pub struct DeleteConfirmation {
    #[serde(default)]
    #[schema(example = true)]
    pub confirmed: bool,
}
