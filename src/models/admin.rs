// src/models/admin.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdminUser {
    #[schema(example = 1)]
    pub id: i64,

    #[schema(example = "Grace Owusu")]
    pub name: String,

    #[schema(example = "grace@example.com")]
    pub email: String,

    #[schema(example = "super_admin")]
    pub role: String,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}
