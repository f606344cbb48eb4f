// src/models/member.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::application::MembershipType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum MemberStatus {
    Active,
    Pending,
    Suspended,
    // Definido fora daqui (convite de senha). Só o upstream sai deste estado.
    PendingPasswordSetup,
}

impl MemberStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            MemberStatus::Active => "active",
            MemberStatus::Pending => "pending",
            MemberStatus::Suspended => "suspended",
            MemberStatus::PendingPasswordSetup => "pending_password_setup",
        }
    }

    pub fn is_editable(self) -> bool {
        self != MemberStatus::PendingPasswordSetup
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MembershipDocuments {
    #[serde(default)]
    pub id_document: Option<String>,
    #[serde(default)]
    pub certificates: Vec<String>,
    #[serde(default)]
    pub cpd_records: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Member {
    #[schema(example = 7)]
    pub id: i64,

    pub first_name: String,
    pub last_name: String,
    pub email: String,

    #[serde(default)]
    pub phone: Option<String>,

    pub membership_type: MembershipType,

    #[serde(default)]
    pub qualification: Option<String>,

    #[serde(default)]
    pub organization: Option<String>,

    pub member_status: MemberStatus,

    #[serde(default)]
    pub documents: MembershipDocuments,

    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct MemberStatusPayload {
    pub status: MemberStatus,
}

#[derive(Debug, Serialize)]
pub struct MemberStatusUpdate {
    pub status: MemberStatus,
}
