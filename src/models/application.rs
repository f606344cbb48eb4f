// src/models/application.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

// --- Enums ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum MembershipType {
    Professional,
    Student,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    Pending,
    UnderReview,
    Approved,
    Rejected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationAction {
    Approve,
    Reject,
    Reapprove,
}

impl ApplicationAction {
    pub fn verb(self) -> &'static str {
        match self {
            ApplicationAction::Approve => "approve",
            ApplicationAction::Reject => "reject",
            ApplicationAction::Reapprove => "re-approve",
        }
    }
}

impl ApplicationStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "pending",
            ApplicationStatus::UnderReview => "under_review",
            ApplicationStatus::Approved => "approved",
            ApplicationStatus::Rejected => "rejected",
        }
    }

    pub fn allows(self, action: ApplicationAction) -> bool {
        use ApplicationAction::*;
        use ApplicationStatus::*;
        matches!(
            (self, action),
            (Pending | UnderReview, Approve) | (Pending | UnderReview, Reject) | (Rejected, Reapprove)
        )
    }

    pub fn available_actions(self) -> Vec<ApplicationAction> {
        [
            ApplicationAction::Approve,
            ApplicationAction::Reject,
            ApplicationAction::Reapprove,
        ]
        .into_iter()
        .filter(|a| self.allows(*a))
        .collect()
    }
}

// --- Structs ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RequiredDocument {
    #[schema(example = "Proof of qualification")]
    pub name: String,
    pub uploaded: bool,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Application {
    #[schema(example = 42)]
    pub id: i64,

    #[schema(example = "Ada")]
    pub first_name: String,

    #[schema(example = "Mensah")]
    pub last_name: String,

    #[schema(example = "ada@example.com")]
    pub email: String,

    #[serde(default)]
    pub phone: Option<String>,

    pub membership_type: MembershipType,

    #[serde(default)]
    #[schema(example = "MA Counselling Psychology")]
    pub qualification: Option<String>,

    #[serde(default)]
    pub experience: Option<String>,

    #[serde(default)]
    pub organization: Option<String>,

    #[serde(default)]
    pub documents: Vec<RequiredDocument>,

    pub application_status: ApplicationStatus,

    #[serde(default)]
    pub review_comment: Option<String>,

    pub created_at: DateTime<Utc>,
}

impl Application {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn missing_documents(&self) -> impl Iterator<Item = &RequiredDocument> {
        self.documents.iter().filter(|d| !d.uploaded)
    }
}

// --- Payloads recebidos do painel ---

pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("required");
        err.message = Some("A review comment is required to reject an application.".into());
        return Err(err);
    }
    Ok(())
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct ReviewPayload {
    #[serde(default)]
    #[schema(example = "All documents verified")]
    pub comment: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct RejectPayload {
    #[serde(default)]
    #[validate(custom(function = "validate_not_blank"))]
    #[schema(example = "Qualification certificate is missing")]
    pub comment: String,
}

// --- Payload enviado ao upstream ---

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationStatusUpdate {
    pub status: ApplicationStatus,
    pub review_comment: String,
}

pub fn reapproval_comment(applicant_name: &str) -> String {
    format!(
        "Re-approved application for {}. Previous concerns have been addressed.",
        applicant_name
    )
}
