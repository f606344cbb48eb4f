// src/models/dashboard.rs

use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;

// 1. Contagens por status (os cards do topo)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingStats {
    pub total_sessions: usize,
    pub pending: usize,
    pub confirmed: usize,
    pub completed: usize,
    pub cancelled: usize,
    pub rescheduled: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationStats {
    pub total: usize,
    pub pending: usize,
    pub under_review: usize,
    pub approved: usize,
    pub rejected: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MemberStats {
    pub total: usize,
    pub active: usize,
    pub pending: usize,
    pub suspended: usize,
    pub pending_password_setup: usize,
}

// 2. Cliente derivado dos agendamentos (não existe no upstream)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    #[schema(example = "Jane Doe")]
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    // Apenas sessões concluídas
    pub total_sessions: usize,
    #[schema(value_type = Option<String>, format = Date)]
    pub last_session: Option<NaiveDate>,
    pub total_bookings: usize,
}

// 3. Relatórios
#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Split {
    pub label: String,
    pub count: usize,
    pub percentage: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub bookings: BookingStats,
    pub applications: ApplicationStats,
    pub members: MemberStats,
    pub completion_rate: f64,
    pub cancellation_rate: f64,
    pub approval_rate: f64,
    pub session_types: Vec<Split>,
    pub membership_types: Vec<Split>,
    pub unique_clients: usize,
}
