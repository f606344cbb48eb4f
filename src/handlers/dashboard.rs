// src/handlers/dashboard.rs

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    common::error::ApiError,
    config::AppState,
    gateway::Session,
    models::{booking::TIME_SLOTS, dashboard::ReportSummary},
    services::reports::build_report,
};

// GET /api/reports
#[utoipa::path(
    get,
    path = "/api/reports",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Indicadores de agendamentos, candidaturas e membros", body = ReportSummary),
        (status = 401, description = "Sem token"),
        (status = 502, description = "Upstream indisponível")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_reports(
    State(app_state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, ApiError> {
    // Três buscas em sequência; qualquer falha derruba o relatório inteiro
    let bookings = app_state.booking_repo.list(&session).await?;
    let applications = app_state.application_repo.list(&session).await?;
    let members = app_state.member_repo.list(&session).await?;

    let report = build_report(&bookings, &applications, &members);

    Ok((StatusCode::OK, Json(report)))
}

// GET /api/time-slots
#[utoipa::path(
    get,
    path = "/api/time-slots",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Grade fixa de horários para reagendamento", body = Vec<String>)
    )
)]
pub async fn list_time_slots() -> impl IntoResponse {
    (StatusCode::OK, Json(TIME_SLOTS.to_vec()))
}
