// src/handlers/bookings.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Local;

use crate::{
    common::{
        error::ApiError,
        extract::{JsonBody, ValidQuery},
    },
    config::AppState,
    gateway::Session,
    models::{
        booking::{CancelPayload, ReschedulePayload},
        dashboard::Client,
    },
    services::{
        boards::{BookingBoard, BookingBoardView},
        filters::BookingFilter,
        normalizer::derive_clients,
        transitions::BookingCommand,
    },
};

// Busca o quadro, aplica o comando e devolve o quadro re-buscado.
async fn run_command(
    app_state: &AppState,
    session: &Session,
    id: &str,
    command: BookingCommand,
) -> Result<BookingBoardView, ApiError> {
    let board = BookingBoard::load(&app_state.booking_repo, session, Local::now().date_naive()).await?;

    let board = app_state
        .transitions
        .dispatch_booking(session, &board, id, command)
        .await?;

    Ok(board.view(&BookingFilter::default()))
}

// GET /api/bookings
#[utoipa::path(
    get,
    path = "/api/bookings",
    tag = "Bookings",
    params(
        ("search" = Option<String>, Query, description = "Nome, e-mail ou serviço"),
        ("status" = Option<String>, Query, description = "all | pending | confirmed | cancelled | completed | rescheduled")
    ),
    responses(
        (status = 200, description = "Agendamentos, contagens e janelas", body = BookingBoardView),
        (status = 400, description = "Filtro inválido"),
        (status = 401, description = "Sem token")
    ),
    security(("api_jwt" = []))
)]
pub async fn list_bookings(
    State(app_state): State<AppState>,
    session: Session,
    ValidQuery(filter): ValidQuery<BookingFilter>,
) -> Result<impl IntoResponse, ApiError> {
    let board = BookingBoard::load(&app_state.booking_repo, &session, Local::now().date_naive()).await?;

    Ok((StatusCode::OK, Json(board.view(&filter))))
}

// GET /api/bookings/clients
#[utoipa::path(
    get,
    path = "/api/bookings/clients",
    tag = "Bookings",
    responses(
        (status = 200, description = "Clientes derivados dos agendamentos", body = Vec<Client>)
    ),
    security(("api_jwt" = []))
)]
pub async fn list_clients(
    State(app_state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, ApiError> {
    let bookings = app_state.booking_repo.list(&session).await?;

    Ok((StatusCode::OK, Json(derive_clients(&bookings))))
}

// POST /api/bookings/{id}/confirm
#[utoipa::path(
    post,
    path = "/api/bookings/{id}/confirm",
    tag = "Bookings",
    params(("id" = String, Path, description = "ID do agendamento")),
    responses(
        (status = 200, description = "Confirmado; quadro re-buscado", body = BookingBoardView),
        (status = 409, description = "Ação indisponível para o status atual")
    ),
    security(("api_jwt" = []))
)]
pub async fn confirm_booking(
    State(app_state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let view = run_command(&app_state, &session, &id, BookingCommand::Confirm).await?;
    Ok((StatusCode::OK, Json(view)))
}

// POST /api/bookings/{id}/cancel
#[utoipa::path(
    post,
    path = "/api/bookings/{id}/cancel",
    tag = "Bookings",
    params(("id" = String, Path, description = "ID do agendamento")),
    request_body(content = CancelPayload, description = "Motivo opcional; o corpo pode ser omitido"),
    responses(
        (status = 200, description = "Cancelado; quadro re-buscado", body = BookingBoardView),
        (status = 409, description = "Ação indisponível para o status atual")
    ),
    security(("api_jwt" = []))
)]
pub async fn cancel_booking(
    State(app_state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<Option<CancelPayload>>,
) -> Result<impl IntoResponse, ApiError> {
    let command = BookingCommand::cancel(payload.unwrap_or_default().reason);
    let view = run_command(&app_state, &session, &id, command).await?;
    Ok((StatusCode::OK, Json(view)))
}

// POST /api/bookings/{id}/reschedule
#[utoipa::path(
    post,
    path = "/api/bookings/{id}/reschedule",
    tag = "Bookings",
    params(("id" = String, Path, description = "ID do agendamento")),
    request_body = ReschedulePayload,
    responses(
        (status = 200, description = "Reagendado; quadro re-buscado", body = BookingBoardView),
        (status = 400, description = "Data ou horário ausente")
    ),
    security(("api_jwt" = []))
)]
pub async fn reschedule_booking(
    State(app_state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<ReschedulePayload>,
) -> Result<impl IntoResponse, ApiError> {
    // Valida antes de qualquer chamada ao upstream
    let command = BookingCommand::reschedule(&payload)?;

    let view = run_command(&app_state, &session, &id, command).await?;
    Ok((StatusCode::OK, Json(view)))
}

// POST /api/bookings/{id}/complete
#[utoipa::path(
    post,
    path = "/api/bookings/{id}/complete",
    tag = "Bookings",
    params(("id" = String, Path, description = "ID do agendamento")),
    responses(
        (status = 200, description = "Concluído; quadro re-buscado", body = BookingBoardView),
        (status = 409, description = "Ação indisponível para o status atual")
    ),
    security(("api_jwt" = []))
)]
pub async fn complete_booking(
    State(app_state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let view = run_command(&app_state, &session, &id, BookingCommand::Complete).await?;
    Ok((StatusCode::OK, Json(view)))
}
