// src/handlers/applications.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use validator::Validate;

use crate::{
    common::{
        error::{ApiError, AppError},
        extract::{JsonBody, ValidQuery},
    },
    config::AppState,
    gateway::Session,
    models::{
        application::{RejectPayload, ReviewPayload},
        confirmation::DeleteConfirmation,
    },
    services::{
        boards::{ApplicationBoard, ApplicationBoardView},
        filters::ApplicationFilter,
        transitions::ApplicationCommand,
    },
};

async fn run_command(
    app_state: &AppState,
    session: &Session,
    id: i64,
    command: ApplicationCommand,
) -> Result<ApplicationBoardView, ApiError> {
    let board = ApplicationBoard::load(&app_state.application_repo, session).await?;

    let board = app_state
        .transitions
        .dispatch_application(session, &board, id, command)
        .await?;

    Ok(board.view(&ApplicationFilter::default()))
}

// GET /api/applications
#[utoipa::path(
    get,
    path = "/api/applications",
    tag = "Applications",
    params(
        ("search" = Option<String>, Query, description = "Nome, e-mail, organização ou qualificação"),
        ("status" = Option<String>, Query, description = "all | pending | under_review | approved | rejected"),
        ("membershipType" = Option<String>, Query, description = "all | professional | student")
    ),
    responses(
        (status = 200, description = "Candidaturas e contagens", body = ApplicationBoardView),
        (status = 400, description = "Filtro inválido")
    ),
    security(("api_jwt" = []))
)]
pub async fn list_applications(
    State(app_state): State<AppState>,
    session: Session,
    ValidQuery(filter): ValidQuery<ApplicationFilter>,
) -> Result<impl IntoResponse, ApiError> {
    let board = ApplicationBoard::load(&app_state.application_repo, &session).await?;

    Ok((StatusCode::OK, Json(board.view(&filter))))
}

// POST /api/applications/{id}/approve
#[utoipa::path(
    post,
    path = "/api/applications/{id}/approve",
    tag = "Applications",
    params(("id" = i64, Path, description = "ID da candidatura")),
    request_body(content = ReviewPayload, description = "Comentário opcional; o corpo pode ser omitido"),
    responses(
        (status = 200, description = "Aprovada; lista re-buscada", body = ApplicationBoardView),
        (status = 409, description = "Ação indisponível para o status atual")
    ),
    security(("api_jwt" = []))
)]
pub async fn approve_application(
    State(app_state): State<AppState>,
    session: Session,
    Path(id): Path<i64>,
    JsonBody(payload): JsonBody<Option<ReviewPayload>>,
) -> Result<impl IntoResponse, ApiError> {
    let command = ApplicationCommand::Approve {
        comment: payload.unwrap_or_default().comment,
    };
    let view = run_command(&app_state, &session, id, command).await?;
    Ok((StatusCode::OK, Json(view)))
}

// POST /api/applications/{id}/reject
#[utoipa::path(
    post,
    path = "/api/applications/{id}/reject",
    tag = "Applications",
    params(("id" = i64, Path, description = "ID da candidatura")),
    request_body = RejectPayload,
    responses(
        (status = 200, description = "Rejeitada; lista re-buscada", body = ApplicationBoardView),
        (status = 400, description = "Comentário obrigatório")
    ),
    security(("api_jwt" = []))
)]
pub async fn reject_application(
    State(app_state): State<AppState>,
    session: Session,
    Path(id): Path<i64>,
    JsonBody(payload): JsonBody<RejectPayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let command = ApplicationCommand::Reject {
        comment: payload.comment,
    };
    let view = run_command(&app_state, &session, id, command).await?;
    Ok((StatusCode::OK, Json(view)))
}

// POST /api/applications/{id}/reapprove
#[utoipa::path(
    post,
    path = "/api/applications/{id}/reapprove",
    tag = "Applications",
    params(("id" = i64, Path, description = "ID da candidatura")),
    request_body(content = ReviewPayload, description = "Comentário opcional; o corpo pode ser omitido"),
    responses(
        (status = 200, description = "Reaprovada; lista re-buscada", body = ApplicationBoardView),
        (status = 409, description = "Só candidaturas rejeitadas podem ser reaprovadas")
    ),
    security(("api_jwt" = []))
)]
pub async fn reapprove_application(
    State(app_state): State<AppState>,
    session: Session,
    Path(id): Path<i64>,
    JsonBody(payload): JsonBody<Option<ReviewPayload>>,
) -> Result<impl IntoResponse, ApiError> {
    let command = ApplicationCommand::Reapprove {
        comment: payload.unwrap_or_default().comment,
    };
    let view = run_command(&app_state, &session, id, command).await?;
    Ok((StatusCode::OK, Json(view)))
}

// DELETE /api/applications/{id}
#[utoipa::path(
    delete,
    path = "/api/applications/{id}",
    tag = "Applications",
    params(("id" = i64, Path, description = "ID da candidatura")),
    request_body = DeleteConfirmation,
    responses(
        (status = 200, description = "Excluída; lista re-buscada", body = ApplicationBoardView),
        (status = 428, description = "Exclusão não confirmada")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_application(
    State(app_state): State<AppState>,
    session: Session,
    Path(id): Path<i64>,
    JsonBody(confirmation): JsonBody<Option<DeleteConfirmation>>,
) -> Result<impl IntoResponse, ApiError> {
    let confirmation = confirmation.unwrap_or_default();

    // Sem confirmação, nem a lista é buscada
    if !confirmation.confirmed {
        return Err(AppError::ConfirmationRequired.into());
    }

    let board = ApplicationBoard::load(&app_state.application_repo, &session).await?;
    let board = app_state
        .transitions
        .delete_application(&session, &board, id, confirmation)
        .await?;

    Ok((StatusCode::OK, Json(board.view(&ApplicationFilter::default()))))
}
