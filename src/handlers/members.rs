// src/handlers/members.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    common::{
        error::ApiError,
        extract::{JsonBody, ValidQuery},
    },
    config::AppState,
    gateway::Session,
    models::member::MemberStatusPayload,
    services::{
        boards::{MemberBoard, MemberBoardView},
        filters::MemberFilter,
    },
};

// GET /api/members
#[utoipa::path(
    get,
    path = "/api/members",
    tag = "Members",
    params(
        ("search" = Option<String>, Query, description = "Nome, e-mail ou organização"),
        ("status" = Option<String>, Query, description = "all | active | pending | suspended | pending_password_setup")
    ),
    responses(
        (status = 200, description = "Membros e contagens", body = MemberBoardView),
        (status = 400, description = "Filtro inválido")
    ),
    security(("api_jwt" = []))
)]
pub async fn list_members(
    State(app_state): State<AppState>,
    session: Session,
    ValidQuery(filter): ValidQuery<MemberFilter>,
) -> Result<impl IntoResponse, ApiError> {
    let board = MemberBoard::load(&app_state.member_repo, &session).await?;

    Ok((StatusCode::OK, Json(board.view(&filter))))
}

// PUT /api/members/{id}/status
#[utoipa::path(
    put,
    path = "/api/members/{id}/status",
    tag = "Members",
    params(("id" = i64, Path, description = "ID do membro")),
    request_body = MemberStatusPayload,
    responses(
        (status = 200, description = "Status alterado; lista re-buscada", body = MemberBoardView),
        (status = 409, description = "Status travado até o membro definir a senha")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_member_status(
    State(app_state): State<AppState>,
    session: Session,
    Path(id): Path<i64>,
    JsonBody(payload): JsonBody<MemberStatusPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let board = MemberBoard::load(&app_state.member_repo, &session).await?;

    let board = app_state
        .transitions
        .update_member_status(&session, &board, id, payload.status)
        .await?;

    Ok((StatusCode::OK, Json(board.view(&MemberFilter::default()))))
}
