// src/handlers/admins.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    common::{
        error::{ApiError, AppError},
        extract::{JsonBody, ValidQuery},
    },
    config::AppState,
    gateway::Session,
    models::{admin::AdminUser, confirmation::DeleteConfirmation},
    services::{
        boards::AdminBoard,
        filters::{AdminFilter, FilteredView},
    },
};

// GET /api/admins
#[utoipa::path(
    get,
    path = "/api/admins",
    tag = "Admins",
    params(("search" = Option<String>, Query, description = "Nome, e-mail ou papel")),
    responses(
        (status = 200, description = "Administradores", body = FilteredView<AdminUser>)
    ),
    security(("api_jwt" = []))
)]
pub async fn list_admins(
    State(app_state): State<AppState>,
    session: Session,
    ValidQuery(filter): ValidQuery<AdminFilter>,
) -> Result<impl IntoResponse, ApiError> {
    let board = AdminBoard::load(&app_state.admin_repo, &session).await?;

    Ok((StatusCode::OK, Json(board.view(&filter))))
}

// DELETE /api/admins/{id}
#[utoipa::path(
    delete,
    path = "/api/admins/{id}",
    tag = "Admins",
    params(("id" = i64, Path, description = "ID do administrador")),
    request_body = DeleteConfirmation,
    responses(
        (status = 200, description = "Excluído; lista re-buscada", body = FilteredView<AdminUser>),
        (status = 428, description = "Exclusão não confirmada")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_admin(
    State(app_state): State<AppState>,
    session: Session,
    Path(id): Path<i64>,
    JsonBody(confirmation): JsonBody<Option<DeleteConfirmation>>,
) -> Result<impl IntoResponse, ApiError> {
    let confirmation = confirmation.unwrap_or_default();

    if !confirmation.confirmed {
        return Err(AppError::ConfirmationRequired.into());
    }

    let board = AdminBoard::load(&app_state.admin_repo, &session).await?;
    let board = app_state
        .transitions
        .delete_admin(&session, &board, id, confirmation)
        .await?;

    Ok((StatusCode::OK, Json(board.view(&AdminFilter::default()))))
}
