// src/handlers/content.rs

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    common::{error::ApiError, extract::ValidQuery},
    config::AppState,
    gateway::Session,
    models::content::ContentItem,
    services::filters::{ContentFilter, FilteredView},
};

// GET /api/content
#[utoipa::path(
    get,
    path = "/api/content",
    tag = "Content",
    params(
        ("search" = Option<String>, Query, description = "Título ou resumo"),
        ("kind" = Option<String>, Query, description = "all | news | event | resource"),
        ("category" = Option<String>, Query, description = "Categoria (sem diferenciar maiúsculas)"),
        ("tag" = Option<String>, Query, description = "Etiqueta (sem diferenciar maiúsculas)")
    ),
    responses(
        (status = 200, description = "Conteúdo filtrado", body = FilteredView<ContentItem>),
        (status = 400, description = "Filtro inválido")
    ),
    security(("api_jwt" = []))
)]
pub async fn list_content(
    State(app_state): State<AppState>,
    session: Session,
    ValidQuery(filter): ValidQuery<ContentFilter>,
) -> Result<impl IntoResponse, ApiError> {
    let items = app_state.content_repo.list(&session).await?;

    Ok((StatusCode::OK, Json(filter.apply(&items))))
}
