// src/routes.rs

use axum::{
    middleware as axum_middleware,
    routing::{delete, get, post, put},
    Json, Router,
};
use utoipa::OpenApi;

use crate::{config::AppState, docs::ApiDoc, handlers, middleware::auth::session_guard};

pub fn router(app_state: AppState) -> Router {
    // Agendamentos (protegidas pelo guard de sessão)
    let booking_routes = Router::new()
        .route("/", get(handlers::bookings::list_bookings))
        .route("/clients", get(handlers::bookings::list_clients))
        .route("/{id}/confirm", post(handlers::bookings::confirm_booking))
        .route("/{id}/cancel", post(handlers::bookings::cancel_booking))
        .route("/{id}/reschedule", post(handlers::bookings::reschedule_booking))
        .route("/{id}/complete", post(handlers::bookings::complete_booking));

    let application_routes = Router::new()
        .route("/", get(handlers::applications::list_applications))
        .route("/{id}", delete(handlers::applications::delete_application))
        .route("/{id}/approve", post(handlers::applications::approve_application))
        .route("/{id}/reject", post(handlers::applications::reject_application))
        .route("/{id}/reapprove", post(handlers::applications::reapprove_application));

    let member_routes = Router::new()
        .route("/", get(handlers::members::list_members))
        .route("/{id}/status", put(handlers::members::update_member_status));

    let admin_routes = Router::new()
        .route("/", get(handlers::admins::list_admins))
        .route("/{id}", delete(handlers::admins::delete_admin));

    let protected_routes = Router::new()
        .nest("/bookings", booking_routes)
        .nest("/applications", application_routes)
        .nest("/members", member_routes)
        .nest("/admins", admin_routes)
        .route("/content", get(handlers::content::list_content))
        .route("/reports", get(handlers::dashboard::get_reports))
        .layer(axum_middleware::from_fn(session_guard));

    // Combina tudo no router principal
    Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .route("/api/time-slots", get(handlers::dashboard::list_time_slots))
        .route(
            "/api/docs/openapi.json",
            get(|| async { Json(ApiDoc::openapi()) }),
        )
        .nest("/api", protected_routes)
        .with_state(app_state)
}
