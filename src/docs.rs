// src/docs.rs

use utoipa::OpenApi;
use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
use crate::handlers;
use crate::models;
use crate::services;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Bookings ---
        handlers::bookings::list_bookings,
        handlers::bookings::list_clients,
        handlers::bookings::confirm_booking,
        handlers::bookings::cancel_booking,
        handlers::bookings::reschedule_booking,
        handlers::bookings::complete_booking,

        // --- Applications ---
        handlers::applications::list_applications,
        handlers::applications::approve_application,
        handlers::applications::reject_application,
        handlers::applications::reapprove_application,
        handlers::applications::delete_application,

        // --- Members ---
        handlers::members::list_members,
        handlers::members::update_member_status,

        // --- Content ---
        handlers::content::list_content,

        // --- Admins ---
        handlers::admins::list_admins,
        handlers::admins::delete_admin,

        // --- Dashboard ---
        handlers::dashboard::get_reports,
        handlers::dashboard::list_time_slots,
    ),
    components(
        schemas(
            // --- Bookings ---
            models::booking::BookingStatus,
            models::booking::SessionType,
            models::booking::Urgency,
            models::booking::BookingAction,
            models::booking::Booking,
            models::booking::ReschedulePayload,
            models::booking::CancelPayload,

            // --- Applications ---
            models::application::MembershipType,
            models::application::ApplicationStatus,
            models::application::ApplicationAction,
            models::application::RequiredDocument,
            models::application::Application,
            models::application::ReviewPayload,
            models::application::RejectPayload,

            // --- Members ---
            models::member::MemberStatus,
            models::member::MembershipDocuments,
            models::member::Member,
            models::member::MemberStatusPayload,

            // --- Content / Admins ---
            models::content::ContentKind,
            models::content::ContentItem,
            models::admin::AdminUser,
            models::confirmation::DeleteConfirmation,

            // --- Dashboard ---
            models::dashboard::BookingStats,
            models::dashboard::ApplicationStats,
            models::dashboard::MemberStats,
            models::dashboard::Client,
            models::dashboard::Split,
            models::dashboard::ReportSummary,

            // --- Views ---
            services::boards::BookingRow,
            services::boards::BookingBoardView,
            services::boards::ApplicationRow,
            services::boards::ApplicationBoardView,
            services::boards::MemberRow,
            services::boards::MemberBoardView,
        )
    ),
    tags(
        (name = "Bookings", description = "Agendamentos de sessões"),
        (name = "Applications", description = "Candidaturas de associação"),
        (name = "Members", description = "Membros e status"),
        (name = "Content", description = "Notícias, eventos e recursos"),
        (name = "Admins", description = "Usuários administradores"),
        (name = "Dashboard", description = "Indicadores e grade de horários")
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "api_jwt",
            SecurityScheme::Http(
                Http::new(HttpAuthScheme::Bearer)
            ),
        );
    }
}
