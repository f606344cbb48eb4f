// src/services/transitions.rs

// Controlador de transições: comando -> validação local -> mutação no
// upstream -> re-fetch -> quadro novo. Nada de atualização otimista.
// Se qualquer passo falhar, o quadro antigo continua valendo e o erro sobe.

use chrono::NaiveDate;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::{
    common::error::AppError,
    gateway::Session,
    models::{
        application::{
            reapproval_comment, validate_not_blank, ApplicationAction, ApplicationStatus,
        },
        booking::{BookingAction, BookingStatus, ReschedulePayload, TimeSlot},
        confirmation::DeleteConfirmation,
        member::MemberStatus,
    },
    repos::{AdminRepository, ApplicationRepository, BookingRepository, MemberRepository},
    services::boards::{AdminBoard, ApplicationBoard, BookingBoard, MemberBoard},
};

// =========================================================================
//  COMANDOS
// =========================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum BookingCommand {
    Confirm,
    Cancel { reason: Option<String> },
    Reschedule { date: NaiveDate, slot: TimeSlot },
    Complete,
}

impl BookingCommand {
    pub fn cancel(reason: Option<String>) -> Self {
        let reason = reason
            .map(|r| r.trim().to_string())
            .filter(|r| !r.is_empty());
        BookingCommand::Cancel { reason }
    }

    // Data e horário obrigatórios; o horário precisa estar na grade.
    pub fn reschedule(payload: &ReschedulePayload) -> Result<Self, AppError> {
        payload.validate()?;

        let date = NaiveDate::parse_from_str(payload.date.trim(), "%Y-%m-%d").map_err(|_| {
            field_error(
                "date",
                "invalid_date_format",
                "The date must use the YYYY-MM-DD format.",
            )
        })?;
        let slot = TimeSlot::parse(&payload.time).ok_or_else(|| {
            field_error(
                "time",
                "invalid_time_slot",
                "Choose one of the available time slots (09:00 to 18:00).",
            )
        })?;

        Ok(BookingCommand::Reschedule { date, slot })
    }

    pub fn action(&self) -> BookingAction {
        match self {
            BookingCommand::Confirm => BookingAction::Confirm,
            BookingCommand::Cancel { .. } => BookingAction::Cancel,
            BookingCommand::Reschedule { .. } => BookingAction::Reschedule,
            BookingCommand::Complete => BookingAction::Complete,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ApplicationCommand {
    Approve { comment: Option<String> },
    Reject { comment: String },
    Reapprove { comment: Option<String> },
}

impl ApplicationCommand {
    pub fn action(&self) -> ApplicationAction {
        match self {
            ApplicationCommand::Approve { .. } => ApplicationAction::Approve,
            ApplicationCommand::Reject { .. } => ApplicationAction::Reject,
            ApplicationCommand::Reapprove { .. } => ApplicationAction::Reapprove,
        }
    }
}

fn field_error(field: &'static str, code: &'static str, message: &'static str) -> AppError {
    let mut errors = ValidationErrors::new();
    let mut err = ValidationError::new(code);
    err.message = Some(message.into());
    errors.add(field, err);
    AppError::ValidationError(errors)
}

fn non_blank(comment: Option<String>) -> Option<String> {
    comment
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty())
}

// =========================================================================
//  CONTROLADOR
// =========================================================================

#[derive(Clone)]
pub struct TransitionController {
    bookings: BookingRepository,
    applications: ApplicationRepository,
    members: MemberRepository,
    admins: AdminRepository,
}

impl TransitionController {
    pub fn new(
        bookings: BookingRepository,
        applications: ApplicationRepository,
        members: MemberRepository,
        admins: AdminRepository,
    ) -> Self {
        Self {
            bookings,
            applications,
            members,
            admins,
        }
    }

    // --- AGENDAMENTOS ---

    pub async fn dispatch_booking(
        &self,
        session: &Session,
        board: &BookingBoard,
        id: &str,
        command: BookingCommand,
    ) -> Result<BookingBoard, AppError> {
        // 1. O agendamento precisa estar no quadro e a ação disponível
        let booking = board
            .find(id)
            .ok_or_else(|| AppError::BookingNotFound(id.to_string()))?;

        let action = command.action();
        if !booking.status.allows(action) {
            return Err(AppError::TransitionNotAvailable {
                action: action.verb(),
                status: booking.status.as_str().to_string(),
            });
        }

        // 2. Mutação
        match command {
            BookingCommand::Confirm => {
                self.bookings
                    .update_status(session, id, BookingStatus::Confirmed, None)
                    .await?
            }
            BookingCommand::Cancel { reason } => {
                self.bookings
                    .update_status(session, id, BookingStatus::Cancelled, reason)
                    .await?
            }
            BookingCommand::Reschedule { date, slot } => {
                self.bookings
                    .reschedule(session, id, date, slot.as_str())
                    .await?
            }
            BookingCommand::Complete => {
                self.bookings
                    .update_status(session, id, BookingStatus::Completed, None)
                    .await?
            }
        }

        tracing::info!("✅ Agendamento {}: ação '{}' aplicada", id, action.verb());

        // 3. Re-fetch: a tela só mostra o que o servidor confirmou
        BookingBoard::load(&self.bookings, session, board.as_of()).await
    }

    // --- CANDIDATURAS ---

    pub async fn dispatch_application(
        &self,
        session: &Session,
        board: &ApplicationBoard,
        id: i64,
        command: ApplicationCommand,
    ) -> Result<ApplicationBoard, AppError> {
        // 1. Rejeição sem comentário para aqui, antes de qualquer busca
        if let ApplicationCommand::Reject { comment } = &command {
            if let Err(err) = validate_not_blank(comment) {
                let mut errors = ValidationErrors::new();
                errors.add("comment", err);
                return Err(AppError::ValidationError(errors));
            }
        }

        let application = board.find(id).ok_or(AppError::ApplicationNotFound(id))?;

        let action = command.action();
        if !application.application_status.allows(action) {
            return Err(AppError::TransitionNotAvailable {
                action: action.verb(),
                status: application.application_status.as_str().to_string(),
            });
        }

        // 2. Monta status + comentário
        let (status, review_comment) = match command {
            ApplicationCommand::Approve { comment } => {
                (ApplicationStatus::Approved, non_blank(comment).unwrap_or_default())
            }
            ApplicationCommand::Reject { comment } => {
                (ApplicationStatus::Rejected, comment.trim().to_string())
            }
            ApplicationCommand::Reapprove { comment } => (
                ApplicationStatus::Approved,
                non_blank(comment).unwrap_or_else(|| reapproval_comment(&application.full_name())),
            ),
        };

        self.applications
            .update_status(session, id, status, review_comment)
            .await?;

        tracing::info!("✅ Candidatura {}: ação '{}' aplicada", id, action.verb());

        // 3. Re-fetch
        ApplicationBoard::load(&self.applications, session).await
    }

    pub async fn delete_application(
        &self,
        session: &Session,
        board: &ApplicationBoard,
        id: i64,
        confirmation: DeleteConfirmation,
    ) -> Result<ApplicationBoard, AppError> {
        if !confirmation.confirmed {
            return Err(AppError::ConfirmationRequired);
        }
        if board.find(id).is_none() {
            return Err(AppError::ApplicationNotFound(id));
        }

        self.applications.delete(session, id).await?;
        tracing::info!("🗑️ Candidatura {} excluída", id);

        ApplicationBoard::load(&self.applications, session).await
    }

    // --- MEMBROS ---

    pub async fn update_member_status(
        &self,
        session: &Session,
        board: &MemberBoard,
        id: i64,
        status: MemberStatus,
    ) -> Result<MemberBoard, AppError> {
        let member = board.find(id).ok_or(AppError::MemberNotFound(id))?;

        // Enquanto o membro não define a senha, o status fica travado
        if !member.member_status.is_editable() {
            return Err(AppError::MemberStatusLocked);
        }
        if !status.is_editable() {
            return Err(field_error(
                "status",
                "not_selectable",
                "This status is set automatically and cannot be chosen.",
            ));
        }

        self.members.update_status(session, id, status).await?;
        tracing::info!("✅ Membro {}: status '{}'", id, status.as_str());

        MemberBoard::load(&self.members, session).await
    }

    // --- ADMINISTRADORES ---

    pub async fn delete_admin(
        &self,
        session: &Session,
        board: &AdminBoard,
        id: i64,
        confirmation: DeleteConfirmation,
    ) -> Result<AdminBoard, AppError> {
        if !confirmation.confirmed {
            return Err(AppError::ConfirmationRequired);
        }
        if board.find(id).is_none() {
            return Err(AppError::AdminNotFound(id));
        }

        self.admins.delete(session, id).await?;
        tracing::info!("🗑️ Administrador {} excluído", id);

        AdminBoard::load(&self.admins, session).await
    }
}
