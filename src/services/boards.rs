// src/services/boards.rs

// Cada tela trabalha sobre um "quadro": a coleção buscada no upstream
// naquele momento. Nada é compartilhado entre requisições.

use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    common::error::AppError,
    gateway::Session,
    models::{
        admin::AdminUser,
        application::{Application, ApplicationAction},
        booking::{Booking, BookingAction},
        dashboard::{ApplicationStats, BookingStats, Client, MemberStats},
        member::Member,
    },
    repos::{AdminRepository, ApplicationRepository, BookingRepository, MemberRepository},
    services::{
        filters::{AdminFilter, ApplicationFilter, BookingFilter, FilteredView, MemberFilter},
        normalizer::{derive_clients, tally_applications, tally_bookings, tally_members, upcoming_bookings},
    },
};

// =========================================================================
//  AGENDAMENTOS
// =========================================================================

#[derive(Debug, Clone)]
pub struct BookingBoard {
    bookings: Vec<Booking>,
    today: Vec<Booking>,
    as_of: NaiveDate,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingRow {
    #[serde(flatten)]
    pub booking: Booking,
    pub available_actions: Vec<BookingAction>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingBoardView {
    pub bookings: FilteredView<BookingRow>,
    pub stats: BookingStats,
    pub clients: Vec<Client>,
    pub upcoming: Vec<Booking>,
    pub today: Vec<Booking>,
    #[schema(value_type = String, format = Date)]
    pub as_of: NaiveDate,
}

impl BookingBoard {
    pub fn new(bookings: Vec<Booking>, today: Vec<Booking>, as_of: NaiveDate) -> Self {
        Self {
            bookings,
            today,
            as_of,
        }
    }

    // Busca a lista completa e a de hoje, uma depois da outra.
    pub async fn load(
        repo: &BookingRepository,
        session: &Session,
        as_of: NaiveDate,
    ) -> Result<Self, AppError> {
        let bookings = repo.list(session).await?;
        let today = repo.list_today(session).await?;
        tracing::debug!("📋 {} agendamentos carregados ({} hoje)", bookings.len(), today.len());
        Ok(Self::new(bookings, today, as_of))
    }

    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn as_of(&self) -> NaiveDate {
        self.as_of
    }

    pub fn find(&self, id: &str) -> Option<&Booking> {
        self.bookings.iter().find(|b| b.id == id)
    }

    pub fn stats(&self) -> BookingStats {
        tally_bookings(&self.bookings)
    }

    pub fn clients(&self) -> Vec<Client> {
        derive_clients(&self.bookings)
    }

    pub fn upcoming(&self) -> Vec<Booking> {
        upcoming_bookings(&self.bookings, self.as_of)
    }

    pub fn view(&self, filter: &BookingFilter) -> BookingBoardView {
        BookingBoardView {
            bookings: filter.apply(&self.bookings).map(|booking| BookingRow {
                available_actions: booking.status.available_actions(),
                booking,
            }),
            stats: self.stats(),
            clients: self.clients(),
            upcoming: self.upcoming(),
            today: self.today.clone(),
            as_of: self.as_of,
        }
    }
}

// =========================================================================
//  CANDIDATURAS
// =========================================================================

#[derive(Debug, Clone)]
pub struct ApplicationBoard {
    applications: Vec<Application>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationRow {
    #[serde(flatten)]
    pub application: Application,
    pub available_actions: Vec<ApplicationAction>,
    pub missing_documents: usize,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationBoardView {
    pub applications: FilteredView<ApplicationRow>,
    pub stats: ApplicationStats,
}

impl ApplicationBoard {
    pub fn new(applications: Vec<Application>) -> Self {
        Self { applications }
    }

    pub async fn load(repo: &ApplicationRepository, session: &Session) -> Result<Self, AppError> {
        Ok(Self::new(repo.list(session).await?))
    }

    pub fn applications(&self) -> &[Application] {
        &self.applications
    }

    pub fn find(&self, id: i64) -> Option<&Application> {
        self.applications.iter().find(|a| a.id == id)
    }

    pub fn stats(&self) -> ApplicationStats {
        tally_applications(&self.applications)
    }

    pub fn view(&self, filter: &ApplicationFilter) -> ApplicationBoardView {
        ApplicationBoardView {
            applications: filter.apply(&self.applications).map(|application| ApplicationRow {
                available_actions: application.application_status.available_actions(),
                missing_documents: application.missing_documents().count(),
                application,
            }),
            stats: self.stats(),
        }
    }
}

// =========================================================================
//  MEMBROS
// =========================================================================

#[derive(Debug, Clone)]
pub struct MemberBoard {
    members: Vec<Member>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MemberRow {
    #[serde(flatten)]
    pub member: Member,
    pub status_editable: bool,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MemberBoardView {
    pub members: FilteredView<MemberRow>,
    pub stats: MemberStats,
}

impl MemberBoard {
    pub fn new(members: Vec<Member>) -> Self {
        Self { members }
    }

    pub async fn load(repo: &MemberRepository, session: &Session) -> Result<Self, AppError> {
        Ok(Self::new(repo.list(session).await?))
    }

    pub fn find(&self, id: i64) -> Option<&Member> {
        self.members.iter().find(|m| m.id == id)
    }

    pub fn view(&self, filter: &MemberFilter) -> MemberBoardView {
        MemberBoardView {
            members: filter.apply(&self.members).map(|member| MemberRow {
                status_editable: member.member_status.is_editable(),
                member,
            }),
            stats: tally_members(&self.members),
        }
    }
}

// =========================================================================
//  ADMINISTRADORES
// =========================================================================

#[derive(Debug, Clone)]
pub struct AdminBoard {
    admins: Vec<AdminUser>,
}

impl AdminBoard {
    pub fn new(admins: Vec<AdminUser>) -> Self {
        Self { admins }
    }

    pub async fn load(repo: &AdminRepository, session: &Session) -> Result<Self, AppError> {
        Ok(Self::new(repo.list(session).await?))
    }

    pub fn find(&self, id: i64) -> Option<&AdminUser> {
        self.admins.iter().find(|a| a.id == id)
    }

    pub fn view(&self, filter: &AdminFilter) -> FilteredView<AdminUser> {
        filter.apply(&self.admins)
    }
}
