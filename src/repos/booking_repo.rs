// src/repos/booking_repo.rs

use chrono::NaiveDate;

use crate::{
    common::error::AppError,
    gateway::{endpoints, ApiGateway, Session},
    models::booking::{Booking, BookingReschedule, BookingStatus, BookingStatusUpdate},
};

// O repositório de agendamentos: todas as chamadas às rotas de bookings
#[derive(Clone)]
pub struct BookingRepository {
    gateway: ApiGateway,
}

impl BookingRepository {
    pub fn new(gateway: ApiGateway) -> Self {
        Self { gateway }
    }

    pub async fn list(&self, session: &Session) -> Result<Vec<Booking>, AppError> {
        self.gateway.get(session, endpoints::BOOKINGS).await
    }

    // "Hoje" vem de uma rota própria, não de um filtro local
    pub async fn list_today(&self, session: &Session) -> Result<Vec<Booking>, AppError> {
        self.gateway.get(session, endpoints::BOOKINGS_TODAY).await
    }

    pub async fn update_status(
        &self,
        session: &Session,
        id: &str,
        status: BookingStatus,
        notes: Option<String>,
    ) -> Result<(), AppError> {
        let body = BookingStatusUpdate { status, notes };
        self.gateway
            .put(session, &endpoints::booking_status(id), &body)
            .await
    }

    pub async fn reschedule(
        &self,
        session: &Session,
        id: &str,
        date: NaiveDate,
        time: &str,
    ) -> Result<(), AppError> {
        let body = BookingReschedule {
            booking_date: date,
            booking_time: time.to_string(),
        };
        self.gateway.put(session, &endpoints::booking(id), &body).await
    }
}
