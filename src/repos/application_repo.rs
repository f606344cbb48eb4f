// src/repos/application_repo.rs

use crate::{
    common::error::AppError,
    gateway::{endpoints, ApiGateway, Session},
    models::application::{Application, ApplicationStatus, ApplicationStatusUpdate},
};

#[derive(Clone)]
pub struct ApplicationRepository {
    gateway: ApiGateway,
}

impl ApplicationRepository {
    pub fn new(gateway: ApiGateway) -> Self {
        Self { gateway }
    }

    pub async fn list(&self, session: &Session) -> Result<Vec<Application>, AppError> {
        self.gateway.get(session, endpoints::APPLICATIONS).await
    }

    pub async fn update_status(
        &self,
        session: &Session,
        id: i64,
        status: ApplicationStatus,
        review_comment: String,
    ) -> Result<(), AppError> {
        let body = ApplicationStatusUpdate {
            status,
            review_comment,
        };
        self.gateway
            .put(session, &endpoints::application_status(id), &body)
            .await
    }

    // Exclusão definitiva. A confirmação é exigida antes, no controlador.
    pub async fn delete(&self, session: &Session, id: i64) -> Result<(), AppError> {
        self.gateway
            .delete(session, &endpoints::application(id))
            .await
    }
}
