// src/repos/admin_repo.rs

use crate::{
    common::error::AppError,
    gateway::{endpoints, ApiGateway, Session},
    models::admin::AdminUser,
};

#[derive(Clone)]
pub struct AdminRepository {
    gateway: ApiGateway,
}

impl AdminRepository {
    pub fn new(gateway: ApiGateway) -> Self {
        Self { gateway }
    }

    pub async fn list(&self, session: &Session) -> Result<Vec<AdminUser>, AppError> {
        self.gateway.get(session, endpoints::ADMINS).await
    }

    pub async fn delete(&self, session: &Session, id: i64) -> Result<(), AppError> {
        self.gateway.delete(session, &endpoints::admin(id)).await
    }
}
