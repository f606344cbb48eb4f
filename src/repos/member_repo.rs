// src/repos/member_repo.rs

use crate::{
    common::error::AppError,
    gateway::{endpoints, ApiGateway, Session},
    models::member::{Member, MemberStatus, MemberStatusUpdate},
};

#[derive(Clone)]
pub struct MemberRepository {
    gateway: ApiGateway,
}

impl MemberRepository {
    pub fn new(gateway: ApiGateway) -> Self {
        Self { gateway }
    }

    pub async fn list(&self, session: &Session) -> Result<Vec<Member>, AppError> {
        self.gateway.get(session, endpoints::MEMBERS).await
    }

    pub async fn update_status(
        &self,
        session: &Session,
        id: i64,
        status: MemberStatus,
    ) -> Result<(), AppError> {
        self.gateway
            .put(session, &endpoints::member_status(id), &MemberStatusUpdate { status })
            .await
    }
}
