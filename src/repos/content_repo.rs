// src/repos/content_repo.rs

use crate::{
    common::error::AppError,
    gateway::{endpoints, ApiGateway, Session},
    models::content::ContentItem,
};

#[derive(Clone)]
pub struct ContentRepository {
    gateway: ApiGateway,
}

impl ContentRepository {
    pub fn new(gateway: ApiGateway) -> Self {
        Self { gateway }
    }

    pub async fn list(&self, session: &Session) -> Result<Vec<ContentItem>, AppError> {
        self.gateway.get(session, endpoints::CONTENT).await
    }
}
