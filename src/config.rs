// src/config.rs

use std::{env, time::Duration};

use anyhow::Context;

use crate::{
    gateway::ApiGateway,
    repos::{
        AdminRepository, ApplicationRepository, BookingRepository, ContentRepository,
        MemberRepository,
    },
    services::TransitionController,
};

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[derive(Debug, Clone)]
pub struct Settings {
    pub upstream_url: String,
    pub bind_addr: String,
    // Sem valor = sem timeout (padrão do cliente)
    pub upstream_timeout: Option<Duration>,
}

impl Settings {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let upstream_url =
            env::var("UPSTREAM_API_URL").context("UPSTREAM_API_URL deve ser definida")?;
        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

        let upstream_timeout = match env::var("UPSTREAM_TIMEOUT_SECS") {
            Ok(raw) => {
                let secs: u64 = raw
                    .trim()
                    .parse()
                    .with_context(|| format!("UPSTREAM_TIMEOUT_SECS inválido: {}", raw))?;
                Some(Duration::from_secs(secs))
            }
            Err(_) => None,
        };

        Ok(Self {
            upstream_url,
            bind_addr,
            upstream_timeout,
        })
    }
}

// O estado compartilhado que será acessível em toda a aplicação
#[derive(Clone)]
pub struct AppState {
    pub booking_repo: BookingRepository,
    pub application_repo: ApplicationRepository,
    pub member_repo: MemberRepository,
    pub content_repo: ContentRepository,
    pub admin_repo: AdminRepository,
    pub transitions: TransitionController,
}

impl AppState {
    pub fn new(settings: &Settings) -> anyhow::Result<Self> {
        let gateway = ApiGateway::new(&settings.upstream_url, settings.upstream_timeout)
            .map_err(|e| anyhow::anyhow!("{}", e))?;

        tracing::info!("✅ Gateway configurado para {}", gateway.base_url());

        Ok(Self::from_gateway(gateway))
    }

    // --- Monta o gráfico de dependências ---
    pub fn from_gateway(gateway: ApiGateway) -> Self {
        let booking_repo = BookingRepository::new(gateway.clone());
        let application_repo = ApplicationRepository::new(gateway.clone());
        let member_repo = MemberRepository::new(gateway.clone());
        let content_repo = ContentRepository::new(gateway.clone());
        let admin_repo = AdminRepository::new(gateway);

        let transitions = TransitionController::new(
            booking_repo.clone(),
            application_repo.clone(),
            member_repo.clone(),
            admin_repo.clone(),
        );

        Self {
            booking_repo,
            application_repo,
            member_repo,
            content_repo,
            admin_repo,
            transitions,
        }
    }
}
