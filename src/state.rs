use std::sync::Arc;
use tokio::sync::RwLock;

use crate::config::Config;
use crate::db::Store;
use crate::services::{
    AuthService, ComissaoService, EmailService, SeaOrmAuthService, SeaOrmComissaoService,
};

/// Shared application state. Every dependency is injected here once, at
/// startup; handlers never reach for globals.
#[derive(Clone)]
pub struct SharedState {
    pub config: Arc<RwLock<Config>>,

    pub store: Store,

    pub auth_service: Arc<dyn AuthService>,

    pub comissao_service: Arc<dyn ComissaoService>,

    pub email: Arc<EmailService>,
}

impl SharedState {
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let store = Store::with_pool_options(
            &config.general.database_path,
            config.general.max_db_connections,
            config.general.min_db_connections,
        )
        .await?;

        Self::with_store(config, store)
    }

    /// Builds state over an existing store; tests use this with an in-memory
    /// database.
    pub fn with_store(config: Config, store: Store) -> anyhow::Result<Self> {
        let auth_service: Arc<dyn AuthService> = Arc::new(SeaOrmAuthService::new(
            store.clone(),
            config.security.clone(),
        ));

        let comissao_service: Arc<dyn ComissaoService> =
            Arc::new(SeaOrmComissaoService::new(store.clone()));

        let email = Arc::new(EmailService::new(config.email.clone()));

        Ok(Self {
            config: Arc::new(RwLock::new(config)),
            store,
            auth_service,
            comissao_service,
            email,
        })
    }
}
