use axum::{
    Router,
    http::HeaderValue,
    middleware,
    routing::{delete, get, post, put},
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer};

use crate::config::Config;
use crate::db::Store;
use crate::state::SharedState;

mod atividades;
pub mod auth;
mod comissoes;
mod corretores;
mod dashboard;
mod error;
mod imoveis;
mod inquilinos;
mod leads;
mod observability;
mod proprietarios;
mod transacoes;
mod types;
mod validation;

pub use error::ApiError;
pub use types::*;

use tokio::sync::RwLock;

use metrics_exporter_prometheus::PrometheusHandle;

#[derive(Clone)]
pub struct AppState {
    pub shared: Arc<SharedState>,

    pub start_time: std::time::Instant,

    pub prometheus_handle: Option<PrometheusHandle>,
}

impl AppState {
    #[must_use]
    pub fn config(&self) -> &Arc<RwLock<Config>> {
        &self.shared.config
    }

    #[must_use]
    pub fn store(&self) -> &Store {
        &self.shared.store
    }
}

pub fn create_app_state(
    shared: Arc<SharedState>,
    prometheus_handle: Option<PrometheusHandle>,
) -> Arc<AppState> {
    Arc::new(AppState {
        shared,
        start_time: std::time::Instant::now(),
        prometheus_handle,
    })
}

pub async fn create_app_state_from_config(
    config: Config,
    prometheus_handle: Option<PrometheusHandle>,
) -> anyhow::Result<Arc<AppState>> {
    let shared = Arc::new(SharedState::new(config).await?);
    Ok(create_app_state(shared, prometheus_handle))
}

pub async fn router(state: Arc<AppState>) -> Router {
    let (cors_origins, session_minutes) = {
        let config = state.config().read().await;
        (
            config.server.cors_allowed_origins.clone(),
            config.server.session_minutes,
        )
    };

    let protected_routes = create_protected_router(state.clone());

    let session_store = MemoryStore::default();
    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(false)
        .with_same_site(tower_sessions::cookie::SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(time::Duration::minutes(
            session_minutes,
        )));

    // Login, troca de senha e logout ficam fora do gate de sessão; a troca
    // precisa funcionar para quem ainda está com credencial provisória.
    let api_router = Router::new()
        .merge(protected_routes)
        .route("/corretor/login", post(auth::login))
        .route("/corretor/alterar-senha", post(auth::alterar_senha))
        .route("/corretor/logout", post(auth::logout))
        .layer(session_layer)
        .with_state(state.clone());

    let cors_layer = if cors_origins.contains(&"*".to_string()) {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> =
            cors_origins.iter().filter_map(|s| s.parse().ok()).collect();
        CorsLayer::new().allow_origin(origins)
    };

    Router::new()
        .nest("/api", api_router)
        .layer(cors_layer.allow_methods(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(observability::logging_middleware))
}

fn create_protected_router(state: Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .route("/corretores", get(corretores::list))
        .route("/corretores", post(corretores::create))
        .route("/corretores/{id}", get(corretores::get))
        .route("/corretores/{id}", put(corretores::update))
        .route("/corretores/{id}", delete(corretores::remove))
        .route(
            "/corretores/{id}/resetar-senha",
            post(corretores::resetar_senha),
        )
        .route("/proprietarios", get(proprietarios::list))
        .route("/proprietarios", post(proprietarios::create))
        .route("/proprietarios/{id}", get(proprietarios::get))
        .route("/proprietarios/{id}", put(proprietarios::update))
        .route("/proprietarios/{id}", delete(proprietarios::remove))
        .route("/inquilinos", get(inquilinos::list))
        .route("/inquilinos", post(inquilinos::create))
        .route("/inquilinos/{id}", get(inquilinos::get))
        .route("/inquilinos/{id}", put(inquilinos::update))
        .route("/inquilinos/{id}", delete(inquilinos::remove))
        .route("/leads", get(leads::list))
        .route("/leads", post(leads::create))
        .route("/leads/{id}", get(leads::get))
        .route("/leads/{id}", put(leads::update))
        .route("/leads/{id}", delete(leads::remove))
        .route("/imoveis", get(imoveis::list))
        .route("/imoveis", post(imoveis::create))
        .route("/imoveis/{id}", get(imoveis::get))
        .route("/imoveis/{id}", put(imoveis::update))
        .route("/imoveis/{id}", delete(imoveis::remove))
        .route("/transacoes", get(transacoes::list))
        .route("/transacoes", post(transacoes::create))
        .route("/transacoes/{id}", get(transacoes::get))
        .route("/comissoes", get(comissoes::list))
        .route("/comissoes/{id}/pagar", post(comissoes::pagar))
        .route("/comissoes/config", get(comissoes::list_config))
        .route("/comissoes/config", put(comissoes::upsert_config))
        .route("/atividades", get(atividades::list))
        .route("/atividades", post(atividades::create))
        .route("/atividades/{id}", put(atividades::update))
        .route("/atividades/{id}", delete(atividades::remove))
        .route("/dashboard/resumo", get(dashboard::resumo))
        .route("/metrics", get(observability::get_metrics))
        .route_layer(middleware::from_fn_with_state(state, auth::auth_middleware))
}
