use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::{Instrument, info, info_span};
use uuid::Uuid;

use crate::api::AppState;

/// GET /metrics — exposição Prometheus em texto plano.
pub async fn get_metrics(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let Some(handle) = state.prometheus_handle.as_ref() else {
        return "Metrics not enabled or failed to initialize".to_string();
    };

    metrics::gauge!("imobix_uptime_seconds").set(state.start_time.elapsed().as_secs_f64());

    handle.render()
}

fn class_de_status(status: u16) -> &'static str {
    match status {
        500.. => "error",
        400..=499 => "client_error",
        _ => "success",
    }
}

pub async fn logging_middleware(req: Request, next: Next) -> Response {
    let inicio = Instant::now();

    let method = req.method().to_string();
    let path = req.uri().path().to_string();
    let rota = req
        .extensions()
        .get::<MatchedPath>()
        .map(|mp| mp.as_str().to_string());

    let span = info_span!(
        "request",
        request_id = %Uuid::new_v4(),
        method = %method,
        path = %path,
        rota = rota.clone(),
        corretor_id = tracing::field::Empty,
    );

    async move {
        let response = next.run(req).await;

        let status = response.status().as_u16();
        let duracao = inicio.elapsed();

        // A rota casada mantém a cardinalidade das métricas sob controle;
        // o path cru só entra quando nada casou (404).
        let labels = [
            ("method", method),
            ("path", rota.unwrap_or(path)),
            ("status", status.to_string()),
        ];
        metrics::counter!("http_requests_total", &labels).increment(1);
        metrics::histogram!("http_request_duration_seconds", &labels)
            .record(duracao.as_secs_f64());

        info!(
            event = "http_request_finished",
            status_code = status,
            duration_ms = u64::try_from(duracao.as_millis()).unwrap_or(u64::MAX),
            outcome = class_de_status(status),
            "Request finished"
        );

        response
    }
    .instrument(span)
    .await
}
