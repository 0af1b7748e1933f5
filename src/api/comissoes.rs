use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use std::sync::Arc;

use super::{ApiError, ApiResponse, AppState, MessageResponse, validation};
use crate::entities::{comissoes, config_comissoes};
use crate::services::ConfigComissaoInput;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComissaoFilter {
    pub corretor_id: Option<i32>,
}

/// GET /comissoes
pub async fn list(
    State(state): State<Arc<AppState>>,
    Query(filter): Query<ComissaoFilter>,
) -> Result<Json<ApiResponse<Vec<comissoes::Model>>>, ApiError> {
    let rows = match filter.corretor_id {
        Some(corretor_id) => {
            state
                .shared
                .store
                .list_comissoes_por_corretor(validation::validate_id(corretor_id)?)
                .await?
        }
        None => state.shared.store.list_comissoes().await?,
    };

    Ok(Json(ApiResponse::success(rows)))
}

/// POST /comissoes/{id}/pagar
pub async fn pagar(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    let id = validation::validate_id(id)?;

    state.shared.comissao_service.marcar_paga(id).await?;

    Ok(Json(ApiResponse::success(MessageResponse {
        mensagem: "Comissão paga".to_string(),
    })))
}

/// GET /comissoes/config
pub async fn list_config(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<config_comissoes::Model>>>, ApiError> {
    let rows = state.shared.store.list_config_comissoes().await?;
    Ok(Json(ApiResponse::success(rows)))
}

/// PUT /comissoes/config
pub async fn upsert_config(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ConfigComissaoInput>,
) -> Result<Json<ApiResponse<config_comissoes::Model>>, ApiError> {
    validation::validate_percentual(payload.percentual_captacao)?;
    validation::validate_percentual(payload.percentual_venda)?;

    let model = state.shared.comissao_service.upsert_config(payload).await?;

    Ok(Json(ApiResponse::success(model)))
}
