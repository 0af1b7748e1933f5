use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use std::sync::Arc;

use super::{ApiError, ApiResponse, AppState, validation};
use crate::entities::transacoes;
use crate::services::{RegistroTransacao, TransacaoRegistrada};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransacaoFilter {
    pub corretor_id: Option<i32>,
}

/// GET /transacoes
pub async fn list(
    State(state): State<Arc<AppState>>,
    Query(filter): Query<TransacaoFilter>,
) -> Result<Json<ApiResponse<Vec<transacoes::Model>>>, ApiError> {
    let rows = match filter.corretor_id {
        Some(corretor_id) => {
            state
                .shared
                .store
                .list_transacoes_por_corretor(validation::validate_id(corretor_id)?)
                .await?
        }
        None => state.shared.store.list_transacoes().await?,
    };

    Ok(Json(ApiResponse::success(rows)))
}

/// GET /transacoes/{id}
pub async fn get(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<transacoes::Model>>, ApiError> {
    let id = validation::validate_id(id)?;

    let row = state
        .shared
        .store
        .get_transacao(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Transação", id))?;

    Ok(Json(ApiResponse::success(row)))
}

/// POST /transacoes
///
/// Registra a transação e gera as comissões derivadas de uma vez só. Não
/// existe PUT nem DELETE: o registro financeiro é imutável.
pub async fn create(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<RegistroTransacao>,
) -> Result<Json<ApiResponse<TransacaoRegistrada>>, ApiError> {
    validation::validate_id(payload.imovel_id)?;
    validation::validate_id(payload.corretor_vendedor_id)?;
    validation::validate_valor(payload.valor)?;

    let registrada = state
        .shared
        .comissao_service
        .registrar_transacao(payload)
        .await?;

    Ok(Json(ApiResponse::success(registrada)))
}
