use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use std::sync::Arc;

use super::{ApiError, ApiResponse, AppState, MessageResponse, validation};
use crate::db::repositories::imovel::{AtualizaImovel, NovoImovel};
use crate::entities::imoveis::{self, StatusImovel};

#[derive(Deserialize)]
pub struct ImovelFilter {
    pub status: Option<StatusImovel>,
}

/// GET /imoveis
pub async fn list(
    State(state): State<Arc<AppState>>,
    Query(filter): Query<ImovelFilter>,
) -> Result<Json<ApiResponse<Vec<imoveis::Model>>>, ApiError> {
    let rows = match filter.status {
        Some(status) => state.shared.store.list_imoveis_por_status(status).await?,
        None => state.shared.store.list_imoveis().await?,
    };

    Ok(Json(ApiResponse::success(rows)))
}

/// GET /imoveis/{id}
pub async fn get(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<imoveis::Model>>, ApiError> {
    let id = validation::validate_id(id)?;

    let row = state
        .shared
        .store
        .get_imovel(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Imóvel", id))?;

    Ok(Json(ApiResponse::success(row)))
}

/// POST /imoveis
pub async fn create(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NovoImovel>,
) -> Result<Json<ApiResponse<imoveis::Model>>, ApiError> {
    if payload.codigo.trim().is_empty() {
        return Err(ApiError::validation("Código é obrigatório"));
    }
    if payload.titulo.trim().is_empty() {
        return Err(ApiError::validation("Título é obrigatório"));
    }
    validation::validate_id(payload.proprietario_id)?;

    let row = state.shared.store.create_imovel(payload).await?;
    Ok(Json(ApiResponse::success(row)))
}

/// PUT /imoveis/{id}
pub async fn update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Json(payload): Json<AtualizaImovel>,
) -> Result<Json<ApiResponse<imoveis::Model>>, ApiError> {
    let id = validation::validate_id(id)?;

    let row = state
        .shared
        .store
        .update_imovel(id, payload)
        .await?
        .ok_or_else(|| ApiError::not_found("Imóvel", id))?;

    Ok(Json(ApiResponse::success(row)))
}

/// DELETE /imoveis/{id}
pub async fn remove(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    let id = validation::validate_id(id)?;

    let removido = state.shared.store.delete_imovel(id).await?;
    if !removido {
        return Err(ApiError::not_found("Imóvel", id));
    }

    Ok(Json(ApiResponse::success(MessageResponse {
        mensagem: "Imóvel removido".to_string(),
    })))
}
