use axum::{
    Json,
    extract::{Path, State},
};
use std::sync::Arc;

use super::{ApiError, ApiResponse, AppState, MessageResponse, validation};
use crate::db::repositories::proprietario::{AtualizaProprietario, NovoProprietario};
use crate::entities::proprietarios;

/// GET /proprietarios
pub async fn list(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<proprietarios::Model>>>, ApiError> {
    let rows = state.shared.store.list_proprietarios().await?;
    Ok(Json(ApiResponse::success(rows)))
}

/// GET /proprietarios/{id}
pub async fn get(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<proprietarios::Model>>, ApiError> {
    let id = validation::validate_id(id)?;

    let row = state
        .shared
        .store
        .get_proprietario(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Proprietário", id))?;

    Ok(Json(ApiResponse::success(row)))
}

/// POST /proprietarios
pub async fn create(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NovoProprietario>,
) -> Result<Json<ApiResponse<proprietarios::Model>>, ApiError> {
    if payload.nome.trim().is_empty() {
        return Err(ApiError::validation("Nome é obrigatório"));
    }
    if payload.cpf_cnpj.trim().is_empty() {
        return Err(ApiError::validation("CPF/CNPJ é obrigatório"));
    }

    let row = state.shared.store.create_proprietario(payload).await?;
    Ok(Json(ApiResponse::success(row)))
}

/// PUT /proprietarios/{id}
pub async fn update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Json(payload): Json<AtualizaProprietario>,
) -> Result<Json<ApiResponse<proprietarios::Model>>, ApiError> {
    let id = validation::validate_id(id)?;

    let row = state
        .shared
        .store
        .update_proprietario(id, payload)
        .await?
        .ok_or_else(|| ApiError::not_found("Proprietário", id))?;

    Ok(Json(ApiResponse::success(row)))
}

/// DELETE /proprietarios/{id}
pub async fn remove(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    let id = validation::validate_id(id)?;

    let removido = state.shared.store.delete_proprietario(id).await?;
    if !removido {
        return Err(ApiError::not_found("Proprietário", id));
    }

    Ok(Json(ApiResponse::success(MessageResponse {
        mensagem: "Proprietário removido".to_string(),
    })))
}
