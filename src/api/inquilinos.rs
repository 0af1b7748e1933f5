use axum::{
    Json,
    extract::{Path, State},
};
use std::sync::Arc;

use super::{ApiError, ApiResponse, AppState, MessageResponse, validation};
use crate::db::repositories::inquilino::{AtualizaInquilino, NovoInquilino};
use crate::entities::inquilinos;

/// GET /inquilinos
pub async fn list(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<inquilinos::Model>>>, ApiError> {
    let rows = state.shared.store.list_inquilinos().await?;
    Ok(Json(ApiResponse::success(rows)))
}

/// GET /inquilinos/{id}
pub async fn get(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<inquilinos::Model>>, ApiError> {
    let id = validation::validate_id(id)?;

    let row = state
        .shared
        .store
        .get_inquilino(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Inquilino", id))?;

    Ok(Json(ApiResponse::success(row)))
}

/// POST /inquilinos
pub async fn create(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NovoInquilino>,
) -> Result<Json<ApiResponse<inquilinos::Model>>, ApiError> {
    if payload.nome.trim().is_empty() {
        return Err(ApiError::validation("Nome é obrigatório"));
    }
    if payload.cpf.trim().is_empty() {
        return Err(ApiError::validation("CPF é obrigatório"));
    }

    let row = state.shared.store.create_inquilino(payload).await?;
    Ok(Json(ApiResponse::success(row)))
}

/// PUT /inquilinos/{id}
pub async fn update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Json(payload): Json<AtualizaInquilino>,
) -> Result<Json<ApiResponse<inquilinos::Model>>, ApiError> {
    let id = validation::validate_id(id)?;

    let row = state
        .shared
        .store
        .update_inquilino(id, payload)
        .await?
        .ok_or_else(|| ApiError::not_found("Inquilino", id))?;

    Ok(Json(ApiResponse::success(row)))
}

/// DELETE /inquilinos/{id}
pub async fn remove(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    let id = validation::validate_id(id)?;

    let removido = state.shared.store.delete_inquilino(id).await?;
    if !removido {
        return Err(ApiError::not_found("Inquilino", id));
    }

    Ok(Json(ApiResponse::success(MessageResponse {
        mensagem: "Inquilino removido".to_string(),
    })))
}
