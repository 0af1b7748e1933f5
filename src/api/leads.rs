use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use std::sync::Arc;

use super::{ApiError, ApiResponse, AppState, MessageResponse, validation};
use crate::db::repositories::lead::{AtualizaLead, NovoLead};
use crate::entities::leads;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadFilter {
    pub corretor_id: Option<i32>,
}

/// GET /leads
pub async fn list(
    State(state): State<Arc<AppState>>,
    Query(filter): Query<LeadFilter>,
) -> Result<Json<ApiResponse<Vec<leads::Model>>>, ApiError> {
    let rows = match filter.corretor_id {
        Some(corretor_id) => {
            state
                .shared
                .store
                .list_leads_por_corretor(validation::validate_id(corretor_id)?)
                .await?
        }
        None => state.shared.store.list_leads().await?,
    };

    Ok(Json(ApiResponse::success(rows)))
}

/// GET /leads/{id}
pub async fn get(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<leads::Model>>, ApiError> {
    let id = validation::validate_id(id)?;

    let row = state
        .shared
        .store
        .get_lead(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Lead", id))?;

    Ok(Json(ApiResponse::success(row)))
}

/// POST /leads
pub async fn create(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NovoLead>,
) -> Result<Json<ApiResponse<leads::Model>>, ApiError> {
    if payload.nome.trim().is_empty() {
        return Err(ApiError::validation("Nome é obrigatório"));
    }

    let row = state.shared.store.create_lead(payload).await?;
    Ok(Json(ApiResponse::success(row)))
}

/// PUT /leads/{id}
pub async fn update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Json(payload): Json<AtualizaLead>,
) -> Result<Json<ApiResponse<leads::Model>>, ApiError> {
    let id = validation::validate_id(id)?;

    let row = state
        .shared
        .store
        .update_lead(id, payload)
        .await?
        .ok_or_else(|| ApiError::not_found("Lead", id))?;

    Ok(Json(ApiResponse::success(row)))
}

/// DELETE /leads/{id}
pub async fn remove(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    let id = validation::validate_id(id)?;

    let removido = state.shared.store.delete_lead(id).await?;
    if !removido {
        return Err(ApiError::not_found("Lead", id));
    }

    Ok(Json(ApiResponse::success(MessageResponse {
        mensagem: "Lead removido".to_string(),
    })))
}
