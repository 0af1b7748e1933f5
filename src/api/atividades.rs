use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use std::sync::Arc;

use super::{ApiError, ApiResponse, AppState, MessageResponse, validation};
use crate::db::repositories::atividade::{AtualizaAtividade, NovaAtividade};
use crate::entities::atividades;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtividadeFilter {
    pub corretor_id: Option<i32>,
}

/// GET /atividades
pub async fn list(
    State(state): State<Arc<AppState>>,
    Query(filter): Query<AtividadeFilter>,
) -> Result<Json<ApiResponse<Vec<atividades::Model>>>, ApiError> {
    let rows = match filter.corretor_id {
        Some(corretor_id) => {
            state
                .shared
                .store
                .list_atividades_por_corretor(validation::validate_id(corretor_id)?)
                .await?
        }
        None => state.shared.store.list_atividades().await?,
    };

    Ok(Json(ApiResponse::success(rows)))
}

/// POST /atividades
pub async fn create(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NovaAtividade>,
) -> Result<Json<ApiResponse<atividades::Model>>, ApiError> {
    validation::validate_id(payload.corretor_id)?;

    if payload.titulo.trim().is_empty() {
        return Err(ApiError::validation("Título é obrigatório"));
    }

    let row = state.shared.store.create_atividade(payload).await?;
    Ok(Json(ApiResponse::success(row)))
}

/// PUT /atividades/{id}
pub async fn update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Json(payload): Json<AtualizaAtividade>,
) -> Result<Json<ApiResponse<atividades::Model>>, ApiError> {
    let id = validation::validate_id(id)?;

    if let Some(titulo) = &payload.titulo
        && titulo.trim().is_empty()
    {
        return Err(ApiError::validation("Título é obrigatório"));
    }

    let atualizado = state
        .shared
        .store
        .update_atividade(id, payload)
        .await?
        .ok_or_else(|| ApiError::not_found("Atividade", id))?;

    Ok(Json(ApiResponse::success(atualizado)))
}

/// DELETE /atividades/{id}
pub async fn remove(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    let id = validation::validate_id(id)?;

    let removido = state.shared.store.delete_atividade(id).await?;
    if !removido {
        return Err(ApiError::not_found("Atividade", id));
    }

    Ok(Json(ApiResponse::success(MessageResponse {
        mensagem: "Atividade removida".to_string(),
    })))
}
