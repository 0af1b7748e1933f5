use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;
use std::sync::Arc;

use super::{ApiError, ApiResponse, AppState, MessageResponse, validation};
use crate::db::repositories::corretor::hash_senha_blocking;
use crate::db::{AtualizaCorretor, Corretor, NovoCorretor};
use crate::services::auth_service::AuthError;

/// GET /corretores
pub async fn list(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<Corretor>>>, ApiError> {
    let corretores = state.shared.store.list_corretores().await?;
    Ok(Json(ApiResponse::success(corretores)))
}

/// GET /corretores/{id}
pub async fn get(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<Corretor>>, ApiError> {
    let id = validation::validate_id(id)?;

    let corretor = state
        .shared
        .store
        .get_corretor(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Corretor", id))?;

    Ok(Json(ApiResponse::success(corretor)))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CorretorCriado {
    pub corretor: Corretor,
    /// Senha provisória em claro, devolvida uma única vez.
    pub senha_temporaria: String,
}

/// POST /corretores
///
/// Todo corretor novo nasce com credencial provisória. A senha em claro sai
/// apenas nesta resposta; o banco guarda só o hash.
pub async fn create(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NovoCorretor>,
) -> Result<Json<ApiResponse<CorretorCriado>>, ApiError> {
    validation::validate_email(&payload.email)?;

    if payload.nome.trim().is_empty() {
        return Err(ApiError::validation("Nome é obrigatório"));
    }
    if payload.creci.trim().is_empty() {
        return Err(ApiError::validation("CRECI é obrigatório"));
    }

    let senha = crate::db::repositories::corretor::gerar_senha_temporaria();
    let security = state.shared.config.read().await.security.clone();
    let hash = hash_senha_blocking(senha.clone(), security).await?;

    let corretor = state.shared.store.create_corretor(payload, hash).await?;

    state
        .shared
        .email
        .enviar_credencial_emitida(&corretor.email, &corretor.nome, &senha)
        .await;

    Ok(Json(ApiResponse::success(CorretorCriado {
        corretor,
        senha_temporaria: senha,
    })))
}

/// PUT /corretores/{id}
pub async fn update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Json(payload): Json<AtualizaCorretor>,
) -> Result<Json<ApiResponse<Corretor>>, ApiError> {
    let id = validation::validate_id(id)?;

    if let Some(email) = &payload.email {
        validation::validate_email(email)?;
    }

    let atualizado = state.shared.store.update_corretor(id, payload).await?;
    if !atualizado {
        return Err(ApiError::not_found("Corretor", id));
    }

    let corretor = state
        .shared
        .store
        .get_corretor(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Corretor", id))?;

    Ok(Json(ApiResponse::success(corretor)))
}

/// DELETE /corretores/{id}
pub async fn remove(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    let id = validation::validate_id(id)?;

    let removido = state.shared.store.delete_corretor(id).await?;
    if !removido {
        return Err(ApiError::not_found("Corretor", id));
    }

    Ok(Json(ApiResponse::success(MessageResponse {
        mensagem: "Corretor removido".to_string(),
    })))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SenhaResetada {
    pub senha_temporaria: String,
}

/// POST /corretores/{id}/resetar-senha
///
/// Emite uma credencial provisória nova, devolve o plaintext uma única vez
/// e o entrega por e-mail quando o envio está habilitado.
pub async fn resetar_senha(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<SenhaResetada>>, ApiError> {
    let id = validation::validate_id(id)?;

    let senha = state
        .shared
        .auth_service
        .resetar_senha(id)
        .await
        .map_err(|e| match e {
            AuthError::CorretorNaoEncontrado => ApiError::not_found("Corretor", id),
            other => other.into(),
        })?;

    if let Ok(Some(corretor)) = state.shared.store.get_corretor(id).await {
        state
            .shared
            .email
            .enviar_credencial_emitida(&corretor.email, &corretor.nome, &senha)
            .await;
    }

    Ok(Json(ApiResponse::success(SenhaResetada {
        senha_temporaria: senha,
    })))
}
