use axum::{
    Json,
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_sessions::Session;

use super::{ApiError, ApiResponse, AppState, MessageResponse};
use crate::services::auth_service::CorretorAutenticado;

const SESSION_CORRETOR_ID: &str = "corretor_id";
const SESSION_SENHA_TEMPORARIA: &str = "senha_temporaria";

// ============================================================================
// Request/Response Types
// ============================================================================

/// Campos opcionais de propósito: ausência vira 400 com motivo, não 422.
#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub senha: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub sucesso: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corretor: Option<CorretorAutenticado>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub senha_temporaria: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub motivo: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlterarSenhaRequest {
    pub corretor_id: Option<i32>,
    pub senha_atual: Option<String>,
    pub nova_senha: Option<String>,
}

/// Como no login, `mensagem` fica no topo do corpo, fora do envelope
/// genérico de dados.
#[derive(Serialize)]
pub struct AlterarSenhaResponse {
    pub sucesso: bool,
    pub mensagem: String,
}

// ============================================================================
// Middleware
// ============================================================================

/// Session-based auth gate for the protected routes.
///
/// Enquanto a credencial da sessão for provisória, tudo além da troca de
/// senha responde 403.
pub async fn auth_middleware(
    State(_state): State<Arc<AppState>>,
    session: Session,
    request: Request,
    next: Next,
) -> Result<impl IntoResponse, ApiError> {
    let corretor_id = session
        .get::<i32>(SESSION_CORRETOR_ID)
        .await
        .map_err(|e| ApiError::internal(format!("Session error: {e}")))?;

    let Some(corretor_id) = corretor_id else {
        return Ok((
            StatusCode::UNAUTHORIZED,
            Json(ApiResponse::<()>::error("Não autenticado")),
        )
            .into_response());
    };

    let temporaria = session
        .get::<bool>(SESSION_SENHA_TEMPORARIA)
        .await
        .map_err(|e| ApiError::internal(format!("Session error: {e}")))?
        .unwrap_or(false);

    if temporaria {
        return Ok((
            StatusCode::FORBIDDEN,
            Json(ApiResponse::<()>::error("Alteração de senha obrigatória")),
        )
            .into_response());
    }

    tracing::Span::current().record("corretor_id", corretor_id);

    Ok(next.run(request).await)
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /corretor/login
pub async fn login(
    State(state): State<Arc<AppState>>,
    session: Session,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let (Some(email), Some(senha)) = (payload.email, payload.senha) else {
        return Err(ApiError::validation("Email e senha são obrigatórios"));
    };

    if email.trim().is_empty() || senha.is_empty() {
        return Err(ApiError::validation("Email e senha são obrigatórios"));
    }

    let resultado = state
        .shared
        .auth_service
        .autenticar(email.trim(), &senha)
        .await?;

    session
        .insert(SESSION_CORRETOR_ID, resultado.corretor.id)
        .await
        .map_err(|e| ApiError::internal(format!("Failed to create session: {e}")))?;
    session
        .insert(SESSION_SENHA_TEMPORARIA, resultado.senha_temporaria)
        .await
        .map_err(|e| ApiError::internal(format!("Failed to create session: {e}")))?;

    Ok(Json(LoginResponse {
        sucesso: true,
        corretor: Some(resultado.corretor),
        senha_temporaria: Some(resultado.senha_temporaria),
        motivo: None,
    }))
}

/// POST /corretor/alterar-senha
///
/// Rota pública: quem entrou com senha provisória precisa dela antes de
/// passar pelo gate de sessão.
pub async fn alterar_senha(
    State(state): State<Arc<AppState>>,
    session: Session,
    Json(payload): Json<AlterarSenhaRequest>,
) -> Result<Json<AlterarSenhaResponse>, ApiError> {
    let (Some(corretor_id), Some(senha_atual), Some(nova_senha)) =
        (payload.corretor_id, payload.senha_atual, payload.nova_senha)
    else {
        return Err(ApiError::validation(
            "corretorId, senhaAtual e novaSenha são obrigatórios",
        ));
    };

    if nova_senha.len() < 8 {
        return Err(ApiError::validation(
            "A nova senha deve ter pelo menos 8 caracteres",
        ));
    }

    state
        .shared
        .auth_service
        .alterar_senha(corretor_id, &senha_atual, &nova_senha)
        .await?;

    // Se a sessão atual é deste corretor, a credencial deixou de ser
    // provisória agora.
    if let Ok(Some(id)) = session.get::<i32>(SESSION_CORRETOR_ID).await
        && id == corretor_id
    {
        session
            .insert(SESSION_SENHA_TEMPORARIA, false)
            .await
            .map_err(|e| ApiError::internal(format!("Session error: {e}")))?;
    }

    if let Ok(Some(corretor)) = state.shared.store.get_corretor(corretor_id).await {
        state
            .shared
            .email
            .enviar_senha_alterada(&corretor.email, &corretor.nome)
            .await;
    }

    Ok(Json(AlterarSenhaResponse {
        sucesso: true,
        mensagem: "Senha alterada com sucesso".to_string(),
    }))
}

/// POST /corretor/logout
pub async fn logout(session: Session) -> impl IntoResponse {
    let _ = session.flush().await;
    (
        StatusCode::OK,
        Json(ApiResponse::success(MessageResponse {
            mensagem: "Sessão encerrada".to_string(),
        })),
    )
}
