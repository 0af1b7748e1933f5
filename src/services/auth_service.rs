//! Domain service for broker authentication and credential lifecycle.
//!
//! Handles login, password changes and administrative credential resets.

use serde::Serialize;
use thiserror::Error;

/// Mensagem única para qualquer falha de login. Email inexistente, corretor
/// inativo, credencial não emitida e senha errada respondem igual, para não
/// permitir enumeração de contas.
pub const MSG_CREDENCIAIS_INVALIDAS: &str = "Email ou senha incorretos";

/// Errors specific to authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Covers every login failure cause with one uniform message.
    #[error("{}", MSG_CREDENCIAIS_INVALIDAS)]
    CredenciaisInvalidas,

    #[error("Corretor não encontrado")]
    CorretorNaoEncontrado,

    #[error("Senha atual incorreta")]
    SenhaAtualIncorreta,

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Banco de dados não disponível")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<sea_orm::DbErr> for AuthError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Database(err.to_string())
    }
}

impl From<anyhow::Error> for AuthError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

/// Broker identity returned on successful login. Never carries the hash.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CorretorAutenticado {
    pub id: i32,
    pub nome: String,
    pub email: String,
    pub creci: String,
}

/// Login outcome: who logged in and whether the credential is provisional.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultadoLogin {
    pub corretor: CorretorAutenticado,
    pub senha_temporaria: bool,
}

/// Domain service trait for broker authentication.
#[async_trait::async_trait]
pub trait AuthService: Send + Sync {
    /// Verifies credentials and returns the broker identity.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::CredenciaisInvalidas`] for every failure cause,
    /// always with the same message.
    async fn autenticar(&self, email: &str, senha: &str) -> Result<ResultadoLogin, AuthError>;

    /// Changes a broker's password.
    ///
    /// While the stored credential is provisional the current password is
    /// not checked; the new one is always validated.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Validation`] if the new password is too short and
    /// [`AuthError::SenhaAtualIncorreta`] if the current one does not match.
    async fn alterar_senha(
        &self,
        corretor_id: i32,
        senha_atual: &str,
        nova_senha: &str,
    ) -> Result<(), AuthError>;

    /// Issues a fresh provisional credential for a broker and returns it in
    /// plaintext, exactly once. Callers deliver it out of band; it is never
    /// persisted or logged.
    async fn resetar_senha(&self, corretor_id: i32) -> Result<String, AuthError>;
}
