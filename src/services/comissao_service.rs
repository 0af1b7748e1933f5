//! Domain service for transaction registration and commission computation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::db::ComissaoCalculada;
use crate::entities::comissoes::TipoComissao;
use crate::entities::config_comissoes;
use crate::entities::transacoes::{self, TipoTransacao};

/// Errors specific to commission operations.
#[derive(Debug, Error)]
pub enum ComissaoError {
    /// No rate configuration exists for the transaction type; registration
    /// refuses to guess a rate.
    #[error("Configuração de comissão ausente")]
    ConfiguracaoAusente,

    #[error("Comissão não encontrada")]
    NaoEncontrada,

    /// pendente -> pago is one-way; paying twice is rejected.
    #[error("Comissão já paga")]
    JaPaga,

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Banco de dados não disponível")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<sea_orm::DbErr> for ComissaoError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Database(err.to_string())
    }
}

impl From<anyhow::Error> for ComissaoError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

/// Request to register a concluded sale or lease.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistroTransacao {
    pub imovel_id: i32,
    pub tipo: TipoTransacao,
    /// Valor em centavos.
    pub valor: i64,
    #[serde(default)]
    pub corretor_captador_id: Option<i32>,
    pub corretor_vendedor_id: i32,
    #[serde(default)]
    pub cliente_id: Option<i32>,
    pub data_transacao: String,
    #[serde(default)]
    pub observacoes: Option<String>,
}

/// Rate configuration payload, percentuais em pontos-base.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigComissaoInput {
    pub tipo: TipoTransacao,
    pub percentual_captacao: i32,
    pub percentual_venda: i32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransacaoRegistrada {
    pub transacao: transacoes::Model,
    pub comissoes_geradas: usize,
}

/// Domain service trait for transactions and commissions.
#[async_trait::async_trait]
pub trait ComissaoService: Send + Sync {
    /// Registers the transaction and its derived commissions atomically;
    /// either everything lands or nothing does.
    ///
    /// # Errors
    ///
    /// Returns [`ComissaoError::ConfiguracaoAusente`] when no rate row exists
    /// for the transaction type.
    async fn registrar_transacao(
        &self,
        registro: RegistroTransacao,
    ) -> Result<TransacaoRegistrada, ComissaoError>;

    /// Marks a pending commission as paid.
    ///
    /// # Errors
    ///
    /// Returns [`ComissaoError::JaPaga`] if it was already paid, including
    /// when two calls race.
    async fn marcar_paga(&self, comissao_id: i32) -> Result<(), ComissaoError>;

    /// Creates or replaces the rate row for a transaction type.
    async fn upsert_config(
        &self,
        input: ConfigComissaoInput,
    ) -> Result<config_comissoes::Model, ComissaoError>;
}

/// Arredondamento half-up sobre centavos: `valor * taxa / 10000`, com taxa em
/// pontos-base.
#[must_use]
pub const fn aplicar_percentual(valor: i64, pontos_base: i32) -> i64 {
    (valor * pontos_base as i64 + 5_000) / 10_000
}

/// Calcula as comissões de uma transação a partir da configuração vigente.
///
/// Sempre gera a comissão do vendedor; a de captação só existe quando a
/// transação tem corretor captador. Os percentuais aplicados ficam
/// congelados em cada registro.
#[must_use]
pub fn computar_comissoes(
    valor: i64,
    corretor_captador_id: Option<i32>,
    corretor_vendedor_id: i32,
    config: &config_comissoes::Model,
) -> Vec<ComissaoCalculada> {
    let mut comissoes = Vec::with_capacity(2);

    if let Some(captador_id) = corretor_captador_id {
        comissoes.push(ComissaoCalculada {
            corretor_id: captador_id,
            tipo: TipoComissao::Captacao,
            percentual: config.percentual_captacao,
            valor: aplicar_percentual(valor, config.percentual_captacao),
        });
    }

    comissoes.push(ComissaoCalculada {
        corretor_id: corretor_vendedor_id,
        tipo: TipoComissao::Venda,
        percentual: config.percentual_venda,
        valor: aplicar_percentual(valor, config.percentual_venda),
    });

    comissoes
}
