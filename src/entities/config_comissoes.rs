use sea_orm::entity::prelude::*;
use serde::Serialize;

use super::transacoes::TipoTransacao;

/// Percentuais vigentes por tipo de transação. No máximo uma linha por tipo;
/// alterada somente por upsert, nunca removida.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[serde(rename_all = "camelCase")]
#[sea_orm(table_name = "config_comissoes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(unique)]
    pub tipo: TipoTransacao,

    /// Pontos-base (3% = 300).
    pub percentual_captacao: i32,

    pub percentual_venda: i32,

    pub updated_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
