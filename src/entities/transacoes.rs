use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "lowercase")]
pub enum TipoTransacao {
    #[sea_orm(string_value = "venda")]
    Venda,
    #[sea_orm(string_value = "locacao")]
    Locacao,
}

/// Registro imutável de venda ou locação concluída. Não existe caminho de
/// atualização; correções exigem lançamento compensatório manual.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[serde(rename_all = "camelCase")]
#[sea_orm(table_name = "transacoes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub imovel_id: i32,

    pub tipo: TipoTransacao,

    /// Valor em centavos.
    pub valor: i64,

    pub corretor_captador_id: Option<i32>,

    pub corretor_vendedor_id: i32,

    /// Lead convertido em cliente, quando houver.
    pub cliente_id: Option<i32>,

    pub data_transacao: String,

    pub observacoes: Option<String>,

    pub created_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
