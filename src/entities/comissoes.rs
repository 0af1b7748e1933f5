use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "lowercase")]
pub enum TipoComissao {
    #[sea_orm(string_value = "captacao")]
    Captacao,
    #[sea_orm(string_value = "venda")]
    Venda,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "lowercase")]
pub enum StatusComissao {
    #[sea_orm(string_value = "pendente")]
    Pendente,
    #[sea_orm(string_value = "pago")]
    Pago,
}

/// Obrigação derivada de uma transação. Imutável depois de criada, exceto a
/// transição pendente -> pago e a respectiva data.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[serde(rename_all = "camelCase")]
#[sea_orm(table_name = "comissoes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub transacao_id: i32,

    pub corretor_id: i32,

    pub tipo: TipoComissao,

    /// Percentual em pontos-base (3% = 300), congelado na criação.
    pub percentual: i32,

    /// Valor em centavos.
    pub valor: i64,

    pub status: StatusComissao,

    pub data_pagamento: Option<String>,

    pub created_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
