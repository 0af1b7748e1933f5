use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "lowercase")]
pub enum StatusImovel {
    #[sea_orm(string_value = "disponivel")]
    Disponivel,
    #[sea_orm(string_value = "vendido")]
    Vendido,
    #[sea_orm(string_value = "alugado")]
    Alugado,
    #[sea_orm(string_value = "reservado")]
    Reservado,
}

#[derive(Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "lowercase")]
pub enum Finalidade {
    #[sea_orm(string_value = "venda")]
    Venda,
    #[sea_orm(string_value = "locacao")]
    Locacao,
    #[sea_orm(string_value = "ambos")]
    Ambos,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[serde(rename_all = "camelCase")]
#[sea_orm(table_name = "imoveis")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Código interno de divulgação, único por imóvel.
    #[sea_orm(unique)]
    pub codigo: String,

    pub titulo: String,

    /// Apartamento, casa, terreno etc. Texto livre no cadastro.
    pub tipo: String,

    pub status: StatusImovel,

    pub finalidade: Finalidade,

    pub proprietario_id: i32,

    pub corretor_captador_id: Option<i32>,

    pub cep: Option<String>,

    pub endereco: Option<String>,

    pub numero: Option<String>,

    pub complemento: Option<String>,

    pub bairro: Option<String>,

    pub cidade: Option<String>,

    pub estado: Option<String>,

    pub area_util: Option<i32>,

    pub area_total: Option<i32>,

    pub quartos: Option<i32>,

    pub suites: Option<i32>,

    pub banheiros: Option<i32>,

    pub vagas: Option<i32>,

    pub andar: Option<String>,

    /// Valores em centavos.
    pub preco_venda: Option<i64>,

    pub valor_locacao: Option<i64>,

    pub valor_condominio: Option<i64>,

    pub valor_iptu: Option<i64>,

    pub descricao: Option<String>,

    pub created_at: String,

    pub updated_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
