use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "lowercase")]
pub enum StatusLead {
    #[sea_orm(string_value = "novo")]
    Novo,
    #[sea_orm(string_value = "contatado")]
    Contatado,
    #[sea_orm(string_value = "qualificado")]
    Qualificado,
    #[sea_orm(string_value = "negociacao")]
    Negociacao,
    #[sea_orm(string_value = "convertido")]
    Convertido,
    #[sea_orm(string_value = "perdido")]
    Perdido,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[serde(rename_all = "camelCase")]
#[sea_orm(table_name = "leads")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub nome: String,

    pub telefone: Option<String>,

    pub email: Option<String>,

    /// Canal de origem: site, portal, indicação etc.
    pub origem: Option<String>,

    pub status: StatusLead,

    pub corretor_id: Option<i32>,

    pub observacoes: Option<String>,

    pub created_at: String,

    pub updated_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
