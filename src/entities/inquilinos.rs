use sea_orm::entity::prelude::*;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[serde(rename_all = "camelCase")]
#[sea_orm(table_name = "inquilinos")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub nome: String,

    #[sea_orm(unique)]
    pub cpf: String,

    pub telefone: Option<String>,

    pub email: Option<String>,

    pub endereco: Option<String>,

    pub observacoes: Option<String>,

    pub created_at: String,

    pub updated_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
