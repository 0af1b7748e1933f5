use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "lowercase")]
pub enum TipoAtividade {
    #[sea_orm(string_value = "ligacao")]
    Ligacao,
    #[sea_orm(string_value = "visita")]
    Visita,
    #[sea_orm(string_value = "reuniao")]
    Reuniao,
    #[sea_orm(string_value = "outro")]
    Outro,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[serde(rename_all = "camelCase")]
#[sea_orm(table_name = "atividades")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub corretor_id: i32,

    pub tipo: TipoAtividade,

    pub lead_id: Option<i32>,

    pub imovel_id: Option<i32>,

    pub titulo: String,

    pub descricao: Option<String>,

    pub data_hora: String,

    /// Duração em minutos.
    pub duracao: Option<i32>,

    pub resultado: Option<String>,

    pub created_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
