use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "corretores")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub nome: String,

    #[sea_orm(unique)]
    pub cpf: String,

    /// Registro profissional no conselho regional (CRECI).
    pub creci: String,

    pub telefone: Option<String>,

    #[sea_orm(unique)]
    pub email: String,

    pub equipe: Option<String>,

    pub gerente_id: Option<i32>,

    pub meta_vendas: i32,

    pub meta_locacoes: i32,

    pub meta_captacoes: i32,

    pub ativo: bool,

    /// Argon2id hash. Ausente enquanto o administrador não emitir credenciais.
    pub senha_hash: Option<String>,

    /// Senha provisória emitida pelo administrador; obriga troca no primeiro login.
    pub senha_temporaria: bool,

    pub ultimo_acesso: Option<String>,

    pub created_at: String,

    pub updated_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
