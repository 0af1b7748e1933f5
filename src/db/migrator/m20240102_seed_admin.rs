use crate::entities::prelude::*;
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

const ADMIN_EMAIL: &str = "admin@imobix.local";

/// Hash the bootstrap admin password with Argon2id. The password is not
/// temporary; troque-a pela rota de alteração de senha após o primeiro login.
fn hash_admin_password() -> String {
    use argon2::{
        Argon2,
        password_hash::{PasswordHasher, SaltString, rand_core::OsRng},
    };

    let password = b"trocar-esta-senha";
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password, &salt)
        .expect("Failed to hash bootstrap admin password")
        .to_string()
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let now = chrono::Utc::now().to_rfc3339();
        let senha_hash = hash_admin_password();

        let insert = sea_orm_migration::sea_query::Query::insert()
            .into_table(Corretores)
            .columns([
                crate::entities::corretores::Column::Nome,
                crate::entities::corretores::Column::Cpf,
                crate::entities::corretores::Column::Creci,
                crate::entities::corretores::Column::Email,
                crate::entities::corretores::Column::MetaVendas,
                crate::entities::corretores::Column::MetaLocacoes,
                crate::entities::corretores::Column::MetaCaptacoes,
                crate::entities::corretores::Column::Ativo,
                crate::entities::corretores::Column::SenhaHash,
                crate::entities::corretores::Column::SenhaTemporaria,
                crate::entities::corretores::Column::CreatedAt,
                crate::entities::corretores::Column::UpdatedAt,
            ])
            .values_panic([
                "Administrador".into(),
                "00000000000".into(),
                "ADMIN".into(),
                ADMIN_EMAIL.into(),
                0.into(),
                0.into(),
                0.into(),
                true.into(),
                senha_hash.into(),
                false.into(),
                now.clone().into(),
                now.into(),
            ])
            .to_owned();

        manager.exec_stmt(insert).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let delete = sea_orm_migration::sea_query::Query::delete()
            .from_table(Corretores)
            .and_where(
                Expr::col(crate::entities::corretores::Column::Email).eq(ADMIN_EMAIL),
            )
            .to_owned();

        manager.exec_stmt(delete).await?;

        Ok(())
    }
}
