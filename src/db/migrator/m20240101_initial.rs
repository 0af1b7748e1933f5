use crate::entities::prelude::*;
use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::Schema;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let backend = manager.get_database_backend();
        let schema = Schema::new(backend);

        manager
            .create_table(
                schema
                    .create_table_from_entity(Corretores)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                schema
                    .create_table_from_entity(Proprietarios)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                schema
                    .create_table_from_entity(Inquilinos)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                schema
                    .create_table_from_entity(Leads)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                schema
                    .create_table_from_entity(Imoveis)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                schema
                    .create_table_from_entity(Transacoes)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                schema
                    .create_table_from_entity(Comissoes)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                schema
                    .create_table_from_entity(ConfigComissoes)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                schema
                    .create_table_from_entity(Atividades)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Atividades).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ConfigComissoes).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Comissoes).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Transacoes).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Imoveis).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Leads).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Inquilinos).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Proprietarios).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Corretores).to_owned())
            .await?;

        Ok(())
    }
}
