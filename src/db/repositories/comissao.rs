use anyhow::{Context, Result};
use sea_orm::sea_query::{Expr, OnConflict};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, Set,
};

use crate::entities::comissoes::{self, StatusComissao, TipoComissao};
use crate::entities::config_comissoes;
use crate::entities::transacoes::TipoTransacao;

/// Comissão calculada, pronta para persistência.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComissaoCalculada {
    pub corretor_id: i32,
    pub tipo: TipoComissao,
    /// Pontos-base aplicados.
    pub percentual: i32,
    /// Valor em centavos.
    pub valor: i64,
}

/// Insere as comissões de uma transação; roda dentro da mesma transação de
/// banco que insere a própria transação.
pub async fn inserir_para_transacao<C: ConnectionTrait>(
    conn: &C,
    transacao_id: i32,
    calculadas: &[ComissaoCalculada],
) -> Result<()> {
    let now = chrono::Utc::now().to_rfc3339();

    for c in calculadas {
        let active = comissoes::ActiveModel {
            transacao_id: Set(transacao_id),
            corretor_id: Set(c.corretor_id),
            tipo: Set(c.tipo),
            percentual: Set(c.percentual),
            valor: Set(c.valor),
            status: Set(StatusComissao::Pendente),
            data_pagamento: Set(None),
            created_at: Set(now.clone()),
            ..Default::default()
        };

        active
            .insert(conn)
            .await
            .context("Failed to insert comissao")?;
    }

    Ok(())
}

pub struct ComissaoRepository {
    conn: DatabaseConnection,
}

impl ComissaoRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn list(&self) -> Result<Vec<comissoes::Model>> {
        comissoes::Entity::find()
            .order_by_desc(comissoes::Column::CreatedAt)
            .all(&self.conn)
            .await
            .context("Failed to list comissoes")
    }

    pub async fn list_por_corretor(&self, corretor_id: i32) -> Result<Vec<comissoes::Model>> {
        comissoes::Entity::find()
            .filter(comissoes::Column::CorretorId.eq(corretor_id))
            .order_by_desc(comissoes::Column::CreatedAt)
            .all(&self.conn)
            .await
            .context("Failed to list comissoes for corretor")
    }

    pub async fn get(&self, id: i32) -> Result<Option<comissoes::Model>> {
        comissoes::Entity::find_by_id(id)
            .one(&self.conn)
            .await
            .context("Failed to query comissao")
    }

    /// Transição pendente -> pago como UPDATE condicional. Só a primeira
    /// chamada concorrente vê `rows_affected == 1`.
    pub async fn marcar_paga(&self, id: i32) -> Result<bool> {
        let res = comissoes::Entity::update_many()
            .col_expr(comissoes::Column::Status, Expr::value(StatusComissao::Pago))
            .col_expr(
                comissoes::Column::DataPagamento,
                Expr::value(chrono::Utc::now().to_rfc3339()),
            )
            .filter(comissoes::Column::Id.eq(id))
            .filter(comissoes::Column::Status.eq(StatusComissao::Pendente))
            .exec(&self.conn)
            .await
            .context("Failed to mark comissao as paid")?;

        Ok(res.rows_affected == 1)
    }

    pub async fn get_config(&self, tipo: TipoTransacao) -> Result<Option<config_comissoes::Model>> {
        config_comissoes::Entity::find()
            .filter(config_comissoes::Column::Tipo.eq(tipo))
            .one(&self.conn)
            .await
            .context("Failed to query comissao config")
    }

    pub async fn list_config(&self) -> Result<Vec<config_comissoes::Model>> {
        config_comissoes::Entity::find()
            .all(&self.conn)
            .await
            .context("Failed to list comissao configs")
    }

    /// Uma linha por tipo de transação; a coluna única em `tipo` faz o
    /// conflito virar atualização dos percentuais.
    pub async fn upsert_config(
        &self,
        tipo: TipoTransacao,
        percentual_captacao: i32,
        percentual_venda: i32,
    ) -> Result<config_comissoes::Model> {
        let now = chrono::Utc::now().to_rfc3339();

        let active = config_comissoes::ActiveModel {
            tipo: Set(tipo),
            percentual_captacao: Set(percentual_captacao),
            percentual_venda: Set(percentual_venda),
            updated_at: Set(now),
            ..Default::default()
        };

        config_comissoes::Entity::insert(active)
            .on_conflict(
                OnConflict::column(config_comissoes::Column::Tipo)
                    .update_columns([
                        config_comissoes::Column::PercentualCaptacao,
                        config_comissoes::Column::PercentualVenda,
                        config_comissoes::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec(&self.conn)
            .await
            .context("Failed to upsert comissao config")?;

        self.get_config(tipo)
            .await?
            .context("Comissao config missing after upsert")
    }
}
