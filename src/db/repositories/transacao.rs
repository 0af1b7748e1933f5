use anyhow::{Context, Result};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, DatabaseConnection, EntityTrait,
    QueryFilter, QueryOrder, Set,
};
use serde::Deserialize;

use crate::entities::transacoes::{self, TipoTransacao};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NovaTransacao {
    pub imovel_id: i32,
    pub tipo: TipoTransacao,
    /// Valor em centavos.
    pub valor: i64,
    #[serde(default)]
    pub corretor_captador_id: Option<i32>,
    pub corretor_vendedor_id: i32,
    #[serde(default)]
    pub cliente_id: Option<i32>,
    pub data_transacao: String,
    #[serde(default)]
    pub observacoes: Option<String>,
}

/// Insere dentro de qualquer conexão, inclusive uma transação de banco
/// aberta; quem chama decide o escopo de atomicidade.
pub async fn inserir<C: ConnectionTrait>(
    conn: &C,
    nova: NovaTransacao,
) -> Result<transacoes::Model> {
    let active = transacoes::ActiveModel {
        imovel_id: Set(nova.imovel_id),
        tipo: Set(nova.tipo),
        valor: Set(nova.valor),
        corretor_captador_id: Set(nova.corretor_captador_id),
        corretor_vendedor_id: Set(nova.corretor_vendedor_id),
        cliente_id: Set(nova.cliente_id),
        data_transacao: Set(nova.data_transacao),
        observacoes: Set(nova.observacoes),
        created_at: Set(chrono::Utc::now().to_rfc3339()),
        ..Default::default()
    };

    active
        .insert(conn)
        .await
        .context("Failed to insert transacao")
}

pub struct TransacaoRepository {
    conn: DatabaseConnection,
}

impl TransacaoRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn list(&self) -> Result<Vec<transacoes::Model>> {
        transacoes::Entity::find()
            .order_by_desc(transacoes::Column::DataTransacao)
            .all(&self.conn)
            .await
            .context("Failed to list transacoes")
    }

    pub async fn list_por_corretor(&self, corretor_id: i32) -> Result<Vec<transacoes::Model>> {
        transacoes::Entity::find()
            .filter(
                Condition::any()
                    .add(transacoes::Column::CorretorVendedorId.eq(corretor_id))
                    .add(transacoes::Column::CorretorCaptadorId.eq(corretor_id)),
            )
            .order_by_desc(transacoes::Column::DataTransacao)
            .all(&self.conn)
            .await
            .context("Failed to list transacoes for corretor")
    }

    pub async fn get(&self, id: i32) -> Result<Option<transacoes::Model>> {
        transacoes::Entity::find_by_id(id)
            .one(&self.conn)
            .await
            .context("Failed to query transacao")
    }
}
