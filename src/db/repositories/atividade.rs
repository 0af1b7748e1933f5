use anyhow::{Context, Result};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use serde::Deserialize;

use crate::entities::atividades::{self, TipoAtividade};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NovaAtividade {
    pub corretor_id: i32,
    pub tipo: TipoAtividade,
    #[serde(default)]
    pub lead_id: Option<i32>,
    #[serde(default)]
    pub imovel_id: Option<i32>,
    pub titulo: String,
    #[serde(default)]
    pub descricao: Option<String>,
    pub data_hora: String,
    #[serde(default)]
    pub duracao: Option<i32>,
    #[serde(default)]
    pub resultado: Option<String>,
}

/// Só os campos editáveis da agenda; vínculo com corretor, lead e imóvel
/// não muda depois de criado.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtualizaAtividade {
    pub titulo: Option<String>,
    pub descricao: Option<String>,
    pub data_hora: Option<String>,
    pub duracao: Option<i32>,
    pub resultado: Option<String>,
}

pub struct AtividadeRepository {
    conn: DatabaseConnection,
}

impl AtividadeRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn list(&self) -> Result<Vec<atividades::Model>> {
        atividades::Entity::find()
            .order_by_desc(atividades::Column::DataHora)
            .all(&self.conn)
            .await
            .context("Failed to list atividades")
    }

    pub async fn list_por_corretor(&self, corretor_id: i32) -> Result<Vec<atividades::Model>> {
        atividades::Entity::find()
            .filter(atividades::Column::CorretorId.eq(corretor_id))
            .order_by_desc(atividades::Column::DataHora)
            .all(&self.conn)
            .await
            .context("Failed to list atividades for corretor")
    }

    pub async fn create(&self, nova: NovaAtividade) -> Result<atividades::Model> {
        let active = atividades::ActiveModel {
            corretor_id: Set(nova.corretor_id),
            tipo: Set(nova.tipo),
            lead_id: Set(nova.lead_id),
            imovel_id: Set(nova.imovel_id),
            titulo: Set(nova.titulo),
            descricao: Set(nova.descricao),
            data_hora: Set(nova.data_hora),
            duracao: Set(nova.duracao),
            resultado: Set(nova.resultado),
            created_at: Set(chrono::Utc::now().to_rfc3339()),
            ..Default::default()
        };

        active
            .insert(&self.conn)
            .await
            .context("Failed to insert atividade")
    }

    pub async fn update(
        &self,
        id: i32,
        dados: AtualizaAtividade,
    ) -> Result<Option<atividades::Model>> {
        let Some(existente) = atividades::Entity::find_by_id(id)
            .one(&self.conn)
            .await
            .context("Failed to load atividade")?
        else {
            return Ok(None);
        };

        let mut active: atividades::ActiveModel = existente.into();

        if let Some(v) = dados.titulo {
            active.titulo = Set(v);
        }
        if let Some(v) = dados.descricao {
            active.descricao = Set(Some(v));
        }
        if let Some(v) = dados.data_hora {
            active.data_hora = Set(v);
        }
        if let Some(v) = dados.duracao {
            active.duracao = Set(Some(v));
        }
        if let Some(v) = dados.resultado {
            active.resultado = Set(Some(v));
        }

        let atualizado = active
            .update(&self.conn)
            .await
            .context("Failed to update atividade")?;

        Ok(Some(atualizado))
    }

    pub async fn delete(&self, id: i32) -> Result<bool> {
        let res = atividades::Entity::delete_by_id(id)
            .exec(&self.conn)
            .await
            .context("Failed to delete atividade")?;

        Ok(res.rows_affected > 0)
    }
}
