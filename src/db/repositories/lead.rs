use anyhow::{Context, Result};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use serde::Deserialize;

use crate::entities::leads::{self, StatusLead};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NovoLead {
    pub nome: String,
    #[serde(default)]
    pub telefone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub origem: Option<String>,
    #[serde(default)]
    pub corretor_id: Option<i32>,
    #[serde(default)]
    pub observacoes: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtualizaLead {
    pub nome: Option<String>,
    pub telefone: Option<String>,
    pub email: Option<String>,
    pub origem: Option<String>,
    pub status: Option<StatusLead>,
    pub corretor_id: Option<i32>,
    pub observacoes: Option<String>,
}

pub struct LeadRepository {
    conn: DatabaseConnection,
}

impl LeadRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn list(&self) -> Result<Vec<leads::Model>> {
        leads::Entity::find()
            .order_by_desc(leads::Column::CreatedAt)
            .all(&self.conn)
            .await
            .context("Failed to list leads")
    }

    pub async fn list_por_corretor(&self, corretor_id: i32) -> Result<Vec<leads::Model>> {
        leads::Entity::find()
            .filter(leads::Column::CorretorId.eq(corretor_id))
            .order_by_desc(leads::Column::CreatedAt)
            .all(&self.conn)
            .await
            .context("Failed to list leads for corretor")
    }

    pub async fn get(&self, id: i32) -> Result<Option<leads::Model>> {
        leads::Entity::find_by_id(id)
            .one(&self.conn)
            .await
            .context("Failed to query lead")
    }

    /// Todo lead entra como `novo`, independente do corpo da requisição.
    pub async fn create(&self, novo: NovoLead) -> Result<leads::Model> {
        let now = chrono::Utc::now().to_rfc3339();

        let active = leads::ActiveModel {
            nome: Set(novo.nome),
            telefone: Set(novo.telefone),
            email: Set(novo.email),
            origem: Set(novo.origem),
            status: Set(StatusLead::Novo),
            corretor_id: Set(novo.corretor_id),
            observacoes: Set(novo.observacoes),
            created_at: Set(now.clone()),
            updated_at: Set(now),
            ..Default::default()
        };

        active.insert(&self.conn).await.context("Failed to insert lead")
    }

    pub async fn update(&self, id: i32, dados: AtualizaLead) -> Result<Option<leads::Model>> {
        let Some(model) = leads::Entity::find_by_id(id).one(&self.conn).await? else {
            return Ok(None);
        };

        let mut active: leads::ActiveModel = model.into();

        if let Some(v) = dados.nome {
            active.nome = Set(v);
        }
        if let Some(v) = dados.telefone {
            active.telefone = Set(Some(v));
        }
        if let Some(v) = dados.email {
            active.email = Set(Some(v));
        }
        if let Some(v) = dados.origem {
            active.origem = Set(Some(v));
        }
        if let Some(v) = dados.status {
            active.status = Set(v);
        }
        if let Some(v) = dados.corretor_id {
            active.corretor_id = Set(Some(v));
        }
        if let Some(v) = dados.observacoes {
            active.observacoes = Set(Some(v));
        }
        active.updated_at = Set(chrono::Utc::now().to_rfc3339());

        let updated = active
            .update(&self.conn)
            .await
            .context("Failed to update lead")?;

        Ok(Some(updated))
    }

    pub async fn delete(&self, id: i32) -> Result<bool> {
        let res = leads::Entity::delete_by_id(id)
            .exec(&self.conn)
            .await
            .context("Failed to delete lead")?;

        Ok(res.rows_affected > 0)
    }
}
