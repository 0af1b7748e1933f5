use anyhow::{Context, Result};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use serde::Deserialize;

use crate::entities::inquilinos;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NovoInquilino {
    pub nome: String,
    pub cpf: String,
    #[serde(default)]
    pub telefone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub endereco: Option<String>,
    #[serde(default)]
    pub observacoes: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtualizaInquilino {
    pub nome: Option<String>,
    pub cpf: Option<String>,
    pub telefone: Option<String>,
    pub email: Option<String>,
    pub endereco: Option<String>,
    pub observacoes: Option<String>,
}

pub struct InquilinoRepository {
    conn: DatabaseConnection,
}

impl InquilinoRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn list(&self) -> Result<Vec<inquilinos::Model>> {
        inquilinos::Entity::find()
            .order_by_asc(inquilinos::Column::Nome)
            .all(&self.conn)
            .await
            .context("Failed to list inquilinos")
    }

    pub async fn get(&self, id: i32) -> Result<Option<inquilinos::Model>> {
        inquilinos::Entity::find_by_id(id)
            .one(&self.conn)
            .await
            .context("Failed to query inquilino")
    }

    pub async fn create(&self, novo: NovoInquilino) -> Result<inquilinos::Model> {
        let now = chrono::Utc::now().to_rfc3339();

        let active = inquilinos::ActiveModel {
            nome: Set(novo.nome),
            cpf: Set(novo.cpf),
            telefone: Set(novo.telefone),
            email: Set(novo.email),
            endereco: Set(novo.endereco),
            observacoes: Set(novo.observacoes),
            created_at: Set(now.clone()),
            updated_at: Set(now),
            ..Default::default()
        };

        active
            .insert(&self.conn)
            .await
            .context("Failed to insert inquilino")
    }

    pub async fn update(
        &self,
        id: i32,
        dados: AtualizaInquilino,
    ) -> Result<Option<inquilinos::Model>> {
        let Some(model) = inquilinos::Entity::find_by_id(id).one(&self.conn).await? else {
            return Ok(None);
        };

        let mut active: inquilinos::ActiveModel = model.into();

        if let Some(v) = dados.nome {
            active.nome = Set(v);
        }
        if let Some(v) = dados.cpf {
            active.cpf = Set(v);
        }
        if let Some(v) = dados.telefone {
            active.telefone = Set(Some(v));
        }
        if let Some(v) = dados.email {
            active.email = Set(Some(v));
        }
        if let Some(v) = dados.endereco {
            active.endereco = Set(Some(v));
        }
        if let Some(v) = dados.observacoes {
            active.observacoes = Set(Some(v));
        }
        active.updated_at = Set(chrono::Utc::now().to_rfc3339());

        let updated = active
            .update(&self.conn)
            .await
            .context("Failed to update inquilino")?;

        Ok(Some(updated))
    }

    pub async fn delete(&self, id: i32) -> Result<bool> {
        let res = inquilinos::Entity::delete_by_id(id)
            .exec(&self.conn)
            .await
            .context("Failed to delete inquilino")?;

        Ok(res.rows_affected > 0)
    }
}
