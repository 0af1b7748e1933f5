use anyhow::{Context, Result};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use serde::Deserialize;

use crate::entities::proprietarios;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NovoProprietario {
    pub nome: String,
    pub cpf_cnpj: String,
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
pub struct AtualizaProprietario {
    pub nome: Option<String>,
    pub cpf_cnpj: Option<String>,
    pub telefone: Option<String>,
    pub email: Option<String>,
    pub endereco: Option<String>,
    pub observacoes: Option<String>,
}

pub struct ProprietarioRepository {
    conn: DatabaseConnection,
}

impl ProprietarioRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn list(&self) -> Result<Vec<proprietarios::Model>> {
        proprietarios::Entity::find()
            .order_by_asc(proprietarios::Column::Nome)
            .all(&self.conn)
            .await
            .context("Failed to list proprietarios")
    }

    pub async fn get(&self, id: i32) -> Result<Option<proprietarios::Model>> {
        proprietarios::Entity::find_by_id(id)
            .one(&self.conn)
            .await
            .context("Failed to query proprietario")
    }

    pub async fn create(&self, novo: NovoProprietario) -> Result<proprietarios::Model> {
        let now = chrono::Utc::now().to_rfc3339();

        let active = proprietarios::ActiveModel {
            nome: Set(novo.nome),
            cpf_cnpj: Set(novo.cpf_cnpj),
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
            .context("Failed to insert proprietario")
    }

    pub async fn update(
        &self,
        id: i32,
        dados: AtualizaProprietario,
    ) -> Result<Option<proprietarios::Model>> {
        let Some(model) = proprietarios::Entity::find_by_id(id).one(&self.conn).await? else {
            return Ok(None);
        };

        let mut active: proprietarios::ActiveModel = model.into();

        if let Some(v) = dados.nome {
            active.nome = Set(v);
        }
        if let Some(v) = dados.cpf_cnpj {
            active.cpf_cnpj = Set(v);
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
            .context("Failed to update proprietario")?;

        Ok(Some(updated))
    }

    pub async fn delete(&self, id: i32) -> Result<bool> {
        let res = proprietarios::Entity::delete_by_id(id)
            .exec(&self.conn)
            .await
            .context("Failed to delete proprietario")?;

        Ok(res.rows_affected > 0)
    }
}
