use anyhow::{Context, Result};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use serde::Deserialize;

use crate::entities::imoveis::{self, Finalidade, StatusImovel};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NovoImovel {
    pub codigo: String,
    pub titulo: String,
    pub tipo: String,
    pub finalidade: Finalidade,
    pub proprietario_id: i32,
    #[serde(default)]
    pub corretor_captador_id: Option<i32>,
    #[serde(default)]
    pub cep: Option<String>,
    #[serde(default)]
    pub endereco: Option<String>,
    #[serde(default)]
    pub numero: Option<String>,
    #[serde(default)]
    pub complemento: Option<String>,
    #[serde(default)]
    pub bairro: Option<String>,
    #[serde(default)]
    pub cidade: Option<String>,
    #[serde(default)]
    pub estado: Option<String>,
    #[serde(default)]
    pub area_util: Option<i32>,
    #[serde(default)]
    pub area_total: Option<i32>,
    #[serde(default)]
    pub quartos: Option<i32>,
    #[serde(default)]
    pub suites: Option<i32>,
    #[serde(default)]
    pub banheiros: Option<i32>,
    #[serde(default)]
    pub vagas: Option<i32>,
    #[serde(default)]
    pub andar: Option<String>,
    #[serde(default)]
    pub preco_venda: Option<i64>,
    #[serde(default)]
    pub valor_locacao: Option<i64>,
    #[serde(default)]
    pub valor_condominio: Option<i64>,
    #[serde(default)]
    pub valor_iptu: Option<i64>,
    #[serde(default)]
    pub descricao: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtualizaImovel {
    pub titulo: Option<String>,
    pub tipo: Option<String>,
    pub status: Option<StatusImovel>,
    pub finalidade: Option<Finalidade>,
    pub corretor_captador_id: Option<i32>,
    pub cep: Option<String>,
    pub endereco: Option<String>,
    pub numero: Option<String>,
    pub complemento: Option<String>,
    pub bairro: Option<String>,
    pub cidade: Option<String>,
    pub estado: Option<String>,
    pub area_util: Option<i32>,
    pub area_total: Option<i32>,
    pub quartos: Option<i32>,
    pub suites: Option<i32>,
    pub banheiros: Option<i32>,
    pub vagas: Option<i32>,
    pub andar: Option<String>,
    pub preco_venda: Option<i64>,
    pub valor_locacao: Option<i64>,
    pub valor_condominio: Option<i64>,
    pub valor_iptu: Option<i64>,
    pub descricao: Option<String>,
}

pub struct ImovelRepository {
    conn: DatabaseConnection,
}

impl ImovelRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn list(&self) -> Result<Vec<imoveis::Model>> {
        imoveis::Entity::find()
            .order_by_desc(imoveis::Column::CreatedAt)
            .all(&self.conn)
            .await
            .context("Failed to list imoveis")
    }

    pub async fn list_por_status(&self, status: StatusImovel) -> Result<Vec<imoveis::Model>> {
        imoveis::Entity::find()
            .filter(imoveis::Column::Status.eq(status))
            .order_by_desc(imoveis::Column::CreatedAt)
            .all(&self.conn)
            .await
            .context("Failed to list imoveis by status")
    }

    pub async fn get(&self, id: i32) -> Result<Option<imoveis::Model>> {
        imoveis::Entity::find_by_id(id)
            .one(&self.conn)
            .await
            .context("Failed to query imovel")
    }

    pub async fn create(&self, novo: NovoImovel) -> Result<imoveis::Model> {
        let now = chrono::Utc::now().to_rfc3339();

        let active = imoveis::ActiveModel {
            codigo: Set(novo.codigo),
            titulo: Set(novo.titulo),
            tipo: Set(novo.tipo),
            status: Set(StatusImovel::Disponivel),
            finalidade: Set(novo.finalidade),
            proprietario_id: Set(novo.proprietario_id),
            corretor_captador_id: Set(novo.corretor_captador_id),
            cep: Set(novo.cep),
            endereco: Set(novo.endereco),
            numero: Set(novo.numero),
            complemento: Set(novo.complemento),
            bairro: Set(novo.bairro),
            cidade: Set(novo.cidade),
            estado: Set(novo.estado),
            area_util: Set(novo.area_util),
            area_total: Set(novo.area_total),
            quartos: Set(novo.quartos),
            suites: Set(novo.suites),
            banheiros: Set(novo.banheiros),
            vagas: Set(novo.vagas),
            andar: Set(novo.andar),
            preco_venda: Set(novo.preco_venda),
            valor_locacao: Set(novo.valor_locacao),
            valor_condominio: Set(novo.valor_condominio),
            valor_iptu: Set(novo.valor_iptu),
            descricao: Set(novo.descricao),
            created_at: Set(now.clone()),
            updated_at: Set(now),
            ..Default::default()
        };

        active
            .insert(&self.conn)
            .await
            .context("Failed to insert imovel")
    }

    pub async fn update(&self, id: i32, dados: AtualizaImovel) -> Result<Option<imoveis::Model>> {
        let Some(model) = imoveis::Entity::find_by_id(id).one(&self.conn).await? else {
            return Ok(None);
        };

        let mut active: imoveis::ActiveModel = model.into();

        if let Some(v) = dados.titulo {
            active.titulo = Set(v);
        }
        if let Some(v) = dados.tipo {
            active.tipo = Set(v);
        }
        if let Some(v) = dados.status {
            active.status = Set(v);
        }
        if let Some(v) = dados.finalidade {
            active.finalidade = Set(v);
        }
        if let Some(v) = dados.corretor_captador_id {
            active.corretor_captador_id = Set(Some(v));
        }
        if let Some(v) = dados.cep {
            active.cep = Set(Some(v));
        }
        if let Some(v) = dados.endereco {
            active.endereco = Set(Some(v));
        }
        if let Some(v) = dados.numero {
            active.numero = Set(Some(v));
        }
        if let Some(v) = dados.complemento {
            active.complemento = Set(Some(v));
        }
        if let Some(v) = dados.bairro {
            active.bairro = Set(Some(v));
        }
        if let Some(v) = dados.cidade {
            active.cidade = Set(Some(v));
        }
        if let Some(v) = dados.estado {
            active.estado = Set(Some(v));
        }
        if let Some(v) = dados.area_util {
            active.area_util = Set(Some(v));
        }
        if let Some(v) = dados.area_total {
            active.area_total = Set(Some(v));
        }
        if let Some(v) = dados.quartos {
            active.quartos = Set(Some(v));
        }
        if let Some(v) = dados.suites {
            active.suites = Set(Some(v));
        }
        if let Some(v) = dados.banheiros {
            active.banheiros = Set(Some(v));
        }
        if let Some(v) = dados.vagas {
            active.vagas = Set(Some(v));
        }
        if let Some(v) = dados.andar {
            active.andar = Set(Some(v));
        }
        if let Some(v) = dados.preco_venda {
            active.preco_venda = Set(Some(v));
        }
        if let Some(v) = dados.valor_locacao {
            active.valor_locacao = Set(Some(v));
        }
        if let Some(v) = dados.valor_condominio {
            active.valor_condominio = Set(Some(v));
        }
        if let Some(v) = dados.valor_iptu {
            active.valor_iptu = Set(Some(v));
        }
        if let Some(v) = dados.descricao {
            active.descricao = Set(Some(v));
        }
        active.updated_at = Set(chrono::Utc::now().to_rfc3339());

        let updated = active
            .update(&self.conn)
            .await
            .context("Failed to update imovel")?;

        Ok(Some(updated))
    }

    /// Marca o imóvel como vendido ou alugado após uma transação registrada.
    pub async fn marcar_status(&self, id: i32, status: StatusImovel) -> Result<()> {
        let Some(model) = imoveis::Entity::find_by_id(id).one(&self.conn).await? else {
            return Ok(());
        };

        let mut active: imoveis::ActiveModel = model.into();
        active.status = Set(status);
        active.updated_at = Set(chrono::Utc::now().to_rfc3339());
        active.update(&self.conn).await?;

        Ok(())
    }

    pub async fn delete(&self, id: i32) -> Result<bool> {
        let res = imoveis::Entity::delete_by_id(id)
            .exec(&self.conn)
            .await
            .context("Failed to delete imovel")?;

        Ok(res.rows_affected > 0)
    }
}
