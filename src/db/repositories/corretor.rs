use anyhow::{Context, Result};
use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use serde::{Deserialize, Serialize};
use tokio::task;

use crate::config::SecurityConfig;
use crate::entities::corretores;

/// Dados de corretor devolvidos pelo repositório (sem o hash de senha).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Corretor {
    pub id: i32,
    pub nome: String,
    pub cpf: String,
    pub creci: String,
    pub telefone: Option<String>,
    pub email: String,
    pub equipe: Option<String>,
    pub gerente_id: Option<i32>,
    pub meta_vendas: i32,
    pub meta_locacoes: i32,
    pub meta_captacoes: i32,
    pub ativo: bool,
    pub senha_temporaria: bool,
    pub ultimo_acesso: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<corretores::Model> for Corretor {
    fn from(model: corretores::Model) -> Self {
        Self {
            id: model.id,
            nome: model.nome,
            cpf: model.cpf,
            creci: model.creci,
            telefone: model.telefone,
            email: model.email,
            equipe: model.equipe,
            gerente_id: model.gerente_id,
            meta_vendas: model.meta_vendas,
            meta_locacoes: model.meta_locacoes,
            meta_captacoes: model.meta_captacoes,
            ativo: model.ativo,
            senha_temporaria: model.senha_temporaria,
            ultimo_acesso: model.ultimo_acesso,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NovoCorretor {
    pub nome: String,
    pub cpf: String,
    pub creci: String,
    #[serde(default)]
    pub telefone: Option<String>,
    pub email: String,
    #[serde(default)]
    pub equipe: Option<String>,
    #[serde(default)]
    pub gerente_id: Option<i32>,
    #[serde(default)]
    pub meta_vendas: i32,
    #[serde(default)]
    pub meta_locacoes: i32,
    #[serde(default)]
    pub meta_captacoes: i32,
}

/// Campos ausentes no corpo são preservados; não há como limpar um campo
/// opcional por esta rota.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtualizaCorretor {
    pub nome: Option<String>,
    pub cpf: Option<String>,
    pub creci: Option<String>,
    pub telefone: Option<String>,
    pub email: Option<String>,
    pub equipe: Option<String>,
    pub gerente_id: Option<i32>,
    pub meta_vendas: Option<i32>,
    pub meta_locacoes: Option<i32>,
    pub meta_captacoes: Option<i32>,
    pub ativo: Option<bool>,
}

pub struct CorretorRepository {
    conn: DatabaseConnection,
}

impl CorretorRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn list(&self) -> Result<Vec<Corretor>> {
        let rows = corretores::Entity::find()
            .order_by_asc(corretores::Column::Nome)
            .all(&self.conn)
            .await
            .context("Failed to list corretores")?;

        Ok(rows.into_iter().map(Corretor::from).collect())
    }

    pub async fn get(&self, id: i32) -> Result<Option<Corretor>> {
        let row = corretores::Entity::find_by_id(id)
            .one(&self.conn)
            .await
            .context("Failed to query corretor by id")?;

        Ok(row.map(Corretor::from))
    }

    /// Busca por email com o hash incluso; uso restrito ao fluxo de autenticação.
    pub async fn get_by_email_com_hash(
        &self,
        email: &str,
    ) -> Result<Option<corretores::Model>> {
        corretores::Entity::find()
            .filter(corretores::Column::Email.eq(email))
            .one(&self.conn)
            .await
            .context("Failed to query corretor by email")
    }

    pub async fn get_com_hash(&self, id: i32) -> Result<Option<corretores::Model>> {
        corretores::Entity::find_by_id(id)
            .one(&self.conn)
            .await
            .context("Failed to query corretor by id")
    }

    /// Cria o corretor já com credencial provisória emitida.
    pub async fn create(&self, novo: NovoCorretor, senha_hash: String) -> Result<Corretor> {
        let now = chrono::Utc::now().to_rfc3339();

        let active = corretores::ActiveModel {
            nome: Set(novo.nome),
            cpf: Set(novo.cpf),
            creci: Set(novo.creci),
            telefone: Set(novo.telefone),
            email: Set(novo.email),
            equipe: Set(novo.equipe),
            gerente_id: Set(novo.gerente_id),
            meta_vendas: Set(novo.meta_vendas),
            meta_locacoes: Set(novo.meta_locacoes),
            meta_captacoes: Set(novo.meta_captacoes),
            ativo: Set(true),
            senha_hash: Set(Some(senha_hash)),
            senha_temporaria: Set(true),
            ultimo_acesso: Set(None),
            created_at: Set(now.clone()),
            updated_at: Set(now),
            ..Default::default()
        };

        let model = active
            .insert(&self.conn)
            .await
            .context("Failed to insert corretor")?;

        Ok(Corretor::from(model))
    }

    pub async fn update(&self, id: i32, dados: AtualizaCorretor) -> Result<bool> {
        let Some(model) = corretores::Entity::find_by_id(id).one(&self.conn).await? else {
            return Ok(false);
        };

        let mut active: corretores::ActiveModel = model.into();

        if let Some(v) = dados.nome {
            active.nome = Set(v);
        }
        if let Some(v) = dados.cpf {
            active.cpf = Set(v);
        }
        if let Some(v) = dados.creci {
            active.creci = Set(v);
        }
        if let Some(v) = dados.telefone {
            active.telefone = Set(Some(v));
        }
        if let Some(v) = dados.email {
            active.email = Set(v);
        }
        if let Some(v) = dados.equipe {
            active.equipe = Set(Some(v));
        }
        if let Some(v) = dados.gerente_id {
            active.gerente_id = Set(Some(v));
        }
        if let Some(v) = dados.meta_vendas {
            active.meta_vendas = Set(v);
        }
        if let Some(v) = dados.meta_locacoes {
            active.meta_locacoes = Set(v);
        }
        if let Some(v) = dados.meta_captacoes {
            active.meta_captacoes = Set(v);
        }
        if let Some(v) = dados.ativo {
            active.ativo = Set(v);
        }
        active.updated_at = Set(chrono::Utc::now().to_rfc3339());

        active
            .update(&self.conn)
            .await
            .context("Failed to update corretor")?;

        Ok(true)
    }

    pub async fn delete(&self, id: i32) -> Result<bool> {
        let res = corretores::Entity::delete_by_id(id)
            .exec(&self.conn)
            .await
            .context("Failed to delete corretor")?;

        Ok(res.rows_affected > 0)
    }

    pub async fn registrar_acesso(&self, id: i32) -> Result<()> {
        let Some(model) = corretores::Entity::find_by_id(id).one(&self.conn).await? else {
            return Ok(());
        };

        let mut active: corretores::ActiveModel = model.into();
        active.ultimo_acesso = Set(Some(chrono::Utc::now().to_rfc3339()));
        active.update(&self.conn).await?;

        Ok(())
    }

    /// Grava hash novo e flag de senha temporária em uma única atualização.
    pub async fn definir_senha(
        &self,
        id: i32,
        senha_hash: String,
        temporaria: bool,
    ) -> Result<bool> {
        let Some(model) = corretores::Entity::find_by_id(id).one(&self.conn).await? else {
            return Ok(false);
        };

        let mut active: corretores::ActiveModel = model.into();
        active.senha_hash = Set(Some(senha_hash));
        active.senha_temporaria = Set(temporaria);
        active.updated_at = Set(chrono::Utc::now().to_rfc3339());
        active
            .update(&self.conn)
            .await
            .context("Failed to update corretor credential")?;

        Ok(true)
    }
}

/// Hash a password using Argon2id with the configured work factor.
pub fn hash_senha(senha: &str, config: Option<&SecurityConfig>) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);

    let argon2 = if let Some(cfg) = config {
        let params = Params::new(
            cfg.argon2_memory_cost_kib,
            cfg.argon2_time_cost,
            cfg.argon2_parallelism,
            None,
        )
        .map_err(|e| anyhow::anyhow!("Invalid Argon2 params: {e}"))?;
        Argon2::new(Algorithm::Argon2id, Version::V0x13, params)
    } else {
        Argon2::default()
    };

    let hash = argon2
        .hash_password(senha.as_bytes(), &salt)
        .map_err(|e| anyhow::anyhow!("Failed to hash password: {e}"))?;

    Ok(hash.to_string())
}

/// Constant-time verification through the argon2 verifier; a mismatch is
/// `false`, never an error.
pub fn verificar_senha(senha: &str, senha_hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(senha_hash) else {
        return false;
    };

    Argon2::default()
        .verify_password(senha.as_bytes(), &parsed)
        .is_ok()
}

/// Hashing is CPU-bound; run it off the async runtime.
pub async fn hash_senha_blocking(senha: String, config: SecurityConfig) -> Result<String> {
    task::spawn_blocking(move || hash_senha(&senha, Some(&config)))
        .await
        .context("Password hashing task panicked")?
}

pub async fn verificar_senha_blocking(senha: String, senha_hash: String) -> Result<bool> {
    task::spawn_blocking(move || verificar_senha(&senha, &senha_hash))
        .await
        .context("Password verification task panicked")
}

const ALFABETO_SENHA: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const TAMANHO_SENHA_TEMPORARIA: usize = 10;

/// Gera a senha provisória: 10 caracteres uniformes de `[A-Z0-9]`.
#[must_use]
pub fn gerar_senha_temporaria() -> String {
    use rand::Rng;

    let mut rng = rand::rng();
    (0..TAMANHO_SENHA_TEMPORARIA)
        .map(|_| {
            let idx = rng.random_range(0..ALFABETO_SENHA.len());
            ALFABETO_SENHA[idx] as char
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_senha_temporaria_formato() {
        for _ in 0..50 {
            let senha = gerar_senha_temporaria();
            assert_eq!(senha.len(), 10);
            assert!(
                senha
                    .chars()
                    .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
            );
        }
    }

    #[test]
    fn test_hash_e_verificacao() {
        let hash = hash_senha("segredo123", None).unwrap();
        assert!(verificar_senha("segredo123", &hash));
        assert!(!verificar_senha("segredo123x", &hash));
    }

    #[test]
    fn test_verificacao_com_hash_invalido() {
        assert!(!verificar_senha("qualquer", "nao-e-um-hash"));
    }
}
