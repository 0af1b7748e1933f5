//! `SeaORM` implementation of the `AuthService` trait.

use async_trait::async_trait;
use tracing::info;

use crate::config::SecurityConfig;
use crate::db::Store;
use crate::db::repositories::corretor::{
    gerar_senha_temporaria, hash_senha_blocking, verificar_senha_blocking,
};
use crate::services::auth_service::{
    AuthError, AuthService, CorretorAutenticado, ResultadoLogin,
};

const TAMANHO_MINIMO_SENHA: usize = 8;

pub struct SeaOrmAuthService {
    store: Store,
    security: SecurityConfig,
}

impl SeaOrmAuthService {
    #[must_use]
    pub const fn new(store: Store, security: SecurityConfig) -> Self {
        Self { store, security }
    }
}

#[async_trait]
impl AuthService for SeaOrmAuthService {
    async fn autenticar(&self, email: &str, senha: &str) -> Result<ResultadoLogin, AuthError> {
        // Qualquer causa de falha cai no mesmo erro. Corretor inexistente,
        // inativo ou sem credencial emitida não podem ser distinguíveis de
        // uma senha errada.
        let Some(corretor) = self.store.get_corretor_by_email_com_hash(email).await? else {
            return Err(AuthError::CredenciaisInvalidas);
        };

        if !corretor.ativo {
            return Err(AuthError::CredenciaisInvalidas);
        }

        let Some(senha_hash) = corretor.senha_hash.clone() else {
            return Err(AuthError::CredenciaisInvalidas);
        };

        let valida = verificar_senha_blocking(senha.to_string(), senha_hash).await?;
        if !valida {
            return Err(AuthError::CredenciaisInvalidas);
        }

        self.store.registrar_acesso_corretor(corretor.id).await?;

        info!(corretor_id = corretor.id, "Login de corretor");

        Ok(ResultadoLogin {
            corretor: CorretorAutenticado {
                id: corretor.id,
                nome: corretor.nome,
                email: corretor.email,
                creci: corretor.creci,
            },
            senha_temporaria: corretor.senha_temporaria,
        })
    }

    async fn alterar_senha(
        &self,
        corretor_id: i32,
        senha_atual: &str,
        nova_senha: &str,
    ) -> Result<(), AuthError> {
        if nova_senha.len() < TAMANHO_MINIMO_SENHA {
            return Err(AuthError::Validation(
                "A nova senha deve ter pelo menos 8 caracteres".to_string(),
            ));
        }

        let corretor = self
            .store
            .get_corretor_com_hash(corretor_id)
            .await?
            .ok_or(AuthError::CorretorNaoEncontrado)?;

        // Com credencial provisória a senha atual não é conferida; o
        // corretor acabou de recebê-la e o objetivo é justamente trocá-la.
        if !corretor.senha_temporaria {
            let Some(senha_hash) = corretor.senha_hash else {
                return Err(AuthError::SenhaAtualIncorreta);
            };

            let valida = verificar_senha_blocking(senha_atual.to_string(), senha_hash).await?;
            if !valida {
                return Err(AuthError::SenhaAtualIncorreta);
            }
        }

        let novo_hash =
            hash_senha_blocking(nova_senha.to_string(), self.security.clone()).await?;

        let atualizado = self
            .store
            .definir_senha_corretor(corretor_id, novo_hash, false)
            .await?;
        if !atualizado {
            return Err(AuthError::CorretorNaoEncontrado);
        }

        info!(corretor_id, "Senha alterada");

        Ok(())
    }

    async fn resetar_senha(&self, corretor_id: i32) -> Result<String, AuthError> {
        let corretor = self
            .store
            .get_corretor(corretor_id)
            .await?
            .ok_or(AuthError::CorretorNaoEncontrado)?;

        let senha = gerar_senha_temporaria();
        let hash = hash_senha_blocking(senha.clone(), self.security.clone()).await?;

        self.store
            .definir_senha_corretor(corretor.id, hash, true)
            .await?;

        // Só o id vai para o log; a senha em claro sai apenas no retorno.
        info!(corretor_id, "Credencial provisória emitida");

        Ok(senha)
    }
}
