//! `SeaORM` implementation of the `ComissaoService` trait.

use async_trait::async_trait;
use sea_orm::{TransactionError, TransactionTrait};
use tracing::info;

use crate::db::Store;
use crate::db::repositories::{comissao, transacao};
use crate::entities::config_comissoes;
use crate::entities::imoveis::StatusImovel;
use crate::entities::transacoes::TipoTransacao;
use crate::services::comissao_service::{
    ComissaoError, ComissaoService, ConfigComissaoInput, RegistroTransacao, TransacaoRegistrada,
    computar_comissoes,
};

pub struct SeaOrmComissaoService {
    store: Store,
}

impl SeaOrmComissaoService {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }
}

fn flatten_txn_err(err: TransactionError<ComissaoError>) -> ComissaoError {
    match err {
        TransactionError::Connection(e) => ComissaoError::Database(e.to_string()),
        TransactionError::Transaction(e) => e,
    }
}

#[async_trait]
impl ComissaoService for SeaOrmComissaoService {
    async fn registrar_transacao(
        &self,
        registro: RegistroTransacao,
    ) -> Result<TransacaoRegistrada, ComissaoError> {
        if registro.valor <= 0 {
            return Err(ComissaoError::Validation(
                "O valor da transação deve ser positivo".to_string(),
            ));
        }

        // Os percentuais são lidos antes; a configuração ausente aborta sem
        // tocar no banco.
        let config = self
            .store
            .get_config_comissao(registro.tipo)
            .await
            .map_err(|e| ComissaoError::Database(e.to_string()))?
            .ok_or(ComissaoError::ConfiguracaoAusente)?;

        let comissoes = computar_comissoes(
            registro.valor,
            registro.corretor_captador_id,
            registro.corretor_vendedor_id,
            &config,
        );

        let imovel_id = registro.imovel_id;
        let tipo = registro.tipo;

        // Transação de banco: ou a transação e todas as comissões entram, ou
        // nada entra.
        let modelo = self
            .store
            .conn
            .transaction::<_, crate::entities::transacoes::Model, ComissaoError>(|txn| {
                let comissoes = comissoes.clone();
                Box::pin(async move {
                    let modelo = transacao::inserir(
                        txn,
                        transacao::NovaTransacao {
                            imovel_id: registro.imovel_id,
                            tipo: registro.tipo,
                            valor: registro.valor,
                            corretor_captador_id: registro.corretor_captador_id,
                            corretor_vendedor_id: registro.corretor_vendedor_id,
                            cliente_id: registro.cliente_id,
                            data_transacao: registro.data_transacao,
                            observacoes: registro.observacoes,
                        },
                    )
                    .await?;

                    comissao::inserir_para_transacao(txn, modelo.id, &comissoes).await?;

                    Ok(modelo)
                })
            })
            .await
            .map_err(flatten_txn_err)?;

        // Atualização de status do imóvel fora da transação; uma falha aqui
        // não desfaz o registro financeiro.
        let status = match tipo {
            TipoTransacao::Venda => StatusImovel::Vendido,
            TipoTransacao::Locacao => StatusImovel::Alugado,
        };
        if let Err(e) = self.store.marcar_status_imovel(imovel_id, status).await {
            tracing::warn!(imovel_id, error = %e, "Falha ao atualizar status do imóvel");
        }

        info!(
            transacao_id = modelo.id,
            comissoes = comissoes.len(),
            "Transação registrada"
        );

        Ok(TransacaoRegistrada {
            transacao: modelo,
            comissoes_geradas: comissoes.len(),
        })
    }

    async fn marcar_paga(&self, comissao_id: i32) -> Result<(), ComissaoError> {
        let paga = self
            .store
            .marcar_comissao_paga(comissao_id)
            .await
            .map_err(|e| ComissaoError::Database(e.to_string()))?;

        if paga {
            info!(comissao_id, "Comissão paga");
            return Ok(());
        }

        // O UPDATE condicional não afetou nenhuma linha: ou a comissão não
        // existe, ou já estava paga.
        match self
            .store
            .get_comissao(comissao_id)
            .await
            .map_err(|e| ComissaoError::Database(e.to_string()))?
        {
            Some(_) => Err(ComissaoError::JaPaga),
            None => Err(ComissaoError::NaoEncontrada),
        }
    }

    async fn upsert_config(
        &self,
        input: ConfigComissaoInput,
    ) -> Result<config_comissoes::Model, ComissaoError> {
        if input.percentual_captacao < 0 || input.percentual_venda < 0 {
            return Err(ComissaoError::Validation(
                "Percentuais não podem ser negativos".to_string(),
            ));
        }

        let model = self
            .store
            .upsert_config_comissao(input.tipo, input.percentual_captacao, input.percentual_venda)
            .await
            .map_err(|e| ComissaoError::Database(e.to_string()))?;

        info!(tipo = ?input.tipo, "Configuração de comissão atualizada");

        Ok(model)
    }
}
