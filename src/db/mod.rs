use anyhow::Result;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Statement};
use std::path::Path;
use std::time::Duration;
use tracing::info;

use crate::entities::imoveis::StatusImovel;
use crate::entities::transacoes::TipoTransacao;
use crate::entities::{
    atividades, comissoes, config_comissoes, imoveis, inquilinos, leads, proprietarios, transacoes,
};

pub mod migrator;
pub mod repositories;

pub use repositories::comissao::ComissaoCalculada;
pub use repositories::corretor::{AtualizaCorretor, Corretor, NovoCorretor};

use repositories::atividade::{AtualizaAtividade, NovaAtividade};
use repositories::imovel::{AtualizaImovel, NovoImovel};
use repositories::inquilino::{AtualizaInquilino, NovoInquilino};
use repositories::lead::{AtualizaLead, NovoLead};
use repositories::proprietario::{AtualizaProprietario, NovoProprietario};

#[derive(Clone)]
pub struct Store {
    pub conn: DatabaseConnection,
}

impl Store {
    pub async fn new(db_url: &str) -> Result<Self> {
        Self::with_pool_options(db_url, 5, 1).await
    }

    pub async fn with_pool_options(
        db_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self> {
        use sea_orm_migration::MigratorTrait;

        if !db_url.contains(":memory:") {
            let path_str = db_url.trim_start_matches("sqlite:");
            if let Some(parent) = Path::new(path_str).parent() {
                tokio::fs::create_dir_all(parent).await.ok();
            }
            if !Path::new(path_str).exists() {
                std::fs::File::create(path_str)?;
            }
        }

        let mut opt = ConnectOptions::new(db_url.to_string());
        opt.max_connections(max_connections)
            .min_connections(min_connections)
            .connect_timeout(Duration::from_secs(10))
            .acquire_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .max_lifetime(Duration::from_secs(600))
            .sqlx_logging(false);

        let conn = Database::connect(opt).await?;

        migrator::Migrator::up(&conn, None).await?;

        info!(
            "Database connected & migrations applied (pool: {}-{})",
            min_connections, max_connections
        );

        Ok(Self { conn })
    }

    pub async fn ping(&self) -> Result<()> {
        let backend = self.conn.get_database_backend();
        self.conn
            .query_one(Statement::from_string(backend, "SELECT 1".to_string()))
            .await?;
        Ok(())
    }

    fn corretor_repo(&self) -> repositories::corretor::CorretorRepository {
        repositories::corretor::CorretorRepository::new(self.conn.clone())
    }

    fn proprietario_repo(&self) -> repositories::proprietario::ProprietarioRepository {
        repositories::proprietario::ProprietarioRepository::new(self.conn.clone())
    }

    fn inquilino_repo(&self) -> repositories::inquilino::InquilinoRepository {
        repositories::inquilino::InquilinoRepository::new(self.conn.clone())
    }

    fn lead_repo(&self) -> repositories::lead::LeadRepository {
        repositories::lead::LeadRepository::new(self.conn.clone())
    }

    fn imovel_repo(&self) -> repositories::imovel::ImovelRepository {
        repositories::imovel::ImovelRepository::new(self.conn.clone())
    }

    fn transacao_repo(&self) -> repositories::transacao::TransacaoRepository {
        repositories::transacao::TransacaoRepository::new(self.conn.clone())
    }

    fn comissao_repo(&self) -> repositories::comissao::ComissaoRepository {
        repositories::comissao::ComissaoRepository::new(self.conn.clone())
    }

    fn atividade_repo(&self) -> repositories::atividade::AtividadeRepository {
        repositories::atividade::AtividadeRepository::new(self.conn.clone())
    }

    // ========================================================================
    // Corretores
    // ========================================================================

    pub async fn list_corretores(&self) -> Result<Vec<Corretor>> {
        self.corretor_repo().list().await
    }

    pub async fn get_corretor(&self, id: i32) -> Result<Option<Corretor>> {
        self.corretor_repo().get(id).await
    }

    pub async fn get_corretor_by_email_com_hash(
        &self,
        email: &str,
    ) -> Result<Option<crate::entities::corretores::Model>> {
        self.corretor_repo().get_by_email_com_hash(email).await
    }

    pub async fn get_corretor_com_hash(
        &self,
        id: i32,
    ) -> Result<Option<crate::entities::corretores::Model>> {
        self.corretor_repo().get_com_hash(id).await
    }

    pub async fn create_corretor(&self, novo: NovoCorretor, senha_hash: String) -> Result<Corretor> {
        self.corretor_repo().create(novo, senha_hash).await
    }

    pub async fn update_corretor(&self, id: i32, dados: AtualizaCorretor) -> Result<bool> {
        self.corretor_repo().update(id, dados).await
    }

    pub async fn delete_corretor(&self, id: i32) -> Result<bool> {
        self.corretor_repo().delete(id).await
    }

    pub async fn registrar_acesso_corretor(&self, id: i32) -> Result<()> {
        self.corretor_repo().registrar_acesso(id).await
    }

    pub async fn definir_senha_corretor(
        &self,
        id: i32,
        senha_hash: String,
        temporaria: bool,
    ) -> Result<bool> {
        self.corretor_repo().definir_senha(id, senha_hash, temporaria).await
    }

    // ========================================================================
    // Proprietários / Inquilinos
    // ========================================================================

    pub async fn list_proprietarios(&self) -> Result<Vec<proprietarios::Model>> {
        self.proprietario_repo().list().await
    }

    pub async fn get_proprietario(&self, id: i32) -> Result<Option<proprietarios::Model>> {
        self.proprietario_repo().get(id).await
    }

    pub async fn create_proprietario(&self, novo: NovoProprietario) -> Result<proprietarios::Model> {
        self.proprietario_repo().create(novo).await
    }

    pub async fn update_proprietario(
        &self,
        id: i32,
        dados: AtualizaProprietario,
    ) -> Result<Option<proprietarios::Model>> {
        self.proprietario_repo().update(id, dados).await
    }

    pub async fn delete_proprietario(&self, id: i32) -> Result<bool> {
        self.proprietario_repo().delete(id).await
    }

    pub async fn list_inquilinos(&self) -> Result<Vec<inquilinos::Model>> {
        self.inquilino_repo().list().await
    }

    pub async fn get_inquilino(&self, id: i32) -> Result<Option<inquilinos::Model>> {
        self.inquilino_repo().get(id).await
    }

    pub async fn create_inquilino(&self, novo: NovoInquilino) -> Result<inquilinos::Model> {
        self.inquilino_repo().create(novo).await
    }

    pub async fn update_inquilino(
        &self,
        id: i32,
        dados: AtualizaInquilino,
    ) -> Result<Option<inquilinos::Model>> {
        self.inquilino_repo().update(id, dados).await
    }

    pub async fn delete_inquilino(&self, id: i32) -> Result<bool> {
        self.inquilino_repo().delete(id).await
    }

    // ========================================================================
    // Leads
    // ========================================================================

    pub async fn list_leads(&self) -> Result<Vec<leads::Model>> {
        self.lead_repo().list().await
    }

    pub async fn list_leads_por_corretor(&self, corretor_id: i32) -> Result<Vec<leads::Model>> {
        self.lead_repo().list_por_corretor(corretor_id).await
    }

    pub async fn get_lead(&self, id: i32) -> Result<Option<leads::Model>> {
        self.lead_repo().get(id).await
    }

    pub async fn create_lead(&self, novo: NovoLead) -> Result<leads::Model> {
        self.lead_repo().create(novo).await
    }

    pub async fn update_lead(&self, id: i32, dados: AtualizaLead) -> Result<Option<leads::Model>> {
        self.lead_repo().update(id, dados).await
    }

    pub async fn delete_lead(&self, id: i32) -> Result<bool> {
        self.lead_repo().delete(id).await
    }

    // ========================================================================
    // Imóveis
    // ========================================================================

    pub async fn list_imoveis(&self) -> Result<Vec<imoveis::Model>> {
        self.imovel_repo().list().await
    }

    pub async fn list_imoveis_por_status(&self, status: StatusImovel) -> Result<Vec<imoveis::Model>> {
        self.imovel_repo().list_por_status(status).await
    }

    pub async fn get_imovel(&self, id: i32) -> Result<Option<imoveis::Model>> {
        self.imovel_repo().get(id).await
    }

    pub async fn create_imovel(&self, novo: NovoImovel) -> Result<imoveis::Model> {
        self.imovel_repo().create(novo).await
    }

    pub async fn update_imovel(&self, id: i32, dados: AtualizaImovel) -> Result<Option<imoveis::Model>> {
        self.imovel_repo().update(id, dados).await
    }

    pub async fn marcar_status_imovel(&self, id: i32, status: StatusImovel) -> Result<()> {
        self.imovel_repo().marcar_status(id, status).await
    }

    pub async fn delete_imovel(&self, id: i32) -> Result<bool> {
        self.imovel_repo().delete(id).await
    }

    // ========================================================================
    // Transações / Comissões
    // ========================================================================

    pub async fn list_transacoes(&self) -> Result<Vec<transacoes::Model>> {
        self.transacao_repo().list().await
    }

    pub async fn list_transacoes_por_corretor(
        &self,
        corretor_id: i32,
    ) -> Result<Vec<transacoes::Model>> {
        self.transacao_repo().list_por_corretor(corretor_id).await
    }

    pub async fn get_transacao(&self, id: i32) -> Result<Option<transacoes::Model>> {
        self.transacao_repo().get(id).await
    }

    pub async fn list_comissoes(&self) -> Result<Vec<comissoes::Model>> {
        self.comissao_repo().list().await
    }

    pub async fn list_comissoes_por_corretor(
        &self,
        corretor_id: i32,
    ) -> Result<Vec<comissoes::Model>> {
        self.comissao_repo().list_por_corretor(corretor_id).await
    }

    pub async fn get_comissao(&self, id: i32) -> Result<Option<comissoes::Model>> {
        self.comissao_repo().get(id).await
    }

    pub async fn marcar_comissao_paga(&self, id: i32) -> Result<bool> {
        self.comissao_repo().marcar_paga(id).await
    }

    pub async fn get_config_comissao(
        &self,
        tipo: TipoTransacao,
    ) -> Result<Option<config_comissoes::Model>> {
        self.comissao_repo().get_config(tipo).await
    }

    pub async fn list_config_comissoes(&self) -> Result<Vec<config_comissoes::Model>> {
        self.comissao_repo().list_config().await
    }

    pub async fn upsert_config_comissao(
        &self,
        tipo: TipoTransacao,
        percentual_captacao: i32,
        percentual_venda: i32,
    ) -> Result<config_comissoes::Model> {
        self.comissao_repo()
            .upsert_config(tipo, percentual_captacao, percentual_venda)
            .await
    }

    // ========================================================================
    // Atividades
    // ========================================================================

    pub async fn list_atividades(&self) -> Result<Vec<atividades::Model>> {
        self.atividade_repo().list().await
    }

    pub async fn list_atividades_por_corretor(
        &self,
        corretor_id: i32,
    ) -> Result<Vec<atividades::Model>> {
        self.atividade_repo().list_por_corretor(corretor_id).await
    }

    pub async fn create_atividade(&self, nova: NovaAtividade) -> Result<atividades::Model> {
        self.atividade_repo().create(nova).await
    }

    pub async fn update_atividade(
        &self,
        id: i32,
        dados: AtualizaAtividade,
    ) -> Result<Option<atividades::Model>> {
        self.atividade_repo().update(id, dados).await
    }

    pub async fn delete_atividade(&self, id: i32) -> Result<bool> {
        self.atividade_repo().delete(id).await
    }
}
