use serde::Serialize;

/// Envelope padrão das respostas JSON.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub sucesso: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dados: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub motivo: Option<String>,
}

impl<T> ApiResponse<T> {
    pub const fn success(dados: T) -> Self {
        Self {
            sucesso: true,
            dados: Some(dados),
            motivo: None,
        }
    }

    pub fn error(motivo: impl Into<String>) -> Self {
        Self {
            sucesso: false,
            dados: None,
            motivo: Some(motivo.into()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub mensagem: String,
}

/// Painel resumido para a tela inicial.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResumo {
    pub total_imoveis: usize,
    pub imoveis_disponiveis: usize,
    pub total_leads: usize,
    pub total_corretores: usize,
    pub transacoes_registradas: usize,
    pub comissoes_pendentes: usize,
    /// Soma em centavos das comissões ainda não pagas.
    pub valor_comissoes_pendentes: i64,
    pub comissoes_pagas: usize,
    pub valor_comissoes_pagas: i64,
}
