use axum::{Json, extract::State};
use std::sync::Arc;

use super::{ApiError, ApiResponse, AppState, DashboardResumo};
use crate::entities::comissoes::StatusComissao;
use crate::entities::imoveis::StatusImovel;

/// GET /dashboard/resumo
pub async fn resumo(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<DashboardResumo>>, ApiError> {
    let store = &state.shared.store;

    let imoveis = store.list_imoveis().await?;
    let leads = store.list_leads().await?;
    let corretores = store.list_corretores().await?;
    let transacoes = store.list_transacoes().await?;
    let comissoes = store.list_comissoes().await?;

    let imoveis_disponiveis = imoveis
        .iter()
        .filter(|i| i.status == StatusImovel::Disponivel)
        .count();

    let (pendentes, pagas): (Vec<_>, Vec<_>) = comissoes
        .iter()
        .partition(|c| c.status == StatusComissao::Pendente);

    Ok(Json(ApiResponse::success(DashboardResumo {
        total_imoveis: imoveis.len(),
        imoveis_disponiveis,
        total_leads: leads.len(),
        total_corretores: corretores.len(),
        transacoes_registradas: transacoes.len(),
        comissoes_pendentes: pendentes.len(),
        valor_comissoes_pendentes: pendentes.iter().map(|c| c.valor).sum(),
        comissoes_pagas: pagas.len(),
        valor_comissoes_pagas: pagas.iter().map(|c| c.valor).sum(),
    })))
}
