use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use imobix::config::Config;
use tower::ServiceExt;

const ADMIN_EMAIL: &str = "admin@imobix.local";
const ADMIN_SENHA: &str = "trocar-esta-senha";

async fn spawn_app() -> Router {
    let mut config = Config::default();
    config.general.database_path = "sqlite::memory:".to_string();
    // Uma única conexão: o banco em memória vive nela.
    config.general.max_db_connections = 1;
    config.general.min_db_connections = 1;

    let state = imobix::api::create_app_state_from_config(config, None)
        .await
        .expect("Failed to create app state");
    imobix::api::router(state).await
}

async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

async fn admin_cookie(app: &Router) -> String {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/corretor/login")
                .header("Content-Type", "application/json")
                .body(Body::from(
                    serde_json::json!({ "email": ADMIN_EMAIL, "senha": ADMIN_SENHA }).to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    response
        .headers()
        .get("set-cookie")
        .expect("missing set-cookie header")
        .to_str()
        .unwrap()
        .split(';')
        .next()
        .unwrap()
        .to_string()
}

async fn post_json(
    app: &Router,
    cookie: &str,
    uri: &str,
    body: serde_json::Value,
) -> axum::response::Response {
    app.clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "application/json")
                .header("Cookie", cookie)
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

async fn put_json(
    app: &Router,
    cookie: &str,
    uri: &str,
    body: serde_json::Value,
) -> axum::response::Response {
    app.clone()
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri(uri)
                .header("Content-Type", "application/json")
                .header("Cookie", cookie)
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

async fn get_json(app: &Router, cookie: &str, uri: &str) -> serde_json::Value {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri(uri)
                .header("Cookie", cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    json_body(response).await
}

/// Cria proprietário e imóvel, devolvendo o id do imóvel.
async fn seed_imovel(app: &Router, cookie: &str) -> i64 {
    let response = post_json(
        app,
        cookie,
        "/api/proprietarios",
        serde_json::json!({ "nome": "Dono Teste", "cpfCnpj": "99988877766" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let prop = json_body(response).await;
    let proprietario_id = prop["dados"]["id"].as_i64().unwrap();

    let response = post_json(
        app,
        cookie,
        "/api/imoveis",
        serde_json::json!({
            "codigo": "AP-001",
            "titulo": "Apartamento Centro",
            "tipo": "apartamento",
            "finalidade": "venda",
            "proprietarioId": proprietario_id,
            "precoVenda": 50_000_000,
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let imovel = json_body(response).await;
    imovel["dados"]["id"].as_i64().unwrap()
}

fn registro_transacao(imovel_id: i64, com_captador: bool) -> serde_json::Value {
    let mut registro = serde_json::json!({
        "imovelId": imovel_id,
        "tipo": "venda",
        "valor": 500_000,
        "corretorVendedorId": 1,
        "dataTransacao": "2026-08-30",
    });
    if com_captador {
        registro["corretorCaptadorId"] = serde_json::json!(1);
    }
    registro
}

#[tokio::test]
async fn test_transacao_sem_config_falha() {
    let app = spawn_app().await;
    let cookie = admin_cookie(&app).await;
    let imovel_id = seed_imovel(&app, &cookie).await;

    let response = post_json(
        &app,
        &cookie,
        "/api/transacoes",
        registro_transacao(imovel_id, true),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["motivo"], "Configuração de comissão ausente");

    // Nada foi persistido.
    let transacoes = get_json(&app, &cookie, "/api/transacoes").await;
    assert_eq!(transacoes["dados"].as_array().unwrap().len(), 0);
    let comissoes = get_json(&app, &cookie, "/api/comissoes").await;
    assert_eq!(comissoes["dados"].as_array().unwrap().len(), 0);
}

async fn configurar_percentuais(app: &Router, cookie: &str, captacao: i32, venda: i32) {
    let response = put_json(
        app,
        cookie,
        "/api/comissoes/config",
        serde_json::json!({
            "tipo": "venda",
            "percentualCaptacao": captacao,
            "percentualVenda": venda,
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_transacao_gera_comissoes() {
    let app = spawn_app().await;
    let cookie = admin_cookie(&app).await;
    let imovel_id = seed_imovel(&app, &cookie).await;

    // 3% de captação, 5% de venda, em pontos-base.
    configurar_percentuais(&app, &cookie, 300, 500).await;

    let response = post_json(
        &app,
        &cookie,
        "/api/transacoes",
        registro_transacao(imovel_id, true),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["dados"]["comissoesGeradas"], 2);

    let comissoes = get_json(&app, &cookie, "/api/comissoes").await;
    let lista = comissoes["dados"].as_array().unwrap();
    assert_eq!(lista.len(), 2);

    let captacao = lista.iter().find(|c| c["tipo"] == "captacao").unwrap();
    let venda = lista.iter().find(|c| c["tipo"] == "venda").unwrap();

    // R$ 5.000,00: 3% = R$ 150,00 e 5% = R$ 250,00, em centavos.
    assert_eq!(captacao["valor"], 15_000);
    assert_eq!(captacao["percentual"], 300);
    assert_eq!(captacao["status"], "pendente");
    assert_eq!(venda["valor"], 25_000);
    assert_eq!(venda["percentual"], 500);

    // O imóvel sai de disponível.
    let imovel = get_json(&app, &cookie, &format!("/api/imoveis/{imovel_id}")).await;
    assert_eq!(imovel["dados"]["status"], "vendido");
}

#[tokio::test]
async fn test_transacao_sem_captador_gera_uma_comissao() {
    let app = spawn_app().await;
    let cookie = admin_cookie(&app).await;
    let imovel_id = seed_imovel(&app, &cookie).await;

    configurar_percentuais(&app, &cookie, 300, 500).await;

    let response = post_json(
        &app,
        &cookie,
        "/api/transacoes",
        registro_transacao(imovel_id, false),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["dados"]["comissoesGeradas"], 1);

    let comissoes = get_json(&app, &cookie, "/api/comissoes").await;
    let lista = comissoes["dados"].as_array().unwrap();
    assert_eq!(lista.len(), 1);
    assert_eq!(lista[0]["tipo"], "venda");
}

#[tokio::test]
async fn test_percentuais_congelados_apos_registro() {
    let app = spawn_app().await;
    let cookie = admin_cookie(&app).await;
    let imovel_id = seed_imovel(&app, &cookie).await;

    configurar_percentuais(&app, &cookie, 300, 500).await;

    let response = post_json(
        &app,
        &cookie,
        "/api/transacoes",
        registro_transacao(imovel_id, true),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    // Mudar a configuração depois não altera comissões já geradas.
    configurar_percentuais(&app, &cookie, 100, 100).await;

    let comissoes = get_json(&app, &cookie, "/api/comissoes").await;
    let lista = comissoes["dados"].as_array().unwrap();
    let captacao = lista.iter().find(|c| c["tipo"] == "captacao").unwrap();
    assert_eq!(captacao["percentual"], 300);
    assert_eq!(captacao["valor"], 15_000);
}

#[tokio::test]
async fn test_pagar_comissao_e_rejeitar_pagamento_duplo() {
    let app = spawn_app().await;
    let cookie = admin_cookie(&app).await;
    let imovel_id = seed_imovel(&app, &cookie).await;

    configurar_percentuais(&app, &cookie, 300, 500).await;

    let response = post_json(
        &app,
        &cookie,
        "/api/transacoes",
        registro_transacao(imovel_id, false),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let comissoes = get_json(&app, &cookie, "/api/comissoes").await;
    let comissao_id = comissoes["dados"][0]["id"].as_i64().unwrap();

    let response = post_json(
        &app,
        &cookie,
        &format!("/api/comissoes/{comissao_id}/pagar"),
        serde_json::json!({}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let comissoes = get_json(&app, &cookie, "/api/comissoes").await;
    assert_eq!(comissoes["dados"][0]["status"], "pago");
    assert!(comissoes["dados"][0]["dataPagamento"].is_string());
    let data_pagamento = comissoes["dados"][0]["dataPagamento"].clone();

    // Segunda tentativa é conflito, não idempotência silenciosa.
    let response = post_json(
        &app,
        &cookie,
        &format!("/api/comissoes/{comissao_id}/pagar"),
        serde_json::json!({}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body = json_body(response).await;
    assert_eq!(body["motivo"], "Comissão já paga");

    let comissoes = get_json(&app, &cookie, "/api/comissoes").await;
    assert_eq!(comissoes["dados"][0]["dataPagamento"], data_pagamento);
}

#[tokio::test]
async fn test_upsert_config_mantem_uma_linha_por_tipo() {
    let app = spawn_app().await;
    let cookie = admin_cookie(&app).await;

    configurar_percentuais(&app, &cookie, 300, 500).await;
    configurar_percentuais(&app, &cookie, 200, 400).await;

    let configs = get_json(&app, &cookie, "/api/comissoes/config").await;
    let lista = configs["dados"].as_array().unwrap();
    assert_eq!(lista.len(), 1);
    assert_eq!(lista[0]["percentualCaptacao"], 200);
    assert_eq!(lista[0]["percentualVenda"], 400);
}

#[tokio::test]
async fn test_config_percentual_invalido() {
    let app = spawn_app().await;
    let cookie = admin_cookie(&app).await;

    let response = put_json(
        &app,
        &cookie,
        "/api/comissoes/config",
        serde_json::json!({
            "tipo": "venda",
            "percentualCaptacao": 10_001,
            "percentualVenda": 500,
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_transacao_valor_invalido() {
    let app = spawn_app().await;
    let cookie = admin_cookie(&app).await;
    let imovel_id = seed_imovel(&app, &cookie).await;

    configurar_percentuais(&app, &cookie, 300, 500).await;

    let mut registro = registro_transacao(imovel_id, false);
    registro["valor"] = serde_json::json!(0);

    let response = post_json(&app, &cookie, "/api/transacoes", registro).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
