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

async fn request(
    app: &Router,
    cookie: &str,
    method: &str,
    uri: &str,
    body: Option<serde_json::Value>,
) -> axum::response::Response {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("Cookie", cookie);

    let request = match body {
        Some(json) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    app.clone().oneshot(request).await.unwrap()
}

#[tokio::test]
async fn test_proprietarios_crud() {
    let app = spawn_app().await;
    let cookie = admin_cookie(&app).await;

    let response = request(
        &app,
        &cookie,
        "POST",
        "/api/proprietarios",
        Some(serde_json::json!({
            "nome": "Carlos Dono",
            "cpfCnpj": "12345678900",
            "telefone": "11 99999-0000",
        })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["sucesso"], true);
    let id = body["dados"]["id"].as_i64().unwrap();
    assert_eq!(body["dados"]["cpfCnpj"], "12345678900");

    let response = request(
        &app,
        &cookie,
        "PUT",
        &format!("/api/proprietarios/{id}"),
        Some(serde_json::json!({ "telefone": "11 98888-1111" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["dados"]["telefone"], "11 98888-1111");
    // Campos não enviados permanecem.
    assert_eq!(body["dados"]["nome"], "Carlos Dono");

    let response = request(
        &app,
        &cookie,
        "DELETE",
        &format!("/api/proprietarios/{id}"),
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = request(&app, &cookie, "GET", &format!("/api/proprietarios/{id}"), None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_inquilinos_crud() {
    let app = spawn_app().await;
    let cookie = admin_cookie(&app).await;

    let response = request(
        &app,
        &cookie,
        "POST",
        "/api/inquilinos",
        Some(serde_json::json!({ "nome": "Ana Locatária", "cpf": "98765432100" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    let id = body["dados"]["id"].as_i64().unwrap();

    let response = request(&app, &cookie, "GET", "/api/inquilinos", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["dados"].as_array().unwrap().len(), 1);

    let response = request(&app, &cookie, "DELETE", &format!("/api/inquilinos/{id}"), None).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_leads_fluxo() {
    let app = spawn_app().await;
    let cookie = admin_cookie(&app).await;

    // Lead entra sempre como novo.
    let response = request(
        &app,
        &cookie,
        "POST",
        "/api/leads",
        Some(serde_json::json!({
            "nome": "Interessado Silva",
            "origem": "portal",
            "corretorId": 1,
        })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    let id = body["dados"]["id"].as_i64().unwrap();
    assert_eq!(body["dados"]["status"], "novo");

    let response = request(
        &app,
        &cookie,
        "PUT",
        &format!("/api/leads/{id}"),
        Some(serde_json::json!({ "status": "qualificado" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["dados"]["status"], "qualificado");

    // Filtro por corretor.
    let response = request(&app, &cookie, "GET", "/api/leads?corretorId=1", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["dados"].as_array().unwrap().len(), 1);

    let response = request(&app, &cookie, "GET", "/api/leads?corretorId=2", None).await;
    let body = json_body(response).await;
    assert_eq!(body["dados"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_imoveis_validacao() {
    let app = spawn_app().await;
    let cookie = admin_cookie(&app).await;

    // Sem código não entra.
    let response = request(
        &app,
        &cookie,
        "POST",
        "/api/imoveis",
        Some(serde_json::json!({
            "codigo": "",
            "titulo": "Casa",
            "tipo": "casa",
            "finalidade": "venda",
            "proprietarioId": 1,
        })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_atividades() {
    let app = spawn_app().await;
    let cookie = admin_cookie(&app).await;

    let response = request(
        &app,
        &cookie,
        "POST",
        "/api/atividades",
        Some(serde_json::json!({
            "corretorId": 1,
            "tipo": "visita",
            "titulo": "Visita ao AP-001",
            "dataHora": "2026-08-30T14:00:00Z",
            "duracao": 45,
        })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = request(&app, &cookie, "GET", "/api/atividades?corretorId=1", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["dados"].as_array().unwrap().len(), 1);
    assert_eq!(body["dados"][0]["tipo"], "visita");
    let id = body["dados"][0]["id"].as_i64().unwrap();

    // Só os campos de agenda mudam; o vínculo com o corretor fica como está.
    let response = request(
        &app,
        &cookie,
        "PUT",
        &format!("/api/atividades/{id}"),
        Some(serde_json::json!({
            "resultado": "Proposta encaminhada",
            "duracao": 60,
        })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["dados"]["resultado"], "Proposta encaminhada");
    assert_eq!(body["dados"]["duracao"], 60);
    assert_eq!(body["dados"]["titulo"], "Visita ao AP-001");
    assert_eq!(body["dados"]["corretorId"], 1);
}

#[tokio::test]
async fn test_dashboard_resumo() {
    let app = spawn_app().await;
    let cookie = admin_cookie(&app).await;

    let response = request(&app, &cookie, "GET", "/api/dashboard/resumo", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;

    // Só o admin seedado existe.
    assert_eq!(body["dados"]["totalCorretores"], 1);
    assert_eq!(body["dados"]["totalImoveis"], 0);
    assert_eq!(body["dados"]["comissoesPendentes"], 0);
    assert_eq!(body["dados"]["valorComissoesPendentes"], 0);
    assert_eq!(body["dados"]["comissoesPagas"], 0);
    assert_eq!(body["dados"]["valorComissoesPagas"], 0);
}

#[tokio::test]
async fn test_corretor_nao_encontrado() {
    let app = spawn_app().await;
    let cookie = admin_cookie(&app).await;

    let response = request(&app, &cookie, "GET", "/api/corretores/999", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = request(
        &app,
        &cookie,
        "POST",
        "/api/corretores/999/resetar-senha",
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_resposta_nunca_expoe_hash() {
    let app = spawn_app().await;
    let cookie = admin_cookie(&app).await;

    let response = request(&app, &cookie, "GET", "/api/corretores/1", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;

    let serialized = body.to_string();
    assert!(!serialized.contains("senhaHash"));
    assert!(!serialized.contains("argon2"));
}
