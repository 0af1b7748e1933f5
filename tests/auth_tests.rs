use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use imobix::config::Config;
use imobix::services::MSG_CREDENCIAIS_INVALIDAS;
use tower::ServiceExt;

/// Admin seeded by migration (must match m20240102_seed_admin.rs)
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

/// Variante que devolve o estado junto, para montar cenários direto no banco.
async fn spawn_app_com_estado() -> (Router, std::sync::Arc<imobix::AppState>) {
    let mut config = Config::default();
    config.general.database_path = "sqlite::memory:".to_string();
    config.general.max_db_connections = 1;
    config.general.min_db_connections = 1;

    let state = imobix::api::create_app_state_from_config(config, None)
        .await
        .expect("Failed to create app state");
    (imobix::api::router(state.clone()).await, state)
}

async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

fn session_cookie(response: &axum::response::Response) -> String {
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

async fn login(app: &Router, email: &str, senha: &str) -> axum::response::Response {
    app.clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/corretor/login")
                .header("Content-Type", "application/json")
                .body(Body::from(
                    serde_json::json!({ "email": email, "senha": senha }).to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap()
}

async fn admin_cookie(app: &Router) -> String {
    let response = login(app, ADMIN_EMAIL, ADMIN_SENHA).await;
    assert_eq!(response.status(), StatusCode::OK);
    session_cookie(&response)
}

#[tokio::test]
async fn test_login_campos_ausentes() {
    let app = spawn_app().await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/corretor/login")
                .header("Content-Type", "application/json")
                .body(Body::from(
                    serde_json::json!({ "email": ADMIN_EMAIL }).to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_login_falha_com_mensagem_uniforme() {
    let app = spawn_app().await;

    // Senha errada e email inexistente respondem exatamente igual.
    let response = login(&app, ADMIN_EMAIL, "senha-errada").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = json_body(response).await;
    assert_eq!(body["sucesso"], false);
    assert_eq!(body["motivo"], MSG_CREDENCIAIS_INVALIDAS);

    let response = login(&app, "nao-existe@imobix.local", "qualquer-senha").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = json_body(response).await;
    assert_eq!(body["motivo"], MSG_CREDENCIAIS_INVALIDAS);
}

#[tokio::test]
async fn test_login_corretor_inativo_mesma_mensagem() {
    let app = spawn_app().await;
    let cookie = admin_cookie(&app).await;

    let body = criar_corretor(&app, &cookie, "inativa@imobix.local", "11122233344").await;
    let corretor_id = body["dados"]["corretor"]["id"].as_i64().unwrap();
    let senha_temp = body["dados"]["senhaTemporaria"].as_str().unwrap().to_string();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri(format!("/api/corretores/{corretor_id}"))
                .header("Content-Type", "application/json")
                .header("Cookie", &cookie)
                .body(Body::from(
                    serde_json::json!({ "ativo": false }).to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // Mesmo com a senha certa, conta desativada responde igual às demais falhas.
    let response = login(&app, "inativa@imobix.local", &senha_temp).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = json_body(response).await;
    assert_eq!(body["motivo"], MSG_CREDENCIAIS_INVALIDAS);
}

#[tokio::test]
async fn test_login_sem_credencial_emitida_mesma_mensagem() {
    use sea_orm::{ActiveModelTrait, Set};

    let (app, state) = spawn_app_com_estado().await;

    // Corretor cadastrado sem hash nenhum, como antes da emissão de credencial.
    let agora = chrono::Utc::now().to_rfc3339();
    imobix::entities::corretores::ActiveModel {
        nome: Set("Sem Credencial".to_string()),
        cpf: Set("99988877766".to_string()),
        creci: Set("99999-F".to_string()),
        telefone: Set(None),
        email: Set("sem-credencial@imobix.local".to_string()),
        equipe: Set(None),
        gerente_id: Set(None),
        meta_vendas: Set(0),
        meta_locacoes: Set(0),
        meta_captacoes: Set(0),
        ativo: Set(true),
        senha_hash: Set(None),
        senha_temporaria: Set(false),
        ultimo_acesso: Set(None),
        created_at: Set(agora.clone()),
        updated_at: Set(agora),
        ..Default::default()
    }
    .insert(&state.store().conn)
    .await
    .expect("Failed to insert corretor");

    let response = login(&app, "sem-credencial@imobix.local", "qualquer-senha").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = json_body(response).await;
    assert_eq!(body["motivo"], MSG_CREDENCIAIS_INVALIDAS);
}

#[tokio::test]
async fn test_login_sucesso() {
    let app = spawn_app().await;

    let response = login(&app, ADMIN_EMAIL, ADMIN_SENHA).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["sucesso"], true);
    assert_eq!(body["corretor"]["email"], ADMIN_EMAIL);
    assert!(body["corretor"]["id"].is_number());
    assert_eq!(body["senhaTemporaria"], false);
}

#[tokio::test]
async fn test_rotas_protegidas_exigem_sessao() {
    let app = spawn_app().await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/corretores")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let cookie = admin_cookie(&app).await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/corretores")
                .header("Cookie", &cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

async fn criar_corretor(app: &Router, cookie: &str, email: &str, cpf: &str) -> serde_json::Value {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/corretores")
                .header("Content-Type", "application/json")
                .header("Cookie", cookie)
                .body(Body::from(
                    serde_json::json!({
                        "nome": "Maria Teste",
                        "cpf": cpf,
                        "creci": "12345-F",
                        "email": email,
                    })
                    .to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    json_body(response).await
}

#[tokio::test]
async fn test_fluxo_senha_temporaria() {
    let app = spawn_app().await;
    let cookie = admin_cookie(&app).await;

    let body = criar_corretor(&app, &cookie, "maria@imobix.local", "11122233344").await;
    let senha_temp = body["dados"]["senhaTemporaria"].as_str().unwrap().to_string();
    let corretor_id = body["dados"]["corretor"]["id"].as_i64().unwrap();

    // A credencial provisória tem 10 caracteres de [A-Z0-9].
    assert_eq!(senha_temp.len(), 10);
    assert!(
        senha_temp
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
    );

    // Login com a provisória sinaliza a troca obrigatória.
    let response = login(&app, "maria@imobix.local", &senha_temp).await;
    assert_eq!(response.status(), StatusCode::OK);
    let maria_cookie = session_cookie(&response);
    let login_body = json_body(response).await;
    assert_eq!(login_body["senhaTemporaria"], true);

    // Rotas protegidas ficam bloqueadas até a troca.
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/imoveis")
                .header("Cookie", &maria_cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    // Nova senha curta demais é recusada.
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/corretor/alterar-senha")
                .header("Content-Type", "application/json")
                .header("Cookie", &maria_cookie)
                .body(Body::from(
                    serde_json::json!({
                        "corretorId": corretor_id,
                        "senhaAtual": senha_temp,
                        "novaSenha": "curta",
                    })
                    .to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Com credencial provisória a senha atual não é conferida.
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/corretor/alterar-senha")
                .header("Content-Type", "application/json")
                .header("Cookie", &maria_cookie)
                .body(Body::from(
                    serde_json::json!({
                        "corretorId": corretor_id,
                        "senhaAtual": "nem-olha-para-isto",
                        "novaSenha": "senha-definitiva-123",
                    })
                    .to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    // `mensagem` fica no topo do corpo, como `corretor` no login.
    let body = json_body(response).await;
    assert_eq!(body["sucesso"], true);
    assert_eq!(body["mensagem"], "Senha alterada com sucesso");
    assert!(body["dados"].is_null());

    // A sessão deixa de estar bloqueada.
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/imoveis")
                .header("Cookie", &maria_cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // A provisória morreu; a definitiva funciona e já não é temporária.
    let response = login(&app, "maria@imobix.local", &senha_temp).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = login(&app, "maria@imobix.local", "senha-definitiva-123").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["senhaTemporaria"], false);
}

#[tokio::test]
async fn test_alterar_senha_atual_incorreta() {
    let app = spawn_app().await;
    let cookie = admin_cookie(&app).await;

    // Admin não tem credencial provisória; a senha atual é exigida.
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/corretor/alterar-senha")
                .header("Content-Type", "application/json")
                .header("Cookie", &cookie)
                .body(Body::from(
                    serde_json::json!({
                        "corretorId": 1,
                        "senhaAtual": "senha-errada",
                        "novaSenha": "nova-senha-valida",
                    })
                    .to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["motivo"], "Senha atual incorreta");

    // A tentativa rejeitada não tocou na credencial.
    let response = login(&app, ADMIN_EMAIL, ADMIN_SENHA).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_alterar_senha_campos_ausentes() {
    let app = spawn_app().await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/corretor/alterar-senha")
                .header("Content-Type", "application/json")
                .body(Body::from(
                    serde_json::json!({ "corretorId": 1 }).to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_resetar_senha() {
    let app = spawn_app().await;
    let cookie = admin_cookie(&app).await;

    let body = criar_corretor(&app, &cookie, "joao@imobix.local", "55566677788").await;
    let corretor_id = body["dados"]["corretor"]["id"].as_i64().unwrap();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(format!("/api/corretores/{corretor_id}/resetar-senha"))
                .header("Cookie", &cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    let senha = body["dados"]["senhaTemporaria"].as_str().unwrap().to_string();
    assert_eq!(senha.len(), 10);

    // A credencial emitida funciona e chega marcada como provisória.
    let response = login(&app, "joao@imobix.local", &senha).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["senhaTemporaria"], true);
}

#[tokio::test]
async fn test_logout_encerra_sessao() {
    let app = spawn_app().await;
    let cookie = admin_cookie(&app).await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/corretor/logout")
                .header("Cookie", &cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/corretores")
                .header("Cookie", &cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
