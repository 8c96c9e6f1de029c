//! Testes da API HTTP com `actix_web::test` e a Receita simulada.

use actix_web::{test, web, App};
use validador_fiscal::api::{self, AppState};
use validador_fiscal::{RegistryClient, RegistryConfig};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn app_state(mock_server: &MockServer) -> web::Data<AppState> {
    let config = RegistryConfig::with_base_url(&mock_server.uri()).unwrap();
    web::Data::new(AppState {
        client: RegistryClient::new(config).unwrap(),
    })
}

#[actix_web::test]
async fn lookup_returns_summary_json() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/cnpj/11222333000181"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "OK",
            "nome": "EMPRESA TESTE SA",
            "simples": {"optante": false}
        })))
        .mount(&mock_server)
        .await;

    let app = test::init_service(
        App::new()
            .app_data(app_state(&mock_server))
            .configure(api::configure),
    )
    .await;

    let req = test::TestRequest::get().uri("/cnpj/11222333000181").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["nome"], "EMPRESA TESTE SA");
    assert_eq!(body["classificacao"], "NORMAL");
    assert_eq!(body["regime_federal"], "NORMAL");
    assert_eq!(body["regime_estadual"], "NORMAL");
    assert_eq!(body["cnpj"], "11.222.333/0001-81");
}

#[actix_web::test]
async fn short_identifier_is_bad_request() {
    let mock_server = MockServer::start().await;
    let app = test::init_service(
        App::new()
            .app_data(app_state(&mock_server))
            .configure(api::configure),
    )
    .await;

    let req = test::TestRequest::get().uri("/cnpj/123").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["erro"], "invalid_identifier_length");
    assert_eq!(body["mensagem"], "ERRO: O CNPJ deve conter 14 dígitos.");
}

#[actix_web::test]
async fn rate_limit_is_forwarded_without_summary() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&mock_server)
        .await;

    let app = test::init_service(
        App::new()
            .app_data(app_state(&mock_server))
            .configure(api::configure),
    )
    .await;

    let req = test::TestRequest::get().uri("/cnpj/11222333000181").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 429);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["erro"], "rate_limited");
    assert!(body.get("nome").is_none());
}

#[actix_web::test]
async fn registry_error_is_not_found() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "ERROR",
            "message": "CNPJ inválido"
        })))
        .mount(&mock_server)
        .await;

    let app = test::init_service(
        App::new()
            .app_data(app_state(&mock_server))
            .configure(api::configure),
    )
    .await;

    let req = test::TestRequest::get().uri("/cnpj/11222333000181").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["mensagem"], "Erro na Receita: CNPJ inválido");
}

#[actix_web::test]
async fn health() {
    let mock_server = MockServer::start().await;
    let app = test::init_service(
        App::new()
            .app_data(app_state(&mock_server))
            .configure(api::configure),
    )
    .await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["status"], "ok");
}

#[actix_web::test]
async fn every_listed_route_is_served() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&mock_server)
        .await;

    let app = test::init_service(
        App::new()
            .app_data(app_state(&mock_server))
            .configure(api::configure),
    )
    .await;

    for rota in api::ROTAS {
        let req = test::TestRequest::get().uri(rota.exemplo).to_request();
        let resp = test::call_service(&app, req).await;
        assert_ne!(resp.status(), 404, "rota não servida: {}", rota.caminho);
    }
}

#[actix_web::test]
async fn malformed_fields_do_not_break_summary_json() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/cnpj/11222333000181"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "OK",
            "numero": 123,
            "atividade_principal": [{}, "x"],
            "simples": {"optante": true, "data_opcao": "2007-07-01"}
        })))
        .mount(&mock_server)
        .await;

    let app = test::init_service(
        App::new()
            .app_data(app_state(&mock_server))
            .configure(api::configure),
    )
    .await;

    let req = test::TestRequest::get().uri("/cnpj/11222333000181").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["classificacao"], "SIMPLES");
    assert_eq!(body["endereco"]["numero"], "123");
    assert_eq!(body["optante_desde"], "2007-07-01");
}
