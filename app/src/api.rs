use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse, Result as ActixResult};

use crate::error::LookupError;
use crate::registry::{self, RegistryClient};
use crate::ui;

/// Rota exposta pelo servidor.
pub struct Rota {
    pub caminho: &'static str,
    pub exemplo: &'static str,
    pub descricao: &'static str,
}

pub const ROTAS: &[Rota] = &[
    Rota {
        caminho: "/cnpj/{cnpj}",
        exemplo: "/cnpj/00000000000191",
        descricao: "Consulta o regime tributário de um CNPJ",
    },
    Rota {
        caminho: "/health",
        exemplo: "/health",
        descricao: "Verifica status do servidor",
    },
];

pub struct AppState {
    pub client: RegistryClient,
}

fn status_para(erro: &LookupError) -> StatusCode {
    match erro {
        LookupError::EmptyInput | LookupError::InvalidIdentifierLength { .. } => {
            StatusCode::BAD_REQUEST
        }
        LookupError::RegistryError(_) => StatusCode::NOT_FOUND,
        LookupError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
        LookupError::UpstreamError { .. } | LookupError::NetworkError(_) => StatusCode::BAD_GATEWAY,
    }
}

pub async fn consultar_cnpj(
    cnpj: web::Path<String>,
    state: web::Data<AppState>,
) -> ActixResult<HttpResponse> {
    match registry::consultar_cnpj(&state.client, &cnpj).await {
        Ok(resumo) => Ok(HttpResponse::Ok().json(resumo)),
        Err(erro) => Ok(HttpResponse::build(status_para(&erro)).json(serde_json::json!({
            "erro": erro.kind(),
            "mensagem": ui::mensagem_erro(&erro),
        }))),
    }
}

async fn health_check() -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "mensagem": "API de consulta de CNPJ está funcionando"
    })))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route(ROTAS[0].caminho, web::get().to(consultar_cnpj))
        .route(ROTAS[1].caminho, web::get().to(health_check));
}

pub async fn start_server(client: RegistryClient, host: &str, port: u16) -> anyhow::Result<()> {
    let app_state = web::Data::new(AppState { client });
    let address = format!("{}:{}", host, port);
    let workers = num_cpus::get();

    ui::print_header("🌐 Servidor API REST");
    ui::print_success(&format!("Servidor iniciando em http://{}", address));
    ui::print_info("Endpoints disponíveis:");
    for rota in ROTAS {
        ui::print_item(&format!("GET {:<14}", rota.caminho), rota.descricao);
    }
    ui::print_verbose(&format!("Exemplo: curl http://{}{}", address, ROTAS[0].exemplo));
    ui::print_separator();
    tracing::info!(%address, workers, "servidor HTTP iniciado");

    actix_web::HttpServer::new(move || {
        actix_web::App::new()
            .app_data(app_state.clone())
            .configure(configure)
    })
    .bind(&address)?
    .workers(workers)
    .run()
    .await?;

    Ok(())
}
