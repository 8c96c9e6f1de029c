use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use validador_fiscal::registry::{RegistryClient, RegistryConfig, URL_RECEITAWS};
use validador_fiscal::{api, cnpj, ui, LookupError};

const MAX_CHARS_ENTRADA: usize = 18;

#[derive(Parser)]
#[command(name = "validador-fiscal")]
#[command(about = "Consulta o regime tributário correto de um CNPJ para cadastro", long_about = None)]
struct Cli {
    /// Modo silencioso (menos saída)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Modo verboso (mais detalhes)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Endereço base da API de CNPJ
    #[arg(long, global = true, default_value = URL_RECEITAWS)]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Consulta um CNPJ e mostra o regime tributário
    Consultar {
        /// CNPJ do cliente (com ou sem máscara)
        cnpj: String,
        /// Imprime o resultado em JSON
        #[arg(long)]
        json: bool,
    },
    /// Inicia servidor web API para consulta de CNPJ
    Server {
        /// Porta do servidor
        #[arg(short, long, default_value = "8080")]
        port: u16,
        /// Endereço do servidor
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
    },
}

fn init_tracing(verbose: bool) {
    let padrao = if verbose { "validador_fiscal=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(padrao));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn codigo_saida(erro: &LookupError) -> i32 {
    if erro.is_input_error() {
        2
    } else {
        1
    }
}

/// Retorna o código de saída do processo.
async fn consultar(client: &RegistryClient, entrada: &str, json: bool) -> Result<i32> {
    if entrada.chars().count() > MAX_CHARS_ENTRADA {
        ui::print_warning(&format!(
            "Entrada com mais de {} caracteres; apenas os dígitos serão usados.",
            MAX_CHARS_ENTRADA
        ));
    }

    let cnpj = match cnpj::normalizar(entrada) {
        Ok(cnpj) => cnpj,
        Err(erro) => {
            ui::print_falha(&erro);
            return Ok(codigo_saida(&erro));
        }
    };

    if !cnpj.digitos_verificadores_validos() {
        ui::print_verbose(&format!(
            "Dígitos verificadores de {} não conferem; consultando mesmo assim.",
            cnpj.formatado()
        ));
    }

    let spinner = ui::spinner("Consultando Receita Federal...");
    let resultado = client.consultar(&cnpj).await;
    spinner.finish_and_clear();

    match resultado {
        Ok(resumo) if json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&resumo).context("Falha ao serializar resultado")?
            );
            Ok(0)
        }
        Ok(resumo) => {
            ui::render_resumo(&resumo);
            Ok(0)
        }
        Err(erro) => {
            ui::print_falha(&erro);
            Ok(codigo_saida(&erro))
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    ui::init(cli.quiet, cli.verbose);
    init_tracing(cli.verbose);

    let config = RegistryConfig::with_base_url(&cli.api_url)
        .with_context(|| format!("URL da API inválida: {}", cli.api_url))?;
    let client = RegistryClient::new(config).context("Falha ao criar cliente HTTP")?;

    match cli.command {
        Commands::Consultar { cnpj, json } => {
            let codigo = consultar(&client, &cnpj, json).await?;
            if codigo != 0 {
                std::process::exit(codigo);
            }
        }
        Commands::Server { port, host } => {
            api::start_server(client, &host, port).await?;
        }
    }

    Ok(())
}
