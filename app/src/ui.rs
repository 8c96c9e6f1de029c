use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crate::error::LookupError;
use crate::models::Classification;
use crate::summary::Resumo;

static QUIET: AtomicBool = AtomicBool::new(false);
static VERBOSE: AtomicBool = AtomicBool::new(false);

pub fn init(quiet: bool, verbose: bool) {
    QUIET.store(quiet, Ordering::Relaxed);
    VERBOSE.store(verbose, Ordering::Relaxed);
}

fn is_quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

fn is_verbose() -> bool {
    VERBOSE.load(Ordering::Relaxed)
}

pub fn print_info(message: &str) {
    if !is_quiet() {
        println!("{} {}", "ℹ".blue(), message);
    }
}

pub fn print_success(message: &str) {
    if !is_quiet() {
        println!("{} {}", "✓".green().bold(), message.green());
    }
}

pub fn print_warning(message: &str) {
    if !is_quiet() {
        println!("{} {}", "⚠".yellow().bold(), message.yellow());
    }
}

pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red().bold(), message.red());
}

pub fn print_header(message: &str) {
    if !is_quiet() {
        println!("\n{}", message.bold().cyan());
        println!("{}", "─".repeat(message.chars().count()).cyan());
    }
}

pub fn print_verbose(message: &str) {
    if is_verbose() && !is_quiet() {
        println!("  {}", message.dimmed());
    }
}

pub fn print_item(rotulo: &str, descricao: &str) {
    if !is_quiet() {
        println!("  {} {} - {}", "•".cyan(), rotulo, descricao);
    }
}

pub fn print_separator() {
    if !is_quiet() {
        println!("{}", "=".repeat(60).dimmed());
    }
}

/// Indicador de ocupado enquanto a consulta está em andamento.
pub fn spinner(message: &str) -> ProgressBar {
    if is_quiet() {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Texto curto mostrado ao usuário para cada tipo de falha.
pub fn mensagem_erro(erro: &LookupError) -> String {
    match erro {
        LookupError::EmptyInput => "Por favor, digite um CNPJ.".to_string(),
        LookupError::InvalidIdentifierLength { .. } => {
            "ERRO: O CNPJ deve conter 14 dígitos.".to_string()
        }
        LookupError::RegistryError(msg) => format!("Erro na Receita: {}", msg),
        LookupError::RateLimited => "Muitas consultas seguidas. Aguarde 1 minuto.".to_string(),
        LookupError::UpstreamError { .. } => "Erro de conexão com a API.".to_string(),
        LookupError::NetworkError(causa) => format!("Erro técnico: {}", causa),
    }
}

pub fn print_falha(erro: &LookupError) {
    let mensagem = mensagem_erro(erro);
    match erro {
        LookupError::EmptyInput | LookupError::RateLimited => print_warning(&mensagem),
        _ => print_error(&mensagem),
    }
}

pub fn render_resumo(resumo: &Resumo) {
    print_header(&resumo.nome);
    println!("Fantasia: {}", resumo.fantasia);
    println!("CNPJ: {}", resumo.cnpj);
    println!("Situação: {}", resumo.situacao);
    println!();

    match resumo.classificacao {
        Classification::Simples => {
            print_success("✅ EMPRESA OPTANTE PELO SIMPLES NACIONAL");
            if let Some(desde) = &resumo.optante_desde {
                println!("  Optante desde: {}", desde);
            }
        }
        Classification::Normal => print_info("ℹ️ EMPRESA DE REGIME NORMAL (Lucro Presumido/Real)"),
    }

    print_header("📝 Preenchimento no GCOM");
    println!("  [1] Regime Federal:  {}", resumo.regime_federal.bold());
    println!("  [2] Regime Estadual: {}", resumo.regime_estadual.bold());

    print_separator();
    println!("{} {}", "Natureza jurídica:".bold(), resumo.natureza_juridica);
    match &resumo.atividade_principal {
        Some(atividade) => println!(
            "{} {} - {}",
            "Atividade:".bold(),
            atividade.code,
            atividade.text
        ),
        None => println!("{} ---", "Atividade:".bold()),
    }
    println!("{} {}", "Endereço:".bold(), resumo.endereco.linha());
    println!("{} {}", "Telefone:".bold(), resumo.telefone);
    println!("{} {}", "E-mail:".bold(), resumo.email);
}
