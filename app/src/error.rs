use thiserror::Error;

/// Falhas possíveis de uma consulta. Todas encerram a consulta atual.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("entrada vazia")]
    EmptyInput,

    #[error("CNPJ deve conter 14 dígitos (encontrados: {encontrados})")]
    InvalidIdentifierLength { encontrados: usize },

    #[error("falha de rede: {0}")]
    NetworkError(String),

    /// A Receita respondeu 200 mas com `status == "ERROR"`.
    #[error("erro na Receita: {0}")]
    RegistryError(String),

    #[error("limite de consultas atingido (HTTP 429)")]
    RateLimited,

    #[error("resposta inesperada da API (HTTP {status})")]
    UpstreamError { status: u16 },
}

impl LookupError {
    /// Identificador estável do tipo de falha, usado na API JSON.
    pub fn kind(&self) -> &'static str {
        match self {
            LookupError::EmptyInput => "empty_input",
            LookupError::InvalidIdentifierLength { .. } => "invalid_identifier_length",
            LookupError::NetworkError(_) => "network_error",
            LookupError::RegistryError(_) => "registry_error",
            LookupError::RateLimited => "rate_limited",
            LookupError::UpstreamError { .. } => "upstream_error",
        }
    }

    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            LookupError::EmptyInput | LookupError::InvalidIdentifierLength { .. }
        )
    }
}

/// Junta a mensagem do erro com as de todas as suas causas (`source()`).
pub fn mensagem_com_causas(erro: &dyn std::error::Error) -> String {
    let mut mensagem = erro.to_string();
    let mut causa = erro.source();
    while let Some(atual) = causa {
        let texto = atual.to_string();
        if !mensagem.ends_with(&texto) {
            mensagem.push_str(": ");
            mensagem.push_str(&texto);
        }
        causa = atual.source();
    }
    mensagem
}

impl From<reqwest::Error> for LookupError {
    fn from(e: reqwest::Error) -> Self {
        LookupError::NetworkError(mensagem_com_causas(&e))
    }
}
