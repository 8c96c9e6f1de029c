use std::time::Duration;

use reqwest::StatusCode;
use url::Url;

use crate::cnpj::{self, Cnpj};
use crate::error::LookupError;
use crate::models::RegistryRecord;
use crate::summary::Resumo;

pub const URL_RECEITAWS: &str = "https://www.receitaws.com.br";
pub const TIMEOUT_PADRAO: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct RegistryConfig {
    pub base_url: Url,
    pub timeout: Duration,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(URL_RECEITAWS).expect("URL padrão válida"),
            timeout: TIMEOUT_PADRAO,
        }
    }
}

impl RegistryConfig {
    pub fn with_base_url(base_url: &str) -> Result<Self, url::ParseError> {
        Ok(Self {
            base_url: Url::parse(base_url)?,
            ..Self::default()
        })
    }
}

/// Cliente da API pública de CNPJ. Sem estado entre consultas: sem cache, sem retry.
#[derive(Debug, Clone)]
pub struct RegistryClient {
    http: reqwest::Client,
    base_url: Url,
}

impl RegistryClient {
    pub fn new(config: RegistryConfig) -> Result<Self, LookupError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("validador-fiscal/", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    pub fn url_consulta(&self, cnpj: &Cnpj) -> String {
        format!(
            "{}/v1/cnpj/{}",
            self.base_url.as_str().trim_end_matches('/'),
            cnpj.as_str()
        )
    }

    /// Uma única requisição GET, com o tratamento de status na ordem:
    /// erro de transporte, 200 (com `status: ERROR` ou não), 429, demais.
    pub async fn buscar(&self, cnpj: &Cnpj) -> Result<RegistryRecord, LookupError> {
        let url = self.url_consulta(cnpj);
        tracing::debug!(%url, "consultando Receita");

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        tracing::debug!(status = status.as_u16(), "resposta recebida");

        match status {
            StatusCode::OK => {
                let record: RegistryRecord = response.json().await?;
                if record.is_error() {
                    return Err(LookupError::RegistryError(
                        record.message.unwrap_or_default(),
                    ));
                }
                Ok(record)
            }
            StatusCode::TOO_MANY_REQUESTS => Err(LookupError::RateLimited),
            outro => Err(LookupError::UpstreamError {
                status: outro.as_u16(),
            }),
        }
    }

    pub async fn consultar(&self, cnpj: &Cnpj) -> Result<Resumo, LookupError> {
        let record = self.buscar(cnpj).await?;
        Ok(Resumo::from_record(cnpj, &record))
    }
}

/// Normaliza a entrada e consulta: texto digitado -> resumo ou falha.
pub async fn consultar_cnpj(client: &RegistryClient, raw: &str) -> Result<Resumo, LookupError> {
    let cnpj = cnpj::normalizar(raw)?;
    client.consultar(&cnpj).await
}
