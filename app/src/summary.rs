use serde::Serialize;

use crate::cnpj::Cnpj;
use crate::models::{Atividade, Classification, RegistryRecord};

pub const SEM_VALOR: &str = "---";

/// Resultado pronto para exibição. Imutável e independente da interface.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resumo {
    pub cnpj: String,
    pub nome: String,
    pub fantasia: String,
    pub situacao: String,
    pub classificacao: Classification,
    pub regime_federal: String,
    pub regime_estadual: String,
    /// Data de opção pelo Simples Nacional, quando informada.
    pub optante_desde: Option<String>,
    pub natureza_juridica: String,
    pub atividade_principal: Option<Atividade>,
    pub endereco: Endereco,
    pub telefone: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Endereco {
    pub logradouro: String,
    pub numero: String,
    pub complemento: String,
    pub bairro: String,
    pub municipio: String,
    pub uf: String,
    pub cep: String,
}

impl Endereco {
    /// `Logradouro, Número - Complemento, Bairro - Município/UF, CEP`
    pub fn linha(&self) -> String {
        let mut linha = format!("{}, {}", self.logradouro, self.numero);
        if self.complemento != SEM_VALOR {
            linha.push_str(&format!(" - {}", self.complemento));
        }
        linha.push_str(&format!(
            ", {} - {}/{}, CEP {}",
            self.bairro, self.municipio, self.uf, self.cep
        ));
        linha
    }
}

fn campo(valor: &Option<String>) -> String {
    match valor.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => SEM_VALOR.to_string(),
    }
}

impl Resumo {
    pub fn from_record(cnpj: &Cnpj, record: &RegistryRecord) -> Self {
        let classificacao = record.classificacao();

        Self {
            cnpj: cnpj.formatado(),
            nome: campo(&record.nome),
            fantasia: campo(&record.fantasia),
            situacao: campo(&record.situacao),
            classificacao,
            regime_federal: classificacao.to_string(),
            regime_estadual: classificacao.to_string(),
            optante_desde: record
                .simples
                .as_ref()
                .filter(|s| s.optante)
                .and_then(|s| s.data_opcao.clone()),
            natureza_juridica: campo(&record.natureza_juridica),
            atividade_principal: record.atividade_principal.first().cloned(),
            endereco: Endereco {
                logradouro: campo(&record.logradouro),
                numero: campo(&record.numero),
                complemento: campo(&record.complemento),
                bairro: campo(&record.bairro),
                municipio: campo(&record.municipio),
                uf: campo(&record.uf),
                cep: campo(&record.cep),
            },
            telefone: campo(&record.telefone),
            email: campo(&record.email),
        }
    }
}
