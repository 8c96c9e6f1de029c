use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// Resposta JSON da Receita para `/v1/cnpj/{cnpj}`.
///
/// Cada campo é decodificado de forma independente: ausente, `null` ou de tipo
/// inesperado vira `None` (ou lista vazia) sem derrubar o restante do registro.
/// Campos desconhecidos são ignorados.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegistryRecord {
    #[serde(default, deserialize_with = "texto_tolerante")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "texto_tolerante")]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "texto_tolerante")]
    pub nome: Option<String>,
    #[serde(default, deserialize_with = "texto_tolerante")]
    pub fantasia: Option<String>,
    #[serde(default, deserialize_with = "texto_tolerante")]
    pub situacao: Option<String>,
    #[serde(default, deserialize_with = "texto_tolerante")]
    pub logradouro: Option<String>,
    #[serde(default, deserialize_with = "texto_tolerante")]
    pub numero: Option<String>,
    #[serde(default, deserialize_with = "texto_tolerante")]
    pub complemento: Option<String>,
    #[serde(default, deserialize_with = "texto_tolerante")]
    pub bairro: Option<String>,
    #[serde(default, deserialize_with = "texto_tolerante")]
    pub municipio: Option<String>,
    #[serde(default, deserialize_with = "texto_tolerante")]
    pub uf: Option<String>,
    #[serde(default, deserialize_with = "texto_tolerante")]
    pub cep: Option<String>,
    #[serde(default, deserialize_with = "texto_tolerante")]
    pub telefone: Option<String>,
    #[serde(default, deserialize_with = "texto_tolerante")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "texto_tolerante")]
    pub natureza_juridica: Option<String>,
    #[serde(default, deserialize_with = "atividades_tolerantes")]
    pub atividade_principal: Vec<Atividade>,
    #[serde(default, deserialize_with = "simples_tolerante")]
    pub simples: Option<Simples>,
}

impl RegistryRecord {
    pub fn is_error(&self) -> bool {
        self.status.as_deref() == Some("ERROR")
    }

    /// `simples.optante`, com `false` para qualquer formato inesperado.
    pub fn optante(&self) -> bool {
        self.simples.as_ref().map(|s| s.optante).unwrap_or(false)
    }

    pub fn classificacao(&self) -> Classification {
        Classification::from_optante(self.optante())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Atividade {
    pub code: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Simples {
    pub optante: bool,
    pub data_opcao: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Classification {
    Simples,
    Normal,
}

impl Classification {
    pub fn from_optante(optante: bool) -> Self {
        if optante {
            Classification::Simples
        } else {
            Classification::Normal
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::Simples => "SIMPLES",
            Classification::Normal => "NORMAL",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Texto como texto; número e booleano viram sua forma textual; o resto, `None`.
fn como_texto(valor: &Value) -> Option<String> {
    match valor {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn texto_tolerante<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(como_texto(&Value::deserialize(deserializer)?))
}

// Só objetos dentro de uma lista contam; outros itens são descartados.
fn atividades_tolerantes<'de, D>(deserializer: D) -> Result<Vec<Atividade>, D::Error>
where
    D: Deserializer<'de>,
{
    let valor = Value::deserialize(deserializer)?;
    let Some(itens) = valor.as_array() else {
        return Ok(Vec::new());
    };

    Ok(itens
        .iter()
        .filter_map(Value::as_object)
        .map(|obj| {
            let texto = |campo: &str| obj.get(campo).and_then(como_texto).unwrap_or_default();
            Atividade {
                code: texto("code"),
                text: texto("text"),
            }
        })
        .collect())
}

// Aceita qualquer valor; só um objeto vira `Some`.
fn simples_tolerante<'de, D>(deserializer: D) -> Result<Option<Simples>, D::Error>
where
    D: Deserializer<'de>,
{
    let valor = Value::deserialize(deserializer)?;
    let Some(obj) = valor.as_object() else {
        return Ok(None);
    };

    Ok(Some(Simples {
        optante: obj.get("optante").and_then(Value::as_bool).unwrap_or(false),
        data_opcao: obj.get("data_opcao").and_then(como_texto),
    }))
}
