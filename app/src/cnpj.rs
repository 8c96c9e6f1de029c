use std::fmt;

use crate::error::LookupError;

pub const CNPJ_LEN: usize = 14;

/// CNPJ normalizado: exatamente 14 dígitos ASCII.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cnpj(String);

impl Cnpj {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Formato com máscara: `NN.NNN.NNN/NNNN-NN`.
    pub fn formatado(&self) -> String {
        let d = &self.0;
        format!(
            "{}.{}.{}/{}-{}",
            &d[0..2],
            &d[2..5],
            &d[5..8],
            &d[8..12],
            &d[12..14]
        )
    }

    /// Confere os dígitos verificadores (módulo 11).
    ///
    /// Apenas informativo: a consulta nunca rejeita um CNPJ por isso.
    pub fn digitos_verificadores_validos(&self) -> bool {
        let digitos: Vec<u32> = self.0.chars().filter_map(|c| c.to_digit(10)).collect();

        let dv = |base: &[u32]| -> u32 {
            let pesos = (2..=9).cycle();
            let soma: u32 = base.iter().rev().zip(pesos).map(|(d, p)| d * p).sum();
            match soma % 11 {
                0 | 1 => 0,
                resto => 11 - resto,
            }
        };

        dv(&digitos[..12]) == digitos[12] && dv(&digitos[..13]) == digitos[13]
    }
}

impl fmt::Display for Cnpj {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Remove tudo que não é dígito e exige 14 dígitos.
///
/// Entrada vazia é rejeitada antes da limpeza. Só dígitos ASCII `0-9` são
/// mantidos: outros dígitos Unicode (árabe-índicos, de largura total etc.)
/// são descartados como qualquer outro caractere, e o CNPJ resultante pode
/// ir direto na URL da consulta.
pub fn normalizar(raw: &str) -> Result<Cnpj, LookupError> {
    if raw.is_empty() {
        return Err(LookupError::EmptyInput);
    }

    let limpo: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();

    if limpo.len() != CNPJ_LEN {
        return Err(LookupError::InvalidIdentifierLength {
            encontrados: limpo.len(),
        });
    }

    Ok(Cnpj(limpo))
}
