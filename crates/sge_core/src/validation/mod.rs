//! Required-field validation for write paths.
//!
//! # Responsibility
//! - Reject incomplete entities before any persistence write.
//! - Report one machine-readable reason code per failure.
//!
//! # Invariants
//! - Checks run in a fixed order; the first failing check is reported.
//! - Validators are pure and never touch storage.

pub mod product;
pub mod user;

use std::error::Error;
use std::fmt::{Display, Formatter};

pub use product::validate_product;
pub use user::validate_user;

pub type ValidationResult = Result<(), ValidationError>;

/// Reason a required-field check failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationError {
    /// Product description is missing or empty.
    DescricaoRequired,
    /// Product cost value is missing.
    ValorCustoRequired,
    /// Product sale value is missing.
    ValorVendaRequired,
    /// Product manufacturer reference is missing.
    FabricanteRequired,
    /// Product category reference is missing.
    CategoriaRequired,
    /// User name is missing, empty or blank.
    NomeRequired,
    /// User document (CPF) is missing or empty.
    CpfRequired,
    /// User address is missing or empty.
    EnderecoRequired,
    /// User postal code (CEP) is missing or empty.
    CepRequired,
    /// User email is missing or empty.
    EmailRequired,
}

impl ValidationError {
    /// Stable reason code, e.g. `DESCRICAO_REQUIRED`.
    pub fn code(self) -> &'static str {
        match self {
            Self::DescricaoRequired => "DESCRICAO_REQUIRED",
            Self::ValorCustoRequired => "VALOR_CUSTO_REQUIRED",
            Self::ValorVendaRequired => "VALOR_VENDA_REQUIRED",
            Self::FabricanteRequired => "FABRICANTE_REQUIRED",
            Self::CategoriaRequired => "CATEGORIA_REQUIRED",
            Self::NomeRequired => "NOME_REQUIRED",
            Self::CpfRequired => "CPF_REQUIRED",
            Self::EnderecoRequired => "ENDERECO_REQUIRED",
            Self::CepRequired => "CEP_REQUIRED",
            Self::EmailRequired => "EMAIL_REQUIRED",
        }
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "MESSAGE.{}", self.code())
    }
}

impl Error for ValidationError {}

fn is_missing(value: Option<&str>) -> bool {
    value.map_or(true, str::is_empty)
}

fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |text| text.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::{is_blank, is_missing, ValidationError};

    #[test]
    fn display_uses_message_key_prefix() {
        assert_eq!(
            ValidationError::NomeRequired.to_string(),
            "MESSAGE.NOME_REQUIRED"
        );
        assert_eq!(ValidationError::CepRequired.code(), "CEP_REQUIRED");
    }

    #[test]
    fn missing_treats_only_none_and_empty_as_absent() {
        assert!(is_missing(None));
        assert!(is_missing(Some("")));
        assert!(!is_missing(Some(" ")));
    }

    #[test]
    fn blank_also_rejects_whitespace() {
        assert!(is_blank(Some(" \t")));
        assert!(!is_blank(Some(" a ")));
    }
}
