//! User required-field checks.

use super::{is_blank, is_missing, ValidationError, ValidationResult};
use crate::model::user::User;

/// Validates a user before insert/update.
///
/// Check order: name, document, address, cep, email. Name must also be
/// non-blank; the other fields only need to be non-empty.
pub fn validate_user(user: &User) -> ValidationResult {
    if is_blank(user.name.as_deref()) {
        return Err(ValidationError::NomeRequired);
    }
    if is_missing(user.document.as_deref()) {
        return Err(ValidationError::CpfRequired);
    }
    if is_missing(user.address.as_deref()) {
        return Err(ValidationError::EnderecoRequired);
    }
    if is_missing(user.cep.as_deref()) {
        return Err(ValidationError::CepRequired);
    }
    if is_missing(user.email.as_deref()) {
        return Err(ValidationError::EmailRequired);
    }
    Ok(())
}
