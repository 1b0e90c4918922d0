//! Product required-field checks.

use super::{is_missing, ValidationError, ValidationResult};
use crate::model::product::Product;

/// Validates a product before insert/update.
///
/// Check order: description, cost value, sale value, manufacturer,
/// category. `name` is not checked. A NaN or infinite cost or sale
/// value counts as missing.
pub fn validate_product(product: &Product) -> ValidationResult {
    if is_missing(product.description.as_deref()) {
        return Err(ValidationError::DescricaoRequired);
    }
    if !is_present(product.cost_value) {
        return Err(ValidationError::ValorCustoRequired);
    }
    if !is_present(product.sale_value) {
        return Err(ValidationError::ValorVendaRequired);
    }
    if product.manufacturer.is_none() {
        return Err(ValidationError::FabricanteRequired);
    }
    if product.category.is_none() {
        return Err(ValidationError::CategoriaRequired);
    }
    Ok(())
}

fn is_present(value: Option<f64>) -> bool {
    value.is_some_and(f64::is_finite)
}
