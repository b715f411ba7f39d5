//! Field-level validation rules shared by the entity models
//!
//! Each rule is a standalone function returning the domain
//! [`ValidationError`] so handlers can surface it unchanged.

use rust_decimal::Decimal;

use crate::core::error::ValidationError;

/// Upper bound for prices: ten digits total with two fractional digits
/// leaves room for eight integer digits, so anything at or above 10^8
/// no longer fits the column.
const PRICE_LIMIT: Decimal = Decimal::from_parts(100_000_000, 0, 0, false, 0);

/// Requires a text field to be present and non-empty.
///
/// An absent field and an empty string fail the same way; callers pass
/// the field name so the error can point at it.
pub fn require_text(field: &'static str, value: Option<&str>) -> Result<(), ValidationError> {
    match value {
        Some(text) if !text.is_empty() => Ok(()),
        _ => Err(ValidationError::EmptyField { field }),
    }
}

/// Validates a product price.
///
/// The price must be present, strictly positive, carry at most two
/// fractional digits, and fit in ten digits total. Absence is reported
/// as an invalid price rather than a missing field.
pub fn validate_price(price: Option<Decimal>) -> Result<(), ValidationError> {
    let Some(price) = price else {
        return Err(ValidationError::InvalidPrice);
    };
    if price <= Decimal::ZERO {
        return Err(ValidationError::InvalidPrice);
    }
    if price.normalize().scale() > 2 {
        return Err(ValidationError::InvalidPrice);
    }
    if price >= PRICE_LIMIT {
        return Err(ValidationError::InvalidPrice);
    }
    Ok(())
}

// === Tests ===
