//! Product entity model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::entity::Entity;
use crate::core::error::ValidationError;
use crate::core::validation::{require_text, validate_price};

/// A product offered by the store
///
/// The price is a fixed-point decimal and serializes as a string
/// ("19.99") so clients never see a binary float.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: Uuid,
    /// Display name, at most 255 characters
    pub name: String,
    /// Unit price: strictly positive, two fractional digits, ten digits total
    pub price: Decimal,
    /// Whether the product can currently be shipped
    pub available: bool,
}

impl Product {
    /// Validates a payload and builds a new record from it, assigning
    /// a fresh id.
    pub fn create(payload: ProductPayload) -> Result<Self, ValidationError> {
        payload.validate()?;
        Ok(Self {
            id: Uuid::new_v4(),
            name: payload.name.unwrap_or_default(),
            price: payload.price.unwrap_or_default(),
            available: payload.available.unwrap_or_default(),
        })
    }

    /// Replaces the record with a full representation, keeping the id.
    pub fn update(&self, payload: ProductPayload) -> Result<Self, ValidationError> {
        payload.validate()?;
        Ok(Self {
            id: self.id,
            name: payload.name.unwrap_or_default(),
            price: payload.price.unwrap_or_default(),
            available: payload.available.unwrap_or_default(),
        })
    }

    /// Merges a partial payload over the record and re-validates the
    /// result.
    pub fn patch(&self, payload: ProductPayload) -> Result<Self, ValidationError> {
        self.update(ProductPayload {
            name: payload.name.or_else(|| Some(self.name.clone())),
            price: payload.price.or(Some(self.price)),
            available: payload.available.or(Some(self.available)),
        })
    }
}

impl Entity for Product {
    fn resource_name() -> &'static str {
        "products"
    }

    fn resource_name_singular() -> &'static str {
        "product"
    }

    fn id(&self) -> Uuid {
        self.id
    }
}

/// Write payload for a product
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductPayload {
    pub name: Option<String>,
    pub price: Option<Decimal>,
    pub available: Option<bool>,
}

impl ProductPayload {
    /// Checks the product field rules without consuming the payload.
    ///
    /// The price and availability rules run before the name rule, so a
    /// payload failing several rules reports the price first.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_price(self.price)?;
        if self.available.is_none() {
            return Err(ValidationError::MissingAvailability);
        }
        require_text("name", self.name.as_deref())?;
        Ok(())
    }
}

// === Tests ===
