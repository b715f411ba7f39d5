//! Order entity model
//!
//! Orders reference a customer and a set of products. The product set
//! itself lives in association rows (see [`crate::core::link`]), so the
//! record here carries only the order's own fields. The aggregate
//! functions at the bottom compute the derived values the API exposes.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::entity::Entity;
use crate::core::error::ValidationError;
use crate::entities::product::Product;

/// Lifecycle states an order moves through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    New,
    #[serde(rename = "In Process")]
    InProcess,
    Sent,
    Completed,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::New => "New",
            OrderStatus::InProcess => "In Process",
            OrderStatus::Sent => "Sent",
            OrderStatus::Completed => "Completed",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "New" => Ok(OrderStatus::New),
            "In Process" => Ok(OrderStatus::InProcess),
            "Sent" => Ok(OrderStatus::Sent),
            "Completed" => Ok(OrderStatus::Completed),
            _ => Err(ValidationError::InvalidStatus),
        }
    }
}

/// An order placed by a customer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub id: Uuid,
    /// The customer who placed the order
    pub customer_id: Uuid,
    /// When the order was placed; defaults to the current time
    pub date: DateTime<Utc>,
    pub status: OrderStatus,
}

impl Order {
    /// Validates a payload and builds a new record from it.
    ///
    /// The date defaults to now when absent. Whether the referenced
    /// customer exists is checked by the caller, which holds the store.
    pub fn create(payload: OrderPayload) -> Result<Self, ValidationError> {
        let status = payload.validate()?;
        Ok(Self {
            id: Uuid::new_v4(),
            customer_id: payload.customer.unwrap_or_default(),
            date: payload.date.unwrap_or_else(Utc::now),
            status,
        })
    }

    /// Replaces the record with a full representation, keeping the id.
    ///
    /// The creation-time default does not apply again: an absent date
    /// keeps the stored value.
    pub fn update(&self, payload: OrderPayload) -> Result<Self, ValidationError> {
        let status = payload.validate()?;
        Ok(Self {
            id: self.id,
            customer_id: payload.customer.unwrap_or_default(),
            date: payload.date.unwrap_or(self.date),
            status,
        })
    }

    /// Merges a partial payload over the record and re-validates the
    /// result. The product set is not part of the record, so patching
    /// it is handled where the association rows live.
    pub fn patch(&self, payload: OrderPayload) -> Result<Self, ValidationError> {
        self.update(OrderPayload {
            customer: payload.customer.or(Some(self.customer_id)),
            products: payload.products,
            date: payload.date,
            status: payload.status.or_else(|| Some(self.status.to_string())),
        })
    }
}

impl Entity for Order {
    fn resource_name() -> &'static str {
        "orders"
    }

    fn resource_name_singular() -> &'static str {
        "order"
    }

    fn id(&self) -> Uuid {
        self.id
    }
}

/// Write payload for an order
///
/// The product list is optional: absent means an empty set on create
/// and "leave the set alone" on patch.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrderPayload {
    pub customer: Option<Uuid>,
    pub products: Option<Vec<Uuid>>,
    pub date: Option<DateTime<Utc>>,
    pub status: Option<String>,
}

impl OrderPayload {
    /// Checks the order field rules and returns the parsed status.
    ///
    /// The customer reference must be present; the status must be one
    /// of the four lifecycle states. Referential checks against the
    /// store happen later and report not-found instead.
    pub fn validate(&self) -> Result<OrderStatus, ValidationError> {
        if self.customer.is_none() {
            return Err(ValidationError::MissingCustomer);
        }
        match self.status.as_deref() {
            Some(text) => text.parse(),
            None => Err(ValidationError::InvalidStatus),
        }
    }
}

// === Aggregates ===

/// Sums the prices of the given products into an exact decimal total.
///
/// An order with no products totals zero.
pub fn total_price(products: &[Product]) -> Decimal {
    products
        .iter()
        .fold(Decimal::ZERO, |total, product| total + product.price)
}

/// An order can be fulfilled when every product on it is available.
///
/// With no products there is nothing blocking fulfillment.
pub fn can_be_fulfilled(products: &[Product]) -> bool {
    products.iter().all(|product| product.available)
}

// === Tests ===
