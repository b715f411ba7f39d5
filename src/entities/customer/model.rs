//! Customer entity model

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::entity::Entity;
use crate::core::error::ValidationError;
use crate::core::validation::require_text;

/// A customer who places orders
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: Uuid,
    /// Display name, at most 100 characters
    pub name: String,
    /// Free-form postal address
    pub address: String,
}

impl Customer {
    /// Validates a payload and builds a new record from it, assigning
    /// a fresh id.
    pub fn create(payload: CustomerPayload) -> Result<Self, ValidationError> {
        payload.validate()?;
        Ok(Self {
            id: Uuid::new_v4(),
            name: payload.name.unwrap_or_default(),
            address: payload.address.unwrap_or_default(),
        })
    }

    /// Replaces the record with a full representation, keeping the id.
    pub fn update(&self, payload: CustomerPayload) -> Result<Self, ValidationError> {
        payload.validate()?;
        Ok(Self {
            id: self.id,
            name: payload.name.unwrap_or_default(),
            address: payload.address.unwrap_or_default(),
        })
    }

    /// Merges a partial payload over the record and re-validates the
    /// result, so a patch can change one field without restating the
    /// others.
    pub fn patch(&self, payload: CustomerPayload) -> Result<Self, ValidationError> {
        self.update(CustomerPayload {
            name: payload.name.or_else(|| Some(self.name.clone())),
            address: payload.address.or_else(|| Some(self.address.clone())),
        })
    }
}

impl Entity for Customer {
    fn resource_name() -> &'static str {
        "customers"
    }

    fn resource_name_singular() -> &'static str {
        "customer"
    }

    fn id(&self) -> Uuid {
        self.id
    }
}

/// Write payload for a customer
///
/// Every field is optional so an absent field is representable;
/// validation treats absence and emptiness the same way.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CustomerPayload {
    pub name: Option<String>,
    pub address: Option<String>,
}

impl CustomerPayload {
    /// Checks the customer field rules without consuming the payload.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("name", self.name.as_deref())?;
        require_text("address", self.address.as_deref())?;
        Ok(())
    }
}

// === Tests ===
