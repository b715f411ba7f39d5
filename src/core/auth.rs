//! Authorization policy for the storefront service
//!
//! One rule, applied uniformly to every resource: any authenticated
//! principal may read, only administrators may write. The decision is a
//! pure function of `(principal, action)` with no per-resource dispatch
//! and no framework hook.

use uuid::Uuid;

use crate::core::error::AuthorizationError;

/// The authenticated actor making a request
///
/// Constructed only by the identity layer after verifying a bearer token,
/// so holding a `Principal` already implies authentication: anonymous
/// requests are rejected with 401 before this type exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub id: Uuid,
    pub username: String,
    pub is_admin: bool,
}

/// What a request wants to do with a resource
///
/// `Write` covers create, update, and delete alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Read,
    Write,
}

/// Outcome of an authorization check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Deny,
}

impl Decision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Decision::Allow)
    }
}

/// Decide whether `principal` may perform `action`
///
/// Resource-agnostic: the same rule covers customers, products, and
/// orders, which is why no resource argument exists.
pub fn authorize(principal: &Principal, action: Action) -> Decision {
    match action {
        Action::Read => Decision::Allow,
        Action::Write if principal.is_admin => Decision::Allow,
        Action::Write => Decision::Deny,
    }
}

/// Handler-side shorthand: turn a `Deny` into the `Forbidden` error
///
/// Called before any existence lookup, so a non-administrator writing to
/// an unknown id sees 403 rather than 404.
pub fn require(principal: &Principal, action: Action) -> Result<(), AuthorizationError> {
    match authorize(principal, action) {
        Decision::Allow => Ok(()),
        Decision::Deny => Err(AuthorizationError::Forbidden),
    }
}
