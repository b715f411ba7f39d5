//! Core module: authorization policy, error taxonomy, and the store seam

pub mod auth;
pub mod entity;
pub mod error;
pub mod link;
pub mod service;
pub mod validation;

pub use auth::{Action, Decision, Principal, authorize, require};
pub use entity::Entity;
pub use error::{
    AuthenticationError, AuthorizationError, ErrorResponse, NotFoundError, RequestError,
    StorefrontError, StorefrontResult, ValidationError,
};
pub use link::OrderProductLink;
pub use service::{DataService, LinkService};
pub use validation::{require_text, validate_price};
