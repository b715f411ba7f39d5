//! Typed error handling for the storefront service
//!
//! Every failure the service reports falls into one of a small set of
//! categories, each with its own enum so callers can match on the exact
//! case instead of inspecting strings:
//!
//! - [`ValidationError`]: a write payload violated a domain invariant
//! - [`AuthorizationError`]: the principal may not perform the action
//! - [`AuthenticationError`]: no usable credentials were presented
//! - [`NotFoundError`]: a referenced id does not exist
//! - [`RequestError`]: the request itself was malformed
//!
//! All of them convert into [`StorefrontError`], which owns the HTTP
//! mapping: one status code and one `SCREAMING_SNAKE` error code per case,
//! serialized as [`ErrorResponse`] by the `IntoResponse` impl.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

/// The top-level error type for the storefront service
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// A write payload violated a domain invariant
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The authenticated principal is not allowed to do this
    #[error(transparent)]
    Authorization(#[from] AuthorizationError),

    /// The request carried no usable credentials
    #[error(transparent)]
    Authentication(#[from] AuthenticationError),

    /// A referenced resource id is unknown
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// The request was malformed before any domain logic ran
    #[error(transparent)]
    Request(#[from] RequestError),

    /// Unexpected failure (store lock poisoning, template rendering)
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response structure for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl StorefrontError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            StorefrontError::Validation(_) => StatusCode::BAD_REQUEST,
            StorefrontError::Authorization(_) => StatusCode::FORBIDDEN,
            StorefrontError::Authentication(_) => StatusCode::UNAUTHORIZED,
            StorefrontError::NotFound(_) => StatusCode::NOT_FOUND,
            StorefrontError::Request(_) => StatusCode::BAD_REQUEST,
            StorefrontError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            StorefrontError::Validation(e) => e.error_code(),
            StorefrontError::Authorization(e) => e.error_code(),
            StorefrontError::Authentication(_) => "UNAUTHENTICATED",
            StorefrontError::NotFound(e) => e.error_code(),
            StorefrontError::Request(_) => "BAD_REQUEST",
            StorefrontError::Internal(_) => "INTERNAL",
        }
    }

    /// Convert to an error response
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
            details: self.details(),
        }
    }

    /// Get additional details for the error
    fn details(&self) -> Option<serde_json::Value> {
        match self {
            StorefrontError::Validation(ValidationError::EmptyField { field }) => {
                Some(serde_json::json!({ "field": field }))
            }
            StorefrontError::NotFound(NotFoundError::UnknownId { resource, id }) => {
                Some(serde_json::json!({
                    "resource": resource,
                    "id": id.to_string()
                }))
            }
            _ => None,
        }
    }
}

impl IntoResponse for StorefrontError {
    fn into_response(self) -> Response {
        match &self {
            StorefrontError::Internal(message) => {
                tracing::error!(error = %message, "Request failed with internal error");
            }
            StorefrontError::Authentication(err) => {
                tracing::warn!(error = %err, "Rejected unauthenticated request");
            }
            StorefrontError::Authorization(err) => {
                tracing::warn!(error = %err, "Denied write to non-administrator");
            }
            _ => {}
        }

        let status = self.status_code();
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// Domain invariant violations, checked before any record is persisted
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required text field is empty or absent
    #[error("{field} must be specified")]
    EmptyField { field: &'static str },

    /// Price is absent, not positive, or not representable as a
    /// 10-digit fixed-point number with 2 fractional digits
    #[error("Price must be a positive number")]
    InvalidPrice,

    /// `available` was absent; null is not the same thing as `false`
    #[error("Availability must be specified")]
    MissingAvailability,

    /// An order carried no customer reference
    #[error("Customer must be specified")]
    MissingCustomer,

    /// Order status is absent or not one of the enumerated literals
    #[error("Status must be one of: New, In Process, Sent, Completed")]
    InvalidStatus,
}

impl ValidationError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ValidationError::EmptyField { .. } => "EMPTY_FIELD",
            ValidationError::InvalidPrice => "INVALID_PRICE",
            ValidationError::MissingAvailability => "MISSING_AVAILABILITY",
            ValidationError::MissingCustomer => "MISSING_CUSTOMER",
            ValidationError::InvalidStatus => "INVALID_STATUS",
        }
    }
}

// =============================================================================
// Authorization Errors
// =============================================================================

/// The principal is authenticated but not permitted to act
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthorizationError {
    /// Writes require the administrator role
    #[error("You do not have permission to perform this action")]
    Forbidden,
}

impl AuthorizationError {
    pub fn error_code(&self) -> &'static str {
        match self {
            AuthorizationError::Forbidden => "FORBIDDEN",
        }
    }
}

// =============================================================================
// Authentication Errors
// =============================================================================

/// Rejections that happen before any principal exists.
///
/// These map to 401 and are raised upstream of the authorization policy:
/// the policy itself only ever sees authenticated principals.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthenticationError {
    /// No `Authorization: Bearer` header on a protected route
    #[error("Authentication credentials were not provided")]
    MissingCredentials,

    /// The bearer token is malformed or not recognized
    #[error("Invalid token")]
    InvalidToken,

    /// Token issuance was attempted with wrong credentials
    #[error("Invalid username or password")]
    BadCredentials,
}

// =============================================================================
// Not Found Errors
// =============================================================================

/// A lookup referenced an id the store has never assigned (or has deleted)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotFoundError {
    #[error("{resource} with id '{id}' not found")]
    UnknownId { resource: &'static str, id: Uuid },
}

impl NotFoundError {
    pub fn error_code(&self) -> &'static str {
        match self {
            NotFoundError::UnknownId { .. } => "UNKNOWN_ID",
        }
    }
}

// =============================================================================
// Request Errors
// =============================================================================

/// The request failed before reaching domain logic
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    /// A path segment that should be a UUID was not one
    #[error("Invalid {resource} id '{value}'")]
    InvalidId {
        resource: &'static str,
        value: String,
    },
}

// =============================================================================
// Conversions from external errors
// =============================================================================

impl From<anyhow::Error> for StorefrontError {
    fn from(err: anyhow::Error) -> Self {
        StorefrontError::Internal(err.to_string())
    }
}

impl From<tera::Error> for StorefrontError {
    fn from(err: tera::Error) -> Self {
        StorefrontError::Internal(format!("Template rendering failed: {}", err))
    }
}

// =============================================================================
// Result type alias
// =============================================================================

/// A specialized Result type for storefront operations
pub type StorefrontResult<T> = Result<T, StorefrontError>;

// =============================================================================
// Tests
// =============================================================================
