//! Authentication: token format and the issuing registry
//!
//! Authorization policy lives in [`crate::core::auth`]; this module only
//! establishes who is asking.

pub mod registry;
pub mod token;

pub use registry::{TokenRegistry, UserAccount};
pub use token::{ParsedToken, TokenError, TokenSecret, format_token, parse_token};
