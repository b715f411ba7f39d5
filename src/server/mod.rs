//! HTTP server: shared state, router assembly, token issuance, and the
//! server-rendered catalog

pub mod catalog;
pub mod router;
pub mod state;
pub mod tokens;

pub use router::{build_router, serve};
pub use state::AppState;
