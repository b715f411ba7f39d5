//! Order entity module

pub mod handlers;
pub mod model;

pub use handlers::*;
pub use model::{Order, OrderPayload, OrderStatus, can_be_fulfilled, total_price};
