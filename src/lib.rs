//! # Storefront
//!
//! An order-management service exposing a token-authenticated REST API and a
//! server-rendered product catalog.
//!
//! ## Features
//!
//! - **Customers, Products, Orders**: Full CRUD over pluggable stores
//! - **Order Aggregates**: Exact decimal totals and fulfillment checks
//! - **Role-Based Writes**: Reads for any authenticated user, writes for admins
//! - **Token Authentication**: Bearer tokens issued against configured accounts
//! - **Relationship Navigation**: Products per order and orders per product
//! - **Cascading Deletes**: Customer removal takes its orders along
//! - **Server-Rendered Catalog**: Tera-templated product pages next to the API
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use storefront::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = AppConfig::default();
//!     let state = AppState::in_memory(config.users.clone())?;
//!
//!     storefront::fixtures::seed_demo_data(&state).await?;
//!     storefront::server::serve(state, &config.server.bind_addr()).await
//! }
//! ```

pub mod auth;
pub mod config;
pub mod core;
pub mod entities;
pub mod fixtures;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        auth::{Action, Decision, Principal, authorize, require},
        entity::Entity,
        error::{ErrorResponse, StorefrontError, StorefrontResult},
        link::OrderProductLink,
        service::{DataService, LinkService},
        validation::{require_text, validate_price},
    };

    // === Entities ===
    pub use crate::entities::{
        customer::{Customer, CustomerPayload},
        order::{Order, OrderPayload, OrderResponse, OrderStatus, can_be_fulfilled, total_price},
        product::{Product, ProductPayload},
    };

    // === Auth ===
    pub use crate::auth::{TokenRegistry, UserAccount};

    // === Storage ===
    pub use crate::storage::{InMemoryDataService, InMemoryLinkService};

    // === Config ===
    pub use crate::config::{AppConfig, ServerConfig};

    // === Server ===
    pub use crate::server::{AppState, build_router, serve};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use chrono::{DateTime, Utc};
    pub use rust_decimal::Decimal;
    pub use serde::{Deserialize, Serialize};
    pub use uuid::Uuid;

    // === Axum ===
    pub use axum::{
        Router,
        extract::{Path, State},
        http::HeaderMap,
        routing::{delete, get, post, put},
    };
}
