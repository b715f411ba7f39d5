//! Shared test harness for API and catalog integration tests
//!
//! Builds a `TestServer` around a fresh in-memory `AppState` with two
//! registered accounts (one admin, one read-only), plus helpers for
//! issuing tokens and seeding records directly through the stores.
//!
//! # Usage
//!
//! From any integration test file in `tests/`:
//! ```rust,ignore
//! mod harness;
//! use harness::*;
//! ```

#![allow(dead_code)]

use axum_test::TestServer;
use chrono::Utc;
use rust_decimal::Decimal;
use serde_json::{Value, json};
use uuid::Uuid;

use storefront::auth::UserAccount;
use storefront::entities::customer::Customer;
use storefront::entities::order::{Order, OrderStatus};
use storefront::entities::product::Product;
use storefront::server::{AppState, build_router};

pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_PASSWORD: &str = "admin";
pub const READER_USERNAME: &str = "user";
pub const READER_PASSWORD: &str = "user";

// ---------------------------------------------------------------------------
// Server construction
// ---------------------------------------------------------------------------

/// Accounts registered on every test server.
pub fn test_accounts() -> Vec<UserAccount> {
    vec![
        UserAccount {
            username: ADMIN_USERNAME.to_string(),
            password: ADMIN_PASSWORD.to_string(),
            admin: true,
        },
        UserAccount {
            username: READER_USERNAME.to_string(),
            password: READER_PASSWORD.to_string(),
            admin: false,
        },
    ]
}

/// Create a test server over a fresh in-memory state.
///
/// The state is returned alongside the server so tests can seed and
/// inspect the stores directly.
pub fn create_test_server() -> (TestServer, AppState) {
    let state = AppState::in_memory(test_accounts()).expect("Failed to build app state");
    let server =
        TestServer::try_new(build_router(state.clone())).expect("Failed to create test server");
    (server, state)
}

// ---------------------------------------------------------------------------
// Token helpers
// ---------------------------------------------------------------------------

/// Request a token for the given account via `POST /api/token`.
pub async fn issue_token(server: &TestServer, username: &str, password: &str) -> String {
    let response = server
        .post("/api/token")
        .json(&json!({ "username": username, "password": password }))
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    body["token"]
        .as_str()
        .expect("token missing from response")
        .to_string()
}

/// Token for the built-in admin account.
pub async fn admin_token(server: &TestServer) -> String {
    issue_token(server, ADMIN_USERNAME, ADMIN_PASSWORD).await
}

/// Token for the built-in read-only account.
pub async fn reader_token(server: &TestServer) -> String {
    issue_token(server, READER_USERNAME, READER_PASSWORD).await
}

// ---------------------------------------------------------------------------
// Store seeding helpers
// ---------------------------------------------------------------------------

/// Insert a product directly into the store, bypassing the API.
pub async fn seed_product(state: &AppState, name: &str, price: &str, available: bool) -> Product {
    let product = Product {
        id: Uuid::new_v4(),
        name: name.to_string(),
        price: price.parse::<Decimal>().expect("invalid test price"),
        available,
    };
    state
        .products
        .create(product)
        .await
        .expect("Failed to seed product")
}

/// Insert a customer directly into the store, bypassing the API.
pub async fn seed_customer(state: &AppState, name: &str, address: &str) -> Customer {
    let customer = Customer {
        id: Uuid::new_v4(),
        name: name.to_string(),
        address: address.to_string(),
    };
    state
        .customers
        .create(customer)
        .await
        .expect("Failed to seed customer")
}

/// Insert an order and its product rows directly into the stores.
pub async fn seed_order(
    state: &AppState,
    customer_id: Uuid,
    status: OrderStatus,
    product_ids: &[Uuid],
) -> Order {
    let order = Order {
        id: Uuid::new_v4(),
        customer_id,
        date: Utc::now(),
        status,
    };
    let order = state
        .orders
        .create(order)
        .await
        .expect("Failed to seed order");

    for product_id in product_ids {
        state
            .links
            .link(&order.id, product_id)
            .await
            .expect("Failed to seed order-product row");
    }

    order
}
