//! HTTP handlers for order operations
//!
//! Orders are the one resource whose writes touch two tables: the order
//! record itself and the association rows tying it to products. Every
//! referenced product and the customer are checked for existence before
//! the first row is written.

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use crate::core::auth::{Action, require};
use crate::core::error::{NotFoundError, RequestError, StorefrontResult};
use crate::entities::order::model::{
    Order, OrderPayload, OrderStatus, can_be_fulfilled, total_price,
};
use crate::entities::product::Product;
use crate::server::state::AppState;

/// Wire representation of an order
///
/// Carries the product set as ids plus the two derived aggregates, so a
/// client never has to recompute them. The total serializes as a
/// string-formatted decimal like every price in the API.
#[derive(Debug, Serialize)]
pub struct OrderResponse {
    pub id: Uuid,
    pub customer: Uuid,
    pub products: Vec<Uuid>,
    pub date: DateTime<Utc>,
    pub status: OrderStatus,
    pub total_price: Decimal,
    pub can_be_fulfilled: bool,
}

impl OrderResponse {
    /// Assemble the representation from the record and its current products
    pub fn build(order: &Order, products: &[Product]) -> Self {
        Self {
            id: order.id,
            customer: order.customer_id,
            products: products.iter().map(|product| product.id).collect(),
            date: order.date,
            status: order.status,
            total_price: total_price(products),
            can_be_fulfilled: can_be_fulfilled(products),
        }
    }
}

/// Response for the order list endpoint
#[derive(Debug, Serialize)]
pub struct ListOrdersResponse {
    pub orders: Vec<OrderResponse>,
    pub count: usize,
}

/// Response for the order → products lookup
#[derive(Debug, Serialize)]
pub struct OrderProductsResponse {
    pub products: Vec<Product>,
    pub count: usize,
}

/// Routes for the order resource
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/orders", get(list_orders).post(create_order))
        .route(
            "/orders/{id}",
            get(get_order)
                .put(update_order)
                .patch(patch_order)
                .delete(delete_order),
        )
        .route("/orders/{id}/products", get(list_order_products))
        .with_state(state)
}

/// GET /orders
pub async fn list_orders(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> StorefrontResult<Json<ListOrdersResponse>> {
    let principal = state.tokens.authenticate_request(&headers)?;
    require(&principal, Action::Read)?;

    let mut orders = Vec::new();
    for order in state.orders.list().await? {
        let products = state.order_products(&order.id).await?;
        orders.push(OrderResponse::build(&order, &products));
    }

    Ok(Json(ListOrdersResponse {
        count: orders.len(),
        orders,
    }))
}

/// GET /orders/{id}
pub async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> StorefrontResult<Json<OrderResponse>> {
    let principal = state.tokens.authenticate_request(&headers)?;
    require(&principal, Action::Read)?;

    let id = parse_id(&id)?;
    let order = fetch_order(&state, id).await?;
    let products = state.order_products(&order.id).await?;

    Ok(Json(OrderResponse::build(&order, &products)))
}

/// GET /orders/{id}/products
///
/// Directed lookup across the association rows: the full product
/// records currently attached to this order.
pub async fn list_order_products(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> StorefrontResult<Json<OrderProductsResponse>> {
    let principal = state.tokens.authenticate_request(&headers)?;
    require(&principal, Action::Read)?;

    let id = parse_id(&id)?;
    fetch_order(&state, id).await?;

    let products = state.order_products(&id).await?;

    Ok(Json(OrderProductsResponse {
        count: products.len(),
        products,
    }))
}

/// POST /orders
///
/// Field validation runs first, then the customer and every referenced
/// product must exist; only then are the record and its association
/// rows written.
pub async fn create_order(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<OrderPayload>,
) -> StorefrontResult<Response> {
    let principal = state.tokens.authenticate_request(&headers)?;
    require(&principal, Action::Write)?;

    let product_ids = unique_ids(payload.products.as_deref().unwrap_or_default());
    let order = Order::create(payload)?;

    fetch_customer(&state, order.customer_id).await?;
    let products = fetch_products(&state, &product_ids).await?;

    let order = state.orders.create(order).await?;
    for product_id in &product_ids {
        state.links.link(&order.id, product_id).await?;
    }

    let body = OrderResponse::build(&order, &products);
    Ok((StatusCode::CREATED, Json(body)).into_response())
}

/// PUT /orders/{id}
///
/// Full replacement: an absent product list empties the set, an absent
/// date takes the default again.
pub async fn update_order(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Json(payload): Json<OrderPayload>,
) -> StorefrontResult<Json<OrderResponse>> {
    let principal = state.tokens.authenticate_request(&headers)?;
    require(&principal, Action::Write)?;

    let id = parse_id(&id)?;
    let existing = fetch_order(&state, id).await?;

    let product_ids = unique_ids(payload.products.as_deref().unwrap_or_default());
    let updated = existing.update(payload)?;

    fetch_customer(&state, updated.customer_id).await?;
    let products = fetch_products(&state, &product_ids).await?;

    let updated = state.orders.update(&id, updated).await?;
    state.links.delete_by_order(&id).await?;
    for product_id in &product_ids {
        state.links.link(&id, product_id).await?;
    }

    Ok(Json(OrderResponse::build(&updated, &products)))
}

/// PATCH /orders/{id}
///
/// Partial update: absent fields keep their stored values, and the
/// product set is only replaced when the payload mentions it.
pub async fn patch_order(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Json(payload): Json<OrderPayload>,
) -> StorefrontResult<Json<OrderResponse>> {
    let principal = state.tokens.authenticate_request(&headers)?;
    require(&principal, Action::Write)?;

    let id = parse_id(&id)?;
    let existing = fetch_order(&state, id).await?;

    let replacement_ids = payload.products.as_deref().map(unique_ids);
    let patched = existing.patch(payload)?;

    fetch_customer(&state, patched.customer_id).await?;

    let products = match &replacement_ids {
        Some(product_ids) => fetch_products(&state, product_ids).await?,
        None => state.order_products(&id).await?,
    };

    let patched = state.orders.update(&id, patched).await?;

    if let Some(product_ids) = replacement_ids {
        state.links.delete_by_order(&id).await?;
        for product_id in &product_ids {
            state.links.link(&id, product_id).await?;
        }
    }

    Ok(Json(OrderResponse::build(&patched, &products)))
}

/// DELETE /orders/{id}
pub async fn delete_order(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> StorefrontResult<Response> {
    let principal = state.tokens.authenticate_request(&headers)?;
    require(&principal, Action::Write)?;

    let id = parse_id(&id)?;
    fetch_order(&state, id).await?;

    state.remove_order(&id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

async fn fetch_order(state: &AppState, id: Uuid) -> StorefrontResult<Order> {
    Ok(state
        .orders
        .get(&id)
        .await?
        .ok_or(NotFoundError::UnknownId {
            resource: "order",
            id,
        })?)
}

async fn fetch_customer(state: &AppState, id: Uuid) -> StorefrontResult<()> {
    state
        .customers
        .get(&id)
        .await?
        .ok_or(NotFoundError::UnknownId {
            resource: "customer",
            id,
        })?;

    Ok(())
}

/// Resolve every referenced product, failing on the first unknown id
async fn fetch_products(state: &AppState, ids: &[Uuid]) -> StorefrontResult<Vec<Product>> {
    let mut products = Vec::new();

    for id in ids {
        let product = state
            .products
            .get(id)
            .await?
            .ok_or(NotFoundError::UnknownId {
                resource: "product",
                id: *id,
            })?;
        products.push(product);
    }

    Ok(products)
}

/// Drop duplicate ids while keeping first-seen order; the relation is a set
fn unique_ids(ids: &[Uuid]) -> Vec<Uuid> {
    let mut unique = Vec::new();

    for id in ids {
        if !unique.contains(id) {
            unique.push(*id);
        }
    }

    unique
}

fn parse_id(value: &str) -> Result<Uuid, RequestError> {
    Uuid::try_parse(value).map_err(|_| RequestError::InvalidId {
        resource: "order",
        value: value.to_string(),
    })
}
