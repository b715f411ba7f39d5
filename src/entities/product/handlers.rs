//! HTTP handlers for product operations

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use uuid::Uuid;

use crate::core::auth::{Action, require};
use crate::core::error::{NotFoundError, RequestError, StorefrontResult};
use crate::entities::order::handlers::OrderResponse;
use crate::entities::product::model::{Product, ProductPayload};
use crate::server::state::AppState;

/// Response for the product list endpoint
#[derive(Debug, Serialize)]
pub struct ListProductsResponse {
    pub products: Vec<Product>,
    pub count: usize,
}

/// Response for the product → orders lookup
#[derive(Debug, Serialize)]
pub struct ProductOrdersResponse {
    pub orders: Vec<OrderResponse>,
    pub count: usize,
}

/// Routes for the product resource
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/products", get(list_products).post(create_product))
        .route(
            "/products/{id}",
            get(get_product)
                .put(update_product)
                .patch(patch_product)
                .delete(delete_product),
        )
        .route("/products/{id}/orders", get(list_product_orders))
        .with_state(state)
}

/// GET /products
pub async fn list_products(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> StorefrontResult<Json<ListProductsResponse>> {
    let principal = state.tokens.authenticate_request(&headers)?;
    require(&principal, Action::Read)?;

    let products = state.products.list().await?;

    Ok(Json(ListProductsResponse {
        count: products.len(),
        products,
    }))
}

/// GET /products/{id}
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> StorefrontResult<Json<Product>> {
    let principal = state.tokens.authenticate_request(&headers)?;
    require(&principal, Action::Read)?;

    let id = parse_id(&id)?;
    let product = fetch_product(&state, id).await?;

    Ok(Json(product))
}

/// GET /products/{id}/orders
///
/// Directed lookup across the association rows: every order that
/// currently contains this product, in its full representation.
pub async fn list_product_orders(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> StorefrontResult<Json<ProductOrdersResponse>> {
    let principal = state.tokens.authenticate_request(&headers)?;
    require(&principal, Action::Read)?;

    let id = parse_id(&id)?;
    fetch_product(&state, id).await?;

    let mut orders = Vec::new();
    for order in state.product_orders(&id).await? {
        let products = state.order_products(&order.id).await?;
        orders.push(OrderResponse::build(&order, &products));
    }

    Ok(Json(ProductOrdersResponse {
        count: orders.len(),
        orders,
    }))
}

/// POST /products
pub async fn create_product(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<ProductPayload>,
) -> StorefrontResult<Response> {
    let principal = state.tokens.authenticate_request(&headers)?;
    require(&principal, Action::Write)?;

    let product = Product::create(payload)?;
    let product = state.products.create(product).await?;

    Ok((StatusCode::CREATED, Json(product)).into_response())
}

/// PUT /products/{id}
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Json(payload): Json<ProductPayload>,
) -> StorefrontResult<Json<Product>> {
    let principal = state.tokens.authenticate_request(&headers)?;
    require(&principal, Action::Write)?;

    let id = parse_id(&id)?;
    let existing = fetch_product(&state, id).await?;

    let updated = existing.update(payload)?;
    let updated = state.products.update(&id, updated).await?;

    Ok(Json(updated))
}

/// PATCH /products/{id}
pub async fn patch_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Json(payload): Json<ProductPayload>,
) -> StorefrontResult<Json<Product>> {
    let principal = state.tokens.authenticate_request(&headers)?;
    require(&principal, Action::Write)?;

    let id = parse_id(&id)?;
    let existing = fetch_product(&state, id).await?;

    let patched = existing.patch(payload)?;
    let patched = state.products.update(&id, patched).await?;

    Ok(Json(patched))
}

/// DELETE /products/{id}
///
/// Orders containing the product keep existing; only their association
/// rows to it are removed, which changes their aggregates.
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> StorefrontResult<Response> {
    let principal = state.tokens.authenticate_request(&headers)?;
    require(&principal, Action::Write)?;

    let id = parse_id(&id)?;
    fetch_product(&state, id).await?;

    state.remove_product(&id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

async fn fetch_product(state: &AppState, id: Uuid) -> StorefrontResult<Product> {
    Ok(state
        .products
        .get(&id)
        .await?
        .ok_or(NotFoundError::UnknownId {
            resource: "product",
            id,
        })?)
}

fn parse_id(value: &str) -> Result<Uuid, RequestError> {
    Uuid::try_parse(value).map_err(|_| RequestError::InvalidId {
        resource: "product",
        value: value.to_string(),
    })
}
