//! HTTP handlers for customer operations

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use uuid::Uuid;

use crate::core::auth::{Action, require};
use crate::core::error::{NotFoundError, RequestError, StorefrontResult};
use crate::entities::customer::model::{Customer, CustomerPayload};
use crate::server::state::AppState;

/// Response for the customer list endpoint
#[derive(Debug, Serialize)]
pub struct ListCustomersResponse {
    pub customers: Vec<Customer>,
    pub count: usize,
}

/// Routes for the customer resource
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/customers", get(list_customers).post(create_customer))
        .route(
            "/customers/{id}",
            get(get_customer)
                .put(update_customer)
                .patch(patch_customer)
                .delete(delete_customer),
        )
        .with_state(state)
}

/// GET /customers
pub async fn list_customers(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> StorefrontResult<Json<ListCustomersResponse>> {
    let principal = state.tokens.authenticate_request(&headers)?;
    require(&principal, Action::Read)?;

    let customers = state.customers.list().await?;

    Ok(Json(ListCustomersResponse {
        count: customers.len(),
        customers,
    }))
}

/// GET /customers/{id}
pub async fn get_customer(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> StorefrontResult<Json<Customer>> {
    let principal = state.tokens.authenticate_request(&headers)?;
    require(&principal, Action::Read)?;

    let id = parse_id(&id)?;
    let customer = fetch_customer(&state, id).await?;

    Ok(Json(customer))
}

/// POST /customers
pub async fn create_customer(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CustomerPayload>,
) -> StorefrontResult<Response> {
    let principal = state.tokens.authenticate_request(&headers)?;
    require(&principal, Action::Write)?;

    let customer = Customer::create(payload)?;
    let customer = state.customers.create(customer).await?;

    Ok((StatusCode::CREATED, Json(customer)).into_response())
}

/// PUT /customers/{id}
pub async fn update_customer(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Json(payload): Json<CustomerPayload>,
) -> StorefrontResult<Json<Customer>> {
    let principal = state.tokens.authenticate_request(&headers)?;
    require(&principal, Action::Write)?;

    let id = parse_id(&id)?;
    let existing = fetch_customer(&state, id).await?;

    let updated = existing.update(payload)?;
    let updated = state.customers.update(&id, updated).await?;

    Ok(Json(updated))
}

/// PATCH /customers/{id}
pub async fn patch_customer(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Json(payload): Json<CustomerPayload>,
) -> StorefrontResult<Json<Customer>> {
    let principal = state.tokens.authenticate_request(&headers)?;
    require(&principal, Action::Write)?;

    let id = parse_id(&id)?;
    let existing = fetch_customer(&state, id).await?;

    let patched = existing.patch(payload)?;
    let patched = state.customers.update(&id, patched).await?;

    Ok(Json(patched))
}

/// DELETE /customers/{id}
///
/// Cascades: every order placed by this customer is deleted along with
/// its association rows. Products stay untouched.
pub async fn delete_customer(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> StorefrontResult<Response> {
    let principal = state.tokens.authenticate_request(&headers)?;
    require(&principal, Action::Write)?;

    let id = parse_id(&id)?;
    fetch_customer(&state, id).await?;

    state.remove_customer(&id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

async fn fetch_customer(state: &AppState, id: Uuid) -> StorefrontResult<Customer> {
    Ok(state
        .customers
        .get(&id)
        .await?
        .ok_or(NotFoundError::UnknownId {
            resource: "customer",
            id,
        })?)
}

fn parse_id(value: &str) -> Result<Uuid, RequestError> {
    Uuid::try_parse(value).map_err(|_| RequestError::InvalidId {
        resource: "customer",
        value: value.to_string(),
    })
}
