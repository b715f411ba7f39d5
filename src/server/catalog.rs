//! Server-rendered product catalog
//!
//! Public HTML pages over the same product store the API writes to.
//! Templates are compiled into the binary, so a rendering failure can
//! only come from a context mismatch and surfaces as a 500.

use axum::Router;
use axum::extract::{Form, Path, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::get;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tera::{Context, Tera};
use uuid::Uuid;

use crate::core::error::{NotFoundError, RequestError, StorefrontResult};
use crate::entities::product::{Product, ProductPayload};
use crate::server::state::AppState;

/// Compile the catalog templates into a fresh engine
pub fn templates() -> tera::Result<Tera> {
    let mut tera = Tera::default();

    tera.add_raw_templates(vec![
        ("base.html", include_str!("../../templates/base.html")),
        (
            "product_list.html",
            include_str!("../../templates/product_list.html"),
        ),
        (
            "product_detail.html",
            include_str!("../../templates/product_detail.html"),
        ),
        (
            "product_create.html",
            include_str!("../../templates/product_create.html"),
        ),
    ])?;

    Ok(tera)
}

/// Routes for the catalog pages
///
/// The static `/new` segment is registered alongside the `{id}` capture;
/// the router prefers the static match.
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/catalog/products", get(product_list))
        .route(
            "/catalog/products/new",
            get(product_create_form).post(product_create),
        )
        .route("/catalog/products/{id}", get(product_detail))
        .with_state(state)
}

/// Form fields for the create page, kept as submitted text so invalid
/// input can be re-rendered unchanged
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductForm {
    pub name: String,
    pub price: String,
    pub available: String,
}

impl ProductForm {
    fn empty() -> Self {
        Self {
            name: String::new(),
            price: String::new(),
            available: "true".to_string(),
        }
    }

    /// Translate the submitted fields into the API payload, so the form
    /// goes through exactly the validation the API applies
    fn to_payload(&self) -> ProductPayload {
        ProductPayload {
            name: Some(self.name.clone()),
            price: self.price.trim().parse::<Decimal>().ok(),
            available: match self.available.as_str() {
                "true" => Some(true),
                "false" => Some(false),
                _ => None,
            },
        }
    }
}

/// GET /catalog/products
async fn product_list(State(state): State<AppState>) -> StorefrontResult<Html<String>> {
    let mut products = state.products.list().await?;
    products.sort_by(|a, b| a.name.cmp(&b.name));

    let mut context = Context::new();
    context.insert("products", &products);

    Ok(Html(state.templates.render("product_list.html", &context)?))
}

/// GET /catalog/products/{id}
async fn product_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> StorefrontResult<Html<String>> {
    let id = parse_id(&id)?;

    let product = state
        .products
        .get(&id)
        .await?
        .ok_or(NotFoundError::UnknownId {
            resource: "product",
            id,
        })?;

    let mut context = Context::new();
    context.insert("product", &product);

    Ok(Html(
        state.templates.render("product_detail.html", &context)?,
    ))
}

/// GET /catalog/products/new
async fn product_create_form(State(state): State<AppState>) -> StorefrontResult<Html<String>> {
    render_create_form(&state, &ProductForm::empty(), None)
}

/// POST /catalog/products/new
///
/// A valid submission creates the product and redirects to the list
/// page; an invalid one re-renders the form with the error message and
/// the submitted values.
async fn product_create(
    State(state): State<AppState>,
    Form(form): Form<ProductForm>,
) -> StorefrontResult<Response> {
    match Product::create(form.to_payload()) {
        Ok(product) => {
            state.products.create(product).await?;
            Ok(Redirect::to("/catalog/products").into_response())
        }
        Err(err) => {
            let page = render_create_form(&state, &form, Some(err.to_string()))?;
            Ok(page.into_response())
        }
    }
}

fn render_create_form(
    state: &AppState,
    form: &ProductForm,
    error: Option<String>,
) -> StorefrontResult<Html<String>> {
    let mut context = Context::new();
    context.insert("form", form);
    context.insert("error", &error);

    Ok(Html(
        state.templates.render("product_create.html", &context)?,
    ))
}

fn parse_id(value: &str) -> Result<Uuid, RequestError> {
    Uuid::try_parse(value).map_err(|_| RequestError::InvalidId {
        resource: "product",
        value: value.to_string(),
    })
}
