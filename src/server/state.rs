//! Application state shared across handlers
//!
//! The state owns one store per entity, the association-row store, the
//! token registry, and the compiled catalog templates. Deletions that
//! touch more than one table live here so every handler applies the
//! same cascade rules.

use std::sync::Arc;

use anyhow::Result;
use tera::Tera;
use uuid::Uuid;

use crate::auth::{TokenRegistry, UserAccount};
use crate::core::service::{DataService, LinkService};
use crate::entities::customer::Customer;
use crate::entities::order::Order;
use crate::entities::product::Product;
use crate::server::catalog;
use crate::storage::in_memory::{InMemoryDataService, InMemoryLinkService};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub customers: Arc<dyn DataService<Customer>>,
    pub products: Arc<dyn DataService<Product>>,
    pub orders: Arc<dyn DataService<Order>>,
    pub links: Arc<dyn LinkService>,
    pub tokens: TokenRegistry,
    pub templates: Arc<Tera>,
}

impl AppState {
    /// Build state over fresh in-memory stores
    pub fn in_memory(accounts: Vec<UserAccount>) -> Result<Self> {
        Ok(Self {
            customers: Arc::new(InMemoryDataService::new()),
            products: Arc::new(InMemoryDataService::new()),
            orders: Arc::new(InMemoryDataService::new()),
            links: Arc::new(InMemoryLinkService::new()),
            tokens: TokenRegistry::new(accounts),
            templates: Arc::new(catalog::templates()?),
        })
    }

    /// Products currently attached to an order
    pub async fn order_products(&self, order_id: &Uuid) -> Result<Vec<Product>> {
        let mut products = Vec::new();

        for link in self.links.find_by_order(order_id).await? {
            if let Some(product) = self.products.get(&link.product_id).await? {
                products.push(product);
            }
        }

        Ok(products)
    }

    /// Orders that currently contain a product
    pub async fn product_orders(&self, product_id: &Uuid) -> Result<Vec<Order>> {
        let mut orders = Vec::new();

        for link in self.links.find_by_product(product_id).await? {
            if let Some(order) = self.orders.get(&link.order_id).await? {
                orders.push(order);
            }
        }

        Ok(orders)
    }

    /// Delete an order together with its association rows
    pub async fn remove_order(&self, order_id: &Uuid) -> Result<()> {
        self.links.delete_by_order(order_id).await?;
        self.orders.delete(order_id).await
    }

    /// Delete a product, detaching it from every order
    ///
    /// The orders themselves survive; only their rows pointing at this
    /// product go away, which in turn changes their aggregates.
    pub async fn remove_product(&self, product_id: &Uuid) -> Result<()> {
        self.links.delete_by_product(product_id).await?;
        self.products.delete(product_id).await
    }

    /// Delete a customer and cascade to every order they placed
    ///
    /// Each of the customer's orders is removed the same way a direct
    /// order deletion would remove it, association rows included.
    /// Products referenced by those orders are left alone.
    pub async fn remove_customer(&self, customer_id: &Uuid) -> Result<()> {
        for order in self.orders.list().await? {
            if &order.customer_id == customer_id {
                self.remove_order(&order.id).await?;
            }
        }

        self.customers.delete(customer_id).await
    }
}
