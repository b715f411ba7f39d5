//! Service traits for store operations
//!
//! These traits are the persistence seam: handlers and the cascade logic
//! talk to `DataService` / `LinkService`, never to a concrete backend. The
//! in-memory implementations live in `storage::in_memory`; a relational
//! backend would plug in here without touching the rest of the service.

use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

use crate::core::entity::Entity;
use crate::core::link::OrderProductLink;

/// CRUD operations for one entity table
///
/// Implementations are agnostic to the entity type beyond the [`Entity`]
/// trait. Errors from this trait are infrastructure failures; "not found"
/// is the `Ok(None)` case of `get`, decided by the caller.
#[async_trait]
pub trait DataService<T: Entity>: Send + Sync {
    /// Persist a new entity under its own id
    async fn create(&self, entity: T) -> Result<T>;

    /// Fetch an entity by id
    async fn get(&self, id: &Uuid) -> Result<Option<T>>;

    /// List all entities
    async fn list(&self) -> Result<Vec<T>>;

    /// Replace an existing entity
    async fn update(&self, id: &Uuid, entity: T) -> Result<T>;

    /// Remove an entity; removing an absent id is not an error
    async fn delete(&self, id: &Uuid) -> Result<()>;
}

/// Operations on the Order↔Product association rows
///
/// Only ids flow through this trait; it knows nothing about the entities
/// on either side.
#[async_trait]
pub trait LinkService: Send + Sync {
    /// Attach a product to an order
    ///
    /// Attaching an already-attached pair is a no-op returning the
    /// existing row, so the relation stays a set.
    async fn link(&self, order_id: &Uuid, product_id: &Uuid) -> Result<OrderProductLink>;

    /// Detach a product from an order; detaching an absent pair is a no-op
    async fn unlink(&self, order_id: &Uuid, product_id: &Uuid) -> Result<()>;

    /// Directed lookup: all rows for one order (order → products)
    async fn find_by_order(&self, order_id: &Uuid) -> Result<Vec<OrderProductLink>>;

    /// Directed lookup: all rows for one product (product → orders)
    async fn find_by_product(&self, product_id: &Uuid) -> Result<Vec<OrderProductLink>>;

    /// Remove every row for an order (order deletion, customer cascade)
    async fn delete_by_order(&self, order_id: &Uuid) -> Result<()>;

    /// Remove every row for a product (product deletion detaches it)
    async fn delete_by_product(&self, product_id: &Uuid) -> Result<()>;
}
