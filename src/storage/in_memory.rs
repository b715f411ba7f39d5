//! In-memory implementations of the store traits
//!
//! Useful for testing and development. Uses RwLock for thread-safe access.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use uuid::Uuid;

use crate::core::entity::Entity;
use crate::core::link::OrderProductLink;
use crate::core::service::{DataService, LinkService};

/// In-memory entity table
///
/// One instance holds the records of a single entity type, keyed by id.
#[derive(Clone)]
pub struct InMemoryDataService<T: Entity> {
    records: Arc<RwLock<HashMap<Uuid, T>>>,
}

impl<T: Entity> InMemoryDataService<T> {
    /// Create a new, empty table
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl<T: Entity> Default for InMemoryDataService<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Entity> DataService<T> for InMemoryDataService<T> {
    async fn create(&self, entity: T) -> Result<T> {
        let mut records = self
            .records
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        records.insert(entity.id(), entity.clone());

        Ok(entity)
    }

    async fn get(&self, id: &Uuid) -> Result<Option<T>> {
        let records = self
            .records
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(records.get(id).cloned())
    }

    async fn list(&self) -> Result<Vec<T>> {
        let records = self
            .records
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(records.values().cloned().collect())
    }

    async fn update(&self, id: &Uuid, entity: T) -> Result<T> {
        let mut records = self
            .records
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        records
            .get_mut(id)
            .ok_or_else(|| anyhow!("{} not found", T::resource_name_singular()))?;

        records.insert(*id, entity.clone());

        Ok(entity)
    }

    async fn delete(&self, id: &Uuid) -> Result<()> {
        let mut records = self
            .records
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        records.remove(id);

        Ok(())
    }
}

/// In-memory table of Order↔Product association rows
#[derive(Clone)]
pub struct InMemoryLinkService {
    links: Arc<RwLock<HashMap<Uuid, OrderProductLink>>>,
}

impl InMemoryLinkService {
    /// Create a new in-memory link service
    pub fn new() -> Self {
        Self {
            links: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for InMemoryLinkService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LinkService for InMemoryLinkService {
    async fn link(&self, order_id: &Uuid, product_id: &Uuid) -> Result<OrderProductLink> {
        let mut links = self
            .links
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        // The relation is a set: re-linking an existing pair hands back
        // the row that is already there.
        if let Some(existing) = links
            .values()
            .find(|link| &link.order_id == order_id && &link.product_id == product_id)
        {
            return Ok(existing.clone());
        }

        let link = OrderProductLink::new(*order_id, *product_id);
        links.insert(link.id, link.clone());

        Ok(link)
    }

    async fn unlink(&self, order_id: &Uuid, product_id: &Uuid) -> Result<()> {
        let mut links = self
            .links
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        links.retain(|_, link| !(&link.order_id == order_id && &link.product_id == product_id));

        Ok(())
    }

    async fn find_by_order(&self, order_id: &Uuid) -> Result<Vec<OrderProductLink>> {
        let links = self
            .links
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(links
            .values()
            .filter(|link| &link.order_id == order_id)
            .cloned()
            .collect())
    }

    async fn find_by_product(&self, product_id: &Uuid) -> Result<Vec<OrderProductLink>> {
        let links = self
            .links
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(links
            .values()
            .filter(|link| &link.product_id == product_id)
            .cloned()
            .collect())
    }

    async fn delete_by_order(&self, order_id: &Uuid) -> Result<()> {
        let mut links = self
            .links
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        links.retain(|_, link| &link.order_id != order_id);

        Ok(())
    }

    async fn delete_by_product(&self, product_id: &Uuid) -> Result<()> {
        let mut links = self
            .links
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        links.retain(|_, link| &link.product_id != product_id);

        Ok(())
    }
}
