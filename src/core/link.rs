//! Order↔Product association rows
//!
//! The many-to-many relation between orders and products is stored as
//! explicit rows, each linking exactly one order to exactly one product.
//! Both directed lookups (order → products, product → orders) walk these
//! rows; neither side holds a reference to the other, so there are no
//! cycles to manage.

use uuid::Uuid;

/// One record in the Order↔Product relation
///
/// Removing a row detaches the product from the order without deleting
/// either side. Rows are cleaned up by whichever side's deletion triggers
/// it: deleting a product removes its rows, deleting an order (directly
/// or through a customer cascade) removes the order's rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderProductLink {
    /// Unique identifier for this association row
    pub id: Uuid,

    /// The order side of the relation
    pub order_id: Uuid,

    /// The product side of the relation
    pub product_id: Uuid,
}

impl OrderProductLink {
    /// Create a new association row
    pub fn new(order_id: Uuid, product_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            order_id,
            product_id,
        }
    }
}
