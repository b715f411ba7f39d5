//! Core entity trait
//!
//! The store is generic over anything that can name itself and hand out
//! its id. Domain records (Customer, Product, Order) implement this; the
//! store never learns anything else about them.

use uuid::Uuid;

/// A storable domain record with a store-assigned id
pub trait Entity: Clone + Send + Sync + 'static {
    /// Plural resource name, as used in URLs ("products")
    fn resource_name() -> &'static str;

    /// Singular resource name, as used in error messages ("product")
    fn resource_name_singular() -> &'static str;

    /// The record's unique id
    fn id(&self) -> Uuid;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone)]
    struct Widget {
        id: Uuid,
    }

    impl Entity for Widget {
        fn resource_name() -> &'static str {
            "widgets"
        }

        fn resource_name_singular() -> &'static str {
            "widget"
        }

        fn id(&self) -> Uuid {
            self.id
        }
    }

    #[test]
    fn test_entity_exposes_names_and_id() {
        let id = Uuid::new_v4();
        let widget = Widget { id };
        assert_eq!(Widget::resource_name(), "widgets");
        assert_eq!(Widget::resource_name_singular(), "widget");
        assert_eq!(widget.id(), id);
    }
}
