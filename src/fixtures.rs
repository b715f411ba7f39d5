//! Demo dataset loaded at startup when `seed_demo_data` is enabled

use crate::entities::customer::Customer;
use crate::entities::order::{Order, OrderStatus};
use crate::entities::product::Product;
use crate::server::AppState;
use anyhow::{Result, anyhow};
use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

/// Populate the stores with a small catalog, three customers, and three
/// orders linking them
pub async fn seed_demo_data(state: &AppState) -> Result<()> {
    let product_a = state
        .products
        .create(product("Product A", Decimal::new(1999, 2), true))
        .await?;
    let product_b = state
        .products
        .create(product("Product B", Decimal::new(2999, 2), true))
        .await?;
    let product_c = state
        .products
        .create(product("Product C", Decimal::new(3999, 2), false))
        .await?;

    let illia = state
        .customers
        .create(customer("Illia", "123 Wroclaw St"))
        .await?;
    let maryna = state
        .customers
        .create(customer("Maryna", "456 Warszawa St"))
        .await?;
    let dmytro = state
        .customers
        .create(customer("Dmytro", "789 Kyiv St"))
        .await?;

    let first = state
        .orders
        .create(order(illia.id, seed_date(10)?, OrderStatus::New))
        .await?;
    let second = state
        .orders
        .create(order(maryna.id, seed_date(11)?, OrderStatus::InProcess))
        .await?;
    let third = state
        .orders
        .create(order(dmytro.id, seed_date(12)?, OrderStatus::Completed))
        .await?;

    state.links.link(&first.id, &product_a.id).await?;
    state.links.link(&first.id, &product_b.id).await?;
    state.links.link(&second.id, &product_b.id).await?;
    state.links.link(&second.id, &product_c.id).await?;
    state.links.link(&third.id, &product_a.id).await?;
    state.links.link(&third.id, &product_c.id).await?;

    tracing::info!("Seeded demo data: 3 products, 3 customers, 3 orders");
    Ok(())
}

fn product(name: &str, price: Decimal, available: bool) -> Product {
    Product {
        id: Uuid::new_v4(),
        name: name.to_string(),
        price,
        available,
    }
}

fn customer(name: &str, address: &str) -> Customer {
    Customer {
        id: Uuid::new_v4(),
        name: name.to_string(),
        address: address.to_string(),
    }
}

fn order(customer_id: Uuid, date: DateTime<Utc>, status: OrderStatus) -> Order {
    Order {
        id: Uuid::new_v4(),
        customer_id,
        date,
        status,
    }
}

fn seed_date(hour: u32) -> Result<DateTime<Utc>> {
    Utc.with_ymd_and_hms(2024, 11, 6, hour, 0, 0)
        .single()
        .ok_or_else(|| anyhow!("Invalid seed date"))
}
