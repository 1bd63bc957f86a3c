//! Demo: browse the sample catalog, fill a cart, check out and list orders.

use commerce_store::lifecycle::{setup_tracing, ShopConfig, ShopSystem};
use commerce_store::model::ProductId;
use std::error::Error;
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    setup_tracing();

    let config = ShopConfig::from_env()?;
    info!(?config, "Starting commerce store");

    let system = ShopSystem::new(&config)?;
    if config.seed_catalog {
        system.seed_catalog().await?;
    }

    let listing = system.catalog.list_products("electronics", 1, 10).await?;
    info!(total = listing.total_count, "Electronics in catalog");

    let found = system.catalog.search_products("macbook", 1, 10).await?;
    info!(hits = found.total_count, "Search for \"macbook\"");

    let user = "alice";
    let span = tracing::info_span!("shopping", user);
    let outcome = async {
        system.carts.add_to_cart(user, ProductId(1), 1).await?;
        let response = system.carts.add_to_cart(user, ProductId(3), 2).await?;
        info!(
            lines = response.cart.items.len(),
            total = response.cart.total_price,
            "{}",
            response.message
        );
        system.orders.create_order(user).await
    }
    .instrument(span)
    .await;

    match outcome {
        Ok(order) => {
            info!(order_id = %order.id, "Order placed");
            info!("{}", serde_json::to_string_pretty(&order)?);
            system
                .orders
                .update_order_status(&order.id.to_string(), "shipped")
                .await?;
        }
        Err(e) => error!(code = e.code().as_str(), error = %e, "Checkout failed"),
    }

    let history = system.orders.list_user_orders(user, 1, 10).await?;
    for order in &history.orders {
        info!(order_id = %order.id, status = %order.status, total = order.total_price, "History");
    }

    system.shutdown().await?;
    info!("Application completed successfully");
    Ok(())
}
