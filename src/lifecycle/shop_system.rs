use super::config::{ConfigError, ShopConfig};
use super::seed::sample_catalog;
use crate::clients::{CartClient, OrderClient, ProductClient};
use crate::model::Product;
use crate::service::{CartService, CatalogService, OrderService, ServiceError};
use thiserror::Error;
use tracing::{error, info};

/// Failures while starting or stopping the system.
#[derive(Debug, Error)]
pub enum SystemError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Actor task failed: {0}")]
    ActorTaskFailed(#[from] tokio::task::JoinError),
}

/// The runtime orchestrator for the store.
///
/// `ShopSystem` is responsible for:
/// - **Lifecycle Management**: Starting and stopping all actors in the system
/// - **Dependency Wiring**: The cart actor records orders through an `OrderClient`
/// - **Service Assembly**: Building the catalog, cart and order services on top of the clients
///
/// # Example
///
/// ```ignore
/// let system = ShopSystem::new(&ShopConfig::default())?;
/// system.seed_catalog().await?;
///
/// system.carts.add_to_cart("alice", ProductId(1), 2).await?;
/// let order = system.orders.create_order("alice").await?;
///
/// system.shutdown().await?;
/// ```
pub struct ShopSystem {
    pub catalog: CatalogService,
    pub carts: CartService,
    pub orders: OrderService,

    pub product_client: ProductClient,
    pub cart_client: CartClient,
    pub order_client: OrderClient,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl ShopSystem {
    /// Spawns the three actors and wires the services to them.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new(config: &ShopConfig) -> Result<Self, SystemError> {
        config.validate()?;
        let capacity = config.mailbox_capacity;

        // 1. Create actors
        let (product_actor, product_client) = crate::product_actor::new(capacity);
        let (order_actor, order_client) = crate::order_actor::new(capacity);
        let (cart_actor, cart_client) = crate::cart_actor::new(capacity);

        // 2. Start actors with injected context
        let product_handle = tokio::spawn(product_actor.run(()));
        let order_handle = tokio::spawn(order_actor.run(()));
        // Checkout inside the cart actor records orders through this client.
        let cart_handle = tokio::spawn(cart_actor.run(order_client.clone()));

        info!(capacity, "Shop system started");

        Ok(Self {
            catalog: CatalogService::new(product_client.clone()),
            carts: CartService::new(cart_client.clone(), product_client.clone()),
            orders: OrderService::new(cart_client.clone(), order_client.clone()),
            product_client,
            cart_client,
            order_client,
            handles: vec![product_handle, cart_handle, order_handle],
        })
    }

    /// Loads the sample catalog, returning the inserted products.
    pub async fn seed_catalog(&self) -> Result<Vec<Product>, ServiceError> {
        let mut products = Vec::new();
        for params in sample_catalog() {
            products.push(self.catalog.add_product(params).await?);
        }
        info!(count = products.len(), "Sample catalog loaded");
        Ok(products)
    }

    /// Gracefully shuts down the entire system.
    ///
    /// Dropping every client closes the mailboxes. The order actor finishes
    /// only after the cart actor has exited and released the `OrderClient`
    /// held in its context. Every actor task is awaited; the first failure is
    /// reported.
    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down system...");

        let Self {
            catalog,
            carts,
            orders,
            product_client,
            cart_client,
            order_client,
            handles,
        } = self;
        drop((catalog, carts, orders));
        drop((product_client, cart_client, order_client));

        join_actors(handles).await?;
        info!("System shutdown complete.");
        Ok(())
    }
}

/// Awaits every actor task, returning the first failure once all have ended.
async fn join_actors(handles: Vec<tokio::task::JoinHandle<()>>) -> Result<(), SystemError> {
    let mut first_failure = None;
    for handle in handles {
        if let Err(e) = handle.await {
            error!(error = %e, "Actor task failed");
            first_failure.get_or_insert(e);
        }
    }
    match first_failure {
        Some(e) => Err(e.into()),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    #[tokio::test]
    async fn test_join_actors_awaits_tasks_after_a_failure() {
        let finished = Arc::new(AtomicBool::new(false));
        let flag = finished.clone();

        let failing = tokio::spawn(async { panic!("actor crashed") });
        let slow = tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(50)).await;
            flag.store(true, Ordering::SeqCst);
        });

        let result = join_actors(vec![failing, slow]).await;
        assert!(matches!(result, Err(SystemError::ActorTaskFailed(_))));
        assert!(finished.load(Ordering::SeqCst));
    }
}
