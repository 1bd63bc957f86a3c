//! # Product Client
//!
//! Provides a high-level API for interacting with the `Product` actor.
//! It wraps a `ResourceClient<Product>` and exposes catalog operations.
use crate::framework::{ActorClient, FrameworkError, PageRequest, Page, ResourceClient};
use crate::model::{Product, ProductCreate, ProductFilter, ProductId};
use crate::product_actor::{ProductAction, ProductActionResult, ProductError};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Product actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl ProductClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Product> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.entity_error::<ProductError>() {
            Ok(err) => err,
            Err(other) => ProductError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl ProductClient {
    /// Inserts a product, returning it with its final id.
    ///
    /// A caller-supplied id replaces any product already stored under it.
    #[instrument(skip(self, params), fields(name = %params.name))]
    pub async fn insert_product(&self, params: ProductCreate) -> Result<Product, ProductError> {
        debug!(?params, "insert_product called");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Lists products in `category` (empty for all) in id order.
    #[instrument(skip(self))]
    pub async fn list_products(
        &self,
        category: &str,
        page: PageRequest,
    ) -> Result<Page<Product>, ProductError> {
        debug!("Sending request");
        self.inner
            .query(ProductFilter::category(category), page)
            .await
            .map_err(Self::map_error)
    }

    /// Case-insensitive substring search over name and description.
    #[instrument(skip(self))]
    pub async fn search_products(
        &self,
        query: &str,
        page: PageRequest,
    ) -> Result<Page<Product>, ProductError> {
        debug!("Sending request");
        self.inner
            .query(ProductFilter::search(query), page)
            .await
            .map_err(Self::map_error)
    }

    /// Check the current stock level for a product.
    #[instrument(skip(self))]
    pub async fn check_stock(&self, id: ProductId) -> Result<u32, ProductError> {
        debug!("Checking stock");
        match self.inner.perform_action(id, ProductAction::CheckStock).await {
            Ok(ProductActionResult::CheckStock(level)) => Ok(level),
            Ok(_) => unreachable!("CheckStock action must return CheckStock result"),
            Err(e) => Err(Self::map_action_error(id, e)),
        }
    }

    /// Adds a signed delta to a product's stock, returning the new level.
    ///
    /// Fails without mutating if the product is missing or the level would
    /// go negative.
    #[instrument(skip(self))]
    pub async fn adjust_stock(&self, id: ProductId, delta: i64) -> Result<u32, ProductError> {
        debug!("Adjusting stock");
        match self
            .inner
            .perform_action(id, ProductAction::AdjustStock(delta))
            .await
        {
            Ok(ProductActionResult::AdjustStock(level)) => Ok(level),
            Ok(_) => unreachable!("AdjustStock action must return AdjustStock result"),
            Err(e) => Err(Self::map_action_error(id, e)),
        }
    }

    fn map_action_error(id: ProductId, e: FrameworkError) -> ProductError {
        match e {
            FrameworkError::NotFound(_) => ProductError::NotFound(id),
            other => Self::map_error(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::{create_mock_client, expect_action, expect_query};

    #[tokio::test]
    async fn test_check_stock_returns_correct_level() {
        let (client, mut receiver) = create_mock_client::<Product>(10);
        let product_client = ProductClient::new(client);

        let check_task =
            tokio::spawn(async move { product_client.check_stock(ProductId(1)).await });

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");

        assert_eq!(id, ProductId(1));
        assert!(matches!(action, ProductAction::CheckStock));

        responder
            .send(Ok(ProductActionResult::CheckStock(42)))
            .unwrap();

        let result = check_task.await.unwrap();
        assert_eq!(result.unwrap(), 42);
    }

    #[tokio::test]
    async fn test_adjust_stock_recovers_typed_error() {
        let (client, mut receiver) = create_mock_client::<Product>(10);
        let product_client = ProductClient::new(client);

        let adjust_task =
            tokio::spawn(async move { product_client.adjust_stock(ProductId(3), -100).await });

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(id, ProductId(3));
        match action {
            ProductAction::AdjustStock(delta) => assert_eq!(delta, -100),
            _ => panic!("Expected AdjustStock action"),
        }

        responder
            .send(Err(FrameworkError::EntityError(Box::new(
                ProductError::InsufficientStock {
                    requested: 100,
                    available: 7,
                },
            ))))
            .unwrap();

        let result = adjust_task.await.unwrap();
        assert_eq!(
            result,
            Err(ProductError::InsufficientStock {
                requested: 100,
                available: 7
            })
        );
    }

    #[tokio::test]
    async fn test_adjust_stock_on_missing_product_is_not_found() {
        let (client, mut receiver) = create_mock_client::<Product>(10);
        let product_client = ProductClient::new(client);

        let adjust_task =
            tokio::spawn(async move { product_client.adjust_stock(ProductId(9), 1).await });

        let (_, _, responder) = expect_action(&mut receiver).await.unwrap();
        responder
            .send(Err(FrameworkError::NotFound("9".into())))
            .unwrap();

        let result = adjust_task.await.unwrap();
        assert_eq!(result, Err(ProductError::NotFound(ProductId(9))));
    }

    #[tokio::test]
    async fn test_search_sends_case_folded_filter() {
        let (client, mut receiver) = create_mock_client::<Product>(10);
        let product_client = ProductClient::new(client);

        let search_task = tokio::spawn(async move {
            product_client
                .search_products("MacBook", PageRequest::new(2, 5))
                .await
        });

        let (filter, page, responder) = expect_query(&mut receiver)
            .await
            .expect("Expected Query request");
        assert_eq!(filter, ProductFilter::Search("macbook".into()));
        assert_eq!(page, PageRequest::new(2, 5));

        responder
            .send(Ok(Page {
                items: Vec::new(),
                total_count: 0,
            }))
            .unwrap();

        let result = search_task.await.unwrap().unwrap();
        assert!(result.is_empty());
    }

    #[tokio::test]
    async fn test_closed_actor_maps_to_communication_error() {
        let (client, receiver) = create_mock_client::<Product>(1);
        drop(receiver);
        let product_client = ProductClient::new(client);

        let result = product_client.check_stock(ProductId(1)).await;
        assert!(matches!(
            result,
            Err(ProductError::ActorCommunicationError(_))
        ));
    }
}
