//! Catalog browsing and product registration.

use super::cart::require_product;
use super::error::ServiceError;
use crate::clients::ProductClient;
use crate::framework::{ActorClient, PageRequest};
use crate::model::{Product, ProductCreate, ProductId};
use serde::Serialize;
use tracing::{info, instrument, warn};

/// One page of products, echoing the page request as it was received.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductListing {
    pub products: Vec<Product>,
    pub total_count: usize,
    pub page: i32,
    pub page_size: i32,
}

#[derive(Clone)]
pub struct CatalogService {
    products: ProductClient,
}

impl CatalogService {
    pub fn new(products: ProductClient) -> Self {
        Self { products }
    }

    /// Lists products in `category`; an empty category lists everything.
    #[instrument(skip(self))]
    pub async fn list_products(
        &self,
        category: &str,
        page: i32,
        page_size: i32,
    ) -> Result<ProductListing, ServiceError> {
        let result = self
            .products
            .list_products(category, PageRequest::new(page, page_size))
            .await?;
        Ok(ProductListing {
            products: result.items,
            total_count: result.total_count,
            page,
            page_size,
        })
    }

    #[instrument(skip(self))]
    pub async fn get_product(&self, id: ProductId) -> Result<Product, ServiceError> {
        let id = require_product(id)?;
        self.products
            .get(id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("product {id}")))
    }

    #[instrument(skip(self))]
    pub async fn search_products(
        &self,
        query: &str,
        page: i32,
        page_size: i32,
    ) -> Result<ProductListing, ServiceError> {
        if query.is_empty() {
            warn!("Rejected empty search query");
            return Err(ServiceError::invalid("search query is required"));
        }
        let result = self
            .products
            .search_products(query, PageRequest::new(page, page_size))
            .await?;
        Ok(ProductListing {
            products: result.items,
            total_count: result.total_count,
            page,
            page_size,
        })
    }

    /// Registers a product and returns it with its assigned id.
    #[instrument(skip(self, params), fields(name = %params.name))]
    pub async fn add_product(&self, params: ProductCreate) -> Result<Product, ServiceError> {
        let product = self.products.insert_product(params).await?;
        info!(product_id = %product.id, "Product added");
        Ok(product)
    }
}
