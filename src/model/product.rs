//! Catalog products.
//!
//! # Actor Framework
//! [`Product`] implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
//! allowing it to be managed by a [`ResourceActor`](crate::framework::ResourceActor).
//!
//! See [`impl ActorEntity for Product`](#impl-ActorEntity-for-Product) for details on:
//! - Creation parameters ([`ProductCreate`])
//! - Listing filters ([`ProductFilter`])
//! - Custom actions ([`ProductAction`](crate::product_actor::ProductAction))
use serde::{Deserialize, Serialize};

use crate::framework::EntityId;
use std::fmt::Display;

/// Type-safe identifier for Products.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ProductId(pub u32);

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl EntityId for ProductId {
    fn from_sequence(seq: u32) -> Option<Self> {
        Some(Self(seq))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    /// Unit price in the smallest currency unit.
    pub price: u64,
    pub category: String,
    pub stock: u32,
    pub image_url: String,
}

impl Product {
    /// Builds a product from its creation payload and final id.
    pub fn new(id: ProductId, params: ProductCreate) -> Self {
        Self {
            id,
            name: params.name,
            description: params.description,
            price: params.price,
            category: params.category,
            stock: params.stock,
            image_url: params.image_url,
        }
    }
}

/// DTO for Product creation.
///
/// Leave `id` as `None` (or `Some(ProductId(0))`) to let the catalog assign
/// the next free id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductCreate {
    #[serde(default)]
    pub id: Option<ProductId>,
    pub name: String,
    pub description: String,
    pub price: u64,
    pub category: String,
    pub stock: u32,
    pub image_url: String,
}

/// Predicate for catalog listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductFilter {
    /// Exact, case-sensitive category match. An empty category matches everything.
    Category(String),
    /// Case-insensitive substring match against name or description.
    ///
    /// Build it with [`ProductFilter::search`] so the needle is already folded.
    Search(String),
}

impl ProductFilter {
    pub fn category(category: impl Into<String>) -> Self {
        Self::Category(category.into())
    }

    pub fn search(query: &str) -> Self {
        Self::Search(query.to_lowercase())
    }

    /// Whether `product` belongs in a listing with this filter.
    pub fn accepts(&self, product: &Product) -> bool {
        match self {
            Self::Category(category) => category.is_empty() || &product.category == category,
            Self::Search(needle) => {
                product.name.to_lowercase().contains(needle.as_str())
                    || product.description.to_lowercase().contains(needle.as_str())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phone() -> Product {
        Product::new(
            ProductId(1),
            ProductCreate {
                name: "iPhone 15 Pro".into(),
                description: "Latest iPhone".into(),
                price: 1_200_000,
                category: "electronics".into(),
                stock: 50,
                ..Default::default()
            },
        )
    }

    #[test]
    fn test_category_filter_is_exact_and_empty_matches_all() {
        assert!(ProductFilter::category("").accepts(&phone()));
        assert!(ProductFilter::category("electronics").accepts(&phone()));
        assert!(!ProductFilter::category("Electronics").accepts(&phone()));
        assert!(!ProductFilter::category("shoes").accepts(&phone()));
    }

    #[test]
    fn test_search_filter_folds_case_on_both_sides() {
        assert!(ProductFilter::search("IPHONE").accepts(&phone()));
        assert!(ProductFilter::search("latest").accepts(&phone()));
        assert!(!ProductFilter::search("galaxy").accepts(&phone()));
    }

    #[test]
    fn test_product_id_displays_bare_number() {
        assert_eq!(ProductId(42).to_string(), "42");
        assert_eq!(ProductId::from_sequence(7), Some(ProductId(7)));
    }
}
