//! The sample catalog loaded at startup by the demo binary.

use crate::model::{ProductCreate, ProductId};

fn item(
    id: u32,
    name: &str,
    description: &str,
    price: u64,
    category: &str,
    stock: u32,
    image: &str,
) -> ProductCreate {
    ProductCreate {
        id: Some(ProductId(id)),
        name: name.to_string(),
        description: description.to_string(),
        price,
        category: category.to_string(),
        stock,
        image_url: format!("https://example.com/{image}.jpg"),
    }
}

/// Five products across three categories, with fixed ids 1 through 5.
pub fn sample_catalog() -> Vec<ProductCreate> {
    vec![
        item(1, "iPhone 15 Pro", "The latest iPhone 15 Pro model", 1_200_000, "electronics", 50, "iphone15pro"),
        item(2, "MacBook Air M3", "Apple MacBook Air with the M3 chip", 1_500_000, "electronics", 30, "macbook-air-m3"),
        item(3, "Nike Air Max", "Comfortable running shoes", 150_000, "shoes", 100, "nike-airmax"),
        item(4, "Samsung Galaxy S24", "Samsung's newest smartphone", 1_100_000, "electronics", 40, "galaxy-s24"),
        item(5, "Adidas Tracksuit", "Comfortable training wear", 80_000, "apparel", 200, "adidas-tracksuit"),
    ]
}
