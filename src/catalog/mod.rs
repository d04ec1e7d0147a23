use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::{ShopMuseError, ShopMuseResult};

mod seed;
pub use seed::seed;

/// A single storefront item. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub name: String,
    /// Price in whole rupees
    pub price: u32,
    /// Pre-discount price, when the item is on sale
    pub original_price: Option<u32>,
    pub image: String,
    pub category: String,
    pub style: Vec<String>,
    pub tags: Vec<String>,
    pub sentiment: String,
    pub description: String,
    pub rating: Option<f32>,
    pub reviews: Option<u32>,
}

impl Product {
    pub fn is_discounted(&self) -> bool {
        self.original_price.map_or(false, |original| original > self.price)
    }
}

/// The full static product list available for filtering.
///
/// Populated once at startup; product ids are unique within the catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn from_products(products: Vec<Product>) -> ShopMuseResult<Self> {
        let mut seen = HashSet::new();
        for product in &products {
            if !seen.insert(product.id) {
                return Err(ShopMuseError::DuplicateProduct { id: product.id });
            }
        }
        Ok(Self { products })
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(id: u32) -> Product {
        Product {
            id,
            name: "Sample".to_string(),
            price: 100,
            original_price: None,
            image: String::new(),
            category: "top".to_string(),
            style: vec![],
            tags: vec![],
            sentiment: "casual".to_string(),
            description: String::new(),
            rating: None,
            reviews: None,
        }
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let result = Catalog::from_products(vec![sample(1), sample(1)]);
        assert!(matches!(
            result,
            Err(ShopMuseError::DuplicateProduct { id: 1 })
        ));
    }

    #[test]
    fn test_seed_loads_with_unique_ids() {
        let catalog = seed().unwrap();
        assert!(!catalog.is_empty());
        let ids: HashSet<u32> = catalog.products().iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn test_seed_covers_all_categories() {
        let catalog = seed().unwrap();
        for category in ["dress", "top", "bottom", "jacket", "sweater", "shoes"] {
            assert!(
                catalog.products().iter().any(|p| p.category == category),
                "no seed product in category {category}"
            );
        }
    }

    #[test]
    fn test_discount_flag() {
        let mut product = sample(1);
        product.original_price = Some(150);
        assert!(product.is_discounted());
        product.original_price = Some(100);
        assert!(!product.is_discounted());
    }
}
