use std::fmt;

use serde::{Deserialize, Serialize};

use crate::category::ProductCategory;
use crate::pricing::BundlePricing;
use crate::product::{CatalogItem, Product};

/// A composite product assembled from existing catalog items.
///
/// Construction reads each constituent's description and list price exactly
/// once; the bundle keeps no references to them, and later changes to the
/// constituents never reprice it. From then on it behaves like any other
/// item, with its own stock and its own ledgers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bundle {
    product: Product,
    bundle_description: String,
    bundle_price: f64,
    total_price: f64,
}

#[derive(Debug, thiserror::Error)]
pub enum BundleError {
    #[error("bundle requires at least one item")]
    Empty,
}

impl Bundle {
    /// Bundle `items` under the default discount policy
    pub fn new(items: &[&dyn CatalogItem]) -> Result<Self, BundleError> {
        Self::with_pricing(items, &BundlePricing::default())
    }

    /// Bundle `items` under an explicit discount policy
    pub fn with_pricing(
        items: &[&dyn CatalogItem],
        pricing: &BundlePricing,
    ) -> Result<Self, BundleError> {
        if items.is_empty() {
            return Err(BundleError::Empty);
        }
        Ok(Self::from_items(items, pricing))
    }

    fn from_items(items: &[&dyn CatalogItem], pricing: &BundlePricing) -> Self {
        let bundle_price: f64 = items.iter().map(|item| item.list_price()).sum();
        let bundle_description = items
            .iter()
            .map(|item| item.description())
            .collect::<Vec<_>>()
            .join(" & ");
        let total_price = pricing.total_price(bundle_price);
        let product = Product::with_category(
            ProductCategory::Bundle,
            bundle_description.clone(),
            total_price,
        );
        tracing::info!(
            "bundled {} items into {} at ${:.2}",
            items.len(),
            product.id(),
            total_price
        );
        Self {
            product,
            bundle_description,
            bundle_price,
            total_price,
        }
    }

    /// Constituent descriptions joined with " & "
    pub fn bundle_description(&self) -> &str {
        &self.bundle_description
    }

    /// Constituent list prices summed before the discount
    pub fn bundle_price(&self) -> f64 {
        self.bundle_price
    }

    /// Discounted price, doubling as the bundle's own list price
    pub fn total_price(&self) -> f64 {
        self.total_price
    }
}

impl CatalogItem for Bundle {
    fn product(&self) -> &Product {
        &self.product
    }

    fn product_mut(&mut self) -> &mut Product {
        &mut self.product
    }
}

/// Bundle two items, left to right, under the default discount policy
pub fn combine(a: &dyn CatalogItem, b: &dyn CatalogItem) -> Bundle {
    Bundle::from_items(&[a, b], &BundlePricing::default())
}

impl fmt::Display for Bundle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\nProduct ID: {}\nList Price: ${:.2}\nAvailable in Stock: {}",
            self.bundle_description,
            self.product.id(),
            self.total_price,
            self.product.stock()
        )
    }
}
