use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::category::{ProductCategory, SERIALS};

/// A single customer review
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Review {
    pub text: String,
    pub stars: i32,
}

/// Core catalog entry: identity, pricing, stock, and the append-only
/// sales/review ledgers.
///
/// The id is assigned at construction from the category's serial sequence
/// and never changes afterward.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    id: String,
    category: ProductCategory,
    description: String,
    list_price: f64,
    stock: i64,
    sales: Vec<f64>,
    reviews: Vec<Review>,
}

impl Product {
    /// New generic product: fresh `GN` id, zero stock, empty ledgers
    pub fn new(description: impl Into<String>, list_price: f64) -> Self {
        Self::with_category(ProductCategory::Generic, description.into(), list_price)
    }

    pub(crate) fn with_category(
        category: ProductCategory,
        description: String,
        list_price: f64,
    ) -> Self {
        Self {
            id: SERIALS.generate_id(category),
            category,
            description,
            list_price,
            stock: 0,
            sales: Vec::new(),
            reviews: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn category(&self) -> ProductCategory {
        self.category
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Manufacturer suggested price
    pub fn list_price(&self) -> f64 {
        self.list_price
    }

    pub fn stock(&self) -> i64 {
        self.stock
    }

    /// Realized sale prices, one entry per unit sold
    pub fn sales(&self) -> &[f64] {
        &self.sales
    }

    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    /// Add `quantity` units to stock.
    ///
    /// The quantity is not bounds-checked: a negative value reduces stock
    /// and can push it below zero. Existing callers rely on that.
    pub fn restock(&mut self, quantity: i64) {
        self.stock += quantity;
        tracing::debug!("restocked {} by {}, stock now {}", self.id, quantity, self.stock);
    }

    /// Sell up to `quantity` units at `sale_price`, recording one ledger
    /// entry per unit actually sold.
    ///
    /// A request above the available stock is clamped, never rejected: the
    /// remaining units sell and stock drops to zero.
    pub fn sell(&mut self, quantity: i64, sale_price: f64) {
        if quantity <= self.stock {
            for _ in 0..quantity {
                self.sales.push(sale_price);
            }
            self.stock -= quantity;
        } else {
            tracing::debug!(
                "sale of {} on {} clamped to {} available",
                quantity,
                self.id,
                self.stock
            );
            for _ in 0..self.stock {
                self.sales.push(sale_price);
            }
            self.stock = 0;
        }
    }

    /// Append a review. Star values are recorded as given; the range is not
    /// checked.
    pub fn review(&mut self, stars: i32, text: impl Into<String>) {
        self.reviews.push(Review {
            text: text.into(),
            stars,
        });
    }

    /// Lowest realized sale price, if anything has sold
    pub fn lowest_price(&self) -> Option<f64> {
        self.sales.iter().copied().reduce(f64::min)
    }

    /// Mean star rating across reviews, `None` until the first review
    pub fn average_rating(&self) -> Option<f64> {
        if self.reviews.is_empty() {
            return None;
        }
        let total: i64 = self.reviews.iter().map(|review| review.stars as i64).sum();
        Some(total as f64 / self.reviews.len() as f64)
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\nProduct ID: {}\nList Price: ${:.2}\nAvailable in stock: {}",
            self.description, self.id, self.list_price, self.stock
        )
    }
}

/// Shared capability surface over every catalog kind.
///
/// Variants wrap a base [`Product`]; the provided methods route the common
/// operations through it, so a `&dyn CatalogItem` of any kind restocks,
/// sells, and reports statistics identically.
pub trait CatalogItem {
    /// Base product carrying the shared state
    fn product(&self) -> &Product;

    fn product_mut(&mut self) -> &mut Product;

    fn id(&self) -> &str {
        self.product().id()
    }

    fn category(&self) -> ProductCategory {
        self.product().category()
    }

    fn description(&self) -> &str {
        self.product().description()
    }

    fn list_price(&self) -> f64 {
        self.product().list_price()
    }

    fn stock(&self) -> i64 {
        self.product().stock()
    }

    fn restock(&mut self, quantity: i64) {
        self.product_mut().restock(quantity);
    }

    fn sell(&mut self, quantity: i64, sale_price: f64) {
        self.product_mut().sell(quantity, sale_price);
    }

    fn review(&mut self, stars: i32, text: &str) {
        self.product_mut().review(stars, text);
    }

    fn lowest_price(&self) -> Option<f64> {
        self.product().lowest_price()
    }

    fn average_rating(&self) -> Option<f64> {
        self.product().average_rating()
    }
}

impl CatalogItem for Product {
    fn product(&self) -> &Product {
        self
    }

    fn product_mut(&mut self) -> &mut Product {
        self
    }
}

/// A video game title; catalog behavior is entirely the base product's
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoGame {
    product: Product,
}

impl VideoGame {
    /// New video game with a fresh `VG` id
    pub fn new(description: impl Into<String>, list_price: f64) -> Self {
        Self {
            product: Product::with_category(
                ProductCategory::VideoGame,
                description.into(),
                list_price,
            ),
        }
    }
}

impl CatalogItem for VideoGame {
    fn product(&self) -> &Product {
        &self.product
    }

    fn product_mut(&mut self) -> &mut Product {
        &mut self.product
    }
}

impl fmt::Display for VideoGame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.product.fmt(f)
    }
}

/// A book with author and page count, ordered by page count ascending.
///
/// Equality follows the ordering key: two books with the same page count
/// compare equal regardless of title or author.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    product: Product,
    author: String,
    pages: u32,
}

impl Book {
    /// New book with a fresh `BK` id
    pub fn new(
        description: impl Into<String>,
        author: impl Into<String>,
        pages: u32,
        list_price: f64,
    ) -> Self {
        Self {
            product: Product::with_category(ProductCategory::Book, description.into(), list_price),
            author: author.into(),
            pages,
        }
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn pages(&self) -> u32 {
        self.pages
    }
}

impl CatalogItem for Book {
    fn product(&self) -> &Product {
        &self.product
    }

    fn product_mut(&mut self) -> &mut Product {
        &mut self.product
    }
}

impl PartialEq for Book {
    fn eq(&self, other: &Self) -> bool {
        self.pages == other.pages
    }
}

impl Eq for Book {}

impl PartialOrd for Book {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Book {
    fn cmp(&self, other: &Self) -> Ordering {
        self.pages.cmp(&other.pages)
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.product.fmt(f)
    }
}
