use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

/// Product categories in the catalog
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductCategory {
    Generic,
    VideoGame,
    Book,
    Bundle,
}

impl ProductCategory {
    /// Two-letter code used as the id prefix
    pub fn code(&self) -> &'static str {
        match self {
            ProductCategory::Generic => "GN",
            ProductCategory::VideoGame => "VG",
            ProductCategory::Book => "BK",
            ProductCategory::Bundle => "BL",
        }
    }

    fn index(self) -> usize {
        match self {
            ProductCategory::Generic => 0,
            ProductCategory::VideoGame => 1,
            ProductCategory::Book => 2,
            ProductCategory::Bundle => 3,
        }
    }
}

/// Per-category serial counters backing product id assignment.
///
/// Each category owns an independent sequence starting at 1. Counters only
/// move forward; a serial consumed by a construction is never reissued.
pub struct SerialRegistry {
    counters: [AtomicU64; 4],
}

impl SerialRegistry {
    pub const fn new() -> Self {
        Self {
            counters: [
                AtomicU64::new(1),
                AtomicU64::new(1),
                AtomicU64::new(1),
                AtomicU64::new(1),
            ],
        }
    }

    /// Serial the next construction in this category will consume
    pub fn peek_serial(&self, category: ProductCategory) -> u64 {
        self.counters[category.index()].load(Ordering::Relaxed)
    }

    /// Consume and return the next serial for the category
    pub fn next_serial(&self, category: ProductCategory) -> u64 {
        self.counters[category.index()].fetch_add(1, Ordering::Relaxed)
    }

    /// Build a product id: category code followed by a 6-digit zero-padded
    /// serial, e.g. `GN000001`
    pub fn generate_id(&self, category: ProductCategory) -> String {
        let serial = self.next_serial(category);
        let id = format!("{}{:06}", category.code(), serial);
        tracing::debug!("issued product id {}", id);
        id
    }
}

impl Default for SerialRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Process-wide registry feeding every public constructor
pub(crate) static SERIALS: SerialRegistry = SerialRegistry::new();

/// Serial the next construction of `category` will consume
pub fn peek_serial(category: ProductCategory) -> u64 {
    SERIALS.peek_serial(category)
}
