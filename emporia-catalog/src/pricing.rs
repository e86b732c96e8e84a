use serde::{Deserialize, Serialize};

/// Discount policy applied when pricing a bundle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BundlePricing {
    /// Percentage taken off the summed constituent list prices
    pub discount_percent: f64,
}

impl Default for BundlePricing {
    fn default() -> Self {
        Self {
            discount_percent: 20.0,
        }
    }
}

impl BundlePricing {
    pub fn new(discount_percent: f64) -> Self {
        Self { discount_percent }
    }

    /// Discounted price for a bundle whose constituents sum to `bundle_price`
    pub fn total_price(&self, bundle_price: f64) -> f64 {
        bundle_price * (1.0 - self.discount_percent / 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_discount_is_twenty_percent() {
        let pricing = BundlePricing::default();
        assert_eq!(pricing.discount_percent, 20.0);
        assert!((pricing.total_price(124.0) - 99.2).abs() < 1e-9);
    }

    #[test]
    fn test_custom_discount() {
        let pricing = BundlePricing::new(50.0);
        assert_eq!(pricing.total_price(80.0), 40.0);
    }

    #[test]
    fn test_zero_discount_keeps_full_price() {
        let pricing = BundlePricing::new(0.0);
        assert_eq!(pricing.total_price(42.5), 42.5);
    }
}
