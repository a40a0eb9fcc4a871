//! Stock status labeling for product cards.

use serde::{Deserialize, Serialize};

/// Availability badge shown on a product card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    InStock,
    LowStock,
    OutOfStock,
}

impl StockStatus {
    /// Derive the badge from an on-hand quantity. Non-positive counts
    /// read as out of stock.
    pub fn from_quantity(quantity: i64, low_threshold: u32) -> Self {
        if quantity <= 0 {
            StockStatus::OutOfStock
        } else if quantity <= low_threshold as i64 {
            StockStatus::LowStock
        } else {
            StockStatus::InStock
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StockStatus::InStock => "In stock",
            StockStatus::LowStock => "Low stock",
            StockStatus::OutOfStock => "Out of stock",
        }
    }

    /// Whether the product can still be added to an order.
    pub fn orderable(&self) -> bool {
        !matches!(self, StockStatus::OutOfStock)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantity_to_status() {
        assert_eq!(StockStatus::from_quantity(0, 5), StockStatus::OutOfStock);
        assert_eq!(StockStatus::from_quantity(-3, 5), StockStatus::OutOfStock);
        assert_eq!(StockStatus::from_quantity(3, 5), StockStatus::LowStock);
        assert_eq!(StockStatus::from_quantity(5, 5), StockStatus::LowStock);
        assert_eq!(StockStatus::from_quantity(50, 5), StockStatus::InStock);
    }

    #[test]
    fn test_configured_threshold_drives_low_stock() {
        let config = gasexpress_core::config::StorefrontConfig::default();
        let threshold = config.low_stock_threshold;
        assert_eq!(
            StockStatus::from_quantity(threshold as i64, threshold),
            StockStatus::LowStock
        );
        assert_eq!(
            StockStatus::from_quantity(threshold as i64 + 1, threshold),
            StockStatus::InStock
        );
    }

    #[test]
    fn test_only_out_of_stock_blocks_ordering() {
        assert!(StockStatus::InStock.orderable());
        assert!(StockStatus::LowStock.orderable());
        assert!(!StockStatus::OutOfStock.orderable());
    }
}
