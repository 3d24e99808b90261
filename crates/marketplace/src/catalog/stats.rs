//! Summary statistics for dashboard views.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use supplylink_core::StockStatus;

use crate::models::{BulkOrder, InventoryItem};

/// Aggregates a dashboard shows above the inventory table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventorySummary {
    /// Total value of stock on hand (Σ current stock × unit price).
    pub total_value: Decimal,
    /// Number of stocked items.
    pub total_items: usize,
    /// Distinct categories, in first-seen order.
    pub categories: Vec<String>,
    /// Items flagged low on stock.
    pub low_stock: usize,
    /// Items with no stock left.
    pub out_of_stock: usize,
}

/// Compute the inventory summary for a set of items.
#[must_use]
pub fn inventory_summary(items: &[InventoryItem]) -> InventorySummary {
    let total_value = items
        .iter()
        .map(|item| item.price.total_for(item.current_stock))
        .sum();

    let mut categories: Vec<String> = Vec::new();
    for item in items {
        if !categories.contains(&item.category) {
            categories.push(item.category.clone());
        }
    }

    InventorySummary {
        total_value,
        total_items: items.len(),
        categories,
        low_stock: items
            .iter()
            .filter(|item| item.status == StockStatus::LowStock)
            .count(),
        out_of_stock: items
            .iter()
            .filter(|item| item.status == StockStatus::OutOfStock)
            .count(),
    }
}

/// Items needing a reorder: low on stock or out of stock, in source order.
#[must_use]
pub fn restock_alerts(items: &[InventoryItem]) -> Vec<&InventoryItem> {
    items
        .iter()
        .filter(|item| {
            matches!(item.status, StockStatus::LowStock | StockStatus::OutOfStock)
        })
        .collect()
}

/// Fill level of an item as a rounded percentage of its maximum stock.
///
/// Clamped to 100; an item with no configured maximum reads as 0.
#[must_use]
pub fn stock_level_percent(item: &InventoryItem) -> u8 {
    ratio_percent(
        Decimal::from(item.current_stock),
        Decimal::from(item.max_stock),
    )
}

/// Progress of a bulk order toward its target, as a rounded percentage.
///
/// Clamped to 100; a zero target reads as 0.
#[must_use]
pub fn bulk_order_progress_percent(order: &BulkOrder) -> u8 {
    ratio_percent(order.current_amount, order.target_amount)
}

fn ratio_percent(current: Decimal, target: Decimal) -> u8 {
    if target <= Decimal::ZERO {
        return 0;
    }

    let percent = (current / target * Decimal::from(100u8)).round();
    percent
        .to_u8()
        .map_or(100, |p| p.min(100))
}

#[cfg(test)]
mod tests {
    use rust_decimal::dec;

    use crate::catalog::fixtures::{sample_bulk_orders, sample_inventory};

    use super::*;

    #[test]
    fn test_inventory_summary_over_fixtures() {
        let inventory = sample_inventory();
        let summary = inventory_summary(&inventory);

        // 25 * 2.50 + 8 * 8.99 + 0 * 3.25
        assert_eq!(summary.total_value, dec!(134.42));
        assert_eq!(summary.total_items, 3);
        assert_eq!(summary.categories, vec!["Vegetables", "Meat", "Grains"]);
        assert_eq!(summary.low_stock, 1);
        assert_eq!(summary.out_of_stock, 1);
    }

    #[test]
    fn test_summary_of_empty_inventory() {
        let summary = inventory_summary(&[]);
        assert_eq!(summary.total_value, Decimal::ZERO);
        assert_eq!(summary.total_items, 0);
        assert!(summary.categories.is_empty());
    }

    #[test]
    fn test_restock_alerts() {
        let inventory = sample_inventory();
        let alerts = restock_alerts(&inventory);
        assert_eq!(alerts.len(), 2);
        assert!(alerts.iter().all(|i| i.status != StockStatus::InStock));
    }

    #[test]
    fn test_stock_level_percent() {
        let inventory = sample_inventory();
        let levels: Vec<u8> = inventory.iter().map(stock_level_percent).collect();
        // 25/50, 8/30 (rounded), 0/100
        assert_eq!(levels, vec![50, 27, 0]);
    }

    #[test]
    fn test_stock_level_clamps_at_100() {
        let mut item = sample_inventory().remove(0);
        item.current_stock = item.max_stock * 3;
        assert_eq!(stock_level_percent(&item), 100);

        item.max_stock = 0;
        assert_eq!(stock_level_percent(&item), 0);
    }

    #[test]
    fn test_bulk_order_progress() {
        let orders = sample_bulk_orders();
        let progress: Vec<u8> = orders.iter().map(bulk_order_progress_percent).collect();
        // 750/1000, 500/500
        assert_eq!(progress, vec![75, 100]);
    }
}
