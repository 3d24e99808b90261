//! Catalog fixtures and derived-list helpers.
//!
//! Everything here is pure: filtering and statistics are functions over
//! slices, and the fixtures are rebuilt from literals on each call.

pub mod filters;
pub mod fixtures;
pub mod stats;

pub use filters::{InventoryFilter, SupplierFilter, filter_inventory, filter_suppliers, orders_with_status};
pub use stats::{InventorySummary, bulk_order_progress_percent, inventory_summary, restock_alerts, stock_level_percent};
