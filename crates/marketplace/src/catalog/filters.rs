//! Derived-list filtering.
//!
//! Pure predicates over the catalog slices. A record matches a search
//! term if a case-insensitive substring match succeeds against one or
//! more of its text fields; an unset filter field matches everything;
//! combined fields AND together.

use rust_decimal::Decimal;

use supplylink_core::{OrderStatus, StockStatus};

use crate::models::{InventoryItem, Order, Supplier};

/// The sentinel value view layers pass for an unselected dropdown.
const ALL: &str = "all";

/// Filter over inventory items: search term, status, and category.
#[derive(Debug, Clone, Default)]
pub struct InventoryFilter {
    /// Matched against name and category, case-insensitively.
    pub search: Option<String>,
    pub status: Option<StockStatus>,
    /// Exact category match.
    pub category: Option<String>,
}

impl InventoryFilter {
    /// Build a filter from view-layer selections, where `"all"` (or an
    /// unparseable status) means no constraint and an empty search term
    /// matches everything.
    #[must_use]
    pub fn from_selections(search: &str, status: &str, category: &str) -> Self {
        Self {
            search: search_term(search),
            status: selection(status).and_then(|s| s.parse().ok()),
            category: selection(category),
        }
    }

    /// Whether the item passes every set field.
    #[must_use]
    pub fn matches(&self, item: &InventoryItem) -> bool {
        let matches_search = self.search.as_deref().is_none_or(|term| {
            contains_ignore_case(&item.name, term) || contains_ignore_case(&item.category, term)
        });
        let matches_status = self.status.is_none_or(|status| item.status == status);
        let matches_category = self
            .category
            .as_deref()
            .is_none_or(|category| item.category == category);

        matches_search && matches_status && matches_category
    }
}

/// Filter over supplier listings: search term, category, and a minimum
/// rating threshold.
#[derive(Debug, Clone, Default)]
pub struct SupplierFilter {
    /// Matched against name, business name, and specialties.
    pub search: Option<String>,
    /// Exact category match.
    pub category: Option<String>,
    /// Keep suppliers rated at or above this value.
    pub min_rating: Option<Decimal>,
}

impl SupplierFilter {
    /// Build a filter from view-layer selections; `"all"` (or an
    /// unparseable rating) means no constraint.
    #[must_use]
    pub fn from_selections(search: &str, category: &str, min_rating: &str) -> Self {
        Self {
            search: search_term(search),
            category: selection(category),
            min_rating: selection(min_rating).and_then(|r| r.parse().ok()),
        }
    }

    /// Whether the supplier passes every set field.
    #[must_use]
    pub fn matches(&self, supplier: &Supplier) -> bool {
        let matches_search = self.search.as_deref().is_none_or(|term| {
            contains_ignore_case(&supplier.name, term)
                || contains_ignore_case(&supplier.business_name, term)
                || supplier
                    .specialties
                    .iter()
                    .any(|specialty| contains_ignore_case(specialty, term))
        });
        let matches_category = self
            .category
            .as_deref()
            .is_none_or(|category| supplier.category == category);
        let matches_rating = self
            .min_rating
            .is_none_or(|threshold| supplier.rating >= threshold);

        matches_search && matches_category && matches_rating
    }
}

/// Inventory items passing the filter, in source order.
#[must_use]
pub fn filter_inventory<'a>(
    items: &'a [InventoryItem],
    filter: &InventoryFilter,
) -> Vec<&'a InventoryItem> {
    items.iter().filter(|item| filter.matches(item)).collect()
}

/// Suppliers passing the filter, in source order.
#[must_use]
pub fn filter_suppliers<'a>(
    suppliers: &'a [Supplier],
    filter: &SupplierFilter,
) -> Vec<&'a Supplier> {
    suppliers
        .iter()
        .filter(|supplier| filter.matches(supplier))
        .collect()
}

/// Orders with the given status, in source order.
#[must_use]
pub fn orders_with_status(orders: &[Order], status: OrderStatus) -> Vec<&Order> {
    orders.iter().filter(|order| order.status == status).collect()
}

/// Map the `"all"` sentinel (any case) to no constraint.
fn selection(value: &str) -> Option<String> {
    if value.eq_ignore_ascii_case(ALL) {
        None
    } else {
        Some(value.to_owned())
    }
}

/// An empty search term matches everything, so drop it.
fn search_term(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_owned())
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
