//! Catalog record types.
//!
//! Flat records backing the marketplace listings. These are immutable
//! sample fixtures; nothing here persists beyond the process.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use supplylink_core::{
    BulkOrderId, BulkOrderStatus, Email, IdentityId, InventoryItemId, MessageId, OrderId,
    OrderStatus, Price, ProductId, StockStatus, SupplierId,
};

/// A product offered on the marketplace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub price: Price,
    /// Unit the price applies to (e.g. "kg", "liter").
    pub unit: String,
    pub supplier: String,
    pub image: String,
    pub description: String,
    pub in_stock: bool,
    /// Minimum order quantity, in units.
    pub min_order: u32,
}

/// A buyer's stocked item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: InventoryItemId,
    pub product_id: ProductId,
    pub name: String,
    pub category: String,
    pub current_stock: u32,
    pub min_stock: u32,
    pub max_stock: u32,
    pub unit: String,
    pub price: Price,
    pub supplier: String,
    pub last_restocked: NaiveDate,
    pub expiry_date: NaiveDate,
    pub status: StockStatus,
}

/// A line item within an [`Order`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    pub product_id: ProductId,
    pub name: String,
    pub quantity: u32,
    pub price: Price,
    pub unit: String,
}

/// An order placed by a buyer with a supplier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub buyer_id: IdentityId,
    pub supplier_id: IdentityId,
    pub items: Vec<OrderItem>,
    pub total: Decimal,
    pub status: OrderStatus,
    pub order_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// A supplier directory entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: SupplierId,
    pub name: String,
    pub business_name: String,
    pub category: String,
    /// Average review rating, 0-5.
    pub rating: Decimal,
    pub reviews: u32,
    pub location: String,
    pub phone: String,
    pub email: Email,
    pub avatar: String,
    pub description: String,
    pub specialties: Vec<String>,
    pub verified: bool,
    pub response_time: String,
    /// Minimum order value.
    pub min_order: u32,
}

/// A pooled order multiple buyers can join for volume pricing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkOrder {
    pub id: BulkOrderId,
    pub title: String,
    pub description: String,
    pub target_amount: Decimal,
    pub current_amount: Decimal,
    pub participants: u32,
    pub end_date: NaiveDate,
    pub status: BulkOrderStatus,
    pub category: String,
    /// Discount achieved at the target, in percent.
    pub savings_percent: u32,
}

/// A direct message between two identities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    pub sender_id: IdentityId,
    pub receiver_id: IdentityId,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    pub read: bool,
}
