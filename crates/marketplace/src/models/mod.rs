//! Domain models for the marketplace.

pub mod catalog;
pub mod identity;

pub use catalog::{BulkOrder, InventoryItem, Message, Order, OrderItem, Product, Supplier};
pub use identity::{Identity, NewIdentity};
