//! Sample data backing the marketplace listings.
//!
//! Fixtures are rebuilt from literals on each call; the directory holds
//! the only mutable copy of the identities.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::dec;

use supplylink_core::{
    BulkOrderId, BulkOrderStatus, Email, IdentityId, InventoryItemId, MessageId, OrderId,
    OrderStatus, Price, ProductId, Role, StockStatus, SupplierId,
};

use crate::models::{
    BulkOrder, Identity, InventoryItem, Message, Order, OrderItem, Product, Supplier,
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date")
}

fn timestamp(raw: &str) -> DateTime<Utc> {
    raw.parse().expect("valid fixture timestamp")
}

fn email(raw: &str) -> Email {
    Email::parse(raw).expect("valid fixture email")
}

/// The identities the directory is seeded with.
#[must_use]
pub fn sample_identities() -> Vec<Identity> {
    vec![
        Identity {
            id: IdentityId::new("1"),
            email: email("buyer@example.com"),
            full_name: "John Doe".to_owned(),
            business_name: "Joe's Tacos".to_owned(),
            role: Role::Buyer,
            phone: "+1 (555) 123-4567".to_owned(),
            address: "123 Main St, City, State".to_owned(),
            avatar: Some("/placeholder.svg?height=40&width=40".to_owned()),
        },
        Identity {
            id: IdentityId::new("2"),
            email: email("supplier@example.com"),
            full_name: "Jane Smith".to_owned(),
            business_name: "Fresh Foods Supply".to_owned(),
            role: Role::Supplier,
            phone: "+1 (555) 987-6543".to_owned(),
            address: "456 Oak Ave, City, State".to_owned(),
            avatar: Some("/placeholder.svg?height=40&width=40".to_owned()),
        },
    ]
}

/// Products available to order.
#[must_use]
pub fn sample_products() -> Vec<Product> {
    vec![
        Product {
            id: ProductId::new("1"),
            name: "Fresh Tomatoes".to_owned(),
            category: "Vegetables".to_owned(),
            price: Price::new(dec!(2.50)),
            unit: "kg".to_owned(),
            supplier: "Fresh Farms Co.".to_owned(),
            image: "/placeholder.svg?height=200&width=200".to_owned(),
            description: "Fresh, ripe tomatoes perfect for cooking".to_owned(),
            in_stock: true,
            min_order: 5,
        },
        Product {
            id: ProductId::new("2"),
            name: "Chicken Breast".to_owned(),
            category: "Meat".to_owned(),
            price: Price::new(dec!(8.99)),
            unit: "kg".to_owned(),
            supplier: "Premium Meats".to_owned(),
            image: "/placeholder.svg?height=200&width=200".to_owned(),
            description: "Premium quality chicken breast".to_owned(),
            in_stock: true,
            min_order: 2,
        },
        Product {
            id: ProductId::new("3"),
            name: "Basmati Rice".to_owned(),
            category: "Grains".to_owned(),
            price: Price::new(dec!(3.25)),
            unit: "kg".to_owned(),
            supplier: "Grain Masters".to_owned(),
            image: "/placeholder.svg?height=200&width=200".to_owned(),
            description: "Premium basmati rice".to_owned(),
            in_stock: true,
            min_order: 10,
        },
        Product {
            id: ProductId::new("4"),
            name: "Cooking Oil".to_owned(),
            category: "Oils".to_owned(),
            price: Price::new(dec!(4.50)),
            unit: "liter".to_owned(),
            supplier: "Oil Express".to_owned(),
            image: "/placeholder.svg?height=200&width=200".to_owned(),
            description: "High-quality cooking oil".to_owned(),
            in_stock: false,
            min_order: 5,
        },
    ]
}

/// The buyer's stocked items.
#[must_use]
pub fn sample_inventory() -> Vec<InventoryItem> {
    vec![
        InventoryItem {
            id: InventoryItemId::new("1"),
            product_id: ProductId::new("1"),
            name: "Fresh Tomatoes".to_owned(),
            category: "Vegetables".to_owned(),
            current_stock: 25,
            min_stock: 10,
            max_stock: 50,
            unit: "kg".to_owned(),
            price: Price::new(dec!(2.50)),
            supplier: "Fresh Farms Co.".to_owned(),
            last_restocked: date(2024, 1, 15),
            expiry_date: date(2024, 1, 25),
            status: StockStatus::InStock,
        },
        InventoryItem {
            id: InventoryItemId::new("2"),
            product_id: ProductId::new("2"),
            name: "Chicken Breast".to_owned(),
            category: "Meat".to_owned(),
            current_stock: 8,
            min_stock: 15,
            max_stock: 30,
            unit: "kg".to_owned(),
            price: Price::new(dec!(8.99)),
            supplier: "Premium Meats".to_owned(),
            last_restocked: date(2024, 1, 14),
            expiry_date: date(2024, 1, 20),
            status: StockStatus::LowStock,
        },
        InventoryItem {
            id: InventoryItemId::new("3"),
            product_id: ProductId::new("3"),
            name: "Basmati Rice".to_owned(),
            category: "Grains".to_owned(),
            current_stock: 0,
            min_stock: 20,
            max_stock: 100,
            unit: "kg".to_owned(),
            price: Price::new(dec!(3.25)),
            supplier: "Grain Masters".to_owned(),
            last_restocked: date(2024, 1, 10),
            expiry_date: date(2024, 6, 10),
            status: StockStatus::OutOfStock,
        },
    ]
}

/// Orders between the sample buyer and supplier.
#[must_use]
pub fn sample_orders() -> Vec<Order> {
    vec![
        Order {
            id: OrderId::new("ORD-001"),
            buyer_id: IdentityId::new("1"),
            supplier_id: IdentityId::new("2"),
            items: vec![
                OrderItem {
                    product_id: ProductId::new("1"),
                    name: "Fresh Tomatoes".to_owned(),
                    quantity: 10,
                    price: Price::new(dec!(2.50)),
                    unit: "kg".to_owned(),
                },
                OrderItem {
                    product_id: ProductId::new("2"),
                    name: "Chicken Breast".to_owned(),
                    quantity: 5,
                    price: Price::new(dec!(8.99)),
                    unit: "kg".to_owned(),
                },
            ],
            total: dec!(69.95),
            status: OrderStatus::Delivered,
            order_date: date(2024, 1, 10),
            delivery_date: Some(date(2024, 1, 12)),
            notes: Some("Please deliver in the morning".to_owned()),
        },
        Order {
            id: OrderId::new("ORD-002"),
            buyer_id: IdentityId::new("1"),
            supplier_id: IdentityId::new("2"),
            items: vec![OrderItem {
                product_id: ProductId::new("3"),
                name: "Basmati Rice".to_owned(),
                quantity: 20,
                price: Price::new(dec!(3.25)),
                unit: "kg".to_owned(),
            }],
            total: dec!(65.00),
            status: OrderStatus::Shipped,
            order_date: date(2024, 1, 15),
            delivery_date: Some(date(2024, 1, 17)),
            notes: None,
        },
    ]
}

/// The supplier directory listings.
#[must_use]
pub fn sample_suppliers() -> Vec<Supplier> {
    vec![
        Supplier {
            id: SupplierId::new("1"),
            name: "Fresh Farms Co.".to_owned(),
            business_name: "Fresh Farms Co.".to_owned(),
            category: "Vegetables".to_owned(),
            rating: dec!(4.8),
            reviews: 156,
            location: "Mumbai, Maharashtra".to_owned(),
            phone: "+91 98765 43210".to_owned(),
            email: email("contact@freshfarms.com"),
            avatar: "/placeholder.svg?height=40&width=40".to_owned(),
            description: "Premium quality fresh vegetables and fruits supplier with 15+ years of experience.".to_owned(),
            specialties: vec![
                "Organic Vegetables".to_owned(),
                "Seasonal Fruits".to_owned(),
                "Herbs".to_owned(),
            ],
            verified: true,
            response_time: "< 2 hours".to_owned(),
            min_order: 500,
        },
        Supplier {
            id: SupplierId::new("2"),
            name: "Premium Meats".to_owned(),
            business_name: "Premium Meats Ltd.".to_owned(),
            category: "Meat".to_owned(),
            rating: dec!(4.9),
            reviews: 203,
            location: "Delhi, NCR".to_owned(),
            phone: "+91 87654 32109".to_owned(),
            email: email("orders@premiummeats.com"),
            avatar: "/placeholder.svg?height=40&width=40".to_owned(),
            description: "High-quality meat products with proper cold chain management and hygiene standards.".to_owned(),
            specialties: vec![
                "Chicken".to_owned(),
                "Mutton".to_owned(),
                "Fish".to_owned(),
                "Processed Meats".to_owned(),
            ],
            verified: true,
            response_time: "< 1 hour".to_owned(),
            min_order: 1000,
        },
        Supplier {
            id: SupplierId::new("3"),
            name: "Grain Masters".to_owned(),
            business_name: "Grain Masters Pvt. Ltd.".to_owned(),
            category: "Grains".to_owned(),
            rating: dec!(4.7),
            reviews: 89,
            location: "Pune, Maharashtra".to_owned(),
            phone: "+91 76543 21098".to_owned(),
            email: email("info@grainmasters.com"),
            avatar: "/placeholder.svg?height=40&width=40".to_owned(),
            description: "Wholesale supplier of premium quality grains, pulses, and cereals.".to_owned(),
            specialties: vec![
                "Basmati Rice".to_owned(),
                "Wheat".to_owned(),
                "Pulses".to_owned(),
                "Cereals".to_owned(),
            ],
            verified: true,
            response_time: "< 3 hours".to_owned(),
            min_order: 2000,
        },
        Supplier {
            id: SupplierId::new("4"),
            name: "Spice Kingdom".to_owned(),
            business_name: "Spice Kingdom".to_owned(),
            category: "Spices".to_owned(),
            rating: dec!(4.6),
            reviews: 124,
            location: "Kochi, Kerala".to_owned(),
            phone: "+91 65432 10987".to_owned(),
            email: email("sales@spicekingdom.com"),
            avatar: "/placeholder.svg?height=40&width=40".to_owned(),
            description: "Authentic Indian spices and seasonings sourced directly from farms.".to_owned(),
            specialties: vec![
                "Whole Spices".to_owned(),
                "Ground Spices".to_owned(),
                "Spice Blends".to_owned(),
            ],
            verified: false,
            response_time: "< 4 hours".to_owned(),
            min_order: 300,
        },
    ]
}

/// Messages between the sample buyer and supplier.
#[must_use]
pub fn sample_messages() -> Vec<Message> {
    vec![
        Message {
            id: MessageId::new("1"),
            sender_id: IdentityId::new("1"),
            receiver_id: IdentityId::new("2"),
            content: "Hi, do you have fresh tomatoes available?".to_owned(),
            timestamp: timestamp("2024-01-16T10:30:00Z"),
            read: true,
        },
        Message {
            id: MessageId::new("2"),
            sender_id: IdentityId::new("2"),
            receiver_id: IdentityId::new("1"),
            content: "Yes, we have premium quality tomatoes. How much do you need?".to_owned(),
            timestamp: timestamp("2024-01-16T10:35:00Z"),
            read: true,
        },
        Message {
            id: MessageId::new("3"),
            sender_id: IdentityId::new("1"),
            receiver_id: IdentityId::new("2"),
            content: "I need about 20kg for this week. What's your best price?".to_owned(),
            timestamp: timestamp("2024-01-16T10:40:00Z"),
            read: false,
        },
    ]
}

/// Pooled bulk orders buyers can join.
#[must_use]
pub fn sample_bulk_orders() -> Vec<BulkOrder> {
    vec![
        BulkOrder {
            id: BulkOrderId::new("BULK-001"),
            title: "Premium Rice Bulk Order".to_owned(),
            description: "High-quality basmati rice for multiple vendors".to_owned(),
            target_amount: dec!(1000),
            current_amount: dec!(750),
            participants: 12,
            end_date: date(2024, 1, 25),
            status: BulkOrderStatus::Active,
            category: "Grains".to_owned(),
            savings_percent: 15,
        },
        BulkOrder {
            id: BulkOrderId::new("BULK-002"),
            title: "Fresh Vegetables Bundle".to_owned(),
            description: "Mixed vegetables including tomatoes, onions, and peppers".to_owned(),
            target_amount: dec!(500),
            current_amount: dec!(500),
            participants: 8,
            end_date: date(2024, 1, 20),
            status: BulkOrderStatus::Completed,
            category: "Vegetables".to_owned(),
            savings_percent: 20,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_sets_are_nonempty() {
        assert_eq!(sample_identities().len(), 2);
        assert_eq!(sample_products().len(), 4);
        assert_eq!(sample_inventory().len(), 3);
        assert_eq!(sample_orders().len(), 2);
        assert_eq!(sample_suppliers().len(), 4);
        assert_eq!(sample_messages().len(), 3);
        assert_eq!(sample_bulk_orders().len(), 2);
    }

    #[test]
    fn test_order_totals_match_line_items() {
        for order in sample_orders() {
            let computed: rust_decimal::Decimal = order
                .items
                .iter()
                .map(|item| item.price.total_for(item.quantity))
                .sum();
            assert_eq!(computed, order.total, "order {}", order.id);
        }
    }

    #[test]
    fn test_identity_emails_are_distinct() {
        let identities = sample_identities();
        let mut emails: Vec<_> = identities.iter().map(|i| i.email.as_str()).collect();
        emails.sort_unstable();
        emails.dedup();
        assert_eq!(emails.len(), identities.len());
    }
}
