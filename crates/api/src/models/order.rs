//! Order domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use dastak_core::{OrderId, OrderItemId, OrderStatus, ProductId, UserId};

/// A delivery order.
///
/// The only entity mutated in place after creation: `status` and
/// `updated_at` move together, everything else is written once.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Unique order ID.
    pub id: OrderId,
    /// User who placed the order.
    pub user_id: UserId,
    /// Order total. Serialized as a decimal string.
    pub total_amount: Decimal,
    /// Where to deliver.
    pub delivery_address: String,
    /// Lifecycle status.
    pub status: OrderStatus,
    /// Estimated delivery time in minutes, if known.
    pub estimated_delivery: Option<i32>,
    /// When the order was created.
    pub created_at: DateTime<Utc>,
    /// When the order was last updated. Always >= `created_at`.
    pub updated_at: DateTime<Utc>,
}

/// A line item belonging to an order.
///
/// `price` is a snapshot taken at order time and never rewritten; the live
/// product price may drift afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    /// Unique item ID.
    pub id: OrderItemId,
    /// Owning order.
    pub order_id: OrderId,
    /// Referenced product. `None` when the chat flow recorded an item the
    /// assistant could not tie to a catalog product.
    pub product_id: Option<ProductId>,
    /// Ordered quantity, always >= 1.
    pub quantity: u32,
    /// Price-at-order-time. Serialized as a decimal string.
    pub price: Decimal,
}

/// An order joined with its persisted line items.
#[derive(Debug, Clone, Serialize)]
pub struct OrderWithItems {
    #[serde(flatten)]
    pub order: Order,
    pub items: Vec<OrderItem>,
}

/// Insertion shape for [`Order`].
///
/// Status defaults to pending and timestamps are server-assigned.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub user_id: UserId,
    pub total_amount: Decimal,
    pub delivery_address: String,
    pub status: Option<OrderStatus>,
    pub estimated_delivery: Option<i32>,
}

/// Insertion shape for [`OrderItem`].
#[derive(Debug, Clone)]
pub struct NewOrderItem {
    pub order_id: OrderId,
    pub product_id: Option<ProductId>,
    pub quantity: u32,
    pub price: Decimal,
}

/// A line item as supplied by the AI-driven creation path.
///
/// Everything is optional at this trust level: quantity defaults to 1,
/// price to 0, and an unresolved product stays unresolved instead of
/// rejecting the order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatOrderItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<ProductId>,
    /// Free-text item name as parsed by the assistant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub quantity: Option<u32>,
    #[serde(default)]
    pub price: Option<Decimal>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use dastak_core::FreshId;

    fn sample_order() -> Order {
        let now = Utc::now();
        Order {
            id: OrderId::fresh(),
            user_id: UserId::fresh(),
            total_amount: Decimal::from(760),
            delivery_address: "House 12, Street 4, Chakwal".to_string(),
            status: OrderStatus::Pending,
            estimated_delivery: Some(30),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_order_serialization() {
        let json = serde_json::to_string(&sample_order()).expect("serialize");
        assert!(json.contains("\"totalAmount\":\"760\""));
        assert!(json.contains("\"status\":\"pending\""));
        assert!(json.contains("\"deliveryAddress\""));
        assert!(json.contains("\"estimatedDelivery\":30"));
    }

    #[test]
    fn test_order_with_items_flattens() {
        let order = sample_order();
        let item = OrderItem {
            id: OrderItemId::fresh(),
            order_id: order.id,
            product_id: None,
            quantity: 2,
            price: Decimal::from(380),
        };
        let joined = OrderWithItems {
            order,
            items: vec![item],
        };

        let json = serde_json::to_value(&joined).expect("serialize");
        // Order fields sit at the top level, alongside the items array
        assert!(json.get("totalAmount").is_some());
        assert_eq!(json["items"][0]["quantity"], 2);
        assert_eq!(json["items"][0]["productId"], serde_json::Value::Null);
    }

    #[test]
    fn test_chat_order_item_defaults() {
        let item: ChatOrderItem =
            serde_json::from_str(r#"{"name":"panadol"}"#).expect("deserialize");
        assert_eq!(item.name.as_deref(), Some("panadol"));
        assert_eq!(item.quantity, None);
        assert_eq!(item.price, None);
        assert!(item.product_id.is_none());
    }
}
