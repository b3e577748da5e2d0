//! Order pipeline: creation, status transitions, joins.
//!
//! The only multi-step, partially-failable operation in the system lives
//! here. Validation runs before any mutation; once the order row exists,
//! item persistence is not rolled back on failure (at-least-order-exists
//! semantics - "order created but some items missing" is a recoverable
//! inconsistency, not a fatal error).

use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::instrument;

use dastak_core::{OrderId, OrderStatus, ProductId, UserId};

use crate::error::{AppError, FieldError, Result};
use crate::models::{ChatOrderItem, NewOrder, NewOrderItem, Order, OrderWithItems};
use crate::store::MemStore;

/// Default delivery estimate for chat-created orders, in minutes.
const DEFAULT_CHAT_ETA_MINUTES: i32 = 30;

/// Strict creation input (POST /api/orders).
///
/// Fields are optional at the serde layer so that missing values surface as
/// field-level validation errors rather than body rejections.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderInput {
    #[serde(default)]
    pub user_id: Option<UserId>,
    #[serde(default)]
    pub delivery_address: Option<String>,
    /// Trusted verbatim when supplied; computed from items otherwise.
    #[serde(default)]
    pub total_amount: Option<Decimal>,
    #[serde(default)]
    pub status: Option<OrderStatus>,
    #[serde(default)]
    pub estimated_delivery: Option<i32>,
    #[serde(default)]
    pub items: Vec<OrderItemInput>,
}

/// Strict line-item input.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemInput {
    #[serde(default)]
    pub product_id: Option<ProductId>,
    #[serde(default)]
    pub quantity: Option<u32>,
    #[serde(default)]
    pub price: Option<Decimal>,
}

/// Loose creation input (POST /api/ai/create-order).
///
/// This entry point runs at the chat flow's trust level: items were parsed
/// from free text, so per-item fields default instead of rejecting.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatOrderInput {
    #[serde(default)]
    pub user_id: Option<UserId>,
    #[serde(default)]
    pub delivery_address: Option<String>,
    #[serde(default)]
    pub items: Option<Vec<ChatOrderItem>>,
}

/// A strict order input that survived validation.
struct ValidOrder {
    user_id: UserId,
    delivery_address: String,
    total_amount: Option<Decimal>,
    status: Option<OrderStatus>,
    estimated_delivery: Option<i32>,
    items: Vec<ValidItem>,
}

struct ValidItem {
    product_id: ProductId,
    quantity: u32,
    price: Decimal,
}

/// Order pipeline service.
pub struct OrderService<'a> {
    store: &'a MemStore,
}

impl<'a> OrderService<'a> {
    /// Create a new order service.
    #[must_use]
    pub const fn new(store: &'a MemStore) -> Self {
        Self { store }
    }

    /// Create an order and its line items from strict input.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] listing every offending field when
    /// the input is malformed. Nothing is persisted in that case.
    #[instrument(skip(self, input))]
    pub fn create(&self, input: OrderInput) -> Result<OrderWithItems> {
        let valid = validate_order(input)?;

        let total_amount = valid.total_amount.unwrap_or_else(|| {
            valid
                .items
                .iter()
                .map(|item| item.price * Decimal::from(item.quantity))
                .sum()
        });

        let order = self.store.create_order(NewOrder {
            user_id: valid.user_id,
            total_amount,
            delivery_address: valid.delivery_address,
            status: valid.status,
            estimated_delivery: valid.estimated_delivery,
        });

        // Order first, then items in the given sequence. Not transactional.
        for item in valid.items {
            self.store.create_order_item(NewOrderItem {
                order_id: order.id,
                product_id: Some(item.product_id),
                quantity: item.quantity,
                price: item.price,
            });
        }

        let items = self.store.order_items(order.id);
        Ok(OrderWithItems { order, items })
    }

    /// Create an order from the AI chat flow.
    ///
    /// Missing item quantity defaults to 1, missing price to 0, and an
    /// unresolved product is stored unresolved. The delivery estimate
    /// defaults to 30 minutes.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] when `userId`, `items` or
    /// `deliveryAddress` are missing.
    #[instrument(skip(self, input))]
    pub fn create_from_chat(&self, input: ChatOrderInput) -> Result<OrderWithItems> {
        let mut errors = Vec::new();
        if input.user_id.is_none() {
            errors.push(FieldError::missing("userId"));
        }
        if input.items.is_none() {
            errors.push(FieldError::missing("items"));
        }
        match input.delivery_address.as_deref() {
            None => errors.push(FieldError::missing("deliveryAddress")),
            Some(addr) if addr.trim().is_empty() => {
                errors.push(FieldError::new("deliveryAddress", "must not be empty"));
            }
            Some(_) => {}
        }
        let (Some(user_id), Some(items), Some(delivery_address)) =
            (input.user_id, input.items, input.delivery_address)
        else {
            return Err(AppError::Validation(errors));
        };
        if !errors.is_empty() {
            return Err(AppError::Validation(errors));
        }

        let total_amount: Decimal = items
            .iter()
            .map(|item| {
                item.price.unwrap_or_default() * Decimal::from(effective_quantity(item))
            })
            .sum();

        let order = self.store.create_order(NewOrder {
            user_id,
            total_amount,
            delivery_address,
            status: Some(OrderStatus::Pending),
            estimated_delivery: Some(DEFAULT_CHAT_ETA_MINUTES),
        });

        for item in &items {
            self.store.create_order_item(NewOrderItem {
                order_id: order.id,
                product_id: item.product_id,
                quantity: effective_quantity(item),
                price: item.price.unwrap_or_default(),
            });
        }

        let items = self.store.order_items(order.id);
        Ok(OrderWithItems { order, items })
    }

    /// Overwrite an order's status. Absent order yields `None`.
    pub fn update_status(&self, id: OrderId, status: OrderStatus) -> Option<Order> {
        self.store.update_order_status(id, status)
    }

    /// An order joined with its line items.
    #[must_use]
    pub fn get(&self, id: OrderId) -> Option<OrderWithItems> {
        let order = self.store.get_order(id)?;
        let items = self.store.order_items(order.id);
        Some(OrderWithItems { order, items })
    }

    /// All orders in insertion order.
    #[must_use]
    pub fn list(&self) -> Vec<Order> {
        self.store.orders()
    }

    /// Orders placed by one user.
    #[must_use]
    pub fn by_user(&self, user_id: UserId) -> Vec<Order> {
        self.store.orders_by_user(user_id)
    }
}

/// Quantity with the chat-path default: absent or zero becomes 1.
fn effective_quantity(item: &ChatOrderItem) -> u32 {
    match item.quantity {
        Some(q) if q >= 1 => q,
        _ => 1,
    }
}

/// Check the strict input once, at the boundary.
fn validate_order(input: OrderInput) -> Result<ValidOrder> {
    let mut errors = Vec::new();

    if input.user_id.is_none() {
        errors.push(FieldError::missing("userId"));
    }
    match input.delivery_address.as_deref() {
        None => errors.push(FieldError::missing("deliveryAddress")),
        Some(addr) if addr.trim().is_empty() => {
            errors.push(FieldError::new("deliveryAddress", "must not be empty"));
        }
        Some(_) => {}
    }

    let mut items = Vec::with_capacity(input.items.len());
    for (index, item) in input.items.into_iter().enumerate() {
        if item.product_id.is_none() {
            errors.push(FieldError::missing(format!("items[{index}].productId")));
        }
        match item.quantity {
            None => errors.push(FieldError::missing(format!("items[{index}].quantity"))),
            Some(0) => errors.push(FieldError::new(
                format!("items[{index}].quantity"),
                "must be at least 1",
            )),
            Some(_) => {}
        }
        match item.price {
            None => errors.push(FieldError::missing(format!("items[{index}].price"))),
            Some(price) if price < Decimal::ZERO => errors.push(FieldError::new(
                format!("items[{index}].price"),
                "must not be negative",
            )),
            Some(_) => {}
        }

        if let (Some(product_id), Some(quantity @ 1..), Some(price)) =
            (item.product_id, item.quantity, item.price)
        {
            if price >= Decimal::ZERO {
                items.push(ValidItem {
                    product_id,
                    quantity,
                    price,
                });
            }
        }
    }

    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }
    let (Some(user_id), Some(delivery_address)) = (input.user_id, input.delivery_address) else {
        // Unreachable: presence was checked above
        return Err(AppError::missing_field("userId"));
    };

    Ok(ValidOrder {
        user_id,
        delivery_address,
        total_amount: input.total_amount,
        status: input.status,
        estimated_delivery: input.estimated_delivery,
        items,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use dastak_core::FreshId;

    fn item(price: i64, quantity: u32) -> OrderItemInput {
        OrderItemInput {
            product_id: Some(ProductId::fresh()),
            quantity: Some(quantity),
            price: Some(Decimal::from(price)),
        }
    }

    fn valid_input() -> OrderInput {
        OrderInput {
            user_id: Some(UserId::fresh()),
            delivery_address: Some("House 3, Mohalla Eidgah".to_string()),
            items: vec![item(100, 2)],
            ..OrderInput::default()
        }
    }

    #[test]
    fn test_create_computes_total_from_items() {
        let store = MemStore::new();
        let service = OrderService::new(&store);

        let created = service
            .create(OrderInput {
                items: vec![item(100, 2), item(45, 3)],
                ..valid_input()
            })
            .expect("valid order");

        assert_eq!(created.order.total_amount, Decimal::from(335));
        assert_eq!(created.items.len(), 2);
    }

    #[test]
    fn test_create_scenario_single_item() {
        let store = MemStore::new();
        let service = OrderService::new(&store);

        let created = service
            .create(OrderInput {
                items: vec![item(100, 2)],
                ..valid_input()
            })
            .expect("valid order");

        assert_eq!(created.order.total_amount, Decimal::from(200));
        assert_eq!(created.items.len(), 1);
        assert_eq!(created.items[0].quantity, 2);
        assert_eq!(created.items[0].price, Decimal::from(100));
        assert_eq!(created.items[0].order_id, created.order.id);
    }

    #[test]
    fn test_create_trusts_supplied_total() {
        let store = MemStore::new();
        let service = OrderService::new(&store);

        let created = service
            .create(OrderInput {
                total_amount: Some(Decimal::from(999)),
                ..valid_input()
            })
            .expect("valid order");

        assert_eq!(created.order.total_amount, Decimal::from(999));
    }

    #[test]
    fn test_create_defaults_status_to_pending() {
        let store = MemStore::new();
        let service = OrderService::new(&store);
        let created = service.create(valid_input()).expect("valid order");
        assert_eq!(created.order.status, OrderStatus::Pending);
    }

    #[test]
    fn test_validation_lists_all_offending_fields() {
        let store = MemStore::new();
        let service = OrderService::new(&store);

        let result = service.create(OrderInput {
            items: vec![OrderItemInput {
                product_id: None,
                quantity: Some(0),
                price: None,
            }],
            ..OrderInput::default()
        });

        let Err(AppError::Validation(errors)) = result else {
            panic!("expected validation failure");
        };
        let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
        assert!(fields.contains(&"userId"));
        assert!(fields.contains(&"deliveryAddress"));
        assert!(fields.contains(&"items[0].productId"));
        assert!(fields.contains(&"items[0].quantity"));
        assert!(fields.contains(&"items[0].price"));
    }

    #[test]
    fn test_validation_failure_persists_nothing() {
        let store = MemStore::new();
        let service = OrderService::new(&store);

        let result = service.create(OrderInput {
            delivery_address: None,
            ..valid_input()
        });
        assert!(result.is_err());
        assert!(store.orders().is_empty());
    }

    #[test]
    fn test_missing_item_price_rejected_on_strict_path() {
        let store = MemStore::new();
        let service = OrderService::new(&store);

        let result = service.create(OrderInput {
            items: vec![OrderItemInput {
                product_id: Some(ProductId::fresh()),
                quantity: Some(1),
                price: None,
            }],
            ..valid_input()
        });
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_chat_path_defaults_missing_fields() {
        let store = MemStore::new();
        let service = OrderService::new(&store);

        let created = service
            .create_from_chat(ChatOrderInput {
                user_id: Some(UserId::fresh()),
                delivery_address: Some("Basti Malook".to_string()),
                items: Some(vec![ChatOrderItem {
                    product_id: None,
                    name: Some("panadol".to_string()),
                    quantity: None,
                    price: None,
                }]),
            })
            .expect("chat order");

        assert_eq!(created.order.total_amount, Decimal::ZERO);
        assert_eq!(created.order.estimated_delivery, Some(30));
        assert_eq!(created.items.len(), 1);
        assert_eq!(created.items[0].quantity, 1);
        assert_eq!(created.items[0].price, Decimal::ZERO);
        assert!(created.items[0].product_id.is_none());
    }

    #[test]
    fn test_chat_path_computes_total() {
        let store = MemStore::new();
        let service = OrderService::new(&store);

        let created = service
            .create_from_chat(ChatOrderInput {
                user_id: Some(UserId::fresh()),
                delivery_address: Some("Basti Malook".to_string()),
                items: Some(vec![
                    ChatOrderItem {
                        product_id: Some(ProductId::fresh()),
                        name: None,
                        quantity: Some(2),
                        price: Some(Decimal::from(380)),
                    },
                    ChatOrderItem {
                        product_id: None,
                        name: Some("rice".to_string()),
                        quantity: None,
                        price: Some(Decimal::from(1200)),
                    },
                ]),
            })
            .expect("chat order");

        // 2 * 380 + 1 * 1200
        assert_eq!(created.order.total_amount, Decimal::from(1960));
    }

    #[test]
    fn test_chat_path_requires_top_level_fields() {
        let store = MemStore::new();
        let service = OrderService::new(&store);

        let result = service.create_from_chat(ChatOrderInput::default());
        let Err(AppError::Validation(errors)) = result else {
            panic!("expected validation failure");
        };
        let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, ["userId", "items", "deliveryAddress"]);
    }

    #[test]
    fn test_update_status_missing_order_is_none() {
        let store = MemStore::new();
        let service = OrderService::new(&store);
        assert!(
            service
                .update_status(OrderId::fresh(), OrderStatus::Delivered)
                .is_none()
        );
    }

    #[test]
    fn test_update_status_is_permissive() {
        let store = MemStore::new();
        let service = OrderService::new(&store);
        let created = service.create(valid_input()).expect("valid order");

        // Terminal back to active is allowed; there is no transition graph
        let _ = service.update_status(created.order.id, OrderStatus::Delivered);
        let reopened = service
            .update_status(created.order.id, OrderStatus::Pending)
            .expect("order exists");
        assert_eq!(reopened.status, OrderStatus::Pending);
    }

    #[test]
    fn test_get_joins_items() {
        let store = MemStore::new();
        let service = OrderService::new(&store);
        let created = service.create(valid_input()).expect("valid order");

        let fetched = service.get(created.order.id).expect("order exists");
        assert_eq!(fetched.items.len(), 1);
        assert!(service.get(OrderId::fresh()).is_none());
    }
}
