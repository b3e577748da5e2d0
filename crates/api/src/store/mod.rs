//! In-memory entity store.
//!
//! # Lifecycle
//!
//! The store is an explicitly constructed value: build it with
//! [`MemStore::seeded`] at process start, hand it to the application state,
//! and discard it on exit. Nothing survives a restart - orders and chat
//! history reset, and the catalog is re-seeded. Tests build isolated
//! instances per case; there is no hidden module-level singleton.
//!
//! # Tables
//!
//! - `users` - order and transcript owners
//! - `categories` / `products` - the seeded catalog
//! - `orders` / `order_items` - the order pipeline's state
//! - `chat_messages` - append-only per-user transcripts
//!
//! All defaulting (product availability, order status, server timestamps)
//! happens in the typed operations here, so callers never half-initialize
//! an entity.

use chrono::Utc;

use dastak_core::{
    CategoryId, ChatMessageId, OrderId, OrderItemId, OrderStatus, ProductId, UserId,
};

use crate::models::{
    Category, ChatMessage, NewCategory, NewChatMessage, NewOrder, NewOrderItem, NewProduct,
    NewUser, Order, OrderItem, Product, User,
};

mod seed;
mod table;

pub use table::Table;

/// The process-wide in-memory data store.
///
/// Every entity kind gets its own [`Table`] and therefore its own ID space.
/// The store is the sole owner of entity maps; services only reach the data
/// through these operations.
#[derive(Default)]
pub struct MemStore {
    users: Table<UserId, User>,
    categories: Table<CategoryId, Category>,
    products: Table<ProductId, Product>,
    orders: Table<OrderId, Order>,
    order_items: Table<OrderItemId, OrderItem>,
    chat_messages: Table<ChatMessageId, ChatMessage>,
}

impl MemStore {
    /// Create an empty store with no catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with the fixed launch catalog.
    #[must_use]
    pub fn seeded() -> Self {
        let store = Self::new();
        seed::seed_catalog(&store);
        store
    }

    // =========================================================================
    // Users
    // =========================================================================

    /// Create a user. Identity is assigned here.
    ///
    /// Returns `None` when the username is already taken; usernames are
    /// unique across the store.
    pub fn create_user(&self, new: NewUser) -> Option<User> {
        if self.get_user_by_username(&new.username).is_some() {
            return None;
        }
        Some(self.users.insert(|id| User {
            id,
            username: new.username,
            password: new.password,
        }))
    }

    /// Look up a user by ID.
    #[must_use]
    pub fn get_user(&self, id: UserId) -> Option<User> {
        self.users.get(id)
    }

    /// Look up a user by their unique username.
    #[must_use]
    pub fn get_user_by_username(&self, username: &str) -> Option<User> {
        self.users.find(|user| user.username == username)
    }

    // =========================================================================
    // Categories
    // =========================================================================

    /// Create a category.
    pub fn create_category(&self, new: NewCategory) -> Category {
        self.categories.insert(|id| Category {
            id,
            name: new.name,
            icon: new.icon,
            color: new.color,
        })
    }

    /// All categories in insertion order.
    #[must_use]
    pub fn categories(&self) -> Vec<Category> {
        self.categories.list()
    }

    // =========================================================================
    // Products
    // =========================================================================

    /// Create a product. Availability defaults to `true`.
    pub fn create_product(&self, new: NewProduct) -> Product {
        self.products.insert(|id| Product {
            id,
            name: new.name,
            description: new.description,
            price: new.price,
            category_id: new.category_id,
            vendor: new.vendor,
            rating: new.rating,
            review_count: new.review_count,
            is_available: new.is_available.unwrap_or(true),
            image_url: new.image_url,
        })
    }

    /// All products in insertion order.
    #[must_use]
    pub fn products(&self) -> Vec<Product> {
        self.products.list()
    }

    /// Products belonging to a category. Unknown category yields an empty vec.
    #[must_use]
    pub fn products_by_category(&self, category_id: CategoryId) -> Vec<Product> {
        self.products.filter(|p| p.category_id == category_id)
    }

    /// Look up a product by ID.
    #[must_use]
    pub fn get_product(&self, id: ProductId) -> Option<Product> {
        self.products.get(id)
    }

    /// Case-insensitive substring match against name, description and vendor.
    #[must_use]
    pub fn search_products(&self, query: &str) -> Vec<Product> {
        let query = query.to_lowercase();
        self.products.filter(|p| {
            p.name.to_lowercase().contains(&query)
                || p.description
                    .as_ref()
                    .is_some_and(|d| d.to_lowercase().contains(&query))
                || p.vendor.to_lowercase().contains(&query)
        })
    }

    // =========================================================================
    // Orders
    // =========================================================================

    /// Create an order. Status defaults to pending; both timestamps are set
    /// to the same instant.
    pub fn create_order(&self, new: NewOrder) -> Order {
        let now = Utc::now();
        self.orders.insert(|id| Order {
            id,
            user_id: new.user_id,
            total_amount: new.total_amount,
            delivery_address: new.delivery_address,
            status: new.status.unwrap_or_default(),
            estimated_delivery: new.estimated_delivery,
            created_at: now,
            updated_at: now,
        })
    }

    /// All orders in insertion order.
    #[must_use]
    pub fn orders(&self) -> Vec<Order> {
        self.orders.list()
    }

    /// Orders placed by one user, in insertion order.
    #[must_use]
    pub fn orders_by_user(&self, user_id: UserId) -> Vec<Order> {
        self.orders.filter(|o| o.user_id == user_id)
    }

    /// Look up an order by ID.
    #[must_use]
    pub fn get_order(&self, id: OrderId) -> Option<Order> {
        self.orders.get(id)
    }

    /// Overwrite an order's status and bump `updated_at`.
    ///
    /// Any status may replace any prior one; no transition graph is
    /// enforced. Absent order is a no-op returning `None`.
    pub fn update_order_status(&self, id: OrderId, status: OrderStatus) -> Option<Order> {
        self.orders.update(id, |order| {
            order.status = status;
            order.updated_at = Utc::now();
        })
    }

    // =========================================================================
    // Order items
    // =========================================================================

    /// Create a line item bound to an existing order.
    pub fn create_order_item(&self, new: NewOrderItem) -> OrderItem {
        self.order_items.insert(|id| OrderItem {
            id,
            order_id: new.order_id,
            product_id: new.product_id,
            quantity: new.quantity,
            price: new.price,
        })
    }

    /// Line items for one order, in the order they were persisted.
    #[must_use]
    pub fn order_items(&self, order_id: OrderId) -> Vec<OrderItem> {
        self.order_items.filter(|item| item.order_id == order_id)
    }

    // =========================================================================
    // Chat messages
    // =========================================================================

    /// Append a message to a user's transcript with a server timestamp.
    pub fn create_chat_message(&self, new: NewChatMessage) -> ChatMessage {
        self.chat_messages.insert(|id| ChatMessage {
            id,
            user_id: new.user_id,
            message: new.message,
            is_from_user: new.is_from_user,
            created_at: Utc::now(),
        })
    }

    /// A user's transcript ordered by creation time ascending.
    #[must_use]
    pub fn chat_messages(&self, user_id: UserId) -> Vec<ChatMessage> {
        let mut messages = self.chat_messages.filter(|m| m.user_id == user_id);
        messages.sort_by_key(|m| m.created_at);
        messages
    }
}
