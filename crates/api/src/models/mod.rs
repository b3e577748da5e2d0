//! Domain models for the Dastak API.
//!
//! Wire representation is camelCase JSON throughout - this is the contract
//! the mobile client consumes. Monetary fields are `rust_decimal::Decimal`
//! and serialize as decimal strings.

pub mod catalog;
pub mod chat;
pub mod order;
pub mod user;

pub use catalog::{Category, NewCategory, NewProduct, Product};
pub use chat::{ChatMessage, NewChatMessage};
pub use order::{ChatOrderItem, NewOrder, NewOrderItem, Order, OrderItem, OrderWithItems};
pub use user::{NewUser, User};
