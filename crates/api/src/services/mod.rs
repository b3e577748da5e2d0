//! Business services over the entity store.
//!
//! Services borrow the store (and, for chat, the assistant capability) and
//! are constructed per request; they hold no state of their own.

pub mod catalog;
pub mod chat;
pub mod orders;

pub use catalog::CatalogService;
pub use chat::ChatService;
pub use orders::{ChatOrderInput, OrderInput, OrderItemInput, OrderService};
