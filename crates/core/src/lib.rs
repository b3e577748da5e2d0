//! Dastak Core - Shared types library.
//!
//! This crate provides common types used across all Dastak components:
//! - `api` - Delivery-ordering REST API and in-memory store
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no storage
//! access, no HTTP clients. This keeps it lightweight and allows it to be
//! used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and order status

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
