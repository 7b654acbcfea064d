//! Collection Storage Module
//!
//! Implements the generic in-memory collection manager.
//!
//! ## Core Concepts
//! - **Store**: `EntityStore` is an ordered `Vec` of one entity shape plus a monotonic id
//!   counter. Ids start at 1 and are never reused, so gaps after deletions are expected.
//! - **Collection**: `Collection` wraps one store in its own `tokio::sync::Mutex` and runs
//!   create/list/update/delete under it. Collections are independent of each other.
//! - **Protocol**: bodies are decoded before any lock is taken; failures surface as
//!   `StoreError`, which maps itself onto an HTTP status.
//! - **Handlers**: generic axum handlers, instantiated once per entity shape.

pub mod collection;
pub mod errors;
pub mod handlers;
pub mod protocol;
pub mod store;
