//! In-Memory Collection Service Library
//!
//! This library crate holds everything the binary (`main.rs`) serves.
//!
//! ## Architecture Modules
//! The service is split into three subsystems:
//!
//! - **`entities`**: The record shapes (`Car`, `Furniture`, `Flower`) and the `Entity`
//!   trait giving the storage layer access to their identifiers.
//! - **`storage`**: The generic collection manager. An `EntityStore` keeps an ordered
//!   sequence plus a monotonic id counter; a `Collection` guards one store with its own
//!   lock and exposes create/list/update/delete. Also holds the body decoder and the
//!   generic axum handlers.
//! - **`server`**: Configuration, the landing page and the router that mounts one
//!   collection per path.
//!
//! Nothing is persisted: all state lives for the lifetime of the process.

pub mod entities;
pub mod server;
pub mod storage;

pub use server::{AppState, ServerConfig, build_router};
