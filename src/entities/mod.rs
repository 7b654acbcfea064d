//! Entity Shapes
//!
//! The three record types served by the API and the identifier capability the
//! generic storage layer needs from them.
//!
//! ## Submodules
//! - **`types`**: `Car`, `Furniture` and `Flower`, plus the `Entity` trait that exposes
//!   `id()` / `set_id()` and the collection name each shape is mounted under.

pub mod types;

pub use types::{Car, Entity, Flower, Furniture};

#[cfg(test)]
mod tests;
