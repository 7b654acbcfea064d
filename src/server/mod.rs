//! HTTP Server Module
//!
//! Wires the three collections to their paths and serves the landing page.
//!
//! ## Submodules
//! - **`config`**: Bind address configuration with the service defaults.
//! - **`landing`**: Static HTML page linking the collection endpoints.
//! - **`router`**: Shared application state and the axum `Router` built from it.

pub mod config;
pub mod landing;
pub mod router;

pub use config::ServerConfig;
pub use router::{AppState, build_router};
