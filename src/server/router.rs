use axum::{Extension, Router, routing::get};
use std::sync::Arc;

use super::landing::handle_home;
use crate::entities::{Car, Flower, Furniture};
use crate::storage::collection::Collection;
use crate::storage::handlers::collection_routes;
use crate::storage::protocol::{ENDPOINT_HOME, endpoint_for};

/// The three independent collections. Cloning shares the underlying stores.
#[derive(Clone, Default)]
pub struct AppState {
    pub cars: Arc<Collection<Car>>,
    pub furniture: Arc<Collection<Furniture>>,
    pub flowers: Arc<Collection<Flower>>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(ENDPOINT_HOME, get(handle_home))
        .route(&endpoint_for::<Car>(), collection_routes::<Car>())
        .route(&endpoint_for::<Furniture>(), collection_routes::<Furniture>())
        .route(&endpoint_for::<Flower>(), collection_routes::<Flower>())
        .layer(Extension(state.cars))
        .layer(Extension(state.furniture))
        .layer(Extension(state.flowers))
}
