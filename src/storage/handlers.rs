use axum::{
    Extension, Json,
    body::Bytes,
    extract::Query,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{MethodRouter, get},
};
use std::sync::Arc;

use super::collection::Collection;
use super::errors::StoreResult;
use super::protocol::{QUERY_ID, decode_entity, first_query_value};
use crate::entities::Entity;

pub async fn handle_list<T: Entity>(
    Extension(collection): Extension<Arc<Collection<T>>>,
) -> (StatusCode, Json<Vec<T>>) {
    (StatusCode::OK, Json(collection.list().await))
}

pub async fn handle_create<T: Entity>(
    Extension(collection): Extension<Arc<Collection<T>>>,
    body: Bytes,
) -> StoreResult<(StatusCode, Json<T>)> {
    let entity: T = decode_entity(&body)?;
    let stored = collection.create(entity).await;
    Ok((StatusCode::CREATED, Json(stored)))
}

pub async fn handle_update<T: Entity>(
    Extension(collection): Extension<Arc<Collection<T>>>,
    body: Bytes,
) -> StoreResult<(StatusCode, Json<T>)> {
    let entity: T = decode_entity(&body)?;
    let updated = collection.update(entity).await?;
    Ok((StatusCode::OK, Json(updated)))
}

pub async fn handle_delete<T: Entity>(
    Extension(collection): Extension<Arc<Collection<T>>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> StoreResult<StatusCode> {
    collection
        .delete_raw(first_query_value(&pairs, QUERY_ID))
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn handle_method_not_allowed() -> Response {
    (StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed").into_response()
}

/// Method router for one collection path: GET lists, POST creates, PUT updates,
/// DELETE removes by `?id=`, anything else is answered with 405.
///
/// HEAD is routed explicitly since `get` would otherwise answer it.
pub fn collection_routes<T: Entity>() -> MethodRouter {
    get(handle_list::<T>)
        .head(handle_method_not_allowed)
        .post(handle_create::<T>)
        .put(handle_update::<T>)
        .delete(handle_delete::<T>)
        .fallback(handle_method_not_allowed)
}
