//! Collection Wire Protocol
//!
//! Endpoint paths and the body decoder shared by every collection handler.
//!
//! Bodies are decoded here, before any collection lock is taken, so a malformed
//! request can never leave a store partially modified. Responses are encoded by
//! axum's `Json` responder.

use super::errors::{StoreError, StoreResult};
use crate::entities::Entity;

// --- API Endpoints ---

/// Landing page with links to every collection.
pub const ENDPOINT_HOME: &str = "/";

/// Path a collection of `T` is mounted under.
pub fn endpoint_for<T: Entity>() -> String {
    format!("/{}", T::COLLECTION)
}

/// Query parameter carrying the target identifier of `DELETE <collection>`.
pub const QUERY_ID: &str = "id";

/// First value of `key` among decoded query pairs. Later repeats are ignored.
///
/// The query is extracted as raw pairs so that duplicates or odd values never fail
/// in the extractor; deciding what an invalid id looks like is left to `parse_id`.
pub fn first_query_value<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(name, _)| name == key)
        .map(|(_, value)| value.as_str())
}

/// Decodes a request body into an entity of shape `T`.
///
/// Only the first JSON value is read; bytes after it are ignored. Absent fields take
/// their zero value and unknown fields are ignored. Keys match case-sensitively.
/// Anything else that fails to decode becomes `MalformedInput` with the decoder message.
pub fn decode_entity<T: Entity>(body: &[u8]) -> StoreResult<T> {
    let first = serde_json::Deserializer::from_slice(body).into_iter::<T>().next();
    match first {
        Some(Ok(entity)) => Ok(entity),
        Some(Err(e)) => {
            tracing::warn!("Failed to decode {} payload: {}", T::COLLECTION, e);
            Err(StoreError::MalformedInput(e.to_string()))
        }
        None => {
            tracing::warn!("Empty {} payload", T::COLLECTION);
            Err(StoreError::MalformedInput("EOF".to_string()))
        }
    }
}
