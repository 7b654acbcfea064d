use serde::{Deserialize, Serialize};
use serde::de::DeserializeOwned;

/// Capability shared by every record kept in a `Collection`.
///
/// The storage layer is written once against this trait; each shape only says where
/// its identifier lives and which path it is served from.
pub trait Entity: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Name of the collection, also the HTTP path segment (e.g. `cars`).
    const COLLECTION: &'static str;

    fn id(&self) -> i64;

    fn set_id(&mut self, id: i64);
}

/// A vehicle record.
///
/// Absent fields decode to their zero value, so a client may omit `id` on create.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Car {
    pub id: i64,
    pub brand: String,
    pub model: String,
    pub mileage: i64,
    /// Number of previous owners.
    pub owner_count: i64,
}

/// A furniture item with its outer dimensions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Furniture {
    pub id: i64,
    pub name: String,
    pub producer: String,
    pub height: i64,
    pub width: i64,
    pub length: i64,
}

/// A flower stock record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Flower {
    pub id: i64,
    pub name: String,
    pub quantity: i64,
    /// Unit price.
    pub price: f64,
    /// Arrival date, kept verbatim as sent by the client.
    pub arrival: String,
}

impl Entity for Car {
    const COLLECTION: &'static str = "cars";

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }
}

impl Entity for Furniture {
    const COLLECTION: &'static str = "furniture";

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }
}

impl Entity for Flower {
    const COLLECTION: &'static str = "flowers";

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }
}
