pub mod appointment;
pub mod media;
pub mod user;

pub use appointment::Appointment;
pub use media::Media;
pub use user::User;

use mongodb::bson::{oid::ObjectId, Bson};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Deserialize a field that is present in the input, keeping an explicit
/// `null` as `Some(Value::Null)`. Pair with `#[serde(default)]` so a missing
/// field stays `None`.
pub(crate) fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// Acknowledgment returned by the store for a single insert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct InsertAck {
    pub acknowledged: bool,
    pub inserted_id: String,
}

impl InsertAck {
    pub fn new(inserted_id: ObjectId) -> Self {
        Self {
            acknowledged: true,
            inserted_id: inserted_id.to_hex(),
        }
    }

    pub fn from_bson(inserted_id: Bson) -> Self {
        let inserted_id = match inserted_id {
            Bson::ObjectId(oid) => oid.to_hex(),
            Bson::String(s) => s,
            other => other.to_string(),
        };
        Self {
            acknowledged: true,
            inserted_id,
        }
    }
}
