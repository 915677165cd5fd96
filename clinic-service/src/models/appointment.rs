use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A document in the `appointments` collection.
///
/// Field names are camelCase on the wire and in storage. `phone` is the lookup
/// key for `GET /appointments/:phone`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(
        default,
        deserialize_with = "super::present",
        skip_serializing_if = "Option::is_none"
    )]
    pub first_name: Option<Value>,
    #[serde(
        default,
        deserialize_with = "super::present",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_name: Option<Value>,
    #[serde(
        default,
        deserialize_with = "super::present",
        skip_serializing_if = "Option::is_none"
    )]
    pub email: Option<Value>,
    #[serde(
        default,
        deserialize_with = "super::present",
        skip_serializing_if = "Option::is_none"
    )]
    pub phone: Option<Value>,
    #[serde(
        default,
        deserialize_with = "super::present",
        skip_serializing_if = "Option::is_none"
    )]
    pub reason: Option<Value>,
    #[serde(
        default,
        deserialize_with = "super::present",
        skip_serializing_if = "Option::is_none"
    )]
    pub appointment_status: Option<Value>,
}

impl Appointment {
    /// True when the stored phone is exactly `phone` as a string.
    pub fn has_phone(&self, phone: &str) -> bool {
        matches!(&self.phone, Some(Value::String(stored)) if stored == phone)
    }
}
