//! Request and response bodies for the record routes.
//!
//! Request bodies name exactly the fields that get stored; anything else the
//! caller sends, including `_id`, is dropped. Missing fields stay missing and
//! an explicit `null` is stored as `null`.

use crate::models::{present, Appointment, InsertAck, Media, User};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Deserialize)]
pub struct NewUser {
    #[serde(default, deserialize_with = "present")]
    pub name: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub email: Option<Value>,
}

impl From<NewUser> for User {
    fn from(body: NewUser) -> Self {
        User {
            id: None,
            name: body.name,
            email: body.email,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAppointment {
    #[serde(default, deserialize_with = "present")]
    pub first_name: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub last_name: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub email: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub phone: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub reason: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub appointment_status: Option<Value>,
}

impl From<NewAppointment> for Appointment {
    fn from(body: NewAppointment) -> Self {
        Appointment {
            id: None,
            first_name: body.first_name,
            last_name: body.last_name,
            email: body.email,
            phone: body.phone,
            reason: body.reason,
            appointment_status: body.appointment_status,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct NewMedia {
    #[serde(default, deserialize_with = "present")]
    pub img: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub video: Option<Value>,
}

impl From<NewMedia> for Media {
    fn from(body: NewMedia) -> Self {
        Media {
            id: None,
            img: body.img,
            video: body.video,
        }
    }
}

/// Body of a successful write: a message and the store's acknowledgment.
#[derive(Debug, Serialize)]
pub struct StoreResponse {
    pub message: &'static str,
    pub data: InsertAck,
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<Value>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.map(|oid| oid.to_hex()),
            name: user.name,
            email: user.email,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentResponse {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub appointment_status: Option<Value>,
}

impl From<Appointment> for AppointmentResponse {
    fn from(appointment: Appointment) -> Self {
        Self {
            id: appointment.id.map(|oid| oid.to_hex()),
            first_name: appointment.first_name,
            last_name: appointment.last_name,
            email: appointment.email,
            phone: appointment.phone,
            reason: appointment.reason,
            appointment_status: appointment.appointment_status,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MediaResponse {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub img: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video: Option<Value>,
}

impl From<Media> for MediaResponse {
    fn from(media: Media) -> Self {
        Self {
            id: media.id.map(|oid| oid.to_hex()),
            img: media.img,
            video: media.video,
        }
    }
}
