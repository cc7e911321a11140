//! Response envelopes
//!
//! Every backend answer is wrapped in `{ success, message, data, ... }`.
//! Failures use the same shape plus optional field-validation lists.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Decodes `null` as the type's default value.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Successful response envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the backend accepted the operation.
    pub success: bool,
    /// Human-readable message in the session language.
    #[serde(default)]
    pub message: String,
    /// Operation result.
    pub data: T,
    /// Identifier of a created resource.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Number of items in this page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,
    /// Total number of items.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
    /// Current page number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u64>,
}

impl<T> ApiResponse<T> {
    /// Consumes the envelope and returns its data.
    pub fn into_data(self) -> T {
        self.data
    }

    /// Returns true when the envelope carries pagination metadata.
    #[must_use]
    pub const fn is_paginated(&self) -> bool {
        self.page.is_some() && self.total.is_some()
    }

    /// Maps the data while keeping the envelope metadata.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ApiResponse<U> {
        ApiResponse {
            success: self.success,
            message: self.message,
            data: f(self.data),
            id: self.id,
            count: self.count,
            total: self.total,
            page: self.page,
        }
    }
}

/// Error envelope as sent by the backend.
///
/// Keys not modelled here are kept in `extra` so the envelope stays whole.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    /// Always `false` for errors.
    #[serde(default, deserialize_with = "null_as_default")]
    pub success: bool,
    /// Error message.
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
    /// Optional error payload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    /// Fields the error refers to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<String>>,
    /// Fields with invalid values.
    #[serde(
        default,
        rename = "invalidFields",
        skip_serializing_if = "Option::is_none"
    )]
    pub invalid_fields: Option<Vec<String>>,
    /// Required fields that were not sent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub missing_fields: Option<Vec<String>>,
    /// Any other keys of the envelope.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ErrorEnvelope {
    /// Minimal failure envelope with just a message.
    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            ..Self::default()
        }
    }

    /// Builds the envelope from a decoded error body.
    ///
    /// A body that does not fit the envelope shape is still kept: modelled
    /// keys are taken when their values fit, everything else lands in
    /// `extra`. A `null` body gives `failure("Unknown error")` and any
    /// other non-object body is kept in `data`.
    #[must_use]
    pub fn from_body(body: Value) -> Self {
        match body {
            Value::Null => Self::failure("Unknown error"),
            Value::Object(map) => serde_json::from_value(Value::Object(map.clone()))
                .unwrap_or_else(|_| Self::from_map(map)),
            other => Self {
                data: Some(other),
                ..Self::failure("Unknown error")
            },
        }
    }

    fn from_map(mut map: Map<String, Value>) -> Self {
        fn take<T: serde::de::DeserializeOwned>(
            map: &mut Map<String, Value>,
            key: &str,
        ) -> Option<T> {
            let value = map.remove(key)?;
            match serde_json::from_value(value.clone()) {
                Ok(decoded) => Some(decoded),
                Err(_) => {
                    map.insert(key.to_string(), value);
                    None
                }
            }
        }

        let success = take::<Option<bool>>(&mut map, "success").flatten();
        let message = take::<Option<String>>(&mut map, "message").flatten();
        let data = take::<Option<Value>>(&mut map, "data").flatten();
        let fields = take::<Option<Vec<String>>>(&mut map, "fields").flatten();
        let invalid_fields = take::<Option<Vec<String>>>(&mut map, "invalidFields").flatten();
        let missing_fields = take::<Option<Vec<String>>>(&mut map, "missing_fields").flatten();

        Self {
            success: success.unwrap_or_default(),
            message: message.unwrap_or_default(),
            data,
            fields,
            invalid_fields,
            missing_fields,
            extra: map,
        }
    }
}

/// Placeholder for endpoints whose `data` carries nothing useful.
///
/// Accepts any value, including a missing or `null` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Empty;

impl<'de> Deserialize<'de> for Empty {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Option::<serde::de::IgnoredAny>::deserialize(deserializer)?;
        Ok(Self)
    }
}
