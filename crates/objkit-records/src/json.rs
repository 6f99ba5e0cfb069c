//! Typed JSON round-trips.
//!
//! The target type of [`from_json`] decides the shape of the result, so there
//! is no need to attach a prototype after parsing.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::RecordError;

/// Serialize a value to compact JSON.
///
/// # Errors
///
/// Returns [`RecordError::Json`] if the value cannot be represented as JSON,
/// for example a map with non-string keys.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, RecordError> {
    Ok(serde_json::to_string(value)?)
}

/// Parse JSON into a value of type `T`.
///
/// # Errors
///
/// Returns [`RecordError::Json`] if the text is not valid JSON or does not
/// match the shape of `T`.
pub fn from_json<T: DeserializeOwned>(json: &str) -> Result<T, RecordError> {
    Ok(serde_json::from_str(json)?)
}
