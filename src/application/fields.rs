//! Loosely typed request bodies and the field rules applied to them.
//!
//! Bodies are kept as a JSON object until validation has run, so the
//! "which field is missing" answer never depends on whether some other field
//! happens to have the wrong type.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::AppError;

/// A JSON object body awaiting validation.
///
/// A field counts as present when its key exists and its value is not `null`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestFields(Map<String, Value>);

impl From<Map<String, Value>> for RequestFields {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl RequestFields {
    pub fn has(&self, field: &str) -> bool {
        self.0.get(field).is_some_and(|value| !value.is_null())
    }

    /// Checks `fields` in order and reports the first one that is missing.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] with `Missing '<field>' in request body`.
    pub fn require(&self, fields: &[&str]) -> Result<(), AppError> {
        match fields.iter().find(|field| !self.has(field)) {
            Some(field) => Err(AppError::missing_field(field)),
            None => Ok(()),
        }
    }

    /// Drops every field that is not in `allowed`, and every `null`.
    pub fn retain(&mut self, allowed: &[&str]) {
        self.0
            .retain(|key, value| !value.is_null() && allowed.contains(&key.as_str()));
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Removes a field that must be present and decodes it.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the field is absent or has the wrong type.
    pub fn take<T: DeserializeOwned>(&mut self, field: &str) -> Result<T, AppError> {
        self.take_optional(field)?
            .ok_or_else(|| AppError::missing_field(field))
    }

    /// Removes an optional field and decodes it. Absent and `null` both yield `None`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the field has the wrong type.
    pub fn take_optional<T: DeserializeOwned>(
        &mut self,
        field: &str,
    ) -> Result<Option<T>, AppError> {
        match self.0.remove(field) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => serde_json::from_value(value)
                .map(Some)
                .map_err(|_| AppError::invalid_field(field)),
        }
    }
}
