//! Static description of a table-backed resource.
//!
//! Each entity exposes a [`ResourceSchema`] as an associated constant. The
//! schema drives create/update validation and the messages and paths that
//! appear in responses, so the three resources stay uniform.

use crate::error::AppError;

/// Field metadata and naming for one resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceSchema {
    /// Human-facing name used in messages (`"User"`).
    pub name: &'static str,
    /// Collection path below `/api` (`"users"`).
    pub path: &'static str,
    /// Fields a create request must carry, in the order they are checked.
    pub required: &'static [&'static str],
    /// Fields a partial update may touch.
    pub updatable: &'static [&'static str],
    /// Message returned when an update carries none of the updatable fields.
    pub update_hint: &'static str,
}

impl ResourceSchema {
    /// `<Resource> doesn't exist`
    pub fn not_found(&self) -> AppError {
        AppError::not_found(format!("{} doesn't exist", self.name))
    }

    /// Error returned for an update body with nothing to apply.
    pub fn nothing_to_update(&self) -> AppError {
        AppError::bad_request(self.update_hint)
    }

    /// Canonical path of a single row, used for the `Location` header.
    pub fn location(&self, id: i64) -> String {
        format!("/api/{}/{}", self.path, id)
    }

    /// Parses a path id. Anything that is not an integer cannot name a row.
    pub fn parse_id(&self, raw: &str) -> Result<i64, AppError> {
        raw.parse::<i64>().map_err(|_| self.not_found())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIDGETS: ResourceSchema = ResourceSchema {
        name: "Widget",
        path: "widgets",
        required: &["label"],
        updatable: &["label"],
        update_hint: "Request body must contain 'label'",
    };

    #[test]
    fn test_not_found_message() {
        assert_eq!(WIDGETS.not_found().to_string(), "Widget doesn't exist");
    }

    #[test]
    fn test_location() {
        assert_eq!(WIDGETS.location(42), "/api/widgets/42");
    }

    #[test]
    fn test_parse_id() {
        assert_eq!(WIDGETS.parse_id("7").unwrap(), 7);

        let err = WIDGETS.parse_id("seven").unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(err.to_string(), "Widget doesn't exist");
    }
}
