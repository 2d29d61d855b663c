//! Field bindings

use crate::error::{HelperError, Result};

/// A form field's identifier and current value
///
/// The id is written as both the `id` and `name` attribute of the rendered
/// control, so it is restricted to characters that are safe in both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldBinding {
    id: String,
    value: String,
}

impl FieldBinding {
    /// Create a binding, validating the id
    pub fn new(id: impl Into<String>, value: impl Into<String>) -> Result<Self> {
        let id = id.into();
        if !is_valid_id(&id) {
            return Err(HelperError::InvalidFieldId(id));
        }

        Ok(Self {
            id,
            value: value.into(),
        })
    }

    /// Create a binding with no current value
    pub fn empty(id: impl Into<String>) -> Result<Self> {
        Self::new(id, String::new())
    }

    /// Get the field id
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get the current value
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Check if the field holds a non-blank value
    pub fn has_value(&self) -> bool {
        !self.value.trim().is_empty()
    }
}

/// Ids look like `Title`, `Post_Body`, `Items[0].Name`
fn is_valid_id(id: &str) -> bool {
    !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.' | '[' | ']'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_ids() {
        for id in ["Title", "Post_Body", "Items[0].Name", "video-url"] {
            assert!(FieldBinding::empty(id).is_ok(), "{id} should be valid");
        }
    }

    #[test]
    fn test_invalid_ids() {
        for id in ["", "has space", "quote\"", "<script>", "a'b"] {
            assert!(
                matches!(FieldBinding::empty(id), Err(HelperError::InvalidFieldId(_))),
                "{id:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_has_value() {
        assert!(!FieldBinding::new("A", "").unwrap().has_value());
        assert!(!FieldBinding::new("A", "  ").unwrap().has_value());
        assert!(FieldBinding::new("A", "x").unwrap().has_value());
    }

    #[test]
    fn test_error_display() {
        let err = FieldBinding::empty("bad id").unwrap_err();
        assert_eq!(err.to_string(), "Invalid field id: \"bad id\"");
    }
}
