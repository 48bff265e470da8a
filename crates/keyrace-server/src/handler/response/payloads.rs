//! Mutation payloads with field-tagged errors.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::TestPreset;

/// A problem with one input field of a mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct FieldError {
    /// Input field the error refers to, `unknown` when not attributable.
    pub field: String,
    /// Human-readable description.
    pub message: String,
}

impl FieldError {
    /// Creates a new field error.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    /// The source preset of a copy does not exist.
    pub fn preset_not_found() -> Self {
        Self::new("preset", "Unable to find preset with the given id")
    }

    /// The user referenced by the mutation does not exist.
    pub fn user_not_found() -> Self {
        Self::new("user", "Unable to find user with the given id")
    }

    /// The username in the path matches no user.
    pub fn username_not_found() -> Self {
        Self::new("username", "Unable to find user with the given username")
    }

    /// Opaque store failure.
    pub fn unknown() -> Self {
        Self::new("unknown", "An error occurred")
    }
}

/// Result of a preset mutation.
///
/// Check `errors` before trusting `test_preset`.
#[must_use]
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TestPresetPayload {
    /// The created preset, absent when the mutation failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_preset: Option<TestPreset>,
    /// Problems that prevented the mutation.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<FieldError>,
}

impl TestPresetPayload {
    /// Creates a successful payload.
    pub fn success(test_preset: TestPreset) -> Self {
        Self {
            test_preset: Some(test_preset),
            errors: Vec::new(),
        }
    }

    /// Creates a failed payload.
    pub fn failure(errors: Vec<FieldError>) -> Self {
        Self {
            test_preset: None,
            errors,
        }
    }

    /// Returns true if the mutation reported no errors.
    #[inline]
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_copy_source_payload() -> anyhow::Result<()> {
        let payload = TestPresetPayload::failure(vec![FieldError::preset_not_found()]);
        assert!(!payload.is_success());

        let json = serde_json::to_value(payload)?;
        assert_eq!(
            json,
            serde_json::json!({
                "errors": [{
                    "field": "preset",
                    "message": "Unable to find preset with the given id",
                }]
            })
        );
        Ok(())
    }

    #[test]
    fn store_failure_payload_is_opaque() -> anyhow::Result<()> {
        let json = serde_json::to_value(TestPresetPayload::failure(vec![FieldError::unknown()]))?;
        assert_eq!(json["errors"][0]["field"], "unknown");
        assert_eq!(json["errors"][0]["message"], "An error occurred");
        Ok(())
    }
}
