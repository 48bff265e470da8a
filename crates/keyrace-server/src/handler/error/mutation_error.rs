//! Errors of preset mutations, rendered as field-tagged payloads.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use keyrace_postgres::PgError;
use keyrace_postgres::types::{ConstraintCategory, ConstraintViolation, TestPresetConstraints};
use validator::ValidationErrors;

use crate::extract::Json;
use crate::handler::response::{FieldError, TestPresetPayload};

/// Tracing target for mutation failures.
const TRACING_TARGET: &str = "keyrace_server::handler::mutations";

/// Failure of a preset mutation.
///
/// Each variant renders as a [`TestPresetPayload`] with `errors` set; the
/// status code reflects the variant. Store failures keep their cause for
/// logging while the client only sees an opaque `unknown` field error.
#[derive(Debug, thiserror::Error)]
pub enum MutationError {
    /// A referenced record does not exist.
    #[error("{}: {}", .0.field, .0.message)]
    NotFound(FieldError),
    /// The input failed validation.
    #[error("{} invalid field(s)", .0.len())]
    Validation(Vec<FieldError>),
    /// The store failed.
    #[error(transparent)]
    Store(#[from] PgError),
}

/// A specialized [`Result`] type for mutation handlers.
///
/// [`Result`]: std::result::Result
pub type MutationResult<T> = Result<T, MutationError>;

impl MutationError {
    /// Returns the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Converts the error into the payload sent to the client.
    pub fn into_payload(self) -> TestPresetPayload {
        let errors = match self {
            Self::NotFound(error) => vec![error],
            Self::Validation(errors) => errors,
            Self::Store(error) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    error = %error,
                    source = ?std::error::Error::source(&error),
                    transient = error.is_transient(),
                    "preset mutation failed in the store"
                );
                vec![FieldError::unknown()]
            }
        };

        TestPresetPayload::failure(errors)
    }

    /// Classifies a store error, surfacing known constraint violations as field errors.
    pub fn from_store(error: PgError) -> Self {
        let Some(violation) = error.constraint_violation() else {
            return Self::Store(error);
        };

        match violation {
            ConstraintViolation::TestPreset(TestPresetConstraints::UserReference) => {
                Self::NotFound(FieldError::user_not_found())
            }
            ConstraintViolation::TestPreset(c)
                if violation.categorize() == ConstraintCategory::Validation =>
            {
                let field = match c {
                    TestPresetConstraints::WordsPositive => "words",
                    TestPresetConstraints::TimePositive => "time",
                    _ => "content",
                };
                Self::Validation(vec![FieldError::new(field, "Value is not allowed")])
            }
            _ => Self::Store(error),
        }
    }
}

impl From<ValidationErrors> for MutationError {
    fn from(errors: ValidationErrors) -> Self {
        let mut field_errors: Vec<FieldError> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |error| {
                    let message = error
                        .message
                        .as_ref()
                        .map(|message| message.to_string())
                        .unwrap_or_else(|| format!("failed validation: {}", error.code));
                    FieldError::new(field.to_string(), message)
                })
            })
            .collect();

        field_errors.sort_by(|a, b| a.field.cmp(&b.field));

        tracing::warn!(
            target: TRACING_TARGET,
            errors = ?field_errors,
            "preset mutation failed validation"
        );

        Self::Validation(field_errors)
    }
}

impl IntoResponse for MutationError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        (status, Json(self.into_payload())).into_response()
    }
}

impl aide::OperationOutput for MutationError {
    type Inner = TestPresetPayload;
}

#[cfg(test)]
mod tests {
    use keyrace_postgres::error::TimeoutType;
    use validator::ValidationError;

    use super::*;

    #[test]
    fn not_found_renders_field_error() {
        let error = MutationError::NotFound(FieldError::preset_not_found());
        assert_eq!(error.status_code(), StatusCode::NOT_FOUND);

        let payload = error.into_payload();
        assert!(payload.test_preset.is_none());
        assert_eq!(payload.errors, vec![FieldError::preset_not_found()]);
    }

    #[test]
    fn store_error_hides_cause() {
        let error = MutationError::from(PgError::Timeout(TimeoutType::Wait));
        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

        let payload = error.into_payload();
        assert_eq!(payload.errors, vec![FieldError::unknown()]);
    }

    #[test]
    fn unknown_store_error_stays_store() {
        let error = MutationError::from_store(PgError::Unexpected("closed".into()));
        assert!(matches!(error, MutationError::Store(_)));
    }

    #[test]
    fn validation_errors_become_field_errors() {
        let mut errors = ValidationErrors::new();
        errors.add(
            "words",
            ValidationError::new("range").with_message("must be positive".into()),
        );

        let error = MutationError::from(errors);
        assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);

        let payload = error.into_payload();
        assert_eq!(
            payload.errors,
            vec![FieldError::new("words", "must be positive")]
        );
    }

    #[test]
    fn response_status_matches_variant() {
        let response = MutationError::Validation(Vec::new()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
