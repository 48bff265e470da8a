//! Constraint violation to HTTP error conversion.

use keyrace_postgres::types::{ConstraintViolation, TestPresetConstraints, UserConstraints};

use crate::handler::{Error, ErrorKind};

impl From<ConstraintViolation> for Error<'static> {
    fn from(constraint: ConstraintViolation) -> Self {
        match constraint {
            ConstraintViolation::User(c) => c.into(),
            ConstraintViolation::TestPreset(c) => c.into(),
        }
    }
}

impl From<UserConstraints> for Error<'static> {
    fn from(c: UserConstraints) -> Self {
        let error = match c {
            UserConstraints::UsernameNotEmpty => {
                ErrorKind::BadRequest.with_message("Username cannot be empty")
            }
            UserConstraints::UsernameLengthMax => {
                ErrorKind::BadRequest.with_message("Username cannot exceed 32 characters")
            }
            UserConstraints::UsernameUnique => {
                ErrorKind::Conflict.with_message("Username is already taken")
            }
            UserConstraints::EmailUnique => {
                ErrorKind::Conflict.with_message("Email address is already registered")
            }
            UserConstraints::SettingsUserReference => {
                ErrorKind::NotFound.with_message("Unable to find user for these settings")
            }
            UserConstraints::UpdatedAfterCreated => ErrorKind::InternalServerError.into_error(),
        };

        error.with_resource("user")
    }
}

impl From<TestPresetConstraints> for Error<'static> {
    fn from(c: TestPresetConstraints) -> Self {
        let error = match c {
            TestPresetConstraints::WordsPositive => {
                ErrorKind::BadRequest.with_message("Word count must be positive")
            }
            TestPresetConstraints::TimePositive => {
                ErrorKind::BadRequest.with_message("Time must be positive")
            }
            TestPresetConstraints::ContentNotEmpty => {
                ErrorKind::BadRequest.with_message("Content cannot be empty")
            }
            TestPresetConstraints::UserReference => {
                ErrorKind::NotFound.with_message("Unable to find user with the given id")
            }
            TestPresetConstraints::UpdatedAfterCreated => {
                ErrorKind::InternalServerError.into_error()
            }
        };

        error.with_resource("preset")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniqueness_maps_to_conflict() {
        let error: Error = ConstraintViolation::User(UserConstraints::UsernameUnique).into();
        assert_eq!(error.kind(), ErrorKind::Conflict);
        assert_eq!(error.resource(), Some("user"));
    }

    #[test]
    fn missing_owner_maps_to_not_found() {
        let error: Error =
            ConstraintViolation::TestPreset(TestPresetConstraints::UserReference).into();
        assert_eq!(error.kind(), ErrorKind::NotFound);
        assert_eq!(error.resource(), Some("preset"));
    }
}
