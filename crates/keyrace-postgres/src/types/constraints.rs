//! Named database constraints and their classification.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Categories of database constraint violations.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConstraintCategory {
    /// Data validation constraints (format, length, range checks).
    Validation,
    /// Chronological integrity constraints (timestamp relationships).
    Chronological,
    /// Uniqueness constraints (unique indexes).
    Uniqueness,
    /// Foreign key constraints.
    Reference,
}

/// Constraints on the `users` and `user_settings` tables.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Display, EnumIter, EnumString)]
pub enum UserConstraints {
    #[strum(serialize = "users_username_not_empty")]
    UsernameNotEmpty,
    #[strum(serialize = "users_username_length_max")]
    UsernameLengthMax,
    #[strum(serialize = "users_updated_after_created")]
    UpdatedAfterCreated,
    #[strum(serialize = "users_username_unique_idx")]
    UsernameUnique,
    #[strum(serialize = "users_email_unique_idx")]
    EmailUnique,
    #[strum(serialize = "user_settings_user_id_fkey")]
    SettingsUserReference,
}

/// Constraints on the `test_presets` table.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Display, EnumIter, EnumString)]
pub enum TestPresetConstraints {
    #[strum(serialize = "test_presets_words_positive")]
    WordsPositive,
    #[strum(serialize = "test_presets_time_positive")]
    TimePositive,
    #[strum(serialize = "test_presets_content_not_empty")]
    ContentNotEmpty,
    #[strum(serialize = "test_presets_updated_after_created")]
    UpdatedAfterCreated,
    #[strum(serialize = "test_presets_user_id_fkey")]
    UserReference,
}

/// Any known constraint violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintViolation {
    User(UserConstraints),
    TestPreset(TestPresetConstraints),
}

impl ConstraintViolation {
    /// Resolves a constraint name reported by PostgreSQL.
    ///
    /// Returns `None` for constraints this crate does not know about.
    pub fn new(constraint: &str) -> Option<Self> {
        let prefix = constraint.split('_').next()?;
        match prefix {
            "users" | "user" => constraint.parse().ok().map(Self::User),
            "test" => constraint.parse().ok().map(Self::TestPreset),
            _ => None,
        }
    }

    /// Returns the table the constraint belongs to.
    pub fn table_name(&self) -> &'static str {
        match self {
            ConstraintViolation::User(UserConstraints::SettingsUserReference) => "user_settings",
            ConstraintViolation::User(_) => "users",
            ConstraintViolation::TestPreset(_) => "test_presets",
        }
    }

    /// Returns the category of this constraint violation.
    pub fn categorize(&self) -> ConstraintCategory {
        match self {
            ConstraintViolation::User(c) => match c {
                UserConstraints::UsernameNotEmpty | UserConstraints::UsernameLengthMax => {
                    ConstraintCategory::Validation
                }
                UserConstraints::UpdatedAfterCreated => ConstraintCategory::Chronological,
                UserConstraints::UsernameUnique | UserConstraints::EmailUnique => {
                    ConstraintCategory::Uniqueness
                }
                UserConstraints::SettingsUserReference => ConstraintCategory::Reference,
            },
            ConstraintViolation::TestPreset(c) => match c {
                TestPresetConstraints::WordsPositive
                | TestPresetConstraints::TimePositive
                | TestPresetConstraints::ContentNotEmpty => ConstraintCategory::Validation,
                TestPresetConstraints::UpdatedAfterCreated => ConstraintCategory::Chronological,
                TestPresetConstraints::UserReference => ConstraintCategory::Reference,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn every_constraint_name_resolves() {
        for c in UserConstraints::iter() {
            let name = c.to_string();
            assert_eq!(ConstraintViolation::new(&name), Some(ConstraintViolation::User(c)));
        }

        for c in TestPresetConstraints::iter() {
            let name = c.to_string();
            let violation = ConstraintViolation::new(&name);
            assert_eq!(violation, Some(ConstraintViolation::TestPreset(c)));
            assert_eq!(violation.map(|v| v.table_name()), Some("test_presets"));
        }
    }

    #[test]
    fn unknown_constraint_is_none() {
        assert_eq!(ConstraintViolation::new("accounts_email_unique"), None);
        assert_eq!(ConstraintViolation::new("users_nickname_unique"), None);
        assert_eq!(ConstraintViolation::new(""), None);
    }

    #[test]
    fn username_unique_is_uniqueness() {
        let violation = ConstraintViolation::new("users_username_unique_idx");
        assert_eq!(
            violation.map(|v| v.categorize()),
            Some(ConstraintCategory::Uniqueness)
        );
    }
}
