//! Test type enumeration.

use diesel_derive_enum::DbEnum;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// How a typing test ends.
///
/// Corresponds to the `TEST_TYPE` PostgreSQL enum.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[derive(Serialize, Deserialize, DbEnum, Display, EnumIter, EnumString, IntoStaticStr)]
#[ExistingTypePath = "crate::schema::sql_types::TestType"]
pub enum TestType {
    /// The test ends when the timer runs out.
    #[db_rename = "TIME"]
    #[serde(rename = "TIME")]
    #[strum(serialize = "TIME")]
    #[default]
    Time,

    /// The test ends once a fixed number of words is typed.
    #[db_rename = "WORDS"]
    #[serde(rename = "WORDS")]
    #[strum(serialize = "WORDS")]
    Words,
}

impl TestType {
    /// Returns whether the test length is measured in seconds.
    #[inline]
    pub fn is_timed(self) -> bool {
        matches!(self, TestType::Time)
    }
}
