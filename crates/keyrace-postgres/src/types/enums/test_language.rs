//! Test language enumeration.

use diesel_derive_enum::DbEnum;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Word list language of a typing test.
///
/// Corresponds to the `TEST_LANGUAGE` PostgreSQL enum.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[derive(Serialize, Deserialize, DbEnum, Display, EnumIter, EnumString, IntoStaticStr)]
#[ExistingTypePath = "crate::schema::sql_types::TestLanguage"]
pub enum TestLanguage {
    #[db_rename = "ENGLISH"]
    #[serde(rename = "ENGLISH")]
    #[strum(serialize = "ENGLISH")]
    #[default]
    English,

    #[db_rename = "SPANISH"]
    #[serde(rename = "SPANISH")]
    #[strum(serialize = "SPANISH")]
    Spanish,
}
