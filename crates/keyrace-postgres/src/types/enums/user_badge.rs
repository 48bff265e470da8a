//! User badge enumeration.

use diesel_derive_enum::DbEnum;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Badge displayed next to a username.
///
/// Corresponds to the `USER_BADGE` PostgreSQL enum.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[derive(Serialize, Deserialize, DbEnum, Display, EnumIter, EnumString, IntoStaticStr)]
#[ExistingTypePath = "crate::schema::sql_types::UserBadge"]
pub enum UserBadge {
    /// No badge.
    #[db_rename = "DEFAULT"]
    #[serde(rename = "DEFAULT")]
    #[strum(serialize = "DEFAULT")]
    #[default]
    Default,

    /// Supporter badge.
    #[db_rename = "PRO"]
    #[serde(rename = "PRO")]
    #[strum(serialize = "PRO")]
    Pro,

    /// Early tester badge.
    #[db_rename = "TESTER"]
    #[serde(rename = "TESTER")]
    #[strum(serialize = "TESTER")]
    Tester,
}
