//! Authentication provider enumeration.

use diesel_derive_enum::DbEnum;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Identity provider a user signed up with.
///
/// Corresponds to the `AUTH_PROVIDER` PostgreSQL enum.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[derive(Serialize, Deserialize, DbEnum, Display, EnumIter, EnumString, IntoStaticStr)]
#[ExistingTypePath = "crate::schema::sql_types::AuthProvider"]
pub enum AuthProvider {
    /// Email sign-in.
    #[db_rename = "DEFAULT"]
    #[serde(rename = "DEFAULT")]
    #[strum(serialize = "DEFAULT")]
    #[default]
    Default,

    #[db_rename = "DISCORD"]
    #[serde(rename = "DISCORD")]
    #[strum(serialize = "DISCORD")]
    Discord,

    #[db_rename = "GITHUB"]
    #[serde(rename = "GITHUB")]
    #[strum(serialize = "GITHUB")]
    Github,

    #[db_rename = "GOOGLE"]
    #[serde(rename = "GOOGLE")]
    #[strum(serialize = "GOOGLE")]
    Google,
}

impl AuthProvider {
    /// Returns whether the account is backed by an OAuth provider.
    #[inline]
    pub fn is_oauth(self) -> bool {
        !matches!(self, AuthProvider::Default)
    }
}
