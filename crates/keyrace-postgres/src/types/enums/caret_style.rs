//! Caret style enumeration for typing preferences.

use diesel_derive_enum::DbEnum;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Shape of the caret drawn in the typing area.
///
/// Corresponds to the `CARET_STYLE` PostgreSQL enum.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[derive(Serialize, Deserialize, DbEnum, Display, EnumIter, EnumString, IntoStaticStr)]
#[ExistingTypePath = "crate::schema::sql_types::CaretStyle"]
pub enum CaretStyle {
    /// Thin vertical bar before the next character.
    #[db_rename = "LINE"]
    #[serde(rename = "LINE")]
    #[strum(serialize = "LINE")]
    #[default]
    Line,

    /// Filled block over the next character.
    #[db_rename = "BLOCK"]
    #[serde(rename = "BLOCK")]
    #[strum(serialize = "BLOCK")]
    Block,

    /// Outlined block over the next character.
    #[db_rename = "HOLLOW"]
    #[serde(rename = "HOLLOW")]
    #[strum(serialize = "HOLLOW")]
    Hollow,
}
