//! User settings request types.

use keyrace_postgres::model::NewUserSettings;
use keyrace_postgres::types::CaretStyle;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request payload for updating a user's settings.
#[must_use]
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSettings {
    /// Shape of the caret drawn in the typing area.
    pub caret_style: CaretStyle,
}

impl UpdateSettings {
    /// Converts this request into a [`NewUserSettings`] row for `user_id`.
    #[inline]
    pub fn into_model(self, user_id: Uuid) -> NewUserSettings {
        NewUserSettings {
            user_id,
            caret_style: self.caret_style,
        }
    }
}
