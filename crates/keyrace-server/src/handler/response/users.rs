//! User response types.

use jiff::Timestamp;
use keyrace_postgres::model;
use keyrace_postgres::types::{AuthProvider, UserBadge};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Public profile of the user who created a preset.
#[must_use]
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Creator {
    /// ID of the user.
    pub id: Uuid,
    /// Unique username.
    pub username: String,
    /// Avatar URL.
    pub image: Option<String>,
    /// Badge shown next to the username.
    pub badge: UserBadge,
    /// Provider the account signed up with.
    pub auth_provider: AuthProvider,
    /// Timestamp when the account was created.
    pub created_at: Timestamp,
}

impl Creator {
    /// Creates a creator response from a database model.
    pub fn from_model(user: model::User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            image: user.image,
            badge: user.badge,
            auth_provider: user.auth_provider,
            created_at: user.created_at.into(),
        }
    }
}
