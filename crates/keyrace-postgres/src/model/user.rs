//! User model for PostgreSQL database operations.

use diesel::prelude::*;
use jiff_diesel::Timestamp;
use uuid::Uuid;

use crate::schema::users;
use crate::types::{AuthProvider, UserBadge};

/// Registered user.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct User {
    /// Unique user identifier.
    pub id: Uuid,
    /// Unique public handle.
    pub username: String,
    /// Contact email, if one was shared.
    pub email: Option<String>,
    /// Avatar URL.
    pub image: Option<String>,
    /// Badge displayed next to the username.
    pub badge: UserBadge,
    /// Identity provider used to sign up.
    pub auth_provider: AuthProvider,
    /// Timestamp when the user was created.
    pub created_at: Timestamp,
    /// Timestamp when the user was last updated.
    pub updated_at: Timestamp,
}
