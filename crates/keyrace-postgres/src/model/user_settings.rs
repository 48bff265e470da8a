//! User settings model.

use diesel::prelude::*;
use jiff_diesel::Timestamp;
use uuid::Uuid;

use crate::schema::user_settings;
use crate::types::CaretStyle;

/// Typing preferences of a user.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = user_settings)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UserSettings {
    pub user_id: Uuid,
    pub caret_style: CaretStyle,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Data for creating or replacing user settings.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = user_settings)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewUserSettings {
    pub user_id: Uuid,
    pub caret_style: CaretStyle,
}
