//! Database models: queryable rows, insertable records and changesets.

mod test_preset;
mod user;
mod user_settings;

pub use test_preset::{NewTestPreset, TestPreset};
pub use user::User;
pub use user_settings::{NewUserSettings, UserSettings};
