//! User settings repository.

use std::future::Future;

use diesel::prelude::*;
use diesel::upsert::excluded;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::model::{NewUserSettings, UserSettings};
use crate::schema::user_settings;
use crate::{PgConnection, PgError, PgResult};

/// Repository for user settings database operations.
pub trait UserSettingsRepository {
    /// Finds the settings row of a user, if one was ever written.
    fn find_user_settings(
        &mut self,
        user_id: Uuid,
    ) -> impl Future<Output = PgResult<Option<UserSettings>>> + Send;

    /// Creates the settings row of a user or replaces its values.
    fn upsert_user_settings(
        &mut self,
        settings: NewUserSettings,
    ) -> impl Future<Output = PgResult<UserSettings>> + Send;
}

impl UserSettingsRepository for PgConnection {
    async fn find_user_settings(&mut self, user_id: Uuid) -> PgResult<Option<UserSettings>> {
        user_settings::table
            .filter(user_settings::user_id.eq(user_id))
            .select(UserSettings::as_select())
            .first(self)
            .await
            .optional()
            .map_err(PgError::from)
    }

    async fn upsert_user_settings(&mut self, settings: NewUserSettings) -> PgResult<UserSettings> {
        diesel::insert_into(user_settings::table)
            .values(&settings)
            .on_conflict(user_settings::user_id)
            .do_update()
            .set(user_settings::caret_style.eq(excluded(user_settings::caret_style)))
            .returning(UserSettings::as_returning())
            .get_result(self)
            .await
            .map_err(PgError::from)
    }
}
