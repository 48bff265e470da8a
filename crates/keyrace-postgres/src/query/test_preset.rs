//! Test presets repository.

use std::future::Future;

use diesel::pg::Pg;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use super::copy::{PresetCopyStore, copy_preset};
use super::pagination::{PageSource, paginate};
use crate::model::{NewTestPreset, TestPreset, User};
use crate::schema::{test_presets, users};
use crate::types::{Cursor, CursorPage, PageRequest, PresetOwner, TestPresetFilter};
use crate::{PgConnection, PgError, PgResult};

/// Repository for test preset database operations.
pub trait TestPresetRepository {
    /// Creates a new test preset.
    fn create_test_preset(
        &mut self,
        new_preset: NewTestPreset,
    ) -> impl Future<Output = PgResult<TestPreset>> + Send;

    /// Finds a test preset by its unique identifier.
    fn find_test_preset_by_id(
        &mut self,
        preset_id: Uuid,
    ) -> impl Future<Output = PgResult<Option<TestPreset>>> + Send;

    /// Lists every test preset, newest first.
    fn list_all_test_presets(&mut self) -> impl Future<Output = PgResult<Vec<TestPreset>>> + Send;

    /// Lists test presets matching `filter` with cursor pagination.
    fn cursor_list_test_presets(
        &mut self,
        filter: TestPresetFilter,
        request: PageRequest,
    ) -> impl Future<Output = PgResult<CursorPage<TestPreset>>> + Send;

    /// Copies a preset into a new preset owned by `user_id`.
    ///
    /// Returns `None` without writing anything when the source does not exist.
    fn copy_test_preset(
        &mut self,
        preset_id: Uuid,
        user_id: Uuid,
    ) -> impl Future<Output = PgResult<Option<TestPreset>>> + Send;

    /// Finds the user owning a preset.
    ///
    /// Returns `None` when the preset does not exist or belongs to no user.
    fn find_test_preset_creator(
        &mut self,
        preset_id: Uuid,
    ) -> impl Future<Output = PgResult<Option<User>>> + Send;
}

/// Test presets matching `filter`, without ordering or windowing.
fn filtered_test_presets(filter: &TestPresetFilter) -> test_presets::BoxedQuery<'static, Pg> {
    use test_presets::dsl;

    let mut query = test_presets::table.into_boxed();

    query = match &filter.owner {
        PresetOwner::Any => query,
        PresetOwner::Ownerless => query.filter(dsl::user_id.is_null()),
        PresetOwner::Username(username) => query.filter(
            dsl::user_id.eq_any(
                users::table
                    .filter(users::username.eq(username.clone()))
                    .select(users::id.nullable()),
            ),
        ),
    };

    if let Some(id) = filter.id {
        query = query.filter(dsl::id.eq(id));
    }
    if let Some(content) = &filter.content {
        query = query.filter(dsl::content.eq(content.clone()));
    }
    if let Some(language) = filter.language {
        query = query.filter(dsl::language.eq(language));
    }
    if let Some(test_type) = filter.test_type {
        query = query.filter(dsl::test_type.eq(test_type));
    }
    if let Some(words) = filter.words {
        query = query.filter(dsl::words.eq(words));
    }
    if let Some(time) = filter.time {
        query = query.filter(dsl::time.eq(time));
    }
    if let Some(punctuated) = filter.punctuated {
        query = query.filter(dsl::punctuated.eq(punctuated));
    }

    query
}

impl PageSource<TestPresetFilter> for PgConnection {
    type Record = TestPreset;

    async fn fetch_window(
        &mut self,
        filter: &TestPresetFilter,
        request: &PageRequest,
    ) -> PgResult<Vec<TestPreset>> {
        use test_presets::dsl;

        let mut query = filtered_test_presets(filter);
        if let Some((after, after_id)) = request.after_key() {
            let at = || jiff_diesel::Timestamp::from(after.timestamp());
            query = query.filter(
                dsl::created_at
                    .lt(at())
                    .or(dsl::created_at.eq(at()).and(dsl::id.lt(after_id))),
            );
        } else if let Some(after) = request.after {
            let after = jiff_diesel::Timestamp::from(after.timestamp());
            query = query.filter(dsl::created_at.lt(after));
        }

        query
            .order((dsl::created_at.desc(), dsl::id.desc()))
            .offset(request.skip)
            .limit(request.take)
            .select(TestPreset::as_select())
            .load(self)
            .await
            .map_err(PgError::from)
    }

    async fn has_older_than(&mut self, filter: &TestPresetFilter, cursor: Cursor) -> PgResult<bool> {
        use test_presets::dsl;

        let cursor = jiff_diesel::Timestamp::from(cursor.timestamp());
        let older = filtered_test_presets(filter)
            .filter(dsl::created_at.lt(cursor))
            .select(dsl::id)
            .first::<Uuid>(self)
            .await
            .optional()
            .map_err(PgError::from)?;

        Ok(older.is_some())
    }
}

impl PresetCopyStore for PgConnection {
    async fn load_copy_source(&mut self, preset_id: Uuid) -> PgResult<Option<TestPreset>> {
        self.find_test_preset_by_id(preset_id).await
    }

    async fn insert_copy(&mut self, copy: NewTestPreset) -> PgResult<TestPreset> {
        self.create_test_preset(copy).await
    }
}

impl TestPresetRepository for PgConnection {
    async fn create_test_preset(&mut self, new_preset: NewTestPreset) -> PgResult<TestPreset> {
        diesel::insert_into(test_presets::table)
            .values(&new_preset)
            .returning(TestPreset::as_returning())
            .get_result(self)
            .await
            .map_err(PgError::from)
    }

    async fn find_test_preset_by_id(&mut self, preset_id: Uuid) -> PgResult<Option<TestPreset>> {
        use test_presets::dsl;

        test_presets::table
            .filter(dsl::id.eq(preset_id))
            .select(TestPreset::as_select())
            .first(self)
            .await
            .optional()
            .map_err(PgError::from)
    }

    async fn list_all_test_presets(&mut self) -> PgResult<Vec<TestPreset>> {
        use test_presets::dsl;

        test_presets::table
            .order((dsl::created_at.desc(), dsl::id.desc()))
            .select(TestPreset::as_select())
            .load(self)
            .await
            .map_err(PgError::from)
    }

    async fn cursor_list_test_presets(
        &mut self,
        filter: TestPresetFilter,
        request: PageRequest,
    ) -> PgResult<CursorPage<TestPreset>> {
        paginate(self, &filter, request).await
    }

    async fn copy_test_preset(
        &mut self,
        preset_id: Uuid,
        user_id: Uuid,
    ) -> PgResult<Option<TestPreset>> {
        copy_preset(self, preset_id, user_id).await
    }

    async fn find_test_preset_creator(&mut self, preset_id: Uuid) -> PgResult<Option<User>> {
        test_presets::table
            .inner_join(users::table.on(users::id.nullable().eq(test_presets::user_id)))
            .filter(test_presets::id.eq(preset_id))
            .select(User::as_select())
            .first(self)
            .await
            .optional()
            .map_err(PgError::from)
    }
}
