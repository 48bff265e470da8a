//! Copying presets between owners.
//!
//! A copy is a lookup followed by an insert. The insert only happens when the
//! lookup finds the source, so a missing source leaves the store untouched.

use std::future::Future;

use uuid::Uuid;

use crate::model::{NewTestPreset, TestPreset};
use crate::{PgResult, TRACING_TARGET_QUERY};

/// A store presets can be copied within.
pub trait PresetCopyStore {
    /// Loads the preset to copy from.
    fn load_copy_source(
        &mut self,
        preset_id: Uuid,
    ) -> impl Future<Output = PgResult<Option<TestPreset>>> + Send;

    /// Persists the copy.
    fn insert_copy(
        &mut self,
        copy: NewTestPreset,
    ) -> impl Future<Output = PgResult<TestPreset>> + Send;
}

/// Copies the preset `preset_id` into a new preset owned by `user_id`.
///
/// Returns `None` without writing when the source does not exist.
pub async fn copy_preset<S>(
    store: &mut S,
    preset_id: Uuid,
    user_id: Uuid,
) -> PgResult<Option<TestPreset>>
where
    S: PresetCopyStore + ?Sized,
{
    let Some(source) = store.load_copy_source(preset_id).await? else {
        tracing::debug!(
            target: TRACING_TARGET_QUERY,
            %preset_id,
            "Copy source does not exist, nothing written"
        );
        return Ok(None);
    };

    let copy = store
        .insert_copy(NewTestPreset::copy_of(&source, user_id))
        .await?;

    Ok(Some(copy))
}
