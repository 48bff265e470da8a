//! Test preset handlers.
//!
//! Reads return the preset DTOs directly and fail with the HTTP [`Error`].
//! Mutations answer with a [`TestPresetPayload`] whose `errors` describe what
//! went wrong; callers check `errors` before trusting `testPreset`.
//!
//! [`Error`]: crate::handler::Error

use aide::axum::ApiRouter;
use aide::transform::TransformOperation;
use axum::http::StatusCode;
use keyrace_postgres::query::TestPresetRepository;
use validator::Validate;

use crate::extract::{Json, Path, PgPool, Query, SessionCookie};
use crate::handler::request::{
    CopyTestPreset, CreateTestPreset, PresetPathParams, TestPresetsQuery,
};
use crate::handler::response::{
    Creator, ErrorResponse, FieldError, TestPreset, TestPresetPayload, TestPresets,
    TestPresetsPage,
};
use crate::handler::{ErrorKind, MutationError, MutationResult, Result};
use crate::service::ServiceState;

/// Tracing target for test preset operations.
const TRACING_TARGET: &str = "keyrace_server::handler::test_presets";

/// Lists ownerless presets matching the query filters, newest first.
#[tracing::instrument(skip_all)]
async fn test_presets(
    Query(query): Query<TestPresetsQuery>,
    PgPool(mut conn): PgPool,
) -> Result<(StatusCode, Json<TestPresetsPage>)> {
    let request = query.pagination().into();
    let page = conn
        .cursor_list_test_presets(query.into_filter(), request)
        .await?;

    tracing::debug!(
        target: TRACING_TARGET,
        count = page.count,
        has_more = page.page_info.has_more,
        "Test presets listed",
    );

    Ok((StatusCode::OK, Json(TestPresetsPage::from_cursor_page(page))))
}

fn test_presets_docs(op: TransformOperation) -> TransformOperation {
    op.summary("List test presets")
        .description(
            "Returns a page of presets that belong to no user. Filters are equality \
             constraints; `take` is clamped to 1..=100 and `after` continues from a cursor. \
             Pass the last preset's id as `afterId` to keep presets sharing its timestamp.",
        )
        .response::<200, Json<TestPresetsPage>>()
        .response::<400, Json<ErrorResponse>>()
}

/// Lists every preset, newest first.
#[tracing::instrument(skip_all)]
async fn test_presets_all(PgPool(mut conn): PgPool) -> Result<(StatusCode, Json<TestPresets>)> {
    let presets = conn.list_all_test_presets().await?;

    tracing::debug!(
        target: TRACING_TARGET,
        count = presets.len(),
        "All test presets listed",
    );

    Ok((StatusCode::OK, Json(TestPreset::from_models(presets))))
}

fn test_presets_all_docs(op: TransformOperation) -> TransformOperation {
    op.summary("List all test presets")
        .description("Returns every preset regardless of owner, without pagination.")
        .response::<200, Json<TestPresets>>()
}

/// Retrieves a single preset.
#[tracing::instrument(skip_all, fields(preset_id = %path_params.preset_id))]
async fn test_preset(
    Path(path_params): Path<PresetPathParams>,
    PgPool(mut conn): PgPool,
) -> Result<(StatusCode, Json<TestPreset>)> {
    let Some(preset) = conn.find_test_preset_by_id(path_params.preset_id).await? else {
        return Err(ErrorKind::NotFound
            .with_message(format!("Test preset not found: {}", path_params.preset_id))
            .with_resource("preset"));
    };

    Ok((StatusCode::OK, Json(TestPreset::from_model(preset))))
}

fn test_preset_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Get test preset")
        .description("Returns a single preset by its identifier.")
        .response::<200, Json<TestPreset>>()
        .response::<400, Json<ErrorResponse>>()
        .response::<404, Json<ErrorResponse>>()
}

/// Retrieves the user who owns a preset.
#[tracing::instrument(skip_all, fields(preset_id = %path_params.preset_id))]
async fn preset_creator(
    Path(path_params): Path<PresetPathParams>,
    PgPool(mut conn): PgPool,
) -> Result<(StatusCode, Json<Creator>)> {
    let Some(creator) = conn
        .find_test_preset_creator(path_params.preset_id)
        .await?
    else {
        return Err(ErrorKind::NotFound
            .with_message("Preset does not exist or has no creator")
            .with_resource("preset"));
    };

    Ok((StatusCode::OK, Json(Creator::from_model(creator))))
}

fn preset_creator_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Get preset creator")
        .description(
            "Returns the owner of a preset with its badge and auth provider. \
             Global presets have no creator.",
        )
        .response::<200, Json<Creator>>()
        .response::<400, Json<ErrorResponse>>()
        .response::<404, Json<ErrorResponse>>()
}

/// Creates a global preset that belongs to no user.
#[tracing::instrument(skip_all)]
async fn create_test_preset(
    PgPool(mut conn): PgPool,
    Json(request): Json<CreateTestPreset>,
) -> MutationResult<(StatusCode, Json<TestPresetPayload>)> {
    request.validate()?;

    let preset = conn
        .create_test_preset(request.into_ownerless_model())
        .await
        .map_err(MutationError::from_store)?;

    tracing::info!(
        target: TRACING_TARGET,
        preset_id = %preset.id,
        "Test preset created",
    );

    let payload = TestPresetPayload::success(TestPreset::from_model(preset));
    Ok((StatusCode::CREATED, Json(payload)))
}

fn create_test_preset_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Create test preset")
        .description("Creates a global preset with the default creator image.")
        .response::<201, Json<TestPresetPayload>>()
        .response::<400, Json<TestPresetPayload>>()
        .response::<500, Json<TestPresetPayload>>()
}

/// Copies a preset into a user's collection.
///
/// Nothing is written when the source preset does not exist.
#[tracing::instrument(
    skip_all,
    fields(
        preset_id = %path_params.preset_id,
        user_id = %request.user_id,
    )
)]
async fn copy_preset_to_user(
    _session: SessionCookie,
    Path(path_params): Path<PresetPathParams>,
    PgPool(mut conn): PgPool,
    Json(request): Json<CopyTestPreset>,
) -> MutationResult<(StatusCode, Json<TestPresetPayload>)> {
    let copy = conn
        .copy_test_preset(path_params.preset_id, request.user_id)
        .await
        .map_err(MutationError::from_store)?;

    let Some(preset) = copy else {
        tracing::debug!(target: TRACING_TARGET, "Source preset not found");
        return Err(MutationError::NotFound(FieldError::preset_not_found()));
    };

    tracing::info!(
        target: TRACING_TARGET,
        copy_id = %preset.id,
        "Test preset copied",
    );

    let payload = TestPresetPayload::success(TestPreset::from_model(preset));
    Ok((StatusCode::CREATED, Json(payload)))
}

fn copy_preset_to_user_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Copy test preset")
        .description(
            "Copies every parameter of a preset into a new preset owned by the given user. \
             Requires a session cookie.",
        )
        .response::<201, Json<TestPresetPayload>>()
        .response::<401, Json<ErrorResponse>>()
        .response::<404, Json<TestPresetPayload>>()
        .response::<500, Json<TestPresetPayload>>()
}

/// Returns a [`Router`] with all test preset routes.
///
/// [`Router`]: axum::routing::Router
pub fn routes() -> ApiRouter<ServiceState> {
    use aide::axum::routing::*;

    ApiRouter::new()
        .api_route(
            "/test-presets",
            get_with(test_presets, test_presets_docs)
                .post_with(create_test_preset, create_test_preset_docs),
        )
        .api_route(
            "/test-presets/all",
            get_with(test_presets_all, test_presets_all_docs),
        )
        .api_route(
            "/test-presets/{presetId}",
            get_with(test_preset, test_preset_docs),
        )
        .api_route(
            "/test-presets/{presetId}/creator",
            get_with(preset_creator, preset_creator_docs),
        )
        .api_route(
            "/test-presets/{presetId}/copy",
            post_with(copy_preset_to_user, copy_preset_to_user_docs),
        )
        .with_path_items(|item| item.tag("Test presets"))
}
