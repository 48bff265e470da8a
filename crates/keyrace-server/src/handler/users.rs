//! User-scoped handlers: a user's presets and typing settings.

use aide::axum::ApiRouter;
use aide::transform::TransformOperation;
use axum::http::StatusCode;
use keyrace_postgres::model::User;
use keyrace_postgres::query::{TestPresetRepository, UserRepository, UserSettingsRepository};
use keyrace_postgres::types::TestPresetFilter;
use keyrace_postgres::PgConn;
use validator::Validate;

use crate::extract::{Json, Path, PgPool, Query, SessionCookie};
use crate::handler::request::{CreateTestPreset, Pagination, UpdateSettings, UserPathParams};
use crate::handler::response::{
    ErrorResponse, FieldError, Settings, TestPreset, TestPresetPayload, TestPresetsPage,
};
use crate::handler::{Error, ErrorKind, MutationError, MutationResult, Result};
use crate::service::ServiceState;

/// Tracing target for user-scoped operations.
const TRACING_TARGET: &str = "keyrace_server::handler::users";

/// Looks up a user by username, failing with a 404 naming the user resource.
async fn find_user(conn: &mut PgConn, username: &str) -> Result<User> {
    let user = conn.find_user_by_username(username).await?;
    user.ok_or_else(|| user_not_found(username))
}

fn user_not_found(username: &str) -> Error<'static> {
    ErrorKind::NotFound
        .with_message(format!("User not found: {username}"))
        .with_resource("user")
}

/// Lists presets owned by a user, newest first.
#[tracing::instrument(skip_all, fields(username = %path_params.username))]
async fn user_test_presets(
    Path(path_params): Path<UserPathParams>,
    Query(pagination): Query<Pagination>,
    PgPool(mut conn): PgPool,
) -> Result<(StatusCode, Json<TestPresetsPage>)> {
    let filter = TestPresetFilter::owned_by_username(path_params.username);
    let page = conn
        .cursor_list_test_presets(filter, pagination.into())
        .await?;

    tracing::debug!(
        target: TRACING_TARGET,
        count = page.count,
        has_more = page.page_info.has_more,
        "User test presets listed",
    );

    Ok((StatusCode::OK, Json(TestPresetsPage::from_cursor_page(page))))
}

fn user_test_presets_docs(op: TransformOperation) -> TransformOperation {
    op.summary("List user test presets")
        .description(
            "Returns a page of presets owned by the user. An unknown username yields an \
             empty page.",
        )
        .response::<200, Json<TestPresetsPage>>()
        .response::<400, Json<ErrorResponse>>()
}

/// Creates a preset owned by a user.
///
/// The creator image falls back to the user's avatar.
#[tracing::instrument(skip_all, fields(username = %path_params.username))]
async fn create_test_preset_user(
    _session: SessionCookie,
    Path(path_params): Path<UserPathParams>,
    PgPool(mut conn): PgPool,
    Json(request): Json<CreateTestPreset>,
) -> MutationResult<(StatusCode, Json<TestPresetPayload>)> {
    request.validate()?;

    let Some(user) = conn.find_user_by_username(&path_params.username).await? else {
        tracing::debug!(target: TRACING_TARGET, "User not found");
        return Err(MutationError::NotFound(FieldError::username_not_found()));
    };

    let new_preset = request.into_owned_model(user.id, user.image);
    let preset = conn
        .create_test_preset(new_preset)
        .await
        .map_err(MutationError::from_store)?;

    tracing::info!(
        target: TRACING_TARGET,
        preset_id = %preset.id,
        user_id = %user.id,
        "User test preset created",
    );

    let payload = TestPresetPayload::success(TestPreset::from_model(preset));
    Ok((StatusCode::CREATED, Json(payload)))
}

fn create_test_preset_user_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Create user test preset")
        .description("Creates a preset owned by the user. Requires a session cookie.")
        .response::<201, Json<TestPresetPayload>>()
        .response::<400, Json<TestPresetPayload>>()
        .response::<401, Json<ErrorResponse>>()
        .response::<404, Json<TestPresetPayload>>()
        .response::<500, Json<TestPresetPayload>>()
}

/// Retrieves a user's typing settings.
#[tracing::instrument(skip_all, fields(username = %path_params.username))]
async fn user_settings(
    Path(path_params): Path<UserPathParams>,
    PgPool(mut conn): PgPool,
) -> Result<(StatusCode, Json<Settings>)> {
    let user = find_user(&mut conn, &path_params.username).await?;
    let settings = conn.find_user_settings(user.id).await?;

    Ok((StatusCode::OK, Json(Settings::from_model(settings))))
}

fn user_settings_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Get user settings")
        .description("Returns the user's settings. The caret style defaults to `LINE`.")
        .response::<200, Json<Settings>>()
        .response::<404, Json<ErrorResponse>>()
}

/// Updates a user's typing settings.
#[tracing::instrument(skip_all, fields(username = %path_params.username))]
async fn update_user_settings(
    _session: SessionCookie,
    Path(path_params): Path<UserPathParams>,
    PgPool(mut conn): PgPool,
    Json(request): Json<UpdateSettings>,
) -> Result<(StatusCode, Json<Settings>)> {
    let user = find_user(&mut conn, &path_params.username).await?;
    let settings = conn.upsert_user_settings(request.into_model(user.id)).await?;

    tracing::info!(
        target: TRACING_TARGET,
        caret_style = %settings.caret_style,
        "User settings updated",
    );

    Ok((StatusCode::OK, Json(Settings::from_model(Some(settings)))))
}

fn update_user_settings_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Update user settings")
        .description("Creates or replaces the user's settings. Requires a session cookie.")
        .response::<200, Json<Settings>>()
        .response::<400, Json<ErrorResponse>>()
        .response::<401, Json<ErrorResponse>>()
        .response::<404, Json<ErrorResponse>>()
}

/// Returns a [`Router`] with all user-scoped routes.
///
/// [`Router`]: axum::routing::Router
pub fn routes() -> ApiRouter<ServiceState> {
    use aide::axum::routing::*;

    ApiRouter::new()
        .api_route(
            "/users/{username}/test-presets",
            get_with(user_test_presets, user_test_presets_docs)
                .post_with(create_test_preset_user, create_test_preset_user_docs),
        )
        .api_route(
            "/users/{username}/settings",
            get_with(user_settings, user_settings_docs)
                .patch_with(update_user_settings, update_user_settings_docs),
        )
        .with_path_items(|item| item.tag("Users"))
}
