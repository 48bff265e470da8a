//! Embedded migration runner.

use std::time::{Duration, Instant};

use diesel_async::async_connection_wrapper::AsyncConnectionWrapper;
use diesel_migrations::MigrationHarness;
use tokio::task::spawn_blocking;

use super::custom_hooks;
use crate::{MIGRATIONS, PgClient, PgError, PgResult, PooledConnection, TRACING_TARGET_MIGRATION};

/// Outcome of a migration run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationResult {
    /// Versions applied by this run, in application order.
    pub applied_versions: Vec<String>,
    /// Wall-clock time spent applying migrations.
    pub duration: Duration,
}

impl MigrationResult {
    /// Returns the number of migrations applied by this run.
    #[inline]
    pub fn applied_migrations(&self) -> usize {
        self.applied_versions.len()
    }

    /// Returns true if the schema was already up to date.
    #[inline]
    pub fn is_up_to_date(&self) -> bool {
        self.applied_versions.is_empty()
    }
}

/// Applies every embedded migration that has not been applied yet.
///
/// Diesel's migration harness is synchronous, so the pooled connection is
/// wrapped and driven from a blocking task.
#[tracing::instrument(skip(pg), target = TRACING_TARGET_MIGRATION)]
pub async fn run_pending_migrations(pg: &PgClient) -> PgResult<MigrationResult> {
    let start = Instant::now();
    let mut conn = pg.get_pooled_connection().await?;
    custom_hooks::pre_migrate(&mut conn);

    let mut conn: AsyncConnectionWrapper<PooledConnection> = conn.into();
    let result = spawn_blocking(move || {
        conn.run_pending_migrations(MIGRATIONS).map(|versions| {
            versions
                .into_iter()
                .map(|version| version.to_string())
                .collect::<Vec<_>>()
        })
    })
    .await;

    let duration = start.elapsed();
    let applied_versions = result
        .map_err(|err| {
            tracing::error!(
                target: TRACING_TARGET_MIGRATION,
                duration = ?duration,
                error = %err,
                "Migration task panicked"
            );
            PgError::Migration(err.into())
        })?
        .map_err(|err| {
            tracing::error!(
                target: TRACING_TARGET_MIGRATION,
                duration = ?duration,
                error = %err,
                "Database migration failed"
            );
            PgError::Migration(err)
        })?;

    tracing::info!(
        target: TRACING_TARGET_MIGRATION,
        duration = ?duration,
        migrations_count = applied_versions.len(),
        "Database migrations applied"
    );

    Ok(MigrationResult {
        applied_versions,
        duration,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_run_is_up_to_date() {
        let result = MigrationResult {
            applied_versions: vec![],
            duration: Duration::from_millis(3),
        };
        assert!(result.is_up_to_date());
        assert_eq!(result.applied_migrations(), 0);
    }
}
