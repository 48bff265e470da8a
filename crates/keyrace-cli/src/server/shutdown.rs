//! Graceful shutdown with a bounded drain period.

use std::process;
use std::time::Duration;

use tokio::signal::ctrl_c;
#[cfg(unix)]
use tokio::signal::unix::{SignalKind, signal};

use super::TRACING_TARGET_SHUTDOWN;

/// Waits for SIGINT (Ctrl+C) or, on Unix, SIGTERM.
async fn wait_for_signal() -> &'static str {
    let interrupt = async {
        match ctrl_c().await {
            Ok(()) => "SIGINT",
            Err(error) => {
                tracing::error!(
                    target: TRACING_TARGET_SHUTDOWN,
                    error = %error,
                    "Failed to install Ctrl+C handler"
                );
                std::future::pending().await
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal(SignalKind::terminate()) {
            Ok(mut terminate) => {
                terminate.recv().await;
                "SIGTERM"
            }
            Err(error) => {
                tracing::error!(
                    target: TRACING_TARGET_SHUTDOWN,
                    error = %error,
                    "Failed to install SIGTERM handler"
                );
                std::future::pending().await
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<&'static str>();

    tokio::select! {
        name = interrupt => name,
        name = terminate => name,
    }
}

/// Resolves once a shutdown signal arrives.
///
/// Axum then stops accepting connections and drains in-flight requests. If
/// draining takes longer than `shutdown_timeout` the process exits.
pub async fn shutdown_signal(shutdown_timeout: Duration) {
    let signal_name = wait_for_signal().await;

    tracing::info!(
        target: TRACING_TARGET_SHUTDOWN,
        signal = signal_name,
        timeout_secs = shutdown_timeout.as_secs(),
        "Graceful shutdown initiated"
    );

    tokio::spawn(async move {
        tokio::time::sleep(shutdown_timeout).await;
        tracing::warn!(
            target: TRACING_TARGET_SHUTDOWN,
            timeout_secs = shutdown_timeout.as_secs(),
            "In-flight requests did not finish in time, exiting"
        );
        process::exit(1);
    });
}
