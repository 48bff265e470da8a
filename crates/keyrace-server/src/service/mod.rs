//! Application state and dependency injection.

mod config;

use keyrace_postgres::PgClient;

pub use crate::service::config::{ServiceConfig, ServiceConfigBuilder};
pub use crate::{Error, Result};

/// Application state.
///
/// Used for the [`State`] extraction (dependency injection). Cloning is cheap:
/// the [`PgClient`] shares its pool.
///
/// [`State`]: axum::extract::State
#[must_use = "state does nothing unless you use it"]
#[derive(Clone)]
pub struct ServiceState {
    pg_client: PgClient,
}

impl ServiceState {
    /// Creates the state around an existing database client.
    pub fn new(pg_client: PgClient) -> Self {
        Self { pg_client }
    }

    /// Initializes application state from configuration.
    ///
    /// Connects to Postgres and applies pending migrations when enabled.
    pub async fn from_config(config: &ServiceConfig) -> Result<Self> {
        let service_state = Self {
            pg_client: config.connect_postgres().await?,
        };

        Ok(service_state)
    }

    /// Returns the database client.
    #[inline]
    pub fn pg_client(&self) -> &PgClient {
        &self.pg_client
    }
}

macro_rules! impl_di {
    ($($f:ident: $t:ty),+) => {$(
        impl axum::extract::FromRef<ServiceState> for $t {
            fn from_ref(state: &ServiceState) -> Self {
                state.$f.clone()
            }
        }
    )+};
}

impl_di!(pg_client: PgClient);
