//! Users repository.

use std::future::Future;

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::model::User;
use crate::schema::users;
use crate::{PgConnection, PgError, PgResult};

/// Repository for user database operations.
///
/// Users are provisioned by the sign-in flow; the service only reads them.
pub trait UserRepository {
    /// Finds a user by username.
    fn find_user_by_username(
        &mut self,
        username: &str,
    ) -> impl Future<Output = PgResult<Option<User>>> + Send;
}

impl UserRepository for PgConnection {
    async fn find_user_by_username(&mut self, username: &str) -> PgResult<Option<User>> {
        users::table
            .filter(users::username.eq(username))
            .select(User::as_select())
            .first(self)
            .await
            .optional()
            .map_err(PgError::from)
    }
}
