//! Request extractors with structured rejections.
//!
//! - [`Json`], [`Path`] and [`Query`] wrap their axum counterparts and reject
//!   with the server's [`Error`] instead of plain-text bodies.
//! - [`SessionCookie`] guards write operations on the presence of a `session` cookie.
//! - [`PgPool`] checks a database connection out of the pool.
//!
//! [`Error`]: crate::handler::Error

mod pg_connection;
pub mod reject;
mod session;

pub use crate::extract::pg_connection::PgPool;
pub use crate::extract::reject::{Json, Path, Query};
pub use crate::extract::session::{SESSION_COOKIE, SessionCookie, has_session_cookie};
