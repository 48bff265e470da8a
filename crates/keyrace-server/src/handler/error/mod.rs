//! [`Error`], [`ErrorKind`], [`Result`] and the mutation payload error [`MutationError`].

mod http_error;
mod mutation_error;
mod pg_constraints;
mod pg_error;

pub use http_error::{Error, ErrorKind, Result};
pub use mutation_error::{MutationError, MutationResult};
