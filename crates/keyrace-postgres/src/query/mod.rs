//! Database query repositories.
//!
//! Every repository trait is implemented on [`PgConnection`], so a [`PgConn`]
//! checked out of the pool exposes all of them through `Deref`.
//!
//! [`PgConnection`]: crate::PgConnection
//! [`PgConn`]: crate::PgConn

pub mod copy;
pub mod pagination;
pub mod test_preset;
pub mod user;
pub mod user_settings;

pub use copy::{PresetCopyStore, copy_preset};
pub use pagination::{PageSource, paginate};
pub use test_preset::TestPresetRepository;
pub use user::UserRepository;
pub use user_settings::UserSettingsRepository;
