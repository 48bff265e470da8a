//! Request types for HTTP handlers.

mod paginations;
mod paths;
mod settings;
mod test_presets;

pub use paginations::*;
pub use paths::*;
pub use settings::*;
pub use test_presets::*;
