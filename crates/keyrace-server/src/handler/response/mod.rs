//! Response types for HTTP handlers.

mod errors;
mod payloads;
mod settings;
mod test_presets;
mod users;

pub use errors::*;
pub use payloads::*;
pub use settings::*;
pub use test_presets::*;
pub use users::*;
