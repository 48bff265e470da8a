//! Contains constraints, enumerations, filters, pagination and other custom types.

mod constraints;
mod enums;
mod filtering;
mod pagination;
mod utilities;

pub use constraints::{
    ConstraintCategory, ConstraintViolation, TestPresetConstraints, UserConstraints,
};
pub use enums::{AuthProvider, CaretStyle, StoredToken, TestLanguage, TestType, UserBadge};
pub use filtering::{PresetOwner, TestPresetFilter};
pub use pagination::{Cursor, CursorPage, DEFAULT_TAKE, Edge, MAX_TAKE, PageInfo, PageRequest};
pub use utilities::{HasCreatedAt, calculate_average};
