//! Filters for test preset listings.

use uuid::Uuid;

use super::{TestLanguage, TestType};

/// Ownership constraint of a preset listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PresetOwner {
    /// Presets regardless of owner.
    #[default]
    Any,
    /// Global presets that belong to no user.
    Ownerless,
    /// Presets owned by the user with this username.
    Username(String),
}

/// Equality constraints applied to test preset listings.
///
/// Unset fields do not constrain the result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TestPresetFilter {
    pub owner: PresetOwner,
    pub id: Option<Uuid>,
    pub content: Option<String>,
    pub language: Option<TestLanguage>,
    pub test_type: Option<TestType>,
    pub words: Option<i32>,
    pub time: Option<i32>,
    pub punctuated: Option<bool>,
}

impl TestPresetFilter {
    /// Global presets that belong to no user.
    pub fn ownerless() -> Self {
        Self {
            owner: PresetOwner::Ownerless,
            ..Self::default()
        }
    }

    /// Presets owned by the user with the given username.
    pub fn owned_by_username(username: impl Into<String>) -> Self {
        Self {
            owner: PresetOwner::Username(username.into()),
            ..Self::default()
        }
    }
}
