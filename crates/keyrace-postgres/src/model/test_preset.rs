//! Test preset model for PostgreSQL database operations.

use diesel::prelude::*;
use jiff_diesel::Timestamp;
use uuid::Uuid;

use crate::schema::test_presets;
use crate::types::{HasCreatedAt, TestLanguage, TestType};

/// Saved typing-test configuration.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = test_presets)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TestPreset {
    /// Unique preset identifier.
    pub id: Uuid,
    /// Whether the test is bounded by time or by word count.
    pub test_type: TestType,
    /// Word list language.
    pub language: TestLanguage,
    /// Number of words for word-bounded tests.
    pub words: i32,
    /// Duration in seconds for time-bounded tests.
    pub time: i32,
    /// Whether punctuation is mixed into the words.
    pub punctuated: bool,
    /// Reference to the word source.
    pub content: String,
    /// Avatar shown next to the preset.
    pub creator_image: Option<String>,
    /// Owning user, `None` for global presets.
    pub user_id: Option<Uuid>,
    /// Timestamp when the preset was created.
    pub created_at: Timestamp,
    /// Timestamp when the preset was last updated.
    pub updated_at: Timestamp,
}

/// Data for creating a new test preset.
#[derive(Debug, Clone, Default, PartialEq, Insertable)]
#[diesel(table_name = test_presets)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewTestPreset {
    pub test_type: TestType,
    pub language: TestLanguage,
    pub words: i32,
    pub time: i32,
    pub punctuated: bool,
    pub content: String,
    pub creator_image: Option<String>,
    pub user_id: Option<Uuid>,
}

impl NewTestPreset {
    /// Copies every test parameter of `source` into a preset owned by `user_id`.
    pub fn copy_of(source: &TestPreset, user_id: Uuid) -> Self {
        Self {
            test_type: source.test_type,
            language: source.language,
            words: source.words,
            time: source.time,
            punctuated: source.punctuated,
            content: source.content.clone(),
            creator_image: source.creator_image.clone(),
            user_id: Some(user_id),
        }
    }
}

impl HasCreatedAt for TestPreset {
    fn created_at(&self) -> jiff::Timestamp {
        self.created_at.into()
    }
}
