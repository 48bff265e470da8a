//! Test preset request types.

use keyrace_postgres::model::NewTestPreset;
use keyrace_postgres::types::{Cursor, TestLanguage, TestPresetFilter, TestType};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::Pagination;

/// Creator image given to presets created without an owner.
pub const DEFAULT_CREATOR_IMAGE: &str = "https://i.imgur.com/xuIzYtW.png";

/// Query parameters of the ownerless preset listing.
///
/// Every filter is an equality constraint; absent filters match everything.
#[must_use]
#[derive(Debug, Default, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TestPresetsQuery {
    /// Maximum number of presets to return (defaults to 20).
    pub take: Option<i64>,
    /// Number of matching presets to skip.
    pub skip: Option<i64>,
    /// Only return presets created strictly before this cursor.
    pub after: Option<Cursor>,
    /// Identifier of the last preset seen; continues through presets sharing
    /// the `after` timestamp.
    pub after_id: Option<Uuid>,

    /// Exact preset identifier.
    pub id: Option<Uuid>,
    /// Exact content reference.
    pub content: Option<String>,
    /// Language of the words.
    pub language: Option<TestLanguage>,
    /// Whether the test ends on time or on word count.
    #[serde(rename = "type")]
    pub test_type: Option<TestType>,
    /// Number of words.
    pub words: Option<i32>,
    /// Duration in seconds.
    pub time: Option<i32>,
    /// Whether punctuation is included.
    pub punctuated: Option<bool>,
}

impl TestPresetsQuery {
    /// Returns the pagination window of the query.
    pub fn pagination(&self) -> Pagination {
        Pagination {
            take: self.take,
            skip: self.skip,
            after: self.after,
            after_id: self.after_id,
        }
    }

    /// Converts the filters into an ownerless [`TestPresetFilter`].
    pub fn into_filter(self) -> TestPresetFilter {
        TestPresetFilter {
            id: self.id,
            content: self.content,
            language: self.language,
            test_type: self.test_type,
            words: self.words,
            time: self.time,
            punctuated: self.punctuated,
            ..TestPresetFilter::ownerless()
        }
    }
}

/// Request payload for creating a test preset.
///
/// # Example
///
/// ```json
/// {
///   "type": "WORDS",
///   "language": "ENGLISH",
///   "words": 25,
///   "time": 30,
///   "punctuated": false,
///   "content": "quotes/short"
/// }
/// ```
#[must_use]
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTestPreset {
    /// Whether the test ends on time or on word count.
    #[serde(rename = "type")]
    pub test_type: TestType,
    /// Language of the words.
    pub language: TestLanguage,
    /// Number of words (at least 1).
    #[validate(range(min = 1, message = "Words must be a positive number"))]
    pub words: i32,
    /// Duration in seconds (at least 1).
    #[validate(range(min = 1, message = "Time must be a positive number"))]
    pub time: i32,
    /// Whether punctuation is included.
    pub punctuated: bool,
    /// Reference to the text the test is drawn from.
    #[validate(length(min = 1, message = "Content must not be empty"))]
    pub content: String,
    /// Image shown next to the preset.
    #[validate(length(max = 2048))]
    pub creator_image: Option<String>,
}

impl CreateTestPreset {
    /// Converts into an ownerless [`NewTestPreset`] with the default creator image.
    pub fn into_ownerless_model(self) -> NewTestPreset {
        NewTestPreset {
            creator_image: Some(DEFAULT_CREATOR_IMAGE.to_owned()),
            ..self.into_model(None, None)
        }
    }

    /// Converts into a [`NewTestPreset`] owned by `user_id`.
    ///
    /// The creator image falls back to `user_image` when the request has none.
    pub fn into_owned_model(self, user_id: Uuid, user_image: Option<String>) -> NewTestPreset {
        self.into_model(Some(user_id), user_image)
    }

    fn into_model(self, user_id: Option<Uuid>, fallback_image: Option<String>) -> NewTestPreset {
        NewTestPreset {
            test_type: self.test_type,
            language: self.language,
            words: self.words,
            time: self.time,
            punctuated: self.punctuated,
            content: self.content,
            creator_image: self.creator_image.or(fallback_image),
            user_id,
        }
    }
}

/// Request payload for copying a preset into a user's collection.
#[must_use]
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CopyTestPreset {
    /// User receiving the copy.
    pub user_id: Uuid,
}

#[cfg(test)]
mod tests {
    use keyrace_postgres::types::PresetOwner;

    use super::*;

    fn request() -> CreateTestPreset {
        CreateTestPreset {
            test_type: TestType::Words,
            language: TestLanguage::English,
            words: 25,
            time: 30,
            punctuated: false,
            content: "quotes/short".into(),
            creator_image: None,
        }
    }

    #[test]
    fn ownerless_presets_get_default_image() {
        let model = request().into_ownerless_model();
        assert_eq!(model.user_id, None);
        assert_eq!(model.creator_image.as_deref(), Some(DEFAULT_CREATOR_IMAGE));
    }

    #[test]
    fn owned_presets_fall_back_to_user_image() {
        let user_id = Uuid::now_v7();
        let model = request().into_owned_model(user_id, Some("avatar.png".into()));
        assert_eq!(model.user_id, Some(user_id));
        assert_eq!(model.creator_image.as_deref(), Some("avatar.png"));

        let explicit = CreateTestPreset {
            creator_image: Some("custom.png".into()),
            ..request()
        };
        let model = explicit.into_owned_model(user_id, Some("avatar.png".into()));
        assert_eq!(model.creator_image.as_deref(), Some("custom.png"));
    }

    #[test]
    fn non_positive_numbers_fail_validation() {
        let invalid = CreateTestPreset {
            words: 0,
            time: -1,
            content: String::new(),
            ..request()
        };

        let errors = invalid.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("words"));
        assert!(fields.contains_key("time"));
        assert!(fields.contains_key("content"));
        assert!(request().validate().is_ok());
    }

    #[test]
    fn request_reads_type_field() {
        let json = r#"{"type":"TIME","language":"SPANISH","words":10,"time":60,
            "punctuated":true,"content":"c"}"#;
        let request: CreateTestPreset = serde_json::from_str(json).unwrap();
        assert_eq!(request.test_type, TestType::Time);
        assert_eq!(request.language, TestLanguage::Spanish);
    }

    #[test]
    fn query_filters_stay_ownerless() {
        let query = TestPresetsQuery {
            words: Some(25),
            take: Some(5),
            ..Default::default()
        };

        assert_eq!(query.pagination().take, Some(5));
        let filter = query.into_filter();
        assert_eq!(filter.owner, PresetOwner::Ownerless);
        assert_eq!(filter.words, Some(25));
    }
}
