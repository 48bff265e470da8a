//! Test preset response types.

use jiff::Timestamp;
use keyrace_postgres::model;
use keyrace_postgres::types::{Cursor, CursorPage, PageInfo, TestLanguage, TestType};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Saved typing-test configuration.
#[must_use]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TestPreset {
    /// ID of the preset.
    pub id: Uuid,
    /// Whether the test is bounded by time or by word count.
    #[serde(rename = "type")]
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
    /// Owning user, absent for global presets.
    pub user_id: Option<Uuid>,
    /// Timestamp when the preset was created.
    pub created_at: Timestamp,
    /// Timestamp when the preset was last updated.
    pub updated_at: Timestamp,
}

impl TestPreset {
    /// Creates a preset response from a database model.
    pub fn from_model(preset: model::TestPreset) -> Self {
        Self {
            id: preset.id,
            test_type: preset.test_type,
            language: preset.language,
            words: preset.words,
            time: preset.time,
            punctuated: preset.punctuated,
            content: preset.content,
            creator_image: preset.creator_image,
            user_id: preset.user_id,
            created_at: preset.created_at.into(),
            updated_at: preset.updated_at.into(),
        }
    }

    /// Creates preset responses from database models.
    pub fn from_models(models: Vec<model::TestPreset>) -> Vec<Self> {
        models.into_iter().map(Self::from_model).collect()
    }
}

/// Response for unpaginated preset listings.
pub type TestPresets = Vec<TestPreset>;

/// A preset together with its pagination cursor.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct TestPresetEdge {
    /// Creation timestamp of the node.
    pub cursor: Cursor,
    pub node: TestPreset,
}

/// One page of a preset listing.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TestPresetsPage {
    /// Number of edges in this page.
    pub count: usize,
    /// Edges, newest first.
    pub edges: Vec<TestPresetEdge>,
    pub page_info: PageInfo,
}

impl TestPresetsPage {
    /// Creates a page response from a database cursor page.
    pub fn from_cursor_page(page: CursorPage<model::TestPreset>) -> Self {
        let page = page.map(TestPreset::from_model);

        Self {
            count: page.count,
            edges: page
                .edges
                .into_iter()
                .map(|edge| TestPresetEdge {
                    cursor: edge.cursor,
                    node: edge.node,
                })
                .collect(),
            page_info: page.page_info,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn preset(id: Uuid) -> TestPreset {
        TestPreset {
            id,
            test_type: TestType::Words,
            language: TestLanguage::English,
            words: 25,
            time: 30,
            punctuated: false,
            content: "random".to_owned(),
            creator_image: None,
            user_id: None,
            created_at: Timestamp::UNIX_EPOCH,
            updated_at: Timestamp::UNIX_EPOCH,
        }
    }

    #[test]
    fn preset_serializes_type_and_camel_case() -> anyhow::Result<()> {
        let json = serde_json::to_value(preset(Uuid::nil()))?;

        assert_eq!(json["type"], "WORDS");
        assert_eq!(json["language"], "ENGLISH");
        assert!(json.get("creatorImage").is_some());
        assert!(json.get("test_type").is_none());
        Ok(())
    }

    #[test]
    fn empty_page_has_null_cursors() -> anyhow::Result<()> {
        let page = TestPresetsPage::from_cursor_page(CursorPage::empty());
        let json = serde_json::to_value(page)?;

        assert_eq!(json["count"], 0);
        assert_eq!(json["edges"], serde_json::json!([]));
        assert_eq!(json["pageInfo"]["hasMore"], false);
        assert!(json["pageInfo"]["startCursor"].is_null());
        assert!(json["pageInfo"]["endCursor"].is_null());
        Ok(())
    }

    #[test]
    fn page_keeps_edge_cursors() {
        let created_at = Timestamp::from_second(30).unwrap();
        let record = model::TestPreset {
            id: Uuid::nil(),
            test_type: TestType::Time,
            language: TestLanguage::Spanish,
            words: 25,
            time: 60,
            punctuated: true,
            content: "quotes".to_owned(),
            creator_image: None,
            user_id: None,
            created_at: created_at.into(),
            updated_at: created_at.into(),
        };

        let page = TestPresetsPage::from_cursor_page(CursorPage::from_records(vec![record], true));

        assert_eq!(page.count, 1);
        assert_eq!(page.edges[0].cursor, Cursor(created_at));
        assert_eq!(page.edges[0].node.time, 60);
        assert_eq!(page.page_info.start_cursor, Some(Cursor(created_at)));
        assert_eq!(page.page_info.end_cursor, Some(Cursor(created_at)));
        assert!(page.page_info.has_more);
    }
}
