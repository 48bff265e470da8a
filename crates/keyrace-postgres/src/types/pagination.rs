//! Cursor pagination types.
//!
//! Pages are ordered newest first, identifier descending on ties. A
//! [`Cursor`] is the creation timestamp of a record; continuing after a
//! cursor selects strictly older records, or, when the identifier of the
//! cursor's record is known, records that sort after it in `(created_at, id)`
//! order.

use std::fmt;
use std::str::FromStr;

use jiff::Timestamp;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::HasCreatedAt;

/// Maximum number of records per page.
pub const MAX_TAKE: i64 = 100;

/// Page size used when the caller does not ask for one.
pub const DEFAULT_TAKE: i64 = 20;

/// Position of a record in a paginated listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(transparent)]
pub struct Cursor(pub Timestamp);

impl Cursor {
    /// Returns the creation timestamp this cursor points at.
    #[inline]
    pub fn timestamp(self) -> Timestamp {
        self.0
    }
}

impl From<Timestamp> for Cursor {
    fn from(timestamp: Timestamp) -> Self {
        Self(timestamp)
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Cursor {
    type Err = jiff::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

/// Window of a paginated query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Maximum number of records to return, within `1..=MAX_TAKE`.
    pub take: i64,
    /// Number of matching records to skip.
    pub skip: i64,
    /// Only records strictly older than this cursor are considered.
    pub after: Option<Cursor>,
    /// Identifier of the record at `after`.
    ///
    /// Records sharing the cursor's timestamp with a smaller identifier are
    /// kept, so continuation does not lose ties. Ignored without `after`.
    pub after_id: Option<Uuid>,
}

impl PageRequest {
    /// Creates an offset window, clamping `take` to `1..=MAX_TAKE` and `skip` to `0..`.
    pub fn new(take: i64, skip: i64) -> Self {
        Self {
            take: take.clamp(1, MAX_TAKE),
            skip: skip.max(0),
            after: None,
            after_id: None,
        }
    }

    /// Continues after the given cursor.
    pub fn with_after(mut self, after: Option<Cursor>) -> Self {
        self.after = after;
        self
    }

    /// Breaks timestamp ties at the cursor by record identifier.
    pub fn with_after_id(mut self, after_id: Option<Uuid>) -> Self {
        self.after_id = after_id;
        self
    }

    /// Returns the `(created_at, id)` key continuation starts after, if the
    /// request carries both parts.
    pub fn after_key(&self) -> Option<(Cursor, Uuid)> {
        self.after.zip(self.after_id)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(DEFAULT_TAKE, 0)
    }
}

/// A record together with its cursor.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge<T> {
    pub cursor: Cursor,
    pub node: T,
}

/// Continuation state of a page.
///
/// Both cursors are `None` exactly when the page is empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    /// Whether records older than `end_cursor` match the same filter.
    pub has_more: bool,
    /// Cursor of the first (newest) edge.
    pub start_cursor: Option<Cursor>,
    /// Cursor of the last (oldest) edge.
    pub end_cursor: Option<Cursor>,
}

/// One page of a cursor-paginated listing.
#[derive(Debug, Clone, PartialEq)]
pub struct CursorPage<T> {
    /// Number of edges in this page.
    pub count: usize,
    /// Edges, newest first.
    pub edges: Vec<Edge<T>>,
    pub page_info: PageInfo,
}

impl<T> CursorPage<T> {
    /// Creates an empty page.
    ///
    /// Used both when nothing matches and when the window lies past the end.
    pub fn empty() -> Self {
        Self {
            count: 0,
            edges: Vec::new(),
            page_info: PageInfo::default(),
        }
    }

    /// Builds a page from records already ordered newest first.
    pub fn from_records(records: Vec<T>, has_more: bool) -> Self
    where
        T: HasCreatedAt,
    {
        let edges: Vec<_> = records
            .into_iter()
            .map(|node| Edge {
                cursor: Cursor(node.created_at()),
                node,
            })
            .collect();

        let page_info = PageInfo {
            has_more: has_more && !edges.is_empty(),
            start_cursor: edges.first().map(|edge| edge.cursor),
            end_cursor: edges.last().map(|edge| edge.cursor),
        };

        Self {
            count: edges.len(),
            edges,
            page_info,
        }
    }

    /// Returns true if the page holds no edges.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Maps every node, keeping cursors and page info.
    pub fn map<U, F>(self, mut f: F) -> CursorPage<U>
    where
        F: FnMut(T) -> U,
    {
        CursorPage {
            count: self.count,
            edges: self
                .edges
                .into_iter()
                .map(|edge| Edge {
                    cursor: edge.cursor,
                    node: f(edge.node),
                })
                .collect(),
            page_info: self.page_info,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item(i64);

    impl HasCreatedAt for Item {
        fn created_at(&self) -> Timestamp {
            Timestamp::from_second(self.0).expect("valid timestamp")
        }
    }

    #[test]
    fn take_is_clamped() {
        assert_eq!(PageRequest::new(0, 0).take, 1);
        assert_eq!(PageRequest::new(-5, 0).take, 1);
        assert_eq!(PageRequest::new(1_000, 0).take, MAX_TAKE);
        assert_eq!(PageRequest::new(25, -3).skip, 0);
        assert_eq!(PageRequest::default().take, DEFAULT_TAKE);
    }

    #[test]
    fn after_key_needs_both_parts() {
        let cursor = Cursor(Item(20).created_at());
        let id = Uuid::from_u128(3);

        let request = PageRequest::new(2, 0).with_after_id(Some(id));
        assert_eq!(request.after_key(), None);

        let request = request.with_after(Some(cursor));
        assert_eq!(request.after_key(), Some((cursor, id)));
    }

    #[test]
    fn empty_page_has_no_cursors() {
        let page = CursorPage::<Item>::empty();
        assert_eq!(page.count, 0);
        assert!(page.is_empty());
        assert_eq!(page.page_info, PageInfo::default());
        assert!(!page.page_info.has_more);
    }

    #[test]
    fn page_cursors_follow_edges() {
        let page = CursorPage::from_records(vec![Item(30), Item(20)], true);
        assert_eq!(page.count, 2);
        assert_eq!(page.page_info.start_cursor, Some(Cursor(Item(30).created_at())));
        assert_eq!(page.page_info.end_cursor, Some(Cursor(Item(20).created_at())));
        assert!(page.page_info.start_cursor >= page.page_info.end_cursor);
        assert!(page.page_info.has_more);
    }

    #[test]
    fn map_keeps_cursors() {
        let page = CursorPage::from_records(vec![Item(10)], false).map(|item| item.0 * 2);
        assert_eq!(page.edges[0].node, 20);
        assert_eq!(page.edges[0].cursor, Cursor(Item(10).created_at()));
        assert!(!page.page_info.has_more);
    }

    #[test]
    fn cursor_serializes_as_rfc3339() {
        let cursor = Cursor(Timestamp::from_second(0).expect("valid timestamp"));
        let json = serde_json::to_string(&cursor).expect("serializes");
        assert_eq!(json, "\"1970-01-01T00:00:00Z\"");
        assert_eq!("1970-01-01T00:00:00Z".parse::<Cursor>().ok(), Some(cursor));
    }
}
