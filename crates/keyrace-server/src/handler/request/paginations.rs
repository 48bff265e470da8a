//! Cursor pagination query parameters.

use keyrace_postgres::types::{Cursor, DEFAULT_TAKE, PageRequest};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Window of a paginated listing.
///
/// Out-of-range values are clamped rather than rejected: `take` ends up in
/// `1..=100` and a negative `skip` reads as zero.
#[must_use]
#[derive(Debug, Default, Clone, Copy, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// Maximum number of presets to return (defaults to 20).
    pub take: Option<i64>,
    /// Number of matching presets to skip.
    pub skip: Option<i64>,
    /// Only return presets created strictly before this cursor.
    pub after: Option<Cursor>,
    /// Identifier of the last preset seen; continues through presets sharing
    /// the `after` timestamp.
    pub after_id: Option<Uuid>,
}

impl Pagination {
    /// Returns a new [`Pagination`].
    #[inline]
    pub fn new(take: i64, skip: i64) -> Self {
        Self {
            take: Some(take),
            skip: Some(skip),
            after: None,
            after_id: None,
        }
    }

    /// Returns a [`Pagination`] continuing after the given cursor.
    #[inline]
    pub fn with_after(mut self, after: Cursor) -> Self {
        self.after = Some(after);
        self
    }

    /// Returns a [`Pagination`] continuing after the given preset.
    #[inline]
    pub fn with_after_preset(self, after: Cursor, preset_id: Uuid) -> Self {
        Self {
            after_id: Some(preset_id),
            ..self.with_after(after)
        }
    }
}

impl From<Pagination> for PageRequest {
    fn from(pagination: Pagination) -> Self {
        PageRequest::new(
            pagination.take.unwrap_or(DEFAULT_TAKE),
            pagination.skip.unwrap_or_default(),
        )
        .with_after(pagination.after)
        .with_after_id(pagination.after_id)
    }
}

#[cfg(test)]
mod tests {
    use keyrace_postgres::types::MAX_TAKE;

    use super::*;

    #[test]
    fn defaults_apply_when_absent() {
        let request = PageRequest::from(Pagination::default());
        assert_eq!(request.take, DEFAULT_TAKE);
        assert_eq!(request.skip, 0);
        assert!(request.after.is_none());
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let request = PageRequest::from(Pagination::new(10_000, -5));
        assert_eq!(request.take, MAX_TAKE);
        assert_eq!(request.skip, 0);

        let request = PageRequest::from(Pagination::new(0, 3));
        assert_eq!(request.take, 1);
        assert_eq!(request.skip, 3);
    }

    #[test]
    fn cursor_is_forwarded() {
        let cursor: Cursor = "2024-11-02T10:00:00Z".parse().unwrap();
        let request = PageRequest::from(Pagination::new(5, 0).with_after(cursor));
        assert_eq!(request.after, Some(cursor));
        assert_eq!(request.after_key(), None);
    }

    #[test]
    fn preset_key_is_forwarded() {
        let cursor: Cursor = "2024-11-02T10:00:00Z".parse().unwrap();
        let preset_id = Uuid::now_v7();
        let request = PageRequest::from(Pagination::new(5, 0).with_after_preset(cursor, preset_id));
        assert_eq!(request.after_key(), Some((cursor, preset_id)));
    }
}
