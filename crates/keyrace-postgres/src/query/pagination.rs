//! Cursor pagination with existence-based `has_more` detection.
//!
//! A page is produced by two read-only queries: the window itself and, when
//! the window is not empty, an existence check for older matching records.
//! The queries do not share a snapshot, so `has_more` reflects the store at
//! the time of the second query.

use std::future::Future;

use crate::PgResult;
use crate::types::{Cursor, CursorPage, HasCreatedAt, PageRequest};

/// A store that can serve filtered, newest-first windows of records.
pub trait PageSource<F: ?Sized> {
    /// Record type returned by the store.
    type Record: HasCreatedAt + Send;

    /// Loads records matching `filter`, ordered by creation time descending
    /// (identifier descending on ties), skipping `request.skip` and returning
    /// at most `request.take`.
    ///
    /// With [`PageRequest::after_key`] set only records sorting after that
    /// `(created_at, id)` key are considered; with only `request.after` set,
    /// only records strictly older than the cursor.
    fn fetch_window(
        &mut self,
        filter: &F,
        request: &PageRequest,
    ) -> impl Future<Output = PgResult<Vec<Self::Record>>> + Send;

    /// Returns whether a record matching `filter` was created strictly before `cursor`.
    fn has_older_than(
        &mut self,
        filter: &F,
        cursor: Cursor,
    ) -> impl Future<Output = PgResult<bool>> + Send;
}

/// Loads one page of records matching `filter`.
///
/// An empty window yields [`CursorPage::empty`] without a second query, which
/// makes "nothing matches" and "past the last page" indistinguishable.
pub async fn paginate<S, F>(
    source: &mut S,
    filter: &F,
    request: PageRequest,
) -> PgResult<CursorPage<S::Record>>
where
    S: PageSource<F> + ?Sized,
    F: ?Sized,
{
    let mut records = source.fetch_window(filter, &request).await?;
    records.truncate(request.take.max(0) as usize);

    let Some(end) = records.last().map(|record| Cursor(record.created_at())) else {
        return Ok(CursorPage::empty());
    };

    let has_more = source.has_older_than(filter, end).await?;

    Ok(CursorPage::from_records(records, has_more))
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use uuid::Uuid;

    use super::*;
    use crate::types::PageInfo;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: u32,
        at: i64,
        owner: Option<&'static str>,
    }

    impl Row {
        fn uuid(&self) -> Uuid {
            Uuid::from_u128(self.id.into())
        }
    }

    impl HasCreatedAt for Row {
        fn created_at(&self) -> Timestamp {
            Timestamp::from_second(self.at).expect("valid timestamp")
        }
    }

    /// Matches rows by owner; `None` selects ownerless rows.
    struct Owner(Option<&'static str>);

    #[derive(Default)]
    struct MemoryStore {
        rows: Vec<Row>,
        existence_checks: usize,
    }

    impl MemoryStore {
        fn ownerless(seconds: &[i64]) -> Self {
            let rows = seconds
                .iter()
                .zip(1..)
                .map(|(&at, id)| Row { id, at, owner: None })
                .collect();
            Self {
                rows,
                existence_checks: 0,
            }
        }

        fn matching<'a>(&'a self, filter: &'a Owner) -> impl Iterator<Item = &'a Row> + 'a {
            self.rows.iter().filter(move |row| row.owner == filter.0)
        }
    }

    impl PageSource<Owner> for MemoryStore {
        type Record = Row;

        async fn fetch_window(
            &mut self,
            filter: &Owner,
            request: &PageRequest,
        ) -> PgResult<Vec<Row>> {
            let mut rows: Vec<Row> = self
                .matching(filter)
                .filter(|row| match (request.after_key(), request.after) {
                    (Some(key), _) => (Cursor(row.created_at()), row.uuid()) < key,
                    (None, Some(c)) => Cursor(row.created_at()) < c,
                    (None, None) => true,
                })
                .cloned()
                .collect();
            rows.sort_by(|a, b| (b.at, b.id).cmp(&(a.at, a.id)));

            Ok(rows
                .into_iter()
                .skip(request.skip as usize)
                .take(request.take as usize)
                .collect())
        }

        async fn has_older_than(&mut self, filter: &Owner, cursor: Cursor) -> PgResult<bool> {
            self.existence_checks += 1;
            Ok(self
                .matching(filter)
                .any(|row| Cursor(row.created_at()) < cursor))
        }
    }

    fn seconds(page: &CursorPage<Row>) -> Vec<i64> {
        page.edges.iter().map(|edge| edge.node.at).collect()
    }

    fn cursor(at: i64) -> Cursor {
        Cursor(Timestamp::from_second(at).expect("valid timestamp"))
    }

    #[tokio::test]
    async fn first_page_reports_more() -> PgResult<()> {
        let mut store = MemoryStore::ownerless(&[10, 30, 20]);
        let page = paginate(&mut store, &Owner(None), PageRequest::new(2, 0)).await?;

        assert_eq!(seconds(&page), [30, 20]);
        assert_eq!(page.count, 2);
        assert!(page.page_info.has_more);
        assert_eq!(page.page_info.start_cursor, Some(cursor(30)));
        assert_eq!(page.page_info.end_cursor, Some(cursor(20)));
        Ok(())
    }

    #[tokio::test]
    async fn last_page_reports_no_more() -> PgResult<()> {
        let mut store = MemoryStore::ownerless(&[30, 20, 10]);
        let page = paginate(&mut store, &Owner(None), PageRequest::new(2, 2)).await?;

        assert_eq!(seconds(&page), [10]);
        assert_eq!(page.count, 1);
        assert!(!page.page_info.has_more);
        assert_eq!(page.page_info.start_cursor, Some(cursor(10)));
        assert_eq!(page.page_info.end_cursor, Some(cursor(10)));
        Ok(())
    }

    #[tokio::test]
    async fn no_match_and_past_the_end_look_the_same() -> PgResult<()> {
        let mut store = MemoryStore::ownerless(&[30, 20, 10]);

        let nothing = paginate(&mut store, &Owner(Some("ana")), PageRequest::new(2, 0)).await?;
        let past_end = paginate(&mut store, &Owner(None), PageRequest::new(2, 5)).await?;

        assert_eq!(nothing, past_end);
        assert_eq!(nothing.count, 0);
        assert!(nothing.edges.is_empty());
        assert_eq!(nothing.page_info, PageInfo::default());
        assert_eq!(store.existence_checks, 0);
        Ok(())
    }

    #[tokio::test]
    async fn has_more_ignores_records_outside_the_filter() -> PgResult<()> {
        let mut store = MemoryStore::ownerless(&[30, 20]);
        store.rows.push(Row {
            id: 99,
            at: 5,
            owner: Some("ana"),
        });

        let page = paginate(&mut store, &Owner(None), PageRequest::new(2, 0)).await?;
        assert_eq!(seconds(&page), [30, 20]);
        assert!(!page.page_info.has_more);
        Ok(())
    }

    #[tokio::test]
    async fn after_cursor_continues_like_offset() -> PgResult<()> {
        let mut store = MemoryStore::ownerless(&[50, 40, 30, 20, 10]);

        let first = paginate(&mut store, &Owner(None), PageRequest::new(2, 0)).await?;
        let by_cursor = paginate(
            &mut store,
            &Owner(None),
            PageRequest::new(2, 0).with_after(first.page_info.end_cursor),
        )
        .await?;
        let by_offset = paginate(&mut store, &Owner(None), PageRequest::new(2, 2)).await?;

        assert_eq!(seconds(&by_cursor), [30, 20]);
        assert_eq!(by_cursor, by_offset);
        assert!(by_cursor.page_info.has_more);
        Ok(())
    }

    #[tokio::test]
    async fn after_key_keeps_records_tied_with_the_cursor() -> PgResult<()> {
        let mut store = MemoryStore::ownerless(&[30, 20, 20, 10]);

        let first = paginate(&mut store, &Owner(None), PageRequest::new(2, 0)).await?;
        assert_eq!(seconds(&first), [30, 20]);

        let last = first.edges.last().expect("page is not empty");
        let by_cursor = paginate(
            &mut store,
            &Owner(None),
            PageRequest::new(2, 0)
                .with_after(first.page_info.end_cursor)
                .with_after_id(Some(last.node.uuid())),
        )
        .await?;
        let by_offset = paginate(&mut store, &Owner(None), PageRequest::new(2, 2)).await?;

        assert_eq!(seconds(&by_cursor), [20, 10]);
        assert_eq!(by_cursor, by_offset);
        Ok(())
    }

    #[tokio::test]
    async fn page_never_exceeds_take() -> PgResult<()> {
        let stamps: Vec<i64> = (1..=150).collect();
        let mut store = MemoryStore::ownerless(&stamps);

        for take in [1, 7, 100, 500] {
            let request = PageRequest::new(take, 0);
            let page = paginate(&mut store, &Owner(None), request).await?;
            assert!(page.edges.len() as i64 <= request.take);
            assert_eq!(page.count, page.edges.len());
            assert!(page.page_info.start_cursor >= page.page_info.end_cursor);
        }
        Ok(())
    }

    #[tokio::test]
    async fn has_more_matches_strictly_older_records() -> PgResult<()> {
        let mut store = MemoryStore::ownerless(&[30, 20, 20, 10]);

        for skip in 0..4 {
            let page = paginate(&mut store, &Owner(None), PageRequest::new(1, skip)).await?;
            let end = page.page_info.end_cursor.expect("page is not empty");
            let expected = store.rows.iter().any(|row| Cursor(row.created_at()) < end);
            assert_eq!(page.page_info.has_more, expected, "skip = {skip}");
        }
        Ok(())
    }
}
