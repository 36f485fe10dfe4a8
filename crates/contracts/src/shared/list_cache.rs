//! Local cache for remote list pages.
//!
//! Every list page keeps one of these per view instance: successive page
//! fetches merge into it keyed by entity id, and the visible rows are
//! derived from the merged set. The cache never evicts; it only grows or
//! has entries overwritten by a later fetch (last-fetch-wins).

use std::collections::HashMap;

use crate::shared::paging::PageQuery;

/// Entities that carry the stable integer id used as the merge key.
pub trait Keyed {
    fn key(&self) -> i64;
}

/// Id-keyed set of list items scoped to one view instance.
///
/// `merged` is copy-on-write: it returns a new cache value instead of
/// mutating in place, so reactive consumers that compare references see
/// every merge as a fresh value.
#[derive(Debug, Clone, PartialEq)]
pub struct ListCache<T> {
    entries: HashMap<i64, T>,
}

impl<T> Default for ListCache<T> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<T: Keyed + Clone> ListCache<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: i64) -> Option<&T> {
        self.entries.get(&id)
    }

    /// Insert-or-replace every item by id, returning the merged cache.
    /// The incoming copy always wins over a cached one with the same id.
    pub fn merged(&self, items: &[T]) -> Self {
        let mut entries = self.entries.clone();
        for item in items {
            entries.insert(item.key(), item.clone());
        }
        Self { entries }
    }

    /// Filter, sort (case-insensitive on `sort_key`) and slice the merged
    /// set down to the requested page. Pure: same cache and query always
    /// produce the same rows, and no I/O happens here.
    pub fn derive_view<P, K>(&self, predicate: P, sort_key: K, query: &PageQuery) -> Vec<T>
    where
        P: Fn(&T) -> bool,
        K: Fn(&T) -> String,
    {
        let mut rows: Vec<T> = self
            .entries
            .values()
            .filter(|item| predicate(item))
            .cloned()
            .collect();
        // Lowercasing approximates locale-aware collation; ties fall back
        // to the id so equal keys render in a stable order regardless of
        // map iteration order.
        rows.sort_by_key(|item| (sort_key(item).to_lowercase(), item.key()));

        let page = query.page.max(1) as usize;
        let size = query.page_size as usize;
        let start = (page - 1).saturating_mul(size);
        if start >= rows.len() {
            return Vec::new();
        }
        let end = (start + size).min(rows.len());
        rows[start..end].to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::paging::max_page;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: i64,
        status: &'static str,
        name: &'static str,
    }

    impl Keyed for Row {
        fn key(&self) -> i64 {
            self.id
        }
    }

    fn row(id: i64, status: &'static str, name: &'static str) -> Row {
        Row { id, status, name }
    }

    fn sorted_ids(rows: &[Row]) -> Vec<i64> {
        rows.iter().map(|r| r.id).collect()
    }

    #[test]
    fn merge_is_idempotent() {
        let cache = ListCache::new();
        let items = vec![row(1, "ACTIVE", "a"), row(2, "ACTIVE", "b")];
        let once = cache.merged(&items);
        let twice = once.merged(&items);
        assert_eq!(once, twice);
    }

    #[test]
    fn merge_keeps_one_entry_per_id_and_newest_wins() {
        let cache = ListCache::new().merged(&[row(1, "ACTIVE", "old"), row(2, "ACTIVE", "b")]);
        let merged = cache.merged(&[row(1, "INACTIVE", "new"), row(3, "ACTIVE", "c")]);
        assert_eq!(merged.len(), 3);
        assert_eq!(merged.get(1).unwrap().status, "INACTIVE");
        assert_eq!(merged.get(1).unwrap().name, "new");
    }

    #[test]
    fn derive_view_is_pure() {
        let cache = ListCache::new().merged(&[
            row(1, "ACTIVE", "Zoe"),
            row(2, "ACTIVE", "ana"),
            row(3, "INACTIVE", "Mia"),
        ]);
        let query = PageQuery::new(1, 10);
        let first = cache.derive_view(|r| r.status == "ACTIVE", |r| r.name.to_string(), &query);
        let second = cache.derive_view(|r| r.status == "ACTIVE", |r| r.name.to_string(), &query);
        assert_eq!(first, second);
        // case-insensitive sort: "ana" before "Zoe"
        assert_eq!(sorted_ids(&first), vec![2, 1]);
    }

    #[test]
    fn pagination_bounds_hold() {
        let rows: Vec<Row> = (1..=23).map(|id| row(id, "ACTIVE", "x")).collect();
        let cache = ListCache::new().merged(&rows);
        let size = 10;
        let last = max_page(rows.len() as u64, size);
        assert_eq!(last, 3);

        let last_page = cache.derive_view(
            |_| true,
            |r| format!("{:04}", r.id),
            &PageQuery::new(last, size),
        );
        assert_eq!(last_page.len(), 3);

        let beyond = cache.derive_view(
            |_| true,
            |r| format!("{:04}", r.id),
            &PageQuery::new(last + 1, size),
        );
        assert!(beyond.is_empty());
    }

    #[test]
    fn equal_sort_keys_order_by_id() {
        // Two caches holding the same rows, merged in different orders,
        // must derive identical views even when every sort key ties.
        let first = ListCache::new().merged(&[row(2, "ACTIVE", "same"), row(1, "ACTIVE", "same")]);
        let second = ListCache::new().merged(&[row(1, "ACTIVE", "same"), row(2, "ACTIVE", "same")]);
        let query = PageQuery::new(1, 10);

        let view_a = first.derive_view(|_| true, |r| r.name.to_string(), &query);
        let view_b = second.derive_view(|_| true, |r| r.name.to_string(), &query);
        assert_eq!(sorted_ids(&view_a), vec![1, 2]);
        assert_eq!(view_a, view_b);
    }

    #[test]
    fn later_fetch_moves_item_between_status_views() {
        // Page 1 of ACTIVE returns ids {1,2,3}; a later INACTIVE fetch
        // returns {2,4} with id 2 flipped. The merged cache holds 4 unique
        // ids and the ACTIVE view no longer contains id 2.
        let cache = ListCache::new().merged(&[
            row(1, "ACTIVE", "a"),
            row(2, "ACTIVE", "b"),
            row(3, "ACTIVE", "c"),
        ]);
        let cache = cache.merged(&[row(2, "INACTIVE", "b"), row(4, "INACTIVE", "d")]);
        assert_eq!(cache.len(), 4);

        let active = cache.derive_view(
            |r| r.status == "ACTIVE",
            |r| r.name.to_string(),
            &PageQuery::new(1, 10),
        );
        assert_eq!(sorted_ids(&active), vec![1, 3]);
    }
}
