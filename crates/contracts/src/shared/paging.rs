use serde::{Deserialize, Serialize};

/// Page sizes the list pages are allowed to request.
pub const ALLOWED_PAGE_SIZES: [u32; 4] = [5, 10, 20, 50];

pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Query describing one page of a filterable collection. Pages are
/// 1-based, matching the upstream profiles API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageQuery {
    /// Status discriminant, where the entity kind has one.
    pub status: Option<String>,
    pub page: u32,
    pub page_size: u32,
}

impl PageQuery {
    pub fn new(page: u32, page_size: u32) -> Self {
        Self {
            status: None,
            page: page.max(1),
            page_size: sanitize_page_size(page_size),
        }
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Clamp the page into `[1, max_page]`. Call once `max_page` is known;
    /// a collection with no pages still reports page 1.
    pub fn clamped(mut self, max_page: u32) -> Self {
        self.page = self.page.clamp(1, max_page.max(1));
        self
    }
}

impl Default for PageQuery {
    fn default() -> Self {
        Self::new(1, DEFAULT_PAGE_SIZE)
    }
}

/// Snap a requested page size to the nearest allowed value.
pub fn sanitize_page_size(requested: u32) -> u32 {
    if ALLOWED_PAGE_SIZES.contains(&requested) {
        requested
    } else {
        DEFAULT_PAGE_SIZE
    }
}

/// `ceil(total / page_size)`; zero items means zero pages.
pub fn max_page(total_results: u64, page_size: u32) -> u32 {
    if page_size == 0 {
        return 0;
    }
    ((total_results + page_size as u64 - 1) / page_size as u64) as u32
}

/// Canonical paged envelope every entity adapter normalizes into.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedResponse<T> {
    pub total_results: u64,
    pub current_page: u32,
    pub max_page: u32,
    pub items: Vec<T>,
}

impl<T> PagedResponse<T> {
    /// Wrap an unpaged upstream payload as a single logical page.
    pub fn single_page(items: Vec<T>) -> Self {
        Self {
            total_results: items.len() as u64,
            current_page: 1,
            max_page: if items.is_empty() { 0 } else { 1 },
            items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_page_is_ceiling_of_total_over_size() {
        assert_eq!(max_page(0, 10), 0);
        assert_eq!(max_page(1, 10), 1);
        assert_eq!(max_page(10, 10), 1);
        assert_eq!(max_page(11, 10), 2);
        assert_eq!(max_page(100, 10), 10);
    }

    #[test]
    fn page_clamps_into_known_range() {
        let q = PageQuery::new(7, 10).clamped(3);
        assert_eq!(q.page, 3);
        let q = PageQuery::new(0, 10);
        assert_eq!(q.page, 1);
        // Empty collection still pins the query to page 1.
        let q = PageQuery::new(5, 10).clamped(0);
        assert_eq!(q.page, 1);
    }

    #[test]
    fn page_size_snaps_to_allowed_set() {
        assert_eq!(sanitize_page_size(20), 20);
        assert_eq!(sanitize_page_size(7), DEFAULT_PAGE_SIZE);
        assert_eq!(sanitize_page_size(0), DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn single_page_wraps_bare_arrays() {
        let resp = PagedResponse::single_page(vec![1, 2, 3]);
        assert_eq!(resp.total_results, 3);
        assert_eq!(resp.current_page, 1);
        assert_eq!(resp.max_page, 1);
        assert_eq!(PagedResponse::<i32>::single_page(vec![]).max_page, 0);
    }
}
