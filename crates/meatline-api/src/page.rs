//! Paginated list contract and the page-window algorithm.
//!
//! Every list endpoint returns `{ count, data }`: `count` is the total
//! matching the filter independent of pagination, `data` is at most one
//! page. Some endpoints echo `page`/`page_size` back; some attach a
//! resource-specific `metadata` aggregate (see [`PaginatedWith`]).

use serde::Deserialize;

/// Standard list envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct Paginated<T> {
    pub count: u64,
    pub data: Vec<T>,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub page_size: Option<u32>,
}

/// List envelope carrying a resource-specific aggregate alongside the page
/// (e.g. the checks listing reports the total amount over the whole filter).
#[derive(Debug, Clone, Deserialize)]
pub struct PaginatedWith<T, M> {
    pub count: u64,
    pub data: Vec<T>,
    pub metadata: M,
}

/// Number of pages for a result set: `ceil(count / page_size)`, `0` when
/// there are no results. A zero page size also yields zero pages.
pub fn total_pages(count: u64, page_size: u32) -> u32 {
    if count == 0 || page_size == 0 {
        return 0;
    }
    u32::try_from(count.div_ceil(u64::from(page_size))).unwrap_or(u32::MAX)
}

/// One slot in a windowed pagination control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(u32),
    Ellipsis,
}

/// The visible window around `current`.
///
/// A page is shown when it is the first, the last, or within one of
/// `current`. A page exactly two away collapses into a single ellipsis;
/// pages further out are omitted entirely, so each gap produces at most
/// one ellipsis marker.
///
/// An out-of-range `current` is rendered as given — callers reset to page 1
/// when a filter change shrinks the result set.
pub fn page_window(total_pages: u32, current: u32) -> Vec<PageItem> {
    let mut window = Vec::new();
    for p in 1..=total_pages {
        if p == 1 || p == total_pages || p.abs_diff(current) <= 1 {
            window.push(PageItem::Page(p));
        } else if p.abs_diff(current) == 2 {
            window.push(PageItem::Ellipsis);
        }
    }
    window
}

/// Whether a "previous page" control should be enabled.
pub fn has_previous(current: u32) -> bool {
    current > 1
}

/// Whether a "next page" control should be enabled.
pub fn has_next(current: u32, total_pages: u32) -> bool {
    current < total_pages
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::PageItem::{Ellipsis, Page};
    use super::*;

    #[test]
    fn total_pages_boundaries() {
        assert_eq!(total_pages(0, 20), 0);
        assert_eq!(total_pages(1, 20), 1);
        assert_eq!(total_pages(20, 20), 1);
        assert_eq!(total_pages(21, 20), 2);
        assert_eq!(total_pages(199, 20), 10);
        assert_eq!(total_pages(200, 20), 10);
        assert_eq!(total_pages(201, 20), 11);
    }

    #[test]
    fn zero_page_size_yields_zero_pages() {
        assert_eq!(total_pages(50, 0), 0);
    }

    #[test]
    fn window_middle_collapses_both_sides() {
        // 10 pages, current 5: {1, 4, 5, 6, 10} visible, {2,3} and {7,8,9}
        // each collapse to one ellipsis.
        assert_eq!(
            page_window(10, 5),
            vec![
                Page(1),
                Ellipsis,
                Page(4),
                Page(5),
                Page(6),
                Ellipsis,
                Page(10),
            ]
        );
    }

    #[test]
    fn window_at_edges() {
        assert_eq!(page_window(10, 1), vec![Page(1), Page(2), Ellipsis, Page(10)]);
        assert_eq!(
            page_window(10, 10),
            vec![Page(1), Ellipsis, Page(9), Page(10)]
        );
    }

    #[test]
    fn window_small_sets_have_no_ellipsis() {
        assert_eq!(page_window(1, 1), vec![Page(1)]);
        assert_eq!(page_window(3, 2), vec![Page(1), Page(2), Page(3)]);
        assert_eq!(page_window(0, 1), vec![]);
    }

    #[test]
    fn window_adjacent_gap_is_single_ellipsis() {
        // current 3 of 6: page 5 is exactly 2 away -> ellipsis; nothing
        // else hidden on that side.
        assert_eq!(
            page_window(6, 3),
            vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(6)]
        );
    }

    #[test]
    fn prev_next_enablement() {
        assert!(!has_previous(1));
        assert!(has_previous(2));
        assert!(has_next(1, 2));
        assert!(!has_next(2, 2));
        assert!(!has_next(1, 1));
    }
}
