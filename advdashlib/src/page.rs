//! Pagination over a filtered record sequence.
//!
//! A page is a bounded, ordered slice of the filtered set, selected by a
//! 1-based page index. Out-of-range requests yield empty pages, never
//! errors, and navigation clamps at the bounds.

use serde::{Deserialize, Serialize};

use crate::error::AdvdashError;
use crate::Result;

/// Default number of records per page.
pub const DEFAULT_PAGE_SIZE: usize = 50;

/// Select one page of items.
///
/// Pages are 1-based; the returned slice covers
/// `[(page_index - 1) * page_size, page_index * page_size)` clamped to the
/// item bounds. A page index past the end (or an empty input) yields an
/// empty slice.
pub fn page<T>(items: &[T], page_size: usize, page_index: usize) -> &[T] {
    if page_index == 0 || page_size == 0 {
        return &[];
    }

    let start = (page_index - 1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());

    &items[start..end]
}

/// Display information for one page of results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    /// Current 1-based page index
    pub current_page: usize,
    /// Total number of pages (0 when there are no records)
    pub total_pages: usize,
    /// Total number of records across all pages
    pub total_records: usize,
    /// 1-based index of the first item on this page (0 when empty)
    pub first_item: usize,
    /// 1-based index of the last item on this page (0 when empty)
    pub last_item: usize,
}

/// Compute page information for a record count.
pub fn page_info(total_records: usize, page_size: usize, page_index: usize) -> PageInfo {
    let total_pages = if page_size == 0 {
        0
    } else {
        total_records.div_ceil(page_size)
    };

    let start = (page_index.max(1) - 1).saturating_mul(page_size);
    let (first_item, last_item) = if total_records == 0 || start >= total_records {
        (0, 0)
    } else {
        (
            start + 1,
            start.saturating_add(page_size).min(total_records),
        )
    };

    PageInfo {
        current_page: page_index,
        total_pages,
        total_records,
        first_item,
        last_item,
    }
}

/// Mutable pagination state: page size plus current page.
///
/// The current page resets to 1 whenever the filter criteria change and
/// navigation is clamped, so `next`/`previous` at the bounds are no-ops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageState {
    /// Records per page
    pub size: usize,
    /// Current 1-based page index
    pub current: usize,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            size: DEFAULT_PAGE_SIZE,
            current: 1,
        }
    }
}

impl PageState {
    /// Create state with the given page size, starting at page 1.
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(AdvdashError::InvalidPageSize(size));
        }
        Ok(Self { size, current: 1 })
    }

    /// Reset to the first page.
    pub fn reset(&mut self) {
        self.current = 1;
    }

    /// Advance to the next page if one exists for `total_records`.
    /// Returns whether the page changed.
    pub fn next(&mut self, total_records: usize) -> bool {
        let total_pages = total_records.div_ceil(self.size);
        if self.current < total_pages {
            self.current += 1;
            true
        } else {
            false
        }
    }

    /// Go back one page. A no-op on page 1; returns whether the page
    /// changed.
    pub fn previous(&mut self) -> bool {
        if self.current > 1 {
            self.current -= 1;
            true
        } else {
            false
        }
    }

    /// Page info for this state over `total_records`.
    pub fn info(&self, total_records: usize) -> PageInfo {
        page_info(total_records, self.size, self.current)
    }
}
