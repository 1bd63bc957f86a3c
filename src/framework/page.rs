//! # Pagination
//!
//! Every listing in the store (catalog listing, catalog search, a user's
//! orders) slices its matches with the same policy:
//!
//! - pages are 1-based and `page <= 0` is treated as page 1;
//! - `page_size <= 0` is treated as [`DEFAULT_PAGE_SIZE`];
//! - the page covers `[(page - 1) * page_size, min(page * page_size, total))`;
//! - a start index at or past the end yields an empty page that still carries
//!   the true total, so callers can detect "past the last page".

use serde::{Deserialize, Serialize};

/// Page size substituted for non-positive requests.
pub const DEFAULT_PAGE_SIZE: i32 = 10;

/// A raw, caller-supplied page request. Values are not validated on input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub page: i32,
    pub page_size: i32,
}

impl PageRequest {
    pub fn new(page: i32, page_size: i32) -> Self {
        Self { page, page_size }
    }

    /// Substitutes the defaults for non-positive values.
    pub fn normalized(self) -> Self {
        Self {
            page: if self.page <= 0 { 1 } else { self.page },
            page_size: if self.page_size <= 0 {
                DEFAULT_PAGE_SIZE
            } else {
                self.page_size
            },
        }
    }

    /// Index range of this page within `total` matches, or `None` when the
    /// page starts past the end.
    pub fn bounds(self, total: usize) -> Option<std::ops::Range<usize>> {
        let request = self.normalized();
        // Both factors are positive i32, so the product fits in u64.
        let size = request.page_size as u64;
        let start = (request.page as u64 - 1) * size;
        let total = total as u64;
        if start >= total {
            return None;
        }
        let end = (start + size).min(total);
        Some(start as usize..end as usize)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(1, DEFAULT_PAGE_SIZE)
    }
}

/// One page of matches plus the number of matches across all pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_count: usize,
}

impl<T> Page<T> {
    /// Slices `matches` according to `request`.
    pub fn paginate(matches: Vec<T>, request: PageRequest) -> Self {
        let total_count = matches.len();
        let items = match request.bounds(total_count) {
            Some(range) => matches
                .into_iter()
                .skip(range.start)
                .take(range.len())
                .collect(),
            None => Vec::new(),
        };
        Self { items, total_count }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total_count: self.total_count,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
