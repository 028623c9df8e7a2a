//! Page-window calculation.
//!
//! Decides which page indices a pagination control shows. Small page counts
//! are listed in full; larger ones keep the first and last page plus a
//! window of one neighbour on each side of the current page, with ellipsis
//! markers over the gaps.

use serde::{Serialize, Serializer};
use std::fmt;

/// Text used for the ellipsis marker when a token is printed or serialized
pub const ELLIPSIS: &str = "...";

/// One entry of the displayed page sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageToken {
    /// Zero-based page index
    Page(usize),
    /// Placeholder for a run of hidden pages
    Ellipsis,
}

impl PageToken {
    pub fn page(&self) -> Option<usize> {
        match self {
            PageToken::Page(page) => Some(*page),
            PageToken::Ellipsis => None,
        }
    }
}

impl fmt::Display for PageToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageToken::Page(page) => write!(f, "{}", page),
            PageToken::Ellipsis => write!(f, "{}", ELLIPSIS),
        }
    }
}

// Pages serialize as bare numbers and the ellipsis as "...", so a sequence
// reads as [0, 1, "...", 9].
impl Serialize for PageToken {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PageToken::Page(page) => serializer.serialize_u64(*page as u64),
            PageToken::Ellipsis => serializer.serialize_str(ELLIPSIS),
        }
    }
}

/// Number of pages needed for `total_items` at `page_size` items per page.
///
/// A zero page size yields zero pages, which renders nothing.
pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total_items.div_ceil(page_size)
}

/// Whether the page list is long enough to need ellipsis truncation
pub fn is_truncated(total_pages: usize, max_visible_pages: usize) -> bool {
    total_pages > max_visible_pages.saturating_add(2)
}

/// Build the ordered token sequence for the given position.
///
/// `current_page` is not clamped: a page outside `[0, total_pages)` produces
/// the same arithmetic as an in-range one, which may leave the middle window
/// empty. Callers are expected to keep it in range.
pub fn page_tokens(current_page: usize, total_pages: usize, max_visible_pages: usize) -> Vec<PageToken> {
    if !is_truncated(total_pages, max_visible_pages) {
        return (0..total_pages).map(PageToken::Page).collect();
    }

    // total_pages >= 3 here, so the last interior page is total_pages - 2
    let last_interior = total_pages - 2;
    let start = current_page.saturating_sub(1).max(1);
    let end = current_page.saturating_add(1).min(last_interior);

    let mut tokens = Vec::with_capacity(7);
    tokens.push(PageToken::Page(0));
    if start > 1 {
        tokens.push(PageToken::Ellipsis);
    }
    tokens.extend((start..=end).map(PageToken::Page));
    if end < last_interior {
        tokens.push(PageToken::Ellipsis);
    }
    tokens.push(PageToken::Page(total_pages - 1));

    log::trace!(
        "window for page {} of {}: {}..={} ({} tokens)",
        current_page,
        total_pages,
        start,
        end,
        tokens.len()
    );
    tokens
}
