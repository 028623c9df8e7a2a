use crate::config::DEFAULT_PAGE_SIZE;
use crate::window;

/// Caller-owned pagination state.
///
/// The pagination control never mutates this; the owner applies the page
/// passed to its change callback with [`PageState::go_to_page`] and
/// re-renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageState {
    pub current_page: usize,
    pub total_items: usize,
    pub page_size: usize,
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(0, DEFAULT_PAGE_SIZE)
    }
}

impl PageState {
    pub fn new(total_items: usize, page_size: usize) -> Self {
        Self {
            current_page: 0,
            total_items,
            page_size,
        }
    }

    pub fn total_pages(&self) -> usize {
        window::total_pages(self.total_items, self.page_size)
    }

    pub fn go_to_page(&mut self, page: usize) -> bool {
        if page < self.total_pages() {
            self.current_page = page;
            true
        } else {
            false
        }
    }

    /// Change the item count. The current page is left alone and may end up
    /// out of range; call [`PageState::resync`] to pull it back.
    pub fn set_total_items(&mut self, total_items: usize) {
        self.total_items = total_items;
    }

    /// Change the page size, keeping the first visible item on screen
    pub fn set_page_size(&mut self, page_size: usize) {
        let first_item = self.current_page.saturating_mul(self.page_size);
        self.page_size = page_size;
        self.current_page = first_item.checked_div(page_size).unwrap_or(0);
        self.resync();
    }

    /// Clamp the current page into `[0, total_pages)`. Returns whether it moved.
    pub fn resync(&mut self) -> bool {
        let last = self.total_pages().saturating_sub(1);
        if self.current_page > last {
            log::debug!("resync page {} -> {}", self.current_page, last);
            self.current_page = last;
            true
        } else {
            false
        }
    }

    /// Item index range `[start, end)` shown on the current page
    pub fn get_current_page_range(&self) -> (usize, usize) {
        let start = self
            .current_page
            .saturating_mul(self.page_size)
            .min(self.total_items);
        let end = start.saturating_add(self.page_size).min(self.total_items);
        (start, end)
    }

    pub fn get_current_page_items<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let (start, end) = self.get_current_page_range();
        let end = end.min(items.len());
        &items[start.min(end)..end]
    }
}
