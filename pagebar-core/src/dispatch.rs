//! Selection dispatch: turns a click on a control into at most one call of
//! the caller's change callback.

use std::fmt;

/// A control the user can activate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Prev,
    Next,
    Page(usize),
}

/// Whether `selection` is rendered disabled at this position.
///
/// Prev is disabled on the first page and Next on the last one. Page
/// buttons are never disabled.
pub fn is_disabled(current_page: usize, total_pages: usize, selection: Selection) -> bool {
    match selection {
        Selection::Prev => current_page == 0,
        Selection::Next => total_pages > 0 && current_page == total_pages - 1,
        Selection::Page(_) => false,
    }
}

/// Page the callback should receive for `selection`, if any.
///
/// Returns `None` for disabled controls and for selections that would not
/// change the page.
pub fn resolve_target(current_page: usize, total_pages: usize, selection: Selection) -> Option<usize> {
    if is_disabled(current_page, total_pages, selection) {
        return None;
    }
    let target = match selection {
        Selection::Prev => current_page - 1,
        Selection::Next => current_page.checked_add(1)?,
        Selection::Page(page) => page,
    };
    (target != current_page).then_some(target)
}

/// Resolve `selection` and call `on_change` once if the page changes
pub fn dispatch<R>(
    current_page: usize,
    total_pages: usize,
    selection: Selection,
    on_change: impl FnOnce(usize) -> R,
) -> Option<R> {
    match resolve_target(current_page, total_pages, selection) {
        Some(target) => {
            log::debug!("page change {} -> {} via {:?}", current_page, target, selection);
            Some(on_change(target))
        }
        None => {
            log::trace!("suppressed {:?} on page {}", selection, current_page);
            None
        }
    }
}

/// Click handler handed to every renderer, default or custom.
///
/// Renderers never compute page numbers themselves; they call [`click`]
/// when the control is activated. `R` is whatever the change callback
/// returns: `()` for plain callbacks, a message for message-driven toolkits.
///
/// [`click`]: ClickHandler::click
pub struct ClickHandler<'h, R> {
    current_page: usize,
    selection: Selection,
    target: Option<usize>,
    on_change: &'h dyn Fn(usize) -> R,
}

impl<'h, R> ClickHandler<'h, R> {
    pub fn new(
        current_page: usize,
        total_pages: usize,
        selection: Selection,
        on_change: &'h dyn Fn(usize) -> R,
    ) -> Self {
        Self {
            current_page,
            selection,
            target: resolve_target(current_page, total_pages, selection),
            on_change,
        }
    }

    /// Page a click would switch to, `None` when a click does nothing
    pub fn target(&self) -> Option<usize> {
        self.target
    }

    /// Invoke the change callback for this control.
    ///
    /// Calls it exactly once when the click changes the page and returns its
    /// result; otherwise nothing is called and `None` comes back.
    pub fn click(&self) -> Option<R> {
        match self.target {
            Some(target) => {
                log::trace!("{:?} on page {} -> {}", self.selection, self.current_page, target);
                Some((self.on_change)(target))
            }
            None => None,
        }
    }
}

impl<R> Clone for ClickHandler<'_, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for ClickHandler<'_, R> {}

impl<R> fmt::Debug for ClickHandler<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClickHandler")
            .field("current_page", &self.current_page)
            .field("selection", &self.selection)
            .field("target", &self.target)
            .finish_non_exhaustive()
    }
}
