use crate::dispatch::{Selection, is_disabled};
use crate::window::{PageToken, page_tokens};
use serde::Serialize;

/// One render instruction of a pagination control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Control {
    Prev { disabled: bool },
    Page { page: usize, active: bool },
    Ellipsis,
    Next { disabled: bool },
}

/// Full instruction sequence: prev, the page tokens, next.
///
/// Empty when there is at most one page, since nothing is rendered then.
pub fn controls(current_page: usize, total_pages: usize, max_visible_pages: usize) -> Vec<Control> {
    if total_pages <= 1 {
        return Vec::new();
    }

    let tokens = page_tokens(current_page, total_pages, max_visible_pages);
    let mut controls = Vec::with_capacity(tokens.len() + 2);
    controls.push(Control::Prev {
        disabled: is_disabled(current_page, total_pages, Selection::Prev),
    });
    controls.extend(tokens.into_iter().map(|token| match token {
        PageToken::Page(page) => Control::Page {
            page,
            active: page == current_page,
        },
        PageToken::Ellipsis => Control::Ellipsis,
    }));
    controls.push(Control::Next {
        disabled: is_disabled(current_page, total_pages, Selection::Next),
    });
    controls
}
