//! Plain-text backend, used by the CLI: `< 1 [2] 3 ... 10 >`.

use crate::config::PaginationOptions;
use crate::dispatch::ClickHandler;
use crate::render::Backend;
use itertools::Itertools;

/// Renders the control as one line of text. The active page is bracketed,
/// disabled nav buttons are parenthesised and page labels are one-based.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextBackend;

fn nav_label(label: &str, disabled: bool) -> String {
    if disabled {
        format!("({})", label)
    } else {
        label.to_string()
    }
}

impl<R> Backend<R> for TextBackend {
    type Output = String;

    fn prev_button(&self, options: &PaginationOptions, disabled: bool, _: ClickHandler<'_, R>) -> String {
        nav_label(&options.prev_label, disabled)
    }

    fn next_button(&self, options: &PaginationOptions, disabled: bool, _: ClickHandler<'_, R>) -> String {
        nav_label(&options.next_label, disabled)
    }

    fn page_button(
        &self,
        _options: &PaginationOptions,
        page: usize,
        active: bool,
        _: ClickHandler<'_, R>,
    ) -> String {
        if active {
            format!("[{}]", page + 1)
        } else {
            (page + 1).to_string()
        }
    }

    fn ellipsis(&self, options: &PaginationOptions) -> String {
        options.ellipsis_label.clone()
    }

    fn container(&self, _options: &PaginationOptions, items: Vec<String>) -> String {
        items.iter().join(" ")
    }
}
