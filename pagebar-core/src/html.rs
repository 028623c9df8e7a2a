//! HTML markup backend.
//!
//! Produces the markup of a plain web pagination bar: a `<div>` of
//! `<button>` elements styled through the configured class names. Enabled
//! controls carry `data-page` with the page a click switches to, so a host
//! script can route the click back into the change callback.

use crate::config::PaginationOptions;
use crate::dispatch::ClickHandler;
use crate::render::Backend;
use html_escape::{encode_double_quoted_attribute, encode_text};

#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlBackend;

fn button(class: &str, disabled: bool, target: Option<usize>, label: &str) -> String {
    let mut markup = format!("<button class=\"{}\"", encode_double_quoted_attribute(class));
    if disabled {
        markup.push_str(" disabled");
    }
    if let Some(target) = target {
        markup.push_str(&format!(" data-page=\"{}\"", target));
    }
    markup.push('>');
    markup.push_str(&encode_text(label));
    markup.push_str("</button>");
    markup
}

impl<R> Backend<R> for HtmlBackend {
    type Output = String;

    fn prev_button(&self, options: &PaginationOptions, disabled: bool, on_click: ClickHandler<'_, R>) -> String {
        button(&options.button_class_name, disabled, on_click.target(), &options.prev_label)
    }

    fn next_button(&self, options: &PaginationOptions, disabled: bool, on_click: ClickHandler<'_, R>) -> String {
        button(&options.button_class_name, disabled, on_click.target(), &options.next_label)
    }

    fn page_button(
        &self,
        options: &PaginationOptions,
        page: usize,
        active: bool,
        on_click: ClickHandler<'_, R>,
    ) -> String {
        button(
            &options.page_button_classes(active),
            false,
            on_click.target(),
            &(page + 1).to_string(),
        )
    }

    fn ellipsis(&self, options: &PaginationOptions) -> String {
        format!(
            "<span class=\"{}\">{}</span>",
            encode_double_quoted_attribute(&options.disabled_button_class_name),
            encode_text(&options.ellipsis_label)
        )
    }

    fn slot(&self, item: String) -> String {
        format!("<span>{}</span>", item)
    }

    fn container(&self, options: &PaginationOptions, items: Vec<String>) -> String {
        format!(
            "<div class=\"{}\">{}</div>",
            encode_double_quoted_attribute(&options.class_name),
            items.concat()
        )
    }
}
