use iced::widget::{button, column, container, pick_list, row, scrollable, text};
use iced::{Element, Length, Task};
use itertools::Itertools;
use pagebar_core::{PageState, Pagination, PaginationOptions};

use crate::widget::{IcedBackend, button_style};

// Page sizes offered in the picker
const PAGE_SIZES: [usize; 5] = [5, 10, 20, 50, 100];

// How many items one click of "Add items" / "Remove items" changes
const ITEM_STEP: usize = 25;

const INITIAL_ITEMS: usize = 95;

#[derive(Debug, Clone)]
pub enum Message {
    // Emitted by both pagination bars
    PageChanged(usize),
    PageSizeChanged(usize),
    AddItems,
    RemoveItems,
    // Bring the current page back in range after the item count shrank
    Resync,
}

pub struct AppState {
    page_state: PageState,
    options: PaginationOptions,
    items: Vec<String>,
    status_text: String,
}

impl AppState {
    pub fn new(options: PaginationOptions) -> Self {
        let mut state = Self {
            page_state: PageState::new(0, options.page_size),
            options: with_demo_styles(options),
            items: Vec::new(),
            status_text: String::new(),
        };
        state.set_item_count(INITIAL_ITEMS);
        state.status_text = "Welcome! Use either pagination bar to move between pages.".to_string();
        state
    }

    fn set_item_count(&mut self, count: usize) {
        self.items = (1..=count).map(|n| format!("Item #{}", n)).collect();
        self.page_state.set_total_items(count);
    }
}

/// Fill unset class names so the demo shows distinct active and idle buttons
fn with_demo_styles(mut options: PaginationOptions) -> PaginationOptions {
    if options.button_class_name.is_empty() {
        options.button_class_name = "secondary".to_string();
    }
    if options.active_button_class_name.is_empty() {
        options.active_button_class_name = "primary".to_string();
    }
    if options.class_name.is_empty() {
        options.class_name = "bordered".to_string();
    }
    options
}

pub fn initialize() -> (AppState, Task<Message>) {
    let options = match PaginationOptions::load_or_default() {
        Ok(options) => options,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to load pagination options, using defaults");
            PaginationOptions::default()
        }
    };
    (AppState::new(options), Task::none())
}

pub fn update(state: &mut AppState, message: Message) -> Task<Message> {
    match message {
        Message::PageChanged(page) => {
            if state.page_state.go_to_page(page) {
                tracing::debug!(page, "page changed");
                state.status_text = format!("Moved to page {}", page + 1);
            } else {
                tracing::warn!(page, total_pages = state.page_state.total_pages(), "page out of range");
            }
        }
        Message::PageSizeChanged(page_size) => {
            state.page_state.set_page_size(page_size);
            state.options.page_size = page_size;
            state.status_text = format!("Showing {} items per page", page_size);
        }
        Message::AddItems => {
            let count = state.items.len() + ITEM_STEP;
            state.set_item_count(count);
            state.status_text = format!("{} items", count);
        }
        Message::RemoveItems => {
            let count = state.items.len().saturating_sub(ITEM_STEP);
            state.set_item_count(count);
            state.status_text = if state.page_state.current_page >= state.page_state.total_pages()
                && state.page_state.current_page > 0
            {
                format!("{} items, current page is now past the end", count)
            } else {
                format!("{} items", count)
            };
        }
        Message::Resync => {
            if state.page_state.resync() {
                state.status_text = format!("Back on page {}", state.page_state.current_page + 1);
            }
        }
    }
    Task::none()
}

fn default_bar(state: &AppState) -> Element<'_, Message> {
    Pagination::new(state.page_state.total_items, Message::PageChanged)
        .current_page(state.page_state.current_page)
        .options(state.options.clone())
        .render(&IcedBackend::new())
        .unwrap_or_else(|| text("Everything fits on one page").size(12).into())
}

fn custom_bar(state: &AppState) -> Element<'_, Message> {
    Pagination::new(state.page_state.total_items, Message::PageChanged)
        .current_page(state.page_state.current_page)
        .options(state.options.clone())
        .render_prev_button(|_disabled, on_click| {
            button(text("Previous").size(12))
                .on_press_maybe(on_click.click())
                .style(button_style("text"))
                .into()
        })
        .render_next_button(|_disabled, on_click| {
            button(text("Next").size(12))
                .on_press_maybe(on_click.click())
                .style(button_style("text"))
                .into()
        })
        .render_page_button(|page, active, on_click| {
            let label = if active {
                format!("Page {}", page + 1)
            } else {
                (page + 1).to_string()
            };
            button(text(label).size(12))
                .on_press_maybe(on_click.click())
                .style(button_style(if active { "success" } else { "text" }))
                .into()
        })
        .render_ellipsis(|| text("…").size(12).into())
        .render(&IcedBackend::new().spacing(2.0).padding(3))
        .unwrap_or_else(|| column![].into())
}

/// "Page X of Y" line above the bars
fn page_summary(page_state: &PageState) -> String {
    let total_pages = page_state.total_pages();
    if total_pages == 0 {
        return "No pages (0 items)".to_string();
    }
    let (start, end) = page_state.get_current_page_range();
    format!(
        "Page {} of {} (items {}-{} of {})",
        page_state.current_page + 1,
        total_pages,
        if end > start { start + 1 } else { 0 },
        end,
        page_state.total_items
    )
}

pub fn view(state: &AppState) -> Element<'_, Message> {
    let page_state = &state.page_state;

    let controls_row = row![
        text("Items per page:").size(14),
        pick_list(
            PAGE_SIZES,
            Some(page_state.page_size),
            Message::PageSizeChanged
        ),
        button("Add items").on_press(Message::AddItems).padding(5),
        button("Remove items")
            .on_press_maybe(if state.items.is_empty() {
                None
            } else {
                Some(Message::RemoveItems)
            })
            .padding(5),
        button("Resync page").on_press(Message::Resync).padding(5),
    ]
    .spacing(10);

    let tokens = pagebar_core::page_tokens(
        page_state.current_page,
        page_state.total_pages(),
        state.options.max_visible_pages,
    );

    let summary = column![
        text(page_summary(page_state)).size(14),
        text(format!("Tokens: [{}]", tokens.iter().join(", "))).size(12),
    ]
    .spacing(5);

    let item_list = column(
        page_state
            .get_current_page_items(&state.items)
            .iter()
            .map(|item| text(item.clone()).size(14).into()),
    )
    .spacing(2);

    let content = column![
        controls_row,
        summary,
        text("Default rendering").size(16),
        default_bar(state),
        text("Custom render hooks").size(16),
        custom_bar(state),
        container(item_list).padding(10),
        text(&state.status_text).size(12),
    ]
    .spacing(15)
    .padding(20);

    scrollable(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> AppState {
        AppState::new(PaginationOptions::default())
    }

    #[test]
    fn test_initial_state() {
        let state = state();
        assert_eq!(state.items.len(), INITIAL_ITEMS);
        assert_eq!(state.page_state.total_pages(), 10);
        assert_eq!(state.page_state.current_page, 0);
        assert_eq!(state.options.active_button_class_name, "primary");
    }

    #[test]
    fn test_page_change_applied_by_owner() {
        let mut state = state();
        let _ = update(&mut state, Message::PageChanged(5));
        assert_eq!(state.page_state.current_page, 5);

        // Out of range selections are ignored
        let _ = update(&mut state, Message::PageChanged(42));
        assert_eq!(state.page_state.current_page, 5);
    }

    #[test]
    fn test_removing_items_needs_resync() {
        let mut state = state();
        let _ = update(&mut state, Message::PageChanged(9));
        let _ = update(&mut state, Message::RemoveItems);
        let _ = update(&mut state, Message::RemoveItems);
        assert_eq!(state.items.len(), 45);
        assert_eq!(state.page_state.current_page, 9);

        let _ = update(&mut state, Message::Resync);
        assert_eq!(state.page_state.current_page, 4);
    }

    #[test]
    fn test_page_size_change() {
        let mut state = state();
        let _ = update(&mut state, Message::PageChanged(4));
        let _ = update(&mut state, Message::PageSizeChanged(20));
        assert_eq!(state.page_state.page_size, 20);
        assert_eq!(state.options.page_size, 20);
        assert_eq!(state.page_state.current_page, 2);
    }

    #[test]
    fn test_summary_without_items() {
        let mut state = state();
        for _ in 0..4 {
            let _ = update(&mut state, Message::RemoveItems);
        }
        assert!(state.items.is_empty());
        assert_eq!(page_summary(&state.page_state), "No pages (0 items)");
    }

    #[test]
    fn test_summary_with_items() {
        let mut state = state();
        let _ = update(&mut state, Message::PageChanged(9));
        assert_eq!(
            page_summary(&state.page_state),
            "Page 10 of 10 (items 91-95 of 95)"
        );
    }

    #[test]
    fn test_configured_classes_are_kept() {
        let options = PaginationOptions {
            button_class_name: "danger".to_string(),
            ..Default::default()
        };
        let state = AppState::new(options);
        assert_eq!(state.options.button_class_name, "danger");
        assert_eq!(state.options.class_name, "bordered");
    }
}
