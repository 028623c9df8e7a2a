use std::marker::PhantomData;

use iced::widget::{button, container, row, text};
use iced::{Alignment, Element, Theme};
use pagebar_core::{Backend, ClickHandler, PaginationOptions};

pub type ButtonStyle = fn(&Theme, button::Status) -> button::Style;
pub type ContainerStyle = fn(&Theme) -> container::Style;

/// Map a space-separated class list onto one of iced's built-in button
/// styles. The last recognised class wins; unknown lists fall back to
/// `primary`.
pub fn button_style(classes: &str) -> ButtonStyle {
    classes
        .split_whitespace()
        .rev()
        .find_map(|class| -> Option<ButtonStyle> {
            match class {
                "primary" => Some(button::primary),
                "secondary" => Some(button::secondary),
                "success" => Some(button::success),
                "danger" => Some(button::danger),
                "text" => Some(button::text),
                _ => None,
            }
        })
        .unwrap_or(button::primary)
}

pub fn container_style(classes: &str) -> ContainerStyle {
    classes
        .split_whitespace()
        .rev()
        .find_map(|class| -> Option<ContainerStyle> {
            match class {
                "box" | "rounded" => Some(container::rounded_box),
                "bordered" => Some(container::bordered_box),
                _ => None,
            }
        })
        .unwrap_or(container::transparent)
}

/// Renders a pagination control as iced widgets
#[derive(Debug, Clone, Copy)]
pub struct IcedBackend<'a> {
    spacing: f32,
    padding: u16,
    _marker: PhantomData<&'a ()>,
}

impl Default for IcedBackend<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl IcedBackend<'_> {
    pub fn new() -> Self {
        Self {
            spacing: 5.0,
            padding: 5,
            _marker: PhantomData,
        }
    }

    pub fn spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn padding(mut self, padding: u16) -> Self {
        self.padding = padding;
        self
    }
}

impl<'a, Message: Clone + 'a> Backend<Message> for IcedBackend<'a> {
    type Output = Element<'a, Message>;

    fn prev_button(
        &self,
        options: &PaginationOptions,
        _disabled: bool,
        on_click: ClickHandler<'_, Message>,
    ) -> Element<'a, Message> {
        // A button without a press message renders disabled
        button(text(options.prev_label.clone()))
            .on_press_maybe(on_click.click())
            .style(button_style(&options.button_class_name))
            .padding(self.padding)
            .into()
    }

    fn next_button(
        &self,
        options: &PaginationOptions,
        _disabled: bool,
        on_click: ClickHandler<'_, Message>,
    ) -> Element<'a, Message> {
        button(text(options.next_label.clone()))
            .on_press_maybe(on_click.click())
            .style(button_style(&options.button_class_name))
            .padding(self.padding)
            .into()
    }

    fn page_button(
        &self,
        options: &PaginationOptions,
        page: usize,
        active: bool,
        on_click: ClickHandler<'_, Message>,
    ) -> Element<'a, Message> {
        let style = button_style(&options.page_button_classes(active));
        let page_button = button(text((page + 1).to_string()))
            .on_press_maybe(on_click.click())
            .padding(self.padding);

        if active {
            // Pressing the active page dispatches nothing, but it should not
            // look disabled
            page_button
                .style(move |theme, _status| style(theme, button::Status::Active))
                .into()
        } else {
            page_button.style(style).into()
        }
    }

    fn ellipsis(&self, options: &PaginationOptions) -> Element<'a, Message> {
        text(options.ellipsis_label.clone()).into()
    }

    fn container(
        &self,
        options: &PaginationOptions,
        items: Vec<Element<'a, Message>>,
    ) -> Element<'a, Message> {
        container(row(items).spacing(self.spacing).align_y(Alignment::Center))
            .style(container_style(&options.class_name))
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagebar_core::Pagination;

    fn button_look(style: ButtonStyle) -> button::Style {
        style(&Theme::Light, button::Status::Active)
    }

    #[test]
    fn test_last_known_class_wins() {
        assert_eq!(
            button_look(button_style("btn secondary success")),
            button_look(button::success)
        );
        assert_eq!(
            button_look(button_style("danger custom-class")),
            button_look(button::danger)
        );
    }

    #[test]
    fn test_unknown_classes_fall_back() {
        assert_eq!(button_look(button_style("")), button_look(button::primary));
        assert_eq!(button_look(button_style("btn")), button_look(button::primary));
        // container::Style has no PartialEq
        assert_eq!(
            format!("{:?}", container_style("")(&Theme::Light)),
            format!("{:?}", container::transparent(&Theme::Light))
        );
        assert_eq!(
            format!("{:?}", container_style("pager bordered")(&Theme::Light)),
            format!("{:?}", container::bordered_box(&Theme::Light))
        );
    }

    #[test]
    fn test_renders_only_with_multiple_pages() {
        let backend = IcedBackend::new();
        let single = Pagination::new(10, |page: usize| page).render(&backend);
        assert!(single.is_none());

        let multiple = Pagination::new(95, |page: usize| page)
            .current_page(4)
            .render(&backend);
        assert!(multiple.is_some());
    }
}
