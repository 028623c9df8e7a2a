use crate::config::PaginationOptions;
use crate::dispatch::{ClickHandler, Selection};
use crate::layout::{self, Control};
use crate::render::{Backend, RenderHooks};
use crate::window::{self, PageToken};

/// A controlled pagination control.
///
/// Holds the current position, the change callback, configuration and
/// render overrides for one render. It owns no state between renders: the
/// caller updates its own page when `on_change` fires and builds a new
/// `Pagination` for the next frame.
///
/// `R` is the callback's return type and `Out` the rendered output type of
/// the backend in use.
pub struct Pagination<'a, R, Out> {
    current_page: usize,
    total: usize,
    on_change: Box<dyn Fn(usize) -> R + 'a>,
    options: PaginationOptions,
    hooks: RenderHooks<'a, R, Out>,
}

impl<'a, R, Out> Pagination<'a, R, Out> {
    pub fn new(total: usize, on_change: impl Fn(usize) -> R + 'a) -> Self {
        Self {
            current_page: 0,
            total,
            on_change: Box::new(on_change),
            options: PaginationOptions::default(),
            hooks: RenderHooks::default(),
        }
    }

    pub fn current_page(mut self, current_page: usize) -> Self {
        self.current_page = current_page;
        self
    }

    /// Replace every configuration field at once
    pub fn options(mut self, options: PaginationOptions) -> Self {
        self.options = options;
        self
    }

    pub fn page_size(mut self, page_size: usize) -> Self {
        self.options.page_size = page_size;
        self
    }

    pub fn max_visible_pages(mut self, max_visible_pages: usize) -> Self {
        self.options.max_visible_pages = max_visible_pages;
        self
    }

    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.options.class_name = class_name.into();
        self
    }

    pub fn button_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.options.button_class_name = class_name.into();
        self
    }

    pub fn active_button_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.options.active_button_class_name = class_name.into();
        self
    }

    pub fn disabled_button_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.options.disabled_button_class_name = class_name.into();
        self
    }

    pub fn render_page_button(
        mut self,
        render: impl for<'h> Fn(usize, bool, ClickHandler<'h, R>) -> Out + 'a,
    ) -> Self {
        self.hooks.page_button = Some(Box::new(render));
        self
    }

    pub fn render_ellipsis(mut self, render: impl Fn() -> Out + 'a) -> Self {
        self.hooks.ellipsis = Some(Box::new(render));
        self
    }

    pub fn render_prev_button(
        mut self,
        render: impl for<'h> Fn(bool, ClickHandler<'h, R>) -> Out + 'a,
    ) -> Self {
        self.hooks.prev_button = Some(Box::new(render));
        self
    }

    pub fn render_next_button(
        mut self,
        render: impl for<'h> Fn(bool, ClickHandler<'h, R>) -> Out + 'a,
    ) -> Self {
        self.hooks.next_button = Some(Box::new(render));
        self
    }

    pub fn get_options(&self) -> &PaginationOptions {
        &self.options
    }

    pub fn total_pages(&self) -> usize {
        window::total_pages(self.total, self.options.page_size)
    }

    pub fn tokens(&self) -> Vec<PageToken> {
        window::page_tokens(
            self.current_page,
            self.total_pages(),
            self.options.max_visible_pages,
        )
    }

    pub fn controls(&self) -> Vec<Control> {
        layout::controls(
            self.current_page,
            self.total_pages(),
            self.options.max_visible_pages,
        )
    }

    /// Handler for `selection` at the current position, as renderers get it
    pub fn handler(&self, selection: Selection) -> ClickHandler<'_, R> {
        ClickHandler::new(
            self.current_page,
            self.total_pages(),
            selection,
            self.on_change.as_ref(),
        )
    }

    /// Render through `backend`, applying any overrides.
    ///
    /// Returns `None` when there is at most one page.
    pub fn render<B>(&self, backend: &B) -> Option<Out>
    where
        B: Backend<R, Output = Out> + ?Sized,
    {
        let controls = self.controls();
        if controls.is_empty() {
            return None;
        }

        let options = &self.options;
        let hooks = &self.hooks;
        let items = controls
            .into_iter()
            .map(|control| match control {
                Control::Prev { disabled } => {
                    hooks.prev_button(backend, options, disabled, self.handler(Selection::Prev))
                }
                Control::Next { disabled } => {
                    hooks.next_button(backend, options, disabled, self.handler(Selection::Next))
                }
                Control::Page { page, active } => hooks.page_button(
                    backend,
                    options,
                    page,
                    active,
                    self.handler(Selection::Page(page)),
                ),
                Control::Ellipsis => hooks.ellipsis(backend, options),
            })
            .collect();

        Some(backend.container(options, items))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::TextBackend;
    use std::cell::{Cell, RefCell};

    /// Backend that records each control and clicks it, so tests can see
    /// which callbacks a user pressing everything would trigger
    struct ClickAll;

    impl Backend<()> for ClickAll {
        type Output = Vec<String>;

        fn prev_button(&self, _: &PaginationOptions, disabled: bool, on_click: ClickHandler<'_, ()>) -> Vec<String> {
            on_click.click();
            vec![format!("prev:{}", disabled)]
        }

        fn next_button(&self, _: &PaginationOptions, disabled: bool, on_click: ClickHandler<'_, ()>) -> Vec<String> {
            on_click.click();
            vec![format!("next:{}", disabled)]
        }

        fn page_button(
            &self,
            _: &PaginationOptions,
            page: usize,
            active: bool,
            on_click: ClickHandler<'_, ()>,
        ) -> Vec<String> {
            on_click.click();
            vec![format!("page:{}:{}", page, active)]
        }

        fn ellipsis(&self, _: &PaginationOptions) -> Vec<String> {
            vec!["ellipsis".to_string()]
        }

        fn container(&self, _: &PaginationOptions, items: Vec<Vec<String>>) -> Vec<String> {
            items.concat()
        }
    }

    #[test]
    fn test_renders_nothing_for_single_page() {
        let pagination = Pagination::new(10, |_| ());
        assert_eq!(pagination.total_pages(), 1);
        assert_eq!(pagination.render(&TextBackend), None);

        let empty = Pagination::new(0, |_| ());
        assert_eq!(empty.total_pages(), 0);
        assert_eq!(empty.render(&TextBackend), None);
    }

    #[test]
    fn test_zero_page_size_renders_nothing() {
        let pagination = Pagination::new(50, |_| ()).page_size(0);
        assert_eq!(pagination.render(&TextBackend), None);
    }

    #[test]
    fn test_scenario_first_page() {
        let pagination: Pagination<'_, (), String> = Pagination::new(95, |_| ());
        assert_eq!(pagination.total_pages(), 10);
        assert_eq!(
            pagination.tokens(),
            vec![
                PageToken::Page(0),
                PageToken::Page(1),
                PageToken::Ellipsis,
                PageToken::Page(9)
            ]
        );
    }

    #[test]
    fn test_scenario_middle_page() {
        let pagination = Pagination::new(95, |_| ()).current_page(5);
        assert_eq!(
            pagination.render(&TextBackend).as_deref(),
            Some("< 1 ... 5 [6] 7 ... 10 >")
        );
    }

    #[test]
    fn test_scenario_small_total_ignores_current_page() {
        for current in 0..3 {
            let pagination: Pagination<'_, (), String> =
                Pagination::new(30, |_| ()).current_page(current);
            assert_eq!(
                pagination.tokens(),
                vec![PageToken::Page(0), PageToken::Page(1), PageToken::Page(2)]
            );
        }
    }

    #[test]
    fn test_clicking_everything_skips_active_and_disabled() {
        let calls = RefCell::new(Vec::new());
        let pagination = Pagination::new(95, |page| calls.borrow_mut().push(page));
        let rendered = pagination.render(&ClickAll).unwrap();

        assert_eq!(
            rendered,
            vec!["prev:true", "page:0:true", "page:1:false", "ellipsis", "page:9:false", "next:false"]
        );
        // prev disabled, page 0 active: only 1, 9 and next (-> 1) dispatch
        assert_eq!(*calls.borrow(), vec![1, 9, 1]);
    }

    #[test]
    fn test_custom_page_button_dispatches_like_default() {
        let calls = RefCell::new(Vec::new());
        let pagination = Pagination::new(30, |page| calls.borrow_mut().push(page))
            .current_page(2)
            .render_page_button(|page, active, on_click| {
                on_click.click();
                vec![format!("custom:{}:{}", page, active)]
            });
        let rendered = pagination.render(&ClickAll).unwrap();

        assert_eq!(
            rendered,
            vec!["prev:false", "custom:0:false", "custom:1:false", "custom:2:true", "next:true"]
        );
        assert_eq!(*calls.borrow(), vec![1, 0, 1]);
    }

    #[test]
    fn test_nav_and_ellipsis_overrides() {
        let pagination = Pagination::new(200, |_| ())
            .current_page(10)
            .render_prev_button(|disabled, _| if disabled { "<<x".to_string() } else { "<<".to_string() })
            .render_next_button(|_, _| ">>".to_string())
            .render_ellipsis(|| "~".to_string());
        assert_eq!(
            pagination.render(&TextBackend).as_deref(),
            Some("<< 1 ~ 10 [11] 12 ~ 20 >>")
        );
    }

    #[test]
    fn test_override_that_ignores_handler_never_dispatches() {
        let count = Cell::new(0);
        let pagination = Pagination::new(95, |_| count.set(count.get() + 1))
            .current_page(3)
            .render_page_button(|page, _, _| vec![page.to_string()]);
        let _ = pagination.render(&ClickAll);
        // only prev and next clicked themselves
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn test_options_builder() {
        let pagination: Pagination<'_, (), String> = Pagination::new(40, |_| ())
            .page_size(5)
            .max_visible_pages(3)
            .class_name("pager")
            .button_class_name("btn")
            .active_button_class_name("active")
            .disabled_button_class_name("muted");
        let options = pagination.get_options();
        assert_eq!(options.page_size, 5);
        assert_eq!(options.max_visible_pages, 3);
        assert_eq!(options.class_name, "pager");
        assert_eq!(options.button_class_name, "btn");
        assert_eq!(options.active_button_class_name, "active");
        assert_eq!(options.disabled_button_class_name, "muted");
        assert_eq!(pagination.total_pages(), 8);
    }

    #[test]
    fn test_render_is_repeatable() {
        let pagination = Pagination::new(95, |_| ()).current_page(4);
        assert_eq!(pagination.render(&TextBackend), pagination.render(&TextBackend));
    }
}
