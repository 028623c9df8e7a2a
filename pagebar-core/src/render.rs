//! Render customization surface.
//!
//! A [`Backend`] supplies the default look of every piece of the control for
//! one output technology. [`RenderHooks`] lets the caller replace any of
//! those pieces with its own closure. Both receive a [`ClickHandler`] and
//! must route activation through it.

use crate::config::PaginationOptions;
use crate::dispatch::ClickHandler;

/// Default rendering of each control for one output technology
pub trait Backend<R> {
    type Output;

    fn prev_button(
        &self,
        options: &PaginationOptions,
        disabled: bool,
        on_click: ClickHandler<'_, R>,
    ) -> Self::Output;

    fn next_button(
        &self,
        options: &PaginationOptions,
        disabled: bool,
        on_click: ClickHandler<'_, R>,
    ) -> Self::Output;

    fn page_button(
        &self,
        options: &PaginationOptions,
        page: usize,
        active: bool,
        on_click: ClickHandler<'_, R>,
    ) -> Self::Output;

    fn ellipsis(&self, options: &PaginationOptions) -> Self::Output;

    /// Wrapper around the ellipsis and around caller-rendered page buttons
    fn slot(&self, item: Self::Output) -> Self::Output {
        item
    }

    fn container(&self, options: &PaginationOptions, items: Vec<Self::Output>) -> Self::Output;
}

pub type PageButtonHook<'a, R, Out> = Box<dyn for<'h> Fn(usize, bool, ClickHandler<'h, R>) -> Out + 'a>;
pub type EllipsisHook<'a, Out> = Box<dyn Fn() -> Out + 'a>;
pub type NavButtonHook<'a, R, Out> = Box<dyn for<'h> Fn(bool, ClickHandler<'h, R>) -> Out + 'a>;

/// Caller overrides; a `None` field falls back to the backend
pub struct RenderHooks<'a, R, Out> {
    pub page_button: Option<PageButtonHook<'a, R, Out>>,
    pub ellipsis: Option<EllipsisHook<'a, Out>>,
    pub prev_button: Option<NavButtonHook<'a, R, Out>>,
    pub next_button: Option<NavButtonHook<'a, R, Out>>,
}

impl<R, Out> Default for RenderHooks<'_, R, Out> {
    fn default() -> Self {
        Self {
            page_button: None,
            ellipsis: None,
            prev_button: None,
            next_button: None,
        }
    }
}

impl<'a, R, Out> RenderHooks<'a, R, Out> {
    pub(crate) fn prev_button<B>(
        &self,
        backend: &B,
        options: &PaginationOptions,
        disabled: bool,
        on_click: ClickHandler<'_, R>,
    ) -> Out
    where
        B: Backend<R, Output = Out> + ?Sized,
    {
        match &self.prev_button {
            Some(render) => render(disabled, on_click),
            None => backend.prev_button(options, disabled, on_click),
        }
    }

    pub(crate) fn next_button<B>(
        &self,
        backend: &B,
        options: &PaginationOptions,
        disabled: bool,
        on_click: ClickHandler<'_, R>,
    ) -> Out
    where
        B: Backend<R, Output = Out> + ?Sized,
    {
        match &self.next_button {
            Some(render) => render(disabled, on_click),
            None => backend.next_button(options, disabled, on_click),
        }
    }

    pub(crate) fn page_button<B>(
        &self,
        backend: &B,
        options: &PaginationOptions,
        page: usize,
        active: bool,
        on_click: ClickHandler<'_, R>,
    ) -> Out
    where
        B: Backend<R, Output = Out> + ?Sized,
    {
        match &self.page_button {
            Some(render) => backend.slot(render(page, active, on_click)),
            None => backend.page_button(options, page, active, on_click),
        }
    }

    pub(crate) fn ellipsis<B>(&self, backend: &B, options: &PaginationOptions) -> Out
    where
        B: Backend<R, Output = Out> + ?Sized,
    {
        let item = match &self.ellipsis {
            Some(render) => render(),
            None => backend.ellipsis(options),
        };
        backend.slot(item)
    }
}
