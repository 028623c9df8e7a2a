//! Framework-agnostic pagination control.
//!
//! The control is a pure function of `(current_page, total, page_size,
//! max_visible_pages)`: [`window`] decides which pages to show, [`layout`]
//! wraps them with prev/next, [`dispatch`] turns clicks into calls of the
//! caller's change callback, and [`Pagination`] renders it all through a
//! [`Backend`] with optional [`RenderHooks`] overrides.

pub mod component;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod html;
pub mod layout;
pub mod pagination;
pub mod render;
pub mod text;
pub mod window;

pub use component::Pagination;
pub use config::{
    DEFAULT_MAX_VISIBLE_PAGES, DEFAULT_PAGE_SIZE, PaginationOptions, default_options_path,
};
pub use dispatch::{ClickHandler, Selection, dispatch, is_disabled, resolve_target};
pub use error::PaginationError;
pub use html::HtmlBackend;
pub use layout::{Control, controls};
pub use pagination::PageState;
pub use render::{Backend, EllipsisHook, NavButtonHook, PageButtonHook, RenderHooks};
pub use text::TextBackend;
pub use window::{ELLIPSIS, PageToken, is_truncated, page_tokens, total_pages};
