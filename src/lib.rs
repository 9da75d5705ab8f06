//! Quill UI - Presentational GPUI Components
//!
//! A small component library for GPUI applications: dismissible banners and
//! tags, a decorated text input, a modal dialog and the button primitive the
//! modal footer is built from. Components own only transient view state;
//! anything that outlives an instance (the modal's open flag) belongs to the
//! caller and flows in as props.

rust_i18n::i18n!("locales", fallback = "en");

pub mod components;
pub mod error;
pub mod i18n;
pub mod theme;

pub use components::banner::{Banner, BannerVariant};
pub use components::button::{Button, ButtonProps, ButtonSize, ButtonVariant};
pub use components::input::{Input, InputSize};
pub use components::modal::Modal;
pub use components::tag::{Tag, TagSize};
pub use error::{Error, Result};

/// Initialize library-wide state: detect the locale and install any theme
/// overrides found on disk. Call once from the host app before opening
/// windows. Components work with built-in defaults if this is skipped.
pub fn init() {
    i18n::init_locale();
    match theme::config::ThemeConfig::load() {
        Ok(config) => theme::config::install(config),
        Err(e) => tracing::warn!("failed to load theme overrides: {e}"),
    }
}
