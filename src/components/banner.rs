//! Banner Component
//!
//! A dismissible notice bar. Visibility is plain component state driving the
//! render output: once closed, the entity renders nothing until remounted.

use gpui::{
    ClickEvent, Context, Empty, InteractiveElement, IntoElement, ParentElement, Render, Rgba,
    SharedString, StatefulInteractiveElement, Styled, Window, div, prelude::*, px,
};

use crate::components::dismiss::DismissState;
use crate::theme::colors::UiColors;

/// Banner severity
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BannerVariant {
    /// Informational notice (default)
    #[default]
    Info,
    /// Something needs attention
    Warning,
    /// Something went wrong
    Danger,
    /// Something succeeded
    Success,
}

impl BannerVariant {
    fn tint(self) -> Rgba {
        match self {
            Self::Info => UiColors::info_tint(),
            Self::Warning => UiColors::warning_tint(),
            Self::Danger => UiColors::danger_tint(),
            Self::Success => UiColors::success_tint(),
        }
    }

    fn accent(self) -> Rgba {
        match self {
            Self::Info => UiColors::info(),
            Self::Warning => UiColors::warning(),
            Self::Danger => UiColors::danger(),
            Self::Success => UiColors::success(),
        }
    }
}

/// A dismissible notice bar
pub struct Banner {
    description: SharedString,
    variant: BannerVariant,
    full_mode: bool,
    state: DismissState,
}

impl Banner {
    /// Create a new banner with the given description
    pub fn new(description: impl Into<SharedString>) -> Self {
        Self {
            description: description.into(),
            variant: BannerVariant::default(),
            full_mode: false,
            state: DismissState::default(),
        }
    }

    /// Set the severity variant
    pub fn variant(mut self, variant: BannerVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Stretch the banner across the full width of its container
    pub fn full_mode(mut self, full_mode: bool) -> Self {
        self.full_mode = full_mode;
        self
    }

    /// Whether the banner has been dismissed
    pub fn is_dismissed(&self) -> bool {
        self.state.is_hidden()
    }

    /// Dismiss the banner. Returns true on the first activation only.
    fn close(&mut self) -> bool {
        self.state.dismiss()
    }
}

impl Render for Banner {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        if self.state.is_hidden() {
            return Empty.into_any_element();
        }

        let accent = self.variant.accent();

        div()
            .flex()
            .items_center()
            .justify_between()
            .when(self.full_mode, |el| el.w_full())
            .px_4()
            .py_3()
            .rounded_md()
            .bg(self.variant.tint())
            .border_1()
            .border_color(accent)
            .child(
                div()
                    .text_sm()
                    .text_color(UiColors::text_primary())
                    .child(self.description.clone()),
            )
            .child(
                div()
                    .id("banner-close")
                    .size(px(20.0))
                    .rounded_sm()
                    .flex()
                    .items_center()
                    .justify_center()
                    .text_size(px(14.0))
                    .text_color(UiColors::text_muted())
                    .cursor_pointer()
                    .hover(|s| s.bg(UiColors::surface_hover()))
                    .on_click(cx.listener(|this, _event: &ClickEvent, _window, cx| {
                        if this.close() {
                            cx.notify();
                        }
                    }))
                    .child("×"),
            )
            .into_any_element()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_close_is_one_shot() {
        let mut banner = Banner::new("maintenance at noon").variant(BannerVariant::Warning);
        assert!(!banner.is_dismissed());
        assert!(banner.close());
        assert!(banner.is_dismissed());
        // Further activations are no-ops
        assert!(!banner.close());
        assert!(banner.is_dismissed());
    }

    #[test]
    fn test_builder_defaults() {
        let banner = Banner::new("hello");
        assert_eq!(banner.variant, BannerVariant::Info);
        assert!(!banner.full_mode);
        assert!(!banner.is_dismissed());
    }
}
