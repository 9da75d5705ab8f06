//! Modal Component
//!
//! An overlay dialog whose open flag is owned by the caller. The modal never
//! closes itself: Confirm/Cancel invoke the caller's handlers, and the caller
//! flips its own flag. The one exception is the optional mask-close path,
//! which asks the owner to close via an `on_request_close` intent callback.

use gpui::{
    AnyElement, App, ClickEvent, Empty, InteractiveElement, IntoElement, ParentElement, RenderOnce,
    SharedString, StatefulInteractiveElement, Styled, Window, div, prelude::*, px,
};

use crate::components::button::{Button, ButtonProps, ButtonVariant};
use crate::i18n;
use crate::theme::colors::UiColors;

/// Whether a mask click may request a close
///
/// Enabling `mask_closable` without supplying a close handler degrades to a
/// no-op rather than an error; callers are warned at render time.
pub(crate) fn mask_close_enabled(mask_closable: bool, has_handler: bool) -> bool {
    mask_closable && has_handler
}

/// Resolve the footer labels, falling back to the localized defaults
pub(crate) fn footer_labels(
    ok_text: Option<SharedString>,
    cancel_text: Option<SharedString>,
) -> (SharedString, SharedString) {
    (
        ok_text.unwrap_or_else(i18n::modal_ok_label),
        cancel_text.unwrap_or_else(i18n::modal_cancel_label),
    )
}

/// Modal dialog component
#[derive(IntoElement)]
pub struct Modal {
    open: bool,
    title: SharedString,
    children: Vec<AnyElement>,
    ok_text: Option<SharedString>,
    cancel_text: Option<SharedString>,
    ok_props: ButtonProps,
    cancel_props: ButtonProps,
    mask_closable: bool,
    full_screen: bool,
    on_ok: Option<Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>>,
    on_cancel: Option<Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>>,
    on_request_close: Option<Box<dyn Fn(&mut Window, &mut App) + 'static>>,
}

impl Modal {
    /// Create a new modal. `open` is the caller-owned visibility flag; when
    /// false the modal renders nothing.
    pub fn new(open: bool, title: impl Into<SharedString>) -> Self {
        Self {
            open,
            title: title.into(),
            children: Vec::new(),
            ok_text: None,
            cancel_text: None,
            ok_props: ButtonProps::default(),
            cancel_props: ButtonProps::variant(ButtonVariant::Secondary),
            mask_closable: false,
            full_screen: false,
            on_ok: None,
            on_cancel: None,
            on_request_close: None,
        }
    }

    /// Add a body element
    pub fn child(mut self, child: impl IntoElement) -> Self {
        self.children.push(child.into_any_element());
        self
    }

    /// Override the confirm button label (defaults to the localized "OK")
    pub fn ok_text(mut self, label: impl Into<SharedString>) -> Self {
        self.ok_text = Some(label.into());
        self
    }

    /// Override the cancel button label (defaults to the localized "Cancel")
    pub fn cancel_text(mut self, label: impl Into<SharedString>) -> Self {
        self.cancel_text = Some(label.into());
        self
    }

    /// Styling options for the confirm button
    pub fn ok_props(mut self, props: ButtonProps) -> Self {
        self.ok_props = props;
        self
    }

    /// Styling options for the cancel button
    pub fn cancel_props(mut self, props: ButtonProps) -> Self {
        self.cancel_props = props;
        self
    }

    /// Allow closing by clicking the mask. Requires [`Self::on_request_close`];
    /// without it, mask clicks are ignored.
    pub fn mask_closable(mut self, mask_closable: bool) -> Self {
        self.mask_closable = mask_closable;
        self
    }

    /// Occupy the full viewport instead of a centered panel
    pub fn full_screen(mut self, full_screen: bool) -> Self {
        self.full_screen = full_screen;
        self
    }

    /// Set the confirm handler. The modal does not close itself; the owner
    /// typically flips its open flag inside this handler.
    pub fn on_ok(mut self, handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static) -> Self {
        self.on_ok = Some(Box::new(handler));
        self
    }

    /// Set the cancel handler, same non-closing contract as [`Self::on_ok`]
    pub fn on_cancel(
        mut self,
        handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_cancel = Some(Box::new(handler));
        self
    }

    /// Set the close-intent handler used by the mask-close path. The handler
    /// should make the owner re-render with `open == false`.
    pub fn on_request_close(mut self, handler: impl Fn(&mut Window, &mut App) + 'static) -> Self {
        self.on_request_close = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for Modal {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        if !self.open {
            return Empty.into_any_element();
        }

        if self.mask_closable && self.on_request_close.is_none() {
            tracing::warn!(
                "modal is mask_closable but no on_request_close handler was supplied; \
                 mask clicks will be ignored"
            );
        }

        let (ok_label, cancel_label) = footer_labels(self.ok_text, self.cancel_text);
        let mask_close = mask_close_enabled(self.mask_closable, self.on_request_close.is_some());

        let panel = div()
            .id("modal-panel")
            .bg(UiColors::content_bg())
            .flex()
            .flex_col()
            .map(|el| {
                if self.full_screen {
                    el.size_full()
                } else {
                    el.rounded_lg().shadow_lg().min_w(px(400.0)).max_w(px(600.0))
                }
            })
            // Keep panel clicks away from the mask handler
            .on_click(|_event: &ClickEvent, _window, cx| cx.stop_propagation())
            // Header
            .child(
                div()
                    .px_6()
                    .py_4()
                    .border_b_1()
                    .border_color(UiColors::border())
                    .text_size(px(16.0))
                    .font_weight(gpui::FontWeight::SEMIBOLD)
                    .text_color(UiColors::text_primary())
                    .child(self.title),
            )
            // Body
            .child(
                div()
                    .px_6()
                    .py_4()
                    .when(self.full_screen, |el| el.flex_1())
                    .flex()
                    .flex_col()
                    .gap_4()
                    .text_sm()
                    .text_color(UiColors::text_primary())
                    .children(self.children),
            )
            // Footer
            .child(
                div()
                    .px_6()
                    .py_4()
                    .border_t_1()
                    .border_color(UiColors::border())
                    .flex()
                    .justify_end()
                    .gap_3()
                    .child(
                        Button::new("modal-cancel", cancel_label)
                            .props(self.cancel_props)
                            .when_some(self.on_cancel, |button, handler| {
                                button.on_click(handler)
                            }),
                    )
                    .child(
                        Button::new("modal-ok", ok_label)
                            .props(self.ok_props)
                            .when_some(self.on_ok, |button, handler| button.on_click(handler)),
                    ),
            );

        let mut mask = div()
            .id("modal-mask")
            .absolute()
            .inset_0()
            .bg(UiColors::mask())
            .flex()
            .items_center()
            .justify_center();

        if mask_close {
            if let Some(handler) = self.on_request_close {
                mask = mask.on_click(move |_event: &ClickEvent, window, cx| {
                    handler(window, cx);
                });
            }
        }

        mask.child(panel).into_any_element()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_close_decision_table() {
        assert!(mask_close_enabled(true, true));
        // Contract violation degrades to a no-op
        assert!(!mask_close_enabled(true, false));
        assert!(!mask_close_enabled(false, true));
        assert!(!mask_close_enabled(false, false));
    }

    #[test]
    fn test_footer_labels_default_to_locale() {
        // No test mutates the process-global locale, so the default ("en")
        // is what render-time resolution sees here
        let (ok, cancel) = footer_labels(None, None);
        assert_eq!(ok.as_ref(), "OK");
        assert_eq!(cancel.as_ref(), "Cancel");
    }

    #[test]
    fn test_footer_labels_use_custom_text() {
        let (ok, cancel) = footer_labels(Some("Submit".into()), Some("Back".into()));
        assert_eq!(ok.as_ref(), "Submit");
        assert_eq!(cancel.as_ref(), "Back");
    }

    #[test]
    fn test_builder_defaults() {
        let modal = Modal::new(false, "Title");
        assert!(!modal.open);
        assert!(!modal.mask_closable);
        assert!(!modal.full_screen);
        assert!(modal.ok_text.is_none());
        assert!(modal.cancel_text.is_none());
        assert_eq!(modal.cancel_props.variant, ButtonVariant::Secondary);
    }
}
