//! Input Component
//!
//! A single-line text field with optional prefix/suffix decorations inside
//! the bordered box, optional addon blocks outside it, and a clear
//! affordance. All show/hide decisions live in [`InputInteraction`], a plain
//! state struct, so the visibility contract is testable without a window.
//!
//! The one subtle piece is the blur-hide ordering: hiding the clear icon on
//! blur is deferred through an explicit pending flag resolved by a zero-delay
//! timer task, so a click on the icon in the same interaction still lands
//! before the icon disappears.

use std::time::Duration;

use gpui::{
    App, ClickEvent, Context, ElementId, Entity, FocusHandle, Focusable, InteractiveElement,
    IntoElement, KeyDownEvent, ParentElement, Pixels, Render, SharedString,
    StatefulInteractiveElement, Styled, Window, div, prelude::*, px,
};

use crate::theme::colors::UiColors;

/// Gap between a decoration and the text content, in pixels
const DECORATION_GUTTER: f32 = 10.0;
/// Horizontal padding when no decoration is present, in pixels
const BARE_PADDING: f32 = 12.0;
/// Delay before a blur-initiated hide of the clear affordance resolves
const CLEAR_HIDE_DELAY: Duration = Duration::ZERO;
/// Glyph rendered by the clear affordance
const CLEAR_GLYPH: &str = "×";

/// Horizontal content padding for one side of the field
///
/// With a decoration of measured width `w`, the content is pushed past it by
/// a fixed gutter; without one, a bare default applies.
pub(crate) fn content_padding(decoration_width: Option<f32>) -> f32 {
    match decoration_width {
        Some(width) => width + DECORATION_GUTTER,
        None => BARE_PADDING,
    }
}

/// The text actually drawn in the suffix slot, which is what the right
/// padding must be measured from. The clear affordance replaces a suffix
/// decoration whenever `show_clear` is set; without a suffix the slot is
/// not a decoration and the bare padding applies.
pub(crate) fn suffix_slot_text(
    show_clear: bool,
    suffix: Option<&SharedString>,
) -> Option<SharedString> {
    match (show_clear, suffix) {
        (true, Some(_)) => Some(SharedString::new_static(CLEAR_GLYPH)),
        (false, Some(suffix)) => Some(suffix.clone()),
        (_, None) => None,
    }
}

/// Input size
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputSize {
    /// Default size
    #[default]
    Default,
    /// Large input
    Large,
    /// Small input
    Small,
}

impl InputSize {
    fn metrics(self) -> (Pixels, Pixels) {
        match self {
            Self::Default => (px(8.0), px(14.0)),
            Self::Large => (px(12.0), px(16.0)),
            Self::Small => (px(4.0), px(12.0)),
        }
    }
}

/// Clear-affordance visibility state
///
/// Mirrors the field's interaction contract: focus and hover reveal the
/// affordance while the value is non-empty, emptying the value force-hides
/// it, and blur hides it through a deferred pending step.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct InputInteraction {
    focused: bool,
    clear_visible: bool,
    hide_pending: bool,
}

impl InputInteraction {
    /// Field gained focus
    pub fn focus(&mut self, show_clear: bool, has_value: bool) {
        self.focused = true;
        self.hide_pending = false;
        if show_clear && has_value {
            self.clear_visible = true;
        }
    }

    /// Field lost focus. Returns true when a deferred hide must be scheduled.
    pub fn begin_blur(&mut self, show_clear: bool) -> bool {
        self.focused = false;
        if show_clear {
            self.hide_pending = true;
        }
        self.hide_pending
    }

    /// Resolve a pending blur-hide. Returns true when visibility changed.
    pub fn resolve_hide(&mut self) -> bool {
        if !self.hide_pending {
            return false;
        }
        self.hide_pending = false;
        self.clear_visible = false;
        true
    }

    /// Pointer entered the field
    pub fn hover_enter(&mut self, show_clear: bool, has_value: bool) {
        if show_clear && !self.focused && has_value {
            self.clear_visible = true;
        }
    }

    /// Pointer left the field
    pub fn hover_leave(&mut self, show_clear: bool) {
        if show_clear && !self.focused {
            self.clear_visible = false;
        }
    }

    /// Value changed by a keystroke. An empty value force-hides the
    /// affordance and short-circuits; a non-empty one reveals it.
    pub fn value_changed(&mut self, show_clear: bool, is_empty: bool) {
        if !show_clear {
            return;
        }
        if is_empty {
            self.clear_visible = false;
            return;
        }
        self.clear_visible = true;
    }

    /// The clear affordance was activated
    pub fn clear(&mut self) {
        self.clear_visible = false;
        self.hide_pending = false;
    }

    pub fn clear_visible(&self) -> bool {
        self.clear_visible
    }
}

/// A decorated text input entity
pub struct Input {
    id: ElementId,
    value: String,
    placeholder: SharedString,
    size: InputSize,
    disabled: bool,
    show_clear: bool,
    prefix: Option<SharedString>,
    suffix: Option<SharedString>,
    addon_before: Option<SharedString>,
    addon_after: Option<SharedString>,
    focus_handle: FocusHandle,
    was_focused: bool,
    interaction: InputInteraction,
    on_focus: Option<Box<dyn Fn(&mut Context<Self>) + 'static>>,
    on_blur: Option<Box<dyn Fn(&mut Context<Self>) + 'static>>,
    on_change: Option<Box<dyn Fn(&str, &mut Context<Self>) + 'static>>,
    on_clear: Option<Box<dyn Fn(&mut Context<Self>) + 'static>>,
}

impl Input {
    /// Create a new input
    pub fn new(id: impl Into<ElementId>, cx: &mut Context<Self>) -> Self {
        Self {
            id: id.into(),
            value: String::new(),
            placeholder: SharedString::default(),
            size: InputSize::default(),
            disabled: false,
            show_clear: false,
            prefix: None,
            suffix: None,
            addon_before: None,
            addon_after: None,
            focus_handle: cx.focus_handle(),
            was_focused: false,
            interaction: InputInteraction::default(),
            on_focus: None,
            on_blur: None,
            on_change: None,
            on_clear: None,
        }
    }

    /// Set the value
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Get the value
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Set the placeholder
    pub fn set_placeholder(&mut self, placeholder: impl Into<SharedString>) {
        self.placeholder = placeholder.into();
    }

    /// Set the size
    pub fn set_size(&mut self, size: InputSize) {
        self.size = size;
    }

    /// Set disabled state
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// Show the clear affordance while hovering/focusing a non-empty field
    pub fn set_show_clear(&mut self, show_clear: bool) {
        self.show_clear = show_clear;
    }

    /// Set the prefix decoration inside the bordered box
    pub fn set_prefix(&mut self, prefix: impl Into<SharedString>) {
        self.prefix = Some(prefix.into());
    }

    /// Set the suffix decoration inside the bordered box
    pub fn set_suffix(&mut self, suffix: impl Into<SharedString>) {
        self.suffix = Some(suffix.into());
    }

    /// Set the addon block before the bordered box
    pub fn set_addon_before(&mut self, addon: impl Into<SharedString>) {
        self.addon_before = Some(addon.into());
    }

    /// Set the addon block after the bordered box
    pub fn set_addon_after(&mut self, addon: impl Into<SharedString>) {
        self.addon_after = Some(addon.into());
    }

    /// Set the focus handler
    pub fn on_focus(&mut self, handler: impl Fn(&mut Context<Self>) + 'static) {
        self.on_focus = Some(Box::new(handler));
    }

    /// Set the blur handler
    pub fn on_blur(&mut self, handler: impl Fn(&mut Context<Self>) + 'static) {
        self.on_blur = Some(Box::new(handler));
    }

    /// Set the change handler
    pub fn on_change(&mut self, handler: impl Fn(&str, &mut Context<Self>) + 'static) {
        self.on_change = Some(Box::new(handler));
    }

    /// Set the clear handler
    pub fn on_clear(&mut self, handler: impl Fn(&mut Context<Self>) + 'static) {
        self.on_clear = Some(Box::new(handler));
    }

    /// Handle a keystroke on the focused field
    fn handle_key(&mut self, event: &KeyDownEvent, cx: &mut Context<Self>) {
        if self.disabled {
            return;
        }
        let keystroke = &event.keystroke;
        if keystroke.key == "backspace" {
            if self.value.pop().is_none() {
                return;
            }
        } else if let Some(key_char) = keystroke.key_char.clone() {
            if keystroke.modifiers.control || keystroke.modifiers.platform {
                return;
            }
            self.value.push_str(&key_char);
        } else {
            return;
        }

        if let Some(handler) = &self.on_change {
            handler(&self.value, cx);
        }
        self.interaction
            .value_changed(self.show_clear, self.value.is_empty());
        cx.notify();
    }

    /// Reset the field from the clear affordance
    fn handle_clear(&mut self, cx: &mut Context<Self>) {
        self.value.clear();
        self.interaction.clear();
        if let Some(handler) = &self.on_clear {
            handler(cx);
        }
        cx.notify();
    }

    /// Reconcile interaction state with the focus handle, firing the
    /// caller's focus/blur callbacks on edges.
    fn sync_focus(&mut self, focused: bool, cx: &mut Context<Self>) {
        if focused == self.was_focused {
            return;
        }
        self.was_focused = focused;
        if focused {
            self.interaction.focus(self.show_clear, !self.value.is_empty());
            if let Some(handler) = &self.on_focus {
                handler(cx);
            }
        } else {
            if self.interaction.begin_blur(self.show_clear) {
                self.schedule_hide_resolve(cx);
            }
            if let Some(handler) = &self.on_blur {
                handler(cx);
            }
        }
    }

    /// Resolve the pending blur-hide after a zero-delay timer, so a clear
    /// click dispatched in the same interaction runs first.
    fn schedule_hide_resolve(&self, cx: &mut Context<Self>) {
        cx.spawn(async move |this, cx| {
            cx.background_executor().timer(CLEAR_HIDE_DELAY).await;
            let _ = this.update(cx, |this, cx| {
                if this.interaction.resolve_hide() {
                    cx.notify();
                }
            });
        })
        .detach();
    }

    fn measure(window: &mut Window, text: &SharedString, font_size: Pixels) -> f32 {
        let style = window.text_style();
        let run = style.to_run(text.len());
        let line = window
            .text_system()
            .shape_line(text.clone(), font_size, &[run], None);
        f32::from(line.width)
    }

    fn addon_block(text: SharedString, font_size: Pixels) -> impl IntoElement {
        div()
            .px_3()
            .flex()
            .items_center()
            .bg(UiColors::addon_bg())
            .border_1()
            .border_color(UiColors::input_border())
            .text_size(font_size)
            .text_color(UiColors::text_secondary())
            .child(text)
    }
}

impl Focusable for Input {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for Input {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let focused = self.focus_handle.is_focused(window);
        self.sync_focus(focused, cx);

        let (padding_y, font_size) = self.size.metrics();

        let border_color = if focused {
            UiColors::border_focus()
        } else {
            UiColors::input_border()
        };

        let prefix_width = self
            .prefix
            .as_ref()
            .map(|text| Self::measure(window, text, font_size));
        let suffix_width = suffix_slot_text(self.show_clear, self.suffix.as_ref())
            .map(|text| Self::measure(window, &text, font_size));
        let padding_left = content_padding(prefix_width);
        let padding_right = content_padding(suffix_width);

        let display_text = if self.value.is_empty() {
            self.placeholder.clone()
        } else {
            SharedString::from(self.value.clone())
        };
        let text_color = if self.value.is_empty() {
            UiColors::input_placeholder()
        } else {
            UiColors::text_primary()
        };

        let opacity = if self.disabled { 0.5 } else { 1.0 };
        let clear_visible = self.show_clear && self.interaction.clear_visible();

        div()
            .flex()
            .opacity(opacity)
            .when_some(self.addon_before.clone(), |el, addon| {
                el.child(Self::addon_block(addon, font_size))
            })
            .child(
                div()
                    .id(self.id.clone())
                    .track_focus(&self.focus_handle)
                    .relative()
                    .flex_1()
                    .min_w(px(200.0))
                    .bg(UiColors::input_bg())
                    .border_1()
                    .border_color(border_color)
                    .rounded_md()
                    .on_click(cx.listener(|this, _event: &ClickEvent, window, cx| {
                        if !this.disabled {
                            window.focus(&this.focus_handle);
                            cx.notify();
                        }
                    }))
                    .on_hover(cx.listener(|this, hovered: &bool, _window, cx| {
                        if this.disabled {
                            return;
                        }
                        if *hovered {
                            this.interaction
                                .hover_enter(this.show_clear, !this.value.is_empty());
                        } else {
                            this.interaction.hover_leave(this.show_clear);
                        }
                        cx.notify();
                    }))
                    .on_key_down(cx.listener(|this, event: &KeyDownEvent, _window, cx| {
                        this.handle_key(event, cx);
                    }))
                    .when_some(self.prefix.clone(), |el, prefix| {
                        el.child(
                            div()
                                .absolute()
                                .left(px(6.0))
                                .top_0().bottom_0()
                                .flex()
                                .items_center()
                                .text_size(font_size)
                                .text_color(UiColors::text_secondary())
                                .child(prefix),
                        )
                    })
                    .child(
                        div()
                            .w_full()
                            .pl(px(padding_left))
                            .pr(px(padding_right))
                            .py(padding_y)
                            .text_size(font_size)
                            .text_color(text_color)
                            .child(display_text),
                    )
                    .map(|el| {
                        if self.show_clear {
                            el.when(clear_visible, |el| {
                                el.child(
                                    div()
                                        .id("input-clear")
                                        .absolute()
                                        .right(px(6.0))
                                        .top_0().bottom_0()
                                        .flex()
                                        .items_center()
                                        .text_size(font_size)
                                        .text_color(UiColors::text_muted())
                                        .cursor_pointer()
                                        .hover(|s| s.text_color(UiColors::text_secondary()))
                                        .on_click(cx.listener(
                                            |this, _event: &ClickEvent, _window, cx| {
                                                this.handle_clear(cx);
                                                cx.stop_propagation();
                                            },
                                        ))
                                        .child(CLEAR_GLYPH),
                                )
                            })
                        } else {
                            el.when_some(self.suffix.clone(), |el, suffix| {
                                el.child(
                                    div()
                                        .absolute()
                                        .right(px(6.0))
                                        .top_0().bottom_0()
                                        .flex()
                                        .items_center()
                                        .text_size(font_size)
                                        .text_color(UiColors::text_secondary())
                                        .child(suffix),
                                )
                            })
                        }
                    }),
            )
            .when_some(self.addon_after.clone(), |el, addon| {
                el.child(Self::addon_block(addon, font_size))
            })
    }
}

/// Create an input entity with an initial value and placeholder
pub fn input<V: 'static>(
    id: impl Into<ElementId>,
    value: impl Into<String>,
    placeholder: impl Into<SharedString>,
    cx: &mut Context<V>,
) -> Entity<Input> {
    let id = id.into();
    let value = value.into();
    let placeholder = placeholder.into();

    cx.new(|cx| {
        let mut input = Input::new(id, cx);
        input.set_value(value);
        input.set_placeholder(placeholder);
        input
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_padding_with_decoration() {
        assert_eq!(content_padding(Some(80.0)), 90.0);
        assert_eq!(content_padding(Some(0.0)), 10.0);
    }

    #[test]
    fn test_content_padding_bare() {
        assert_eq!(content_padding(None), 12.0);
    }

    #[test]
    fn test_suffix_slot_measures_what_it_renders() {
        let suffix = SharedString::from("kg");
        // The clear affordance replaces the suffix, so padding must be
        // measured from the glyph, not the unrendered suffix text
        assert_eq!(
            suffix_slot_text(true, Some(&suffix))
                .as_ref()
                .map(SharedString::as_str),
            Some(CLEAR_GLYPH)
        );
        assert_eq!(
            suffix_slot_text(false, Some(&suffix))
                .as_ref()
                .map(SharedString::as_str),
            Some("kg")
        );
        // No suffix decoration keeps the bare padding either way
        assert_eq!(suffix_slot_text(true, None), None);
        assert_eq!(suffix_slot_text(false, None), None);
    }

    #[test]
    fn test_focus_reveals_clear_only_with_value() {
        let mut state = InputInteraction::default();
        state.focus(true, false);
        assert!(!state.clear_visible());

        let mut state = InputInteraction::default();
        state.focus(true, true);
        assert!(state.clear_visible());
    }

    #[test]
    fn test_hover_reveal_gated_on_not_focused() {
        let mut state = InputInteraction::default();
        state.hover_enter(true, true);
        assert!(state.clear_visible());
        state.hover_leave(true);
        assert!(!state.clear_visible());

        // While focused, hover transitions leave visibility alone
        let mut state = InputInteraction::default();
        state.focus(true, true);
        state.hover_enter(true, true);
        state.hover_leave(true);
        assert!(state.clear_visible());
    }

    #[test]
    fn test_empty_value_force_hides() {
        let mut state = InputInteraction::default();
        state.focus(true, true);
        assert!(state.clear_visible());
        state.value_changed(true, true);
        assert!(!state.clear_visible());
        state.value_changed(true, false);
        assert!(state.clear_visible());
    }

    #[test]
    fn test_blur_hide_is_deferred_then_resolves() {
        let mut state = InputInteraction::default();
        state.focus(true, true);
        assert!(state.begin_blur(true));
        // Still visible until the deferred step runs
        assert!(state.clear_visible());
        assert!(state.resolve_hide());
        assert!(!state.clear_visible());
        // Resolving again is a no-op
        assert!(!state.resolve_hide());
    }

    #[test]
    fn test_clear_click_beats_pending_hide() {
        let mut state = InputInteraction::default();
        state.focus(true, true);
        state.begin_blur(true);
        // The clear click lands before the deferred hide resolves
        state.clear();
        assert!(!state.clear_visible());
        assert!(!state.resolve_hide());
    }

    #[test]
    fn test_blur_without_show_clear_schedules_nothing() {
        let mut state = InputInteraction::default();
        state.focus(false, true);
        assert!(!state.begin_blur(false));
        assert!(!state.resolve_hide());
    }

    #[test]
    fn test_refocus_cancels_pending_hide() {
        let mut state = InputInteraction::default();
        state.focus(true, true);
        state.begin_blur(true);
        state.focus(true, true);
        assert!(state.clear_visible());
        assert!(!state.resolve_hide());
        assert!(state.clear_visible());
    }
}
