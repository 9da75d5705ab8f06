//! Button Component
//!
//! The action primitive used by the modal footer, also usable standalone.

use gpui::{
    App, ClickEvent, ElementId, InteractiveElement, IntoElement, ParentElement, RenderOnce,
    SharedString, StatefulInteractiveElement, Styled, Window, div, prelude::*, px, rgba,
};

use crate::theme::colors::UiColors;

/// Button variant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Primary action button (accent)
    #[default]
    Primary,
    /// Secondary button (gray)
    Secondary,
    /// Danger button (red)
    Danger,
    /// Ghost button (transparent)
    Ghost,
}

/// Button size
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonSize {
    /// Small button
    Small,
    /// Medium button (default)
    #[default]
    Medium,
    /// Large button
    Large,
}

/// Styling options for a button, as a plain bundle
///
/// The modal accepts one of these per action button so callers can restyle
/// Confirm/Cancel without touching the modal's layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonProps {
    pub variant: ButtonVariant,
    pub size: ButtonSize,
    pub disabled: bool,
}

impl ButtonProps {
    /// Shorthand for a variant with default size
    pub fn variant(variant: ButtonVariant) -> Self {
        Self {
            variant,
            ..Default::default()
        }
    }
}

/// A styled button component
#[derive(IntoElement)]
pub struct Button {
    id: ElementId,
    label: SharedString,
    variant: ButtonVariant,
    size: ButtonSize,
    disabled: bool,
    on_click: Option<Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>>,
}

impl Button {
    /// Create a new button
    pub fn new(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            variant: ButtonVariant::Primary,
            size: ButtonSize::Medium,
            disabled: false,
            on_click: None,
        }
    }

    /// Set the button variant
    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set the button size
    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    /// Set whether the button is disabled
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Apply a styling bundle
    pub fn props(mut self, props: ButtonProps) -> Self {
        self.variant = props.variant;
        self.size = props.size;
        self.disabled = props.disabled;
        self
    }

    /// Set the click handler
    pub fn on_click(
        mut self,
        handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }

    /// Create a secondary button
    pub fn secondary(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Secondary)
    }

    /// Create a danger button
    pub fn danger(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Danger)
    }

    /// Create a ghost button
    pub fn ghost(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Ghost)
    }
}

impl RenderOnce for Button {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let (bg_color, text_color, hover_bg) = match self.variant {
            ButtonVariant::Primary => (
                UiColors::button_primary_bg(),
                UiColors::button_primary_text(),
                rgba(0x2563ebff),
            ),
            ButtonVariant::Secondary => (
                UiColors::button_secondary_bg(),
                UiColors::text_primary(),
                rgba(0xd1d5dbff),
            ),
            ButtonVariant::Danger => (
                UiColors::button_danger_bg(),
                UiColors::button_danger_text(),
                rgba(0xdc2626ff),
            ),
            ButtonVariant::Ghost => (
                rgba(0x00000000),
                UiColors::button_ghost_text(),
                rgba(0xf3f4f6ff),
            ),
        };

        let (padding_x, padding_y, font_size) = match self.size {
            ButtonSize::Small => (px(8.0), px(4.0), px(12.0)),
            ButtonSize::Medium => (px(16.0), px(8.0), px(14.0)),
            ButtonSize::Large => (px(24.0), px(12.0), px(16.0)),
        };

        let opacity = if self.disabled { 0.5 } else { 1.0 };

        let mut element = div()
            .id(self.id)
            .px(padding_x)
            .py(padding_y)
            .bg(bg_color)
            .text_color(text_color)
            .text_size(font_size)
            .rounded_md()
            .opacity(opacity)
            .child(self.label);

        if !self.disabled {
            element = element.cursor_pointer().hover(|s| s.bg(hover_bg));

            if let Some(handler) = self.on_click {
                element = element.on_click(handler);
            }
        }

        element
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_props_bundle_defaults() {
        let props = ButtonProps::default();
        assert_eq!(props.variant, ButtonVariant::Primary);
        assert_eq!(props.size, ButtonSize::Medium);
        assert!(!props.disabled);
    }

    #[test]
    fn test_props_apply() {
        let button = Button::new("b", "Go").props(ButtonProps {
            variant: ButtonVariant::Danger,
            size: ButtonSize::Small,
            disabled: true,
        });
        assert_eq!(button.variant, ButtonVariant::Danger);
        assert_eq!(button.size, ButtonSize::Small);
        assert!(button.disabled);
    }
}
