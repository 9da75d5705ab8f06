//! Tag Component
//!
//! A small label, optionally closable. Follows the same one-shot dismiss
//! contract as [`crate::components::banner::Banner`]: the close affordance
//! hides the tag permanently and reports the dismissed content once.

use gpui::{
    App, ClickEvent, Context, Empty, InteractiveElement, IntoElement, ParentElement, Render,
    SharedString, StatefulInteractiveElement, Styled, Window, div, prelude::*, px,
};

use crate::components::dismiss::DismissState;
use crate::theme::colors::UiColors;

/// Tag size
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TagSize {
    /// Small tag (default)
    #[default]
    Small,
    /// Large tag
    Large,
}

/// A dismissible label
pub struct Tag {
    content: SharedString,
    size: TagSize,
    closable: bool,
    state: DismissState,
    on_close: Option<Box<dyn Fn(&SharedString, &ClickEvent, &mut Window, &mut App) + 'static>>,
}

impl Tag {
    /// Create a new tag with the given content
    pub fn new(content: impl Into<SharedString>) -> Self {
        Self {
            content: content.into(),
            size: TagSize::default(),
            closable: false,
            state: DismissState::default(),
            on_close: None,
        }
    }

    /// Set the tag size
    pub fn size(mut self, size: TagSize) -> Self {
        self.size = size;
        self
    }

    /// Show a close affordance
    pub fn closable(mut self, closable: bool) -> Self {
        self.closable = closable;
        self
    }

    /// Set the close handler; receives the dismissed content
    pub fn on_close(
        mut self,
        handler: impl Fn(&SharedString, &ClickEvent, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_close = Some(Box::new(handler));
        self
    }

    /// The tag's content
    pub fn content(&self) -> &SharedString {
        &self.content
    }

    /// Whether the tag has been closed
    pub fn is_closed(&self) -> bool {
        self.state.is_hidden()
    }

    /// Close the tag. Yields the content to report on the first activation,
    /// `None` afterwards so the close callback fires at most once.
    fn close(&mut self) -> Option<SharedString> {
        self.state.dismiss().then(|| self.content.clone())
    }
}

impl Render for Tag {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        if self.state.is_hidden() {
            return Empty.into_any_element();
        }

        let (padding_x, padding_y, font_size) = match self.size {
            TagSize::Small => (px(8.0), px(2.0), px(12.0)),
            TagSize::Large => (px(12.0), px(4.0), px(14.0)),
        };

        div()
            .flex()
            .items_center()
            .gap_1()
            .px(padding_x)
            .py(padding_y)
            .rounded_sm()
            .bg(UiColors::tag_bg())
            .border_1()
            .border_color(UiColors::border())
            .text_size(font_size)
            .text_color(UiColors::text_primary())
            .child(self.content.clone())
            .when(self.closable, |el| {
                el.child(
                    div()
                        .id("tag-close")
                        .flex()
                        .items_center()
                        .justify_center()
                        .text_color(UiColors::text_muted())
                        .cursor_pointer()
                        .hover(|s| s.text_color(UiColors::text_secondary()))
                        .on_click(cx.listener(
                            |this, event: &ClickEvent, window, cx| {
                                if let Some(content) = this.close() {
                                    if let Some(handler) = &this.on_close {
                                        handler(&content, event, window, cx);
                                    }
                                    cx.notify();
                                }
                            },
                        ))
                        .child("×"),
                )
            })
            .into_any_element()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_close_reports_content_exactly_once() {
        let mut tag = Tag::new("draft").closable(true);
        assert_eq!(tag.close().as_ref().map(SharedString::as_str), Some("draft"));
        assert!(tag.is_closed());
        // Re-activating has no further effect
        assert_eq!(tag.close(), None);
        assert!(tag.is_closed());
    }

    #[test]
    fn test_builder_defaults() {
        let tag = Tag::new("v1.2");
        assert_eq!(tag.size, TagSize::Small);
        assert!(!tag.closable);
        assert!(!tag.is_closed());
        assert_eq!(tag.content().as_ref(), "v1.2");
    }
}
