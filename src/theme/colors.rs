//! Colors - Quill Theme Colors

use gpui::{Rgba, rgb, rgba};

use crate::theme::config;

/// Quill color palette - All colors are accessed via associated functions
///
/// A handful of entries (accent, focus border, severity colors) consult the
/// installed [`config::ThemeConfig`] overrides first; the rest are fixed.
pub struct UiColors;

impl UiColors {
    // Primary colors
    /// Primary accent - Blue
    pub fn accent() -> Rgba {
        config::overrides().accent.unwrap_or(rgb(0x3b82f6))
    }

    // Background colors
    /// Panel / content background
    pub fn content_bg() -> Rgba {
        rgb(0xffffff)
    }
    /// Addon block background (input addons)
    pub fn addon_bg() -> Rgba {
        rgb(0xf3f4f6)
    }
    /// Tag background
    pub fn tag_bg() -> Rgba {
        rgb(0xf3f4f6)
    }
    /// Modal mask layer
    pub fn mask() -> Rgba {
        rgba(0x00000073)
    }

    // Text colors
    /// Primary text
    pub fn text_primary() -> Rgba {
        rgb(0x1f2937)
    }
    /// Secondary text
    pub fn text_secondary() -> Rgba {
        rgb(0x6b7280)
    }
    /// Muted text (placeholders, affordances at rest)
    pub fn text_muted() -> Rgba {
        rgb(0x9ca3af)
    }

    // Severity colors (banner accents)
    /// Success - Green
    pub fn success() -> Rgba {
        config::overrides().success.unwrap_or(rgb(0x22c55e))
    }
    /// Warning - Amber
    pub fn warning() -> Rgba {
        config::overrides().warning.unwrap_or(rgb(0xf59e0b))
    }
    /// Danger - Red
    pub fn danger() -> Rgba {
        config::overrides().danger.unwrap_or(rgb(0xef4444))
    }
    /// Info - Blue
    pub fn info() -> Rgba {
        config::overrides().info.unwrap_or(rgb(0x3b82f6))
    }

    // Severity tints (banner backgrounds)
    /// Info tint
    pub fn info_tint() -> Rgba {
        rgb(0xeff6ff)
    }
    /// Warning tint
    pub fn warning_tint() -> Rgba {
        rgb(0xfffbeb)
    }
    /// Danger tint
    pub fn danger_tint() -> Rgba {
        rgb(0xfef2f2)
    }
    /// Success tint
    pub fn success_tint() -> Rgba {
        rgb(0xf0fdf4)
    }

    // Border colors
    /// Default border
    pub fn border() -> Rgba {
        rgb(0xe5e7eb)
    }
    /// Focused border
    pub fn border_focus() -> Rgba {
        config::overrides().border_focus.unwrap_or(rgb(0x3b82f6))
    }

    // Button colors
    /// Primary button background
    pub fn button_primary_bg() -> Rgba {
        Self::accent()
    }
    /// Primary button text
    pub fn button_primary_text() -> Rgba {
        rgb(0xffffff)
    }
    /// Secondary button background
    pub fn button_secondary_bg() -> Rgba {
        rgb(0xe5e7eb)
    }
    /// Danger button background
    pub fn button_danger_bg() -> Rgba {
        Self::danger()
    }
    /// Danger button text
    pub fn button_danger_text() -> Rgba {
        rgb(0xffffff)
    }
    /// Ghost button text
    pub fn button_ghost_text() -> Rgba {
        rgb(0x6b7280)
    }
    /// Generic hover wash for flat surfaces
    pub fn surface_hover() -> Rgba {
        rgb(0xf3f4f6)
    }

    // Input colors
    /// Input background
    pub fn input_bg() -> Rgba {
        rgb(0xffffff)
    }
    /// Input border
    pub fn input_border() -> Rgba {
        rgb(0xd1d5db)
    }
    /// Input placeholder
    pub fn input_placeholder() -> Rgba {
        rgb(0x9ca3af)
    }
}
