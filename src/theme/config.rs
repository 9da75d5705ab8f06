//! Theme override configuration
//!
//! A small TOML file lets host applications recolor the palette entries that
//! carry the library's visual identity without recompiling. Lives at
//! `<config-dir>/quill-ui/theme.toml`; every field is optional.
//!
//! ```toml
//! accent = "#7c3aed"
//! warning = "#d97706"
//! ```

use std::path::PathBuf;
use std::sync::OnceLock;

use gpui::{Rgba, rgb};
use serde::Deserialize;

use crate::error::Error;

type Result<T, E = Error> = std::result::Result<T, E>;

static OVERRIDES: OnceLock<ThemeOverrides> = OnceLock::new();

/// Raw theme overrides as deserialized from `theme.toml`
///
/// Colors are `#rrggbb` hex strings; validation happens in [`Self::resolve`].
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeConfig {
    pub accent: Option<String>,
    pub border_focus: Option<String>,
    pub info: Option<String>,
    pub warning: Option<String>,
    pub danger: Option<String>,
    pub success: Option<String>,
}

/// Parsed overrides consulted by [`crate::theme::colors::UiColors`]
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct ThemeOverrides {
    pub accent: Option<Rgba>,
    pub border_focus: Option<Rgba>,
    pub info: Option<Rgba>,
    pub warning: Option<Rgba>,
    pub danger: Option<Rgba>,
    pub success: Option<Rgba>,
}

impl ThemeConfig {
    /// Location of the override file, if a config directory exists
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "quill-ui")
            .map(|dirs| dirs.config_dir().join("theme.toml"))
    }

    /// Load overrides from disk. A missing file is not an error and yields
    /// the empty (all-default) configuration.
    pub fn load() -> Result<Self> {
        let Some(path) = Self::config_path() else {
            return Ok(Self::default());
        };
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(&path)?;
        Ok(toml::from_str(&text)?)
    }

    /// Validate the hex strings and produce parsed overrides
    pub(crate) fn resolve(&self) -> Result<ThemeOverrides> {
        Ok(ThemeOverrides {
            accent: self.accent.as_deref().map(parse_hex).transpose()?,
            border_focus: self.border_focus.as_deref().map(parse_hex).transpose()?,
            info: self.info.as_deref().map(parse_hex).transpose()?,
            warning: self.warning.as_deref().map(parse_hex).transpose()?,
            danger: self.danger.as_deref().map(parse_hex).transpose()?,
            success: self.success.as_deref().map(parse_hex).transpose()?,
        })
    }
}

/// Install a loaded configuration. First install wins; later calls are
/// ignored so render paths can read the overrides lock-free.
pub fn install(config: ThemeConfig) {
    match config.resolve() {
        Ok(resolved) => {
            if OVERRIDES.set(resolved).is_err() {
                tracing::warn!("theme overrides already installed; ignoring");
            }
        }
        Err(e) => tracing::warn!("invalid theme override: {e}"),
    }
}

/// Current overrides, empty until [`install`] runs
pub(crate) fn overrides() -> ThemeOverrides {
    OVERRIDES.get().copied().unwrap_or_default()
}

/// Parse a `#rrggbb` (or bare `rrggbb`) hex color
pub(crate) fn parse_hex(value: &str) -> Result<Rgba> {
    let raw = value.strip_prefix('#').unwrap_or(value);
    if raw.len() != 6 {
        return Err(Error::Invalid {
            message: format!("expected #rrggbb color, got {value:?}"),
        });
    }
    let bits = u32::from_str_radix(raw, 16).map_err(|e| Error::Invalid {
        message: format!("bad hex color {value:?}: {e}"),
    })?;
    Ok(rgb(bits))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_with_hash() {
        let color = parse_hex("#3b82f6").expect("parse failed");
        let expected = rgb(0x3b82f6);
        assert_eq!(color.r, expected.r);
        assert_eq!(color.g, expected.g);
        assert_eq!(color.b, expected.b);
        assert_eq!(color.a, expected.a);
    }

    #[test]
    fn test_parse_hex_bare() {
        assert!(parse_hex("112233").is_ok());
    }

    #[test]
    fn test_parse_hex_rejects_short_and_garbage() {
        assert!(parse_hex("#fff").is_err());
        assert!(parse_hex("zzzzzz").is_err());
        assert!(parse_hex("").is_err());
    }

    #[test]
    fn test_config_from_toml() {
        let config: ThemeConfig =
            toml::from_str("accent = \"#112233\"\nwarning = \"#d97706\"").expect("parse failed");
        assert_eq!(config.accent.as_deref(), Some("#112233"));
        let resolved = config.resolve().expect("resolve failed");
        assert!(resolved.accent.is_some());
        assert!(resolved.warning.is_some());
        assert!(resolved.danger.is_none());
    }

    #[test]
    fn test_config_rejects_unknown_keys() {
        assert!(toml::from_str::<ThemeConfig>("mystery = \"#000000\"").is_err());
    }

    #[test]
    fn test_resolve_rejects_bad_hex() {
        let config = ThemeConfig {
            accent: Some("not-a-color".to_string()),
            ..Default::default()
        };
        assert!(config.resolve().is_err());
    }
}
