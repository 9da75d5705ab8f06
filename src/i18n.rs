//! Internationalization Helpers
//!
//! Thin wrappers over rust-i18n for the strings the components render by
//! default (currently the modal footer labels).

use gpui::SharedString;
use rust_i18n::t;

/// Set the active locale for all translated component strings
pub fn set_locale(locale: &str) {
    rust_i18n::set_locale(locale);
}

/// Get the active locale
pub fn locale() -> String {
    rust_i18n::locale().to_string()
}

/// Pick the locale from the user's system settings
///
/// Only the locales the library ships translations for are considered;
/// everything else falls back to English.
pub fn init_locale() {
    let user_locale = locale_config::Locale::user_default().to_string();
    let resolved = if user_locale.starts_with("zh") {
        "zh-CN"
    } else {
        "en"
    };
    rust_i18n::set_locale(resolved);
    tracing::debug!(locale = resolved, "initialized locale");
}

/// Default confirm-button label for modal dialogs, in the active locale
pub fn modal_ok_label() -> SharedString {
    modal_ok_label_for(&locale())
}

/// Default cancel-button label for modal dialogs, in the active locale
pub fn modal_cancel_label() -> SharedString {
    modal_cancel_label_for(&locale())
}

/// Default confirm-button label for an explicit locale
pub fn modal_ok_label_for(locale: &str) -> SharedString {
    t!("modal.ok", locale = locale).to_string().into()
}

/// Default cancel-button label for an explicit locale
pub fn modal_cancel_label_for(locale: &str) -> SharedString {
    t!("modal.cancel", locale = locale).to_string().into()
}

#[cfg(test)]
mod tests {
    use super::*;

    // Locale is passed explicitly so tests never touch the process-global
    // locale other tests read concurrently.

    #[test]
    fn test_default_labels_english() {
        assert_eq!(modal_ok_label_for("en").as_ref(), "OK");
        assert_eq!(modal_cancel_label_for("en").as_ref(), "Cancel");
    }

    #[test]
    fn test_default_labels_chinese() {
        assert_eq!(modal_ok_label_for("zh-CN").as_ref(), "确定");
        assert_eq!(modal_cancel_label_for("zh-CN").as_ref(), "取消");
    }

    #[test]
    fn test_unknown_locale_falls_back_to_english() {
        assert_eq!(modal_ok_label_for("fr").as_ref(), "OK");
    }
}
