//! Launch-context detection and host theme parameters.
//!
//! Pure string logic, host-testable; the wasm side supplies the location
//! parts and raw theme fields.

/// Sentinel substring present in the page URL when opened through the
/// Telegram platform.
pub const LAUNCH_MARKER: &str = "tgWebAppPlatform";

/// True when either the fragment or the query carries the launch marker.
pub fn has_launch_marker(hash: &str, search: &str) -> bool {
    hash.contains(LAUNCH_MARKER) || search.contains(LAUNCH_MARKER)
}

/// Custom properties set on the document root when host theme data is
/// available.
pub const BG_COLOR_VAR: &str = "--tg-bg-color";
pub const TEXT_COLOR_VAR: &str = "--tg-text-color";

const DEFAULT_BG: &str = "#ffffff";
const DEFAULT_TEXT: &str = "#000000";

/// Host theme colors, present only when the host supplied a
/// background-color field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeColors {
    pub bg_color: String,
    pub text_color: String,
}

impl ThemeColors {
    /// `bg` is `Some` iff the host theme object carried a background-color
    /// field; empty values fall back to the defaults.
    pub fn resolve(bg: Option<&str>, text: Option<&str>) -> Option<Self> {
        let bg = bg?;
        Some(Self {
            bg_color: non_empty_or(bg, DEFAULT_BG),
            text_color: non_empty_or(text.unwrap_or(""), DEFAULT_TEXT),
        })
    }
}

fn non_empty_or(value: &str, default: &str) -> String {
    if value.is_empty() {
        default.to_string()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_detected_in_hash() {
        assert!(has_launch_marker("#tgWebAppPlatform=ios&tgWebAppVersion=8.0", ""));
    }

    #[test]
    fn marker_detected_in_search() {
        assert!(has_launch_marker("", "?tgWebAppPlatform=web"));
    }

    #[test]
    fn marker_absent_in_plain_navigation() {
        assert!(!has_launch_marker("#section-2", "?utm_source=direct"));
    }

    #[test]
    fn theme_requires_background_field() {
        assert_eq!(ThemeColors::resolve(None, Some("#111111")), None);
    }

    #[test]
    fn theme_keeps_supplied_colors() {
        let colors = ThemeColors::resolve(Some("#1e1e1e"), Some("#f5f5f5"));
        assert_eq!(
            colors,
            Some(ThemeColors {
                bg_color: "#1e1e1e".to_string(),
                text_color: "#f5f5f5".to_string(),
            })
        );
    }

    #[test]
    fn theme_empty_fields_fall_back_to_defaults() {
        let colors = ThemeColors::resolve(Some(""), None);
        assert_eq!(
            colors,
            Some(ThemeColors {
                bg_color: "#ffffff".to_string(),
                text_color: "#000000".to_string(),
            })
        );
    }
}
