//! Host-environment snapshot for the debug overlay.
//!
//! Recomputed on every render, never cached or buffered; values are
//! display strings only.

use super::bridge::WebAppBridge;

pub(super) fn snapshot() -> Vec<(&'static str, String)> {
    let mut out: Vec<(&'static str, String)> = Vec::new();

    if let Some(window) = web_sys::window() {
        let navigator = window.navigator();
        out.push(("User Agent", navigator.user_agent().unwrap_or_default()));
        out.push(("Platform", navigator.platform().unwrap_or_default()));
        out.push(("Language", navigator.language().unwrap_or_default()));

        let location = window.location();
        out.push(("URL", location.href().unwrap_or_default()));
        out.push(("Hash", location.hash().unwrap_or_default()));
        out.push(("Search", location.search().unwrap_or_default()));
    }

    let bridge = WebAppBridge::from_window();
    out.push(("Telegram WebApp", yes_no(bridge.is_some())));
    out.push((
        "Init Data Present",
        yes_no(bridge.as_ref().is_some_and(WebAppBridge::has_init_data_unsafe)),
    ));

    if let Some(bridge) = bridge {
        out.push((
            "WebApp Version",
            bridge.string_field("version").unwrap_or_else(unknown),
        ));
        out.push((
            "WebApp Platform",
            bridge.string_field("platform").unwrap_or_else(unknown),
        ));
        out.push((
            "Color Scheme",
            bridge.string_field("colorScheme").unwrap_or_else(unknown),
        ));
        out.push((
            "Theme Params",
            bridge.json_field("themeParams").unwrap_or_else(unknown),
        ));
        out.push((
            "Init Data",
            bridge.string_field("initData").unwrap_or_else(unknown),
        ));
        out.push((
            "Init Data Unsafe",
            bridge.json_field("initDataUnsafe").unwrap_or_else(unknown),
        ));
    }

    out
}

fn yes_no(v: bool) -> String {
    if v { "yes" } else { "no" }.to_string()
}

fn unknown() -> String {
    "(unset)".to_string()
}
