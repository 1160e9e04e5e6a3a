//! Clipboard export for the debug overlay.

use wasm_bindgen_futures::JsFuture;

/// Fire-and-forget plain-text write; failures are logged, not surfaced.
pub(super) fn copy_text(text: String) {
    wasm_bindgen_futures::spawn_local(async move {
        let Some(window) = web_sys::window() else {
            super::cwarn("clipboard: no window");
            return;
        };
        let clipboard = window.navigator().clipboard();
        if JsFuture::from(clipboard.write_text(&text)).await.is_err() {
            super::cwarn("clipboard: write failed");
        }
    });
}
