//! Applies host theme colors to the document root.

use wasm_bindgen::JsCast;

use crate::launch::{ThemeColors, BG_COLOR_VAR, TEXT_COLOR_VAR};

pub(super) fn apply(colors: &ThemeColors) {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());
    let Some(root) = root else {
        super::cwarn("theme: no document element");
        return;
    };
    let Ok(root) = root.dyn_into::<web_sys::HtmlElement>() else {
        super::cwarn("theme: document element is not an html element");
        return;
    };

    let style = root.style();
    if style.set_property(BG_COLOR_VAR, &colors.bg_color).is_err() {
        super::cwarn("theme: failed to set background color");
    }
    if style.set_property(TEXT_COLOR_VAR, &colors.text_color).is_err() {
        super::cwarn("theme: failed to set text color");
    }
}
