//! Typed accessor over the `window.Telegram.WebApp` global.
//!
//! The bridge object is host-injected and dynamically shaped; every field
//! read goes through presence-checked reflection. An absent bridge is a
//! normal negative result, not an error.

use wasm_bindgen::JsValue;

use crate::user::UserPayload;

use super::js_interop;

pub(super) struct WebAppBridge {
    webapp: JsValue,
}

impl WebAppBridge {
    pub(super) fn from_window() -> Option<Self> {
        let window = web_sys::window()?;
        let telegram = js_interop::get_object(window.as_ref(), "Telegram")?;
        let webapp = js_interop::get_object(&telegram, "WebApp")?;
        Some(Self { webapp })
    }

    /// Informs the host the app is interactive. Idempotent on the host
    /// side; a throw is logged and ignored.
    pub(super) fn ready(&self) {
        if let Err(e) = js_interop::call0(&self.webapp, "ready") {
            super::cwarn(&format!("bridge: ready() failed: {e}"));
        }
    }

    /// The user object embedded in the unsafe init data, when present.
    pub(super) fn init_data_unsafe_user(&self) -> Option<UserPayload> {
        let init_data = js_interop::get_object(&self.webapp, "initDataUnsafe")?;
        let user = js_interop::get_object(&init_data, "user")?;
        Some(js_interop::user_payload_from(&user))
    }

    pub(super) fn has_init_data_unsafe(&self) -> bool {
        js_interop::get_object(&self.webapp, "initDataUnsafe").is_some()
    }

    /// A plain string field off the bridge, for diagnostics display.
    pub(super) fn string_field(&self, key: &str) -> Option<String> {
        js_interop::get_string(&self.webapp, key)
    }

    /// A bridge field rendered as compact JSON, for diagnostics display.
    pub(super) fn json_field(&self, key: &str) -> Option<String> {
        js_interop::get(&self.webapp, key).and_then(|v| js_interop::json_compact(&v))
    }
}
