//! Typed accessor over the host SDK global.
//!
//! The SDK is the promise-based alternative to the direct bridge: an async
//! `init()`, launch-parameter retrieval, a ready signal, a user accessor
//! and theme params. The page is expected to load the SDK bundle exposing
//! the `telegramApps` namespace; when it is absent the whole surface reads
//! as unavailable.

use js_sys::Reflect;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use crate::launch::ThemeColors;
use crate::user::UserPayload;

use super::js_interop;

pub(super) const SDK_GLOBAL: &str = "telegramApps";

pub(super) struct HostSdk {
    ns: JsValue,
}

impl HostSdk {
    pub(super) fn from_window() -> Option<Self> {
        let window = web_sys::window()?;
        let ns = js_interop::get_object(window.as_ref(), SDK_GLOBAL)?;
        Some(Self { ns })
    }

    /// Async SDK bootstrap. Some SDK builds return synchronously; a
    /// returned promise is awaited to completion.
    pub(super) async fn init(&self) -> Result<(), String> {
        let ret = js_interop::call0(&self.ns, "init")?;
        if let Ok(promise) = ret.dyn_into::<js_sys::Promise>() {
            JsFuture::from(promise)
                .await
                .map_err(|e| js_interop::describe_error(&e))?;
        }
        Ok(())
    }

    /// Structured launch parameters, absent when retrieval fails or
    /// returns nothing.
    pub(super) fn retrieve_launch_params(&self) -> Option<JsValue> {
        match js_interop::call0(&self.ns, "retrieveLaunchParams") {
            Ok(params) if !params.is_undefined() && !params.is_null() => Some(params),
            Ok(_) => None,
            Err(e) => {
                super::cwarn(&format!("sdk: retrieveLaunchParams failed: {e}"));
                None
            }
        }
    }

    /// `miniApp.ready()`; failures are logged, never fatal to the chain.
    pub(super) fn mini_app_ready(&self) {
        let Some(mini_app) = js_interop::get_object(&self.ns, "miniApp") else {
            super::cwarn("sdk: miniApp surface absent");
            return;
        };
        if let Err(e) = js_interop::call0(&mini_app, "ready") {
            super::cwarn(&format!("sdk: miniApp.ready() failed: {e}"));
        }
    }

    /// The user object from the SDK's init-data accessor.
    pub(super) fn init_data_user(&self) -> Option<UserPayload> {
        let init_data = js_interop::get_object(&self.ns, "initData")?;
        match js_interop::call0(&init_data, "user") {
            Ok(user) if user.is_object() => Some(js_interop::user_payload_from(&user)),
            Ok(_) => None,
            Err(e) => {
                super::cwarn(&format!("sdk: initData.user() failed: {e}"));
                None
            }
        }
    }

    /// Host theme colors; present only when the theme object carries a
    /// background-color field (even an empty one).
    pub(super) fn theme_colors(&self) -> Option<ThemeColors> {
        let theme = js_interop::get_object(&self.ns, "themeParams")?;
        let has_bg = Reflect::has(&theme, &JsValue::from_str("bgColor")).unwrap_or(false);
        let bg = if has_bg {
            Some(js_interop::get_string(&theme, "bgColor").unwrap_or_default())
        } else {
            None
        };
        let text = js_interop::get_string(&theme, "textColor");
        ThemeColors::resolve(bg.as_deref(), text.as_deref())
    }
}
