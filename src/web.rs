//! Wasm-only UI: app shell, resolver wiring and the debug overlay.

use leptos::prelude::*;
use wasm_bindgen::JsValue;

use crate::ui_model::DataSource;
use crate::user::UserRecord;

mod bridge;
mod clipboard;
mod console_hook;
mod debug_panel;
mod env_info;
mod js_interop;
mod profile;
mod resolver;
mod sdk;
mod theme;

use debug_panel::DebugPanel;
use profile::{AppInfoCard, NotHostNotice, ProfileCard};

pub fn start() {
    mount_to_body(|| view! { <App /> });
}

#[component]
fn App() -> impl IntoView {
    let (user, set_user) = signal::<Option<UserRecord>>(None);
    let (is_loading, set_is_loading) = signal(true);
    let (is_host_env, set_is_host_env) = signal(false);

    // One resolution per page load; the terminal state is absorbing. The
    // overlay below is already mounted when this task runs, so the whole
    // trace lands in the captured log.
    wasm_bindgen_futures::spawn_local(async move {
        let outcome = resolver::resolve_user().await;
        set_is_host_env.set(outcome.source == DataSource::Host);
        set_user.set(Some(outcome.user));
        set_is_loading.set(false);
        clog("resolver: finished");
    });

    view! {
        <DebugPanel user=user is_loading=is_loading is_host_env=is_host_env />
        <main class="page">
            <Show
                when=move || !is_loading.get()
                fallback=|| {
                    view! {
                        <div class="spinner-wrap">
                            <div class="spinner"></div>
                        </div>
                    }
                }
            >
                {move || match user.get() {
                    Some(user) => {
                        view! {
                            <div class="stack">
                                <Show when=move || !is_host_env.get()>
                                    <NotHostNotice />
                                </Show>
                                <ProfileCard user=user.clone() is_host_env=is_host_env />
                                <AppInfoCard />
                            </div>
                        }
                            .into_any()
                    }
                    None => {
                        view! {
                            <div class="card">
                                <div class="card-empty">"Failed to load user data"</div>
                            </div>
                        }
                            .into_any()
                    }
                }}
            </Show>
        </main>
    }
}

pub(crate) fn clog(msg: &str) {
    web_sys::console::log_1(&JsValue::from_str(msg));
}

pub(crate) fn cwarn(msg: &str) {
    web_sys::console::warn_1(&JsValue::from_str(msg));
}

pub(crate) fn cerror(msg: &str) {
    web_sys::console::error_1(&JsValue::from_str(msg));
}

pub(crate) fn location_href() -> String {
    web_sys::window()
        .and_then(|w| w.location().href().ok())
        .unwrap_or_default()
}

pub(crate) fn location_hash_search() -> (String, String) {
    let Some(window) = web_sys::window() else {
        return (String::new(), String::new());
    };
    let location = window.location();
    (
        location.hash().unwrap_or_default(),
        location.search().unwrap_or_default(),
    )
}
