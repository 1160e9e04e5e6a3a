//! Collapsible debug overlay: captured console log, resolver status and a
//! host-environment inspector.

use leptos::prelude::*;

use crate::logbuf::{LogBuffer, LOG_CAPACITY};
use crate::ui_model::{DataSource, LoadState};
use crate::user::UserRecord;

use super::console_hook::{self, ConsoleCapture};
use super::{clipboard, env_info};

#[component]
pub(super) fn DebugPanel(
    user: ReadSignal<Option<UserRecord>>,
    is_loading: ReadSignal<bool>,
    is_host_env: ReadSignal<bool>,
) -> impl IntoView {
    let (is_open, set_is_open) = signal(false);
    let (show_logs, set_show_logs) = signal(true);
    let logs = RwSignal::new(LogBuffer::new(LOG_CAPACITY));

    // The console override lives exactly as long as this panel: acquired
    // here, released on every unmount path via `on_cleanup`.
    let capture = StoredValue::new_local(None::<ConsoleCapture>);
    match ConsoleCapture::install(move |level, args| {
        let timestamp = console_hook::timestamp_now();
        let message = console_hook::message_from_args(&args);
        let payload = console_hook::payload_from_args(&args);
        logs.update(|buf| buf.push(level, timestamp, message, payload));
    }) {
        Ok(guard) => capture.set_value(Some(guard)),
        Err(e) => super::cwarn(&format!("debug: console capture unavailable: {e}")),
    }
    on_cleanup(move || {
        // Dropping the guard restores the original console methods.
        capture.set_value(None);
    });

    let copy_logs = move |_| {
        let text = logs.with(|buf| buf.export_text());
        clipboard::copy_text(text);
    };
    let clear_logs = move |_| logs.update(LogBuffer::clear);

    view! {
        <div class="debug-root">
            <button
                class="btn debug-toggle"
                on:click=move |_| set_is_open.set(!is_open.get())
            >
                "🐞 Debug Panel "
                {move || if is_open.get() { "▾" } else { "▴" }}
            </button>

            <Show when=move || is_open.get()>
                <div class="card debug-card">
                    <div class="debug-header">
                        <div class="debug-title">"Debug Information"</div>
                        <div class="debug-actions">
                            <button
                                class="btn sm"
                                title="Toggle log panel"
                                on:click=move |_| set_show_logs.set(!show_logs.get())
                            >
                                {move || if show_logs.get() { "🙈" } else { "👁" }}
                            </button>
                            <button class="btn sm" title="Copy logs" on:click=copy_logs>
                                "⧉"
                            </button>
                            <button class="btn sm" title="Clear logs" on:click=clear_logs>
                                "🗑"
                            </button>
                        </div>
                    </div>

                    <div class="debug-body">
                        <div class="debug-section debug-status">
                            <span class="debug-label">"Status:"</span>
                            <span class=move || {
                                DataSource::from_host_flag(is_host_env.get()).badge_class()
                            }>
                                {move || DataSource::from_host_flag(is_host_env.get()).label()}
                            </span>
                            <span class=move || {
                                LoadState::from_loading_flag(is_loading.get()).badge_class()
                            }>
                                {move || LoadState::from_loading_flag(is_loading.get()).label()}
                            </span>
                        </div>

                        <Show when=move || user.with(Option::is_some)>
                            <pre class="debug-user">
                                {move || {
                                    user.get()
                                        .and_then(|u| serde_json::to_string_pretty(&u).ok())
                                        .unwrap_or_default()
                                }}
                            </pre>
                        </Show>

                        <div class="debug-section-title">"Environment:"</div>
                        <div class="debug-env">
                            {move || {
                                env_info::snapshot()
                                    .into_iter()
                                    .map(|(key, value)| {
                                        view! {
                                            <div class="debug-env-row">
                                                <span class="debug-env-key">{key}</span>
                                                <span class="debug-env-value">{value}</span>
                                            </div>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </div>

                        <Show when=move || show_logs.get()>
                            <div class="debug-section-title">
                                {move || format!("Console Logs ({}):", logs.with(LogBuffer::len))}
                            </div>
                            <div class="debug-logs">
                                <Show
                                    when=move || logs.with(|buf| !buf.is_empty())
                                    fallback=|| view! { <div class="debug-empty">"No logs yet"</div> }
                                >
                                    <For
                                        each=move || logs.with(LogBuffer::snapshot)
                                        key=|entry| entry.id
                                        children=|entry| {
                                            view! {
                                                <div class="debug-log-entry">
                                                    <div class="debug-log-head">
                                                        <span class="debug-log-ts">
                                                            {format!("[{}]", entry.timestamp)}
                                                        </span>
                                                        <span class=entry.level.css_class()>
                                                            {entry.level.label()}
                                                        </span>
                                                    </div>
                                                    <div class="debug-log-msg">{entry.message}</div>
                                                    {entry
                                                        .payload
                                                        .map(|p| view! { <pre class="debug-log-payload">{p}</pre> })}
                                                </div>
                                            }
                                        }
                                    />
                                </Show>
                            </div>
                        </Show>
                    </div>
                </div>
            </Show>
        </div>
    }
}
