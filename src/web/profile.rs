//! Profile presentation: the user card, the out-of-host notice and the
//! app-info card. Pure rendering over an already-resolved record.

use leptos::prelude::*;

use crate::ui_model::DataSource;
use crate::user::UserRecord;

const SETUP_GUIDE_URL: &str = "https://docs.telegram-mini-apps.com/platform/creating-new-app";

#[component]
pub(super) fn ProfileCard(user: UserRecord, is_host_env: ReadSignal<bool>) -> impl IntoView {
    let display_name = user.display_name();
    let initials = user.initials();
    let username = user.username.clone();
    let language = user.language_code.clone().map(|c| c.to_uppercase());
    let premium = user.is_premium.unwrap_or(false);
    let id = user.id;

    let avatar = if let Some(url) = user.photo_url.clone().filter(|u| !u.is_empty()) {
        view! { <img class="avatar" src=url alt=display_name.clone() /> }.into_any()
    } else if initials.is_empty() {
        view! { <div class="avatar avatar-fallback">"👤"</div> }.into_any()
    } else {
        view! { <div class="avatar avatar-fallback">{initials.clone()}</div> }.into_any()
    };

    view! {
        <div class="card profile-card">
            <div class="profile-header">
                {avatar}
                <h2 class="profile-name">{display_name}</h2>
                {username.map(|u| view! { <p class="profile-handle">{format!("@{u}")}</p> })}
            </div>

            <div class="profile-details">
                <div class="detail-row">
                    <span class="detail-label">"User ID"</span>
                    <span class="mono">{format!("# {id}")}</span>
                </div>

                {language
                    .map(|code| {
                        view! {
                            <div class="detail-row">
                                <span class="detail-label">"Language"</span>
                                <span class="badge secondary">{code}</span>
                            </div>
                        }
                    })}

                <div class="detail-row">
                    <span class="detail-label">"Account Type"</span>
                    <span class="detail-value">
                        {premium.then(|| view! { <span class="crown">"👑 "</span> })}
                        <span class=if premium { "badge solid" } else { "badge outline" }>
                            {if premium { "Premium" } else { "Regular" }}
                        </span>
                    </span>
                </div>

                <div class="detail-row">
                    <span class="detail-label">"Data Source"</span>
                    <span class=move || DataSource::from_host_flag(is_host_env.get()).badge_class()>
                        {move || DataSource::from_host_flag(is_host_env.get()).label()}
                    </span>
                </div>
            </div>

            // Placeholders: intentionally inert.
            <div class="profile-actions">
                <button class="btn primary wide">"Send Message"</button>
                <button class="btn outline wide">"View Profile"</button>
            </div>
        </div>
    }
}

#[component]
pub(super) fn NotHostNotice() -> impl IntoView {
    view! {
        <div class="alert">
            <div class="alert-title">"⚠ Not running in Telegram"</div>
            <div class="alert-body">
                <p>"To test with real Telegram data, you need to:"</p>
                <ol>
                    <li>"Create a bot with @BotFather"</li>
                    <li>"Set up your Mini App URL with /newapp"</li>
                    <li>"Open the app through Telegram (bot menu, inline button, etc.)"</li>
                </ol>
                <a
                    class="btn sm outline"
                    href=SETUP_GUIDE_URL
                    target="_blank"
                    rel="noopener noreferrer"
                >
                    "↗ Setup Guide"
                </a>
            </div>
        </div>
    }
}

#[component]
pub(super) fn AppInfoCard() -> impl IntoView {
    view! {
        <div class="card">
            <h3 class="card-title">"Telegram Mini App"</h3>
            <p class="card-text">
                "A demo Mini App built with Rust, Leptos and Trunk. It displays the \
                 profile supplied by the Telegram WebApp runtime, with mock data \
                 outside Telegram."
            </p>
        </div>
    }
}
