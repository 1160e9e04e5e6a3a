//! User acquisition: an ordered fallback over the host surfaces.
//!
//! The chain runs once per page load and never retries a source. Every
//! host failure is caught and logged at the strategy that hit it; the only
//! externally visible failure mode is mock data.

use crate::launch;
use crate::ui_model::DataSource;
use crate::user::{mock_user, UserRecord};

use super::bridge::WebAppBridge;
use super::sdk::HostSdk;
use super::{cerror, clog, cwarn, js_interop, theme};

pub(super) struct Resolution {
    pub(super) user: UserRecord,
    pub(super) source: DataSource,
}

/// Ordered host surfaces; the first to yield a user wins.
#[derive(Debug, Clone, Copy)]
enum HostSource {
    Bridge,
    Sdk,
}

const CHAIN: [HostSource; 2] = [HostSource::Bridge, HostSource::Sdk];

impl HostSource {
    fn name(self) -> &'static str {
        match self {
            HostSource::Bridge => "bridge",
            HostSource::Sdk => "sdk",
        }
    }

    async fn attempt(self) -> Option<UserRecord> {
        match self {
            HostSource::Bridge => probe_bridge(),
            HostSource::Sdk => probe_sdk().await,
        }
    }
}

/// Runs the strategy chain to completion. Total by construction: every
/// fallible host call is handled inside its strategy, so the caller always
/// receives exactly one resolution.
pub(super) async fn resolve_user() -> Resolution {
    clog("resolver: starting");
    clog(&format!("resolver: url {}", super::location_href()));

    for source in CHAIN {
        if let Some(user) = source.attempt().await {
            clog(&format!(
                "resolver: {} resolved user id={}",
                source.name(),
                user.id
            ));
            return Resolution {
                user,
                source: DataSource::Host,
            };
        }
    }

    clog("resolver: no host source yielded a user, using mock data");
    Resolution {
        user: mock_user(),
        source: DataSource::Mock,
    }
}

/// Step 1: the synchronous bridge probe. Preferred because it needs no
/// async handshake.
fn probe_bridge() -> Option<UserRecord> {
    let Some(bridge) = WebAppBridge::from_window() else {
        clog("bridge: window.Telegram.WebApp absent");
        return None;
    };
    clog(&format!(
        "bridge: webapp detected version={} platform={}",
        bridge.string_field("version").unwrap_or_else(|| "?".to_string()),
        bridge.string_field("platform").unwrap_or_else(|| "?".to_string()),
    ));
    bridge.ready();

    let Some(payload) = bridge.init_data_unsafe_user() else {
        cwarn("bridge: no user in initDataUnsafe");
        return None;
    };
    match payload.into_record() {
        Some(user) => Some(user),
        None => {
            cwarn("bridge: initDataUnsafe user lacks required fields");
            None
        }
    }
}

/// Step 2: the SDK probe, attempted only when the location carries the
/// launch marker. On success also applies host theme colors to the page.
async fn probe_sdk() -> Option<UserRecord> {
    let (hash, search) = super::location_hash_search();
    if !launch::has_launch_marker(&hash, &search) {
        clog("sdk: no launch marker in location, skipping");
        return None;
    }
    clog("sdk: launch marker present, initializing");

    let Some(sdk) = HostSdk::from_window() else {
        cwarn("sdk: global namespace absent");
        return None;
    };

    if let Err(e) = sdk.init().await {
        cerror(&format!("sdk: init failed: {e}"));
        return None;
    }
    clog("sdk: initialized");

    let Some(params) = sdk.retrieve_launch_params() else {
        cwarn("sdk: no launch params retrieved");
        return None;
    };
    clog(&format!(
        "sdk: launch params {}",
        js_interop::json_compact(&params).unwrap_or_else(|| "(opaque)".to_string()),
    ));

    sdk.mini_app_ready();

    let Some(payload) = sdk.init_data_user() else {
        cwarn("sdk: no user returned from initData");
        return None;
    };
    let Some(user) = payload.into_record() else {
        cwarn("sdk: user lacks required fields");
        return None;
    };

    match sdk.theme_colors() {
        Some(colors) => {
            theme::apply(&colors);
            clog("sdk: applied host theme colors");
        }
        None => clog("sdk: no host theme background, keeping defaults"),
    }

    Some(user)
}
