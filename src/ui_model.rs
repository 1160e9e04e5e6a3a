//! UI models shared between wasm and native.
//!
//! Keeping these out of the wasm-only `web` module allows us to unit-test
//! the badge inventory on the host.

/// Where the displayed profile came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    Host,
    Mock,
}

impl DataSource {
    pub fn from_host_flag(is_host: bool) -> Self {
        if is_host {
            DataSource::Host
        } else {
            DataSource::Mock
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DataSource::Host => "Telegram",
            DataSource::Mock => "Mock",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            DataSource::Host => "badge solid",
            DataSource::Mock => "badge secondary",
        }
    }

    pub fn all() -> &'static [DataSource] {
        &[DataSource::Host, DataSource::Mock]
    }
}

/// Resolver progress as shown in the debug overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Ready,
}

impl LoadState {
    pub fn from_loading_flag(is_loading: bool) -> Self {
        if is_loading {
            LoadState::Loading
        } else {
            LoadState::Ready
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LoadState::Loading => "Loading",
            LoadState::Ready => "Ready",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            LoadState::Loading => "badge danger",
            LoadState::Ready => "badge outline",
        }
    }

    pub fn all() -> &'static [LoadState] {
        &[LoadState::Loading, LoadState::Ready]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_source_inventory_is_stable() {
        let all = DataSource::all();
        assert_eq!(all.len(), 2);

        for source in all {
            assert!(!source.label().trim().is_empty());
            assert!(!source.badge_class().trim().is_empty());
        }
        assert_eq!(DataSource::from_host_flag(true), DataSource::Host);
        assert_eq!(DataSource::from_host_flag(false), DataSource::Mock);
    }

    #[test]
    fn load_state_inventory_is_stable() {
        let all = LoadState::all();
        assert_eq!(all.len(), 2);
        assert_eq!(LoadState::from_loading_flag(true).label(), "Loading");
        assert_eq!(LoadState::from_loading_flag(false).label(), "Ready");
    }
}
