//! Load state derivation from engine navigation events.

use std::sync::Weak;

use tracing::debug;

use crate::engine::Reachability;
use crate::events::{NavigationEvent, NavigationFailure};
use crate::load_state::LoadState;

use super::HostShared;

/// Map one navigation event to the state the UI should show.
pub(crate) fn derive_load_state(event: NavigationEvent, reachability: &dyn Reachability) -> LoadState {
    match event {
        NavigationEvent::Started => LoadState::progress(0.0),
        NavigationEvent::Progress(p) => LoadState::progress(clamp_fraction(p)),
        NavigationEvent::Finished if reachability.is_reachable() => LoadState::success(),
        NavigationEvent::Finished => LoadState::offline(),
        NavigationEvent::Failed(NavigationFailure::Offline) => LoadState::offline(),
        NavigationEvent::Failed(NavigationFailure::Other(description)) => {
            LoadState::error(description)
        }
    }
}

/// Clamp an engine-reported fraction into `[0, 1]`. NaN reads as no progress.
pub(crate) fn clamp_fraction(p: f64) -> f64 {
    if p.is_nan() {
        0.0
    } else {
        p.clamp(0.0, 1.0)
    }
}

/// Cloneable, thread-safe entry point for engine navigation callbacks.
///
/// Events delivered after the host is dropped are discarded.
#[derive(Clone)]
pub struct NavigationSink {
    shared: Weak<HostShared>,
}

impl NavigationSink {
    pub(super) fn new(shared: Weak<HostShared>) -> Self {
        Self { shared }
    }

    pub fn dispatch(&self, event: NavigationEvent) {
        match self.shared.upgrade() {
            Some(shared) => shared.handle_navigation(event),
            None => debug!(?event, "navigation event dropped: host is gone"),
        }
    }

    pub fn is_attached(&self) -> bool {
        self.shared.strong_count() > 0
    }
}
