//! The content host: owns one web surface, derives its load state, and
//! gates the one-shot orientation unlock.

mod navigation;
mod registration;

#[cfg(test)]
mod tests;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Weak};

use tokio::sync::watch;
use tracing::{debug, info};

use crate::bridge::{MessageBridge, UnlockHandler};
use crate::engine::{AlwaysReachable, BrowserEngine, Reachability, SurfaceSettings};
use crate::events::NavigationEvent;
use crate::load_state::LoadState;
use crate::orientation::{OrientationLock, OrientationMask};

pub use navigation::NavigationSink;
use registration::ChannelRegistration;

/// Options supplied when a content host is created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostOptions {
    /// Orientations allowed until the content unlocks rotation.
    pub default_orientations: OrientationMask,
    pub surface: SurfaceSettings,
}

impl Default for HostOptions {
    fn default() -> Self {
        Self {
            default_orientations: OrientationMask::PORTRAIT,
            surface: SurfaceSettings::default(),
        }
    }
}

/// State shared between the host, its bridge, and its navigation sink.
pub(crate) struct HostShared {
    lock: Arc<OrientationLock>,
    unlocked: AtomicBool,
    load_state: watch::Sender<LoadState>,
    reachability: Arc<dyn Reachability>,
}

impl HostShared {
    fn publish(&self, state: LoadState) {
        debug!(%state, "load state");
        self.load_state.send_replace(state);
    }

    pub(crate) fn handle_navigation(&self, event: NavigationEvent) {
        self.publish(navigation::derive_load_state(event, self.reachability.as_ref()));
    }
}

impl UnlockHandler for HostShared {
    fn unlock_orientation_if_needed(&self) {
        if self.unlocked.swap(true, Ordering::AcqRel) {
            debug!("orientation already unlocked by this host");
            return;
        }
        info!("content signalled ready; unlocking orientation");
        self.lock.update_allowed_orientations(OrientationMask::ALL);
    }
}

/// Owns the embedded web surface for the lifetime of one host instance.
///
/// Creation configures the surface and registers the bridge's channels with
/// the engine. Dropping the host unregisters them.
pub struct ContentHost {
    _channels: ChannelRegistration,
    shared: Arc<HostShared>,
}

impl ContentHost {
    pub fn new(
        engine: Arc<dyn BrowserEngine>,
        lock: Arc<OrientationLock>,
        options: HostOptions,
    ) -> Self {
        Self::with_reachability(engine, lock, options, Arc::new(AlwaysReachable))
    }

    pub fn with_reachability(
        engine: Arc<dyn BrowserEngine>,
        lock: Arc<OrientationLock>,
        options: HostOptions,
        reachability: Arc<dyn Reachability>,
    ) -> Self {
        let (load_state, _) = watch::channel(LoadState::Idle);
        let shared = Arc::new(HostShared {
            lock,
            unlocked: AtomicBool::new(false),
            load_state,
            reachability,
        });

        engine.configure(&options.surface);

        let weak = Arc::downgrade(&shared);
        let target: Weak<dyn UnlockHandler> = weak;
        let bridge = Arc::new(MessageBridge::new(target));
        let channels = ChannelRegistration::register(engine, bridge);

        shared.lock.apply_default(options.default_orientations);

        info!(
            default = %options.default_orientations,
            "content host created"
        );

        Self {
            _channels: channels,
            shared,
        }
    }

    /// The latest load state.
    pub fn load_state(&self) -> LoadState {
        self.shared.load_state.borrow().clone()
    }

    /// Observe load state changes. Only the latest value is retained.
    pub fn subscribe(&self) -> watch::Receiver<LoadState> {
        self.shared.load_state.subscribe()
    }

    /// Handle for delivering engine navigation events from any thread.
    pub fn navigation_sink(&self) -> NavigationSink {
        NavigationSink::new(Arc::downgrade(&self.shared))
    }

    pub fn handle_navigation(&self, event: NavigationEvent) {
        self.shared.handle_navigation(event);
    }

    /// Widen the shared lock to all orientations, once per host instance.
    pub fn unlock_orientation_if_needed(&self) {
        self.shared.unlock_orientation_if_needed();
    }

    /// Whether this host instance has performed its unlock.
    pub fn is_orientation_unlocked(&self) -> bool {
        self.shared.unlocked.load(Ordering::Acquire)
    }

    /// Orientations the host window may currently rotate into.
    pub fn supported_orientations(&self) -> OrientationMask {
        self.shared.lock.current_mask()
    }

    pub fn orientation_lock(&self) -> &Arc<OrientationLock> {
        &self.shared.lock
    }
}
