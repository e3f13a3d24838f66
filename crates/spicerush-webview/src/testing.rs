//! Recording fakes for the engine and window system collaborators.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::engine::{
    BrowserEngine, Reachability, ScriptHandlerTable, ScriptMessageHandler, SurfaceSettings,
};
use crate::orientation::{OrientationMask, OrientationWindow, WindowSystem};

#[derive(Default)]
pub(crate) struct RecordingWindow {
    refreshes: AtomicUsize,
    last_mask: Mutex<Option<OrientationMask>>,
}

impl OrientationWindow for RecordingWindow {
    fn set_needs_supported_orientations_update(&self, allowed: OrientationMask) {
        self.refreshes.fetch_add(1, Ordering::SeqCst);
        *self.last_mask.lock().unwrap() = Some(allowed);
    }
}

pub(crate) struct RecordingWindows {
    windows: Vec<Arc<RecordingWindow>>,
    rotations: AtomicUsize,
}

impl RecordingWindows {
    pub(crate) fn with_windows(count: usize) -> Arc<Self> {
        Arc::new(Self {
            windows: (0..count).map(|_| Arc::new(RecordingWindow::default())).collect(),
            rotations: AtomicUsize::new(0),
        })
    }

    /// Total re-query requests across all windows.
    pub(crate) fn refreshes(&self) -> usize {
        self.windows
            .iter()
            .map(|w| w.refreshes.load(Ordering::SeqCst))
            .sum()
    }

    pub(crate) fn rotations(&self) -> usize {
        self.rotations.load(Ordering::SeqCst)
    }

    pub(crate) fn last_mask(&self) -> Option<OrientationMask> {
        self.windows
            .first()
            .and_then(|w| *w.last_mask.lock().unwrap())
    }
}

impl WindowSystem for RecordingWindows {
    fn active_windows(&self) -> Vec<Arc<dyn OrientationWindow>> {
        self.windows
            .iter()
            .map(|w| Arc::clone(w) as Arc<dyn OrientationWindow>)
            .collect()
    }

    fn attempt_rotation_to_device_orientation(&self, _allowed: OrientationMask) {
        self.rotations.fetch_add(1, Ordering::SeqCst);
    }
}

/// Engine fake that records configuration and routes posted messages
/// through a real handler table.
#[derive(Default)]
pub(crate) struct RecordingEngine {
    handlers: ScriptHandlerTable,
    configured: Mutex<Vec<SurfaceSettings>>,
    removed: Mutex<Vec<String>>,
}

impl RecordingEngine {
    pub(crate) fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Simulate the page posting `body` on `channel`.
    pub(crate) fn post(&self, channel: &str, body: serde_json::Value) -> bool {
        self.handlers.dispatch(channel, body)
    }

    pub(crate) fn is_registered(&self, channel: &str) -> bool {
        self.handlers.contains(channel)
    }

    pub(crate) fn configured(&self) -> Vec<SurfaceSettings> {
        self.configured.lock().unwrap().clone()
    }

    pub(crate) fn removed(&self) -> Vec<String> {
        self.removed.lock().unwrap().clone()
    }
}

impl BrowserEngine for RecordingEngine {
    fn configure(&self, settings: &SurfaceSettings) {
        self.configured.lock().unwrap().push(settings.clone());
    }

    fn add_script_message_handler(&self, channel: &str, handler: ScriptMessageHandler) {
        self.handlers.insert(channel, handler);
    }

    fn remove_script_message_handler(&self, channel: &str, handler: &ScriptMessageHandler) {
        self.handlers.remove(channel, handler);
        self.removed.lock().unwrap().push(channel.to_string());
    }
}

/// Reachability whose answer the test flips.
pub(crate) struct FlagReachability(AtomicBool);

impl FlagReachability {
    pub(crate) fn new(reachable: bool) -> Arc<Self> {
        Arc::new(Self(AtomicBool::new(reachable)))
    }

    pub(crate) fn set(&self, reachable: bool) {
        self.0.store(reachable, Ordering::SeqCst);
    }
}

impl Reachability for FlagReachability {
    fn is_reachable(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}
