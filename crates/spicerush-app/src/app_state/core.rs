//! SpiceRushApp struct definition and constructor.

use std::sync::Arc;

use spicerush_config::SpiceRushConfig;
use spicerush_webview::{ContentHost, OrientationLock, TaskQueue};
use winit::event_loop::EventLoopProxy;
use winit::window::Window;

use crate::engine::WryEngine;
use crate::network::NetworkMonitor;
use crate::windowing::{HostWindow, WinitWindowSystem};

use super::scheduler::ProxyScheduler;
use super::types::AppEvent;

/// Top-level application state.
pub struct SpiceRushApp {
    pub(super) config: SpiceRushConfig,
    pub(super) proxy: EventLoopProxy<AppEvent>,

    // Orientation
    pub(super) ui_tasks: Arc<TaskQueue>,
    pub(super) windows: Arc<WinitWindowSystem>,
    pub(super) lock: Arc<OrientationLock>,

    // Windowing
    pub(super) window: Option<Arc<Window>>,
    pub(super) host_window: Option<Arc<HostWindow>>,

    // Web content
    pub(super) engine: Arc<WryEngine>,
    pub(super) host: Option<ContentHost>,
    pub(super) webview: Option<wry::WebView>,

    // Background work
    pub(super) network: Option<Arc<NetworkMonitor>>,
    pub(super) tokio_runtime: Option<tokio::runtime::Runtime>,
}

impl SpiceRushApp {
    pub fn new(config: SpiceRushConfig, proxy: EventLoopProxy<AppEvent>) -> Self {
        let ui_tasks = Arc::new(TaskQueue::new());
        let windows = WinitWindowSystem::new();
        let scheduler = Arc::new(ProxyScheduler::new(Arc::clone(&ui_tasks), proxy.clone()));
        let lock = OrientationLock::new(scheduler, windows.clone());

        Self {
            config,
            proxy,
            ui_tasks,
            windows,
            lock,
            window: None,
            host_window: None,
            engine: WryEngine::new(),
            host: None,
            webview: None,
            network: None,
            tokio_runtime: None,
        }
    }

    /// Run orientation work queued since the last wake-up.
    ///
    /// That work may have resized the window without a later `Resized`
    /// event, so the web surface is laid out again afterwards.
    pub(super) fn drain_ui_tasks(&self) {
        let ran = self.ui_tasks.run_pending();
        if ran == 0 {
            return;
        }
        tracing::trace!(ran, "ran queued UI tasks");
        if let Some(ref window) = self.window {
            self.sync_webview_bounds(window.inner_size());
        }
    }
}
