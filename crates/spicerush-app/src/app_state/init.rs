//! Window creation, content host setup, and webview construction.

use std::sync::Arc;

use spicerush_common::HostError;
use spicerush_webview::{AlwaysReachable, ContentHost, NavigationEvent, Reachability};
use winit::dpi::LogicalSize;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowAttributes};

use crate::engine::window_bounds;
use crate::network::{NetworkMonitor, ProbeSettings, ProbeTarget};
use crate::settings::host_options;
use crate::windowing::HostWindow;

use super::core::SpiceRushApp;
use super::types::AppEvent;

impl SpiceRushApp {
    /// Create the window, the content host, and its web surface.
    /// Returns `false` if the window could not be created and the event
    /// loop should exit. A webview failure is shown as a load error instead.
    pub(super) fn initialize(&mut self, event_loop: &ActiveEventLoop) -> bool {
        self.start_runtime();

        let window = match self.create_window(event_loop) {
            Ok(w) => w,
            Err(e) => {
                tracing::error!("{e}");
                return false;
            }
        };

        let host_window = HostWindow::new(Arc::clone(&window), self.lock.current_mask());
        self.windows.add(Arc::clone(&host_window));
        self.host_window = Some(host_window);
        self.window = Some(Arc::clone(&window));

        let reachability = self.start_network_monitor();
        let host = ContentHost::with_reachability(
            self.engine.clone(),
            Arc::clone(&self.lock),
            host_options(&self.config),
            reachability,
        );
        self.watch_load_state(&host);

        let size = window.inner_size().to_logical::<f64>(window.scale_factor());
        let bounds = window_bounds(size.width, size.height);
        match self
            .engine
            .build(&*window, bounds, &self.config.content.url, host.navigation_sink())
        {
            Ok(webview) => self.webview = Some(webview),
            Err(e) => {
                let err = HostError::WebView(e.to_string());
                tracing::error!("{err}");
                host.handle_navigation(NavigationEvent::failed(err.to_string()));
            }
        }

        self.host = Some(host);
        true
    }

    fn create_window(&self, event_loop: &ActiveEventLoop) -> Result<Arc<Window>, HostError> {
        let attrs = WindowAttributes::default()
            .with_title(self.config.window.title.as_str())
            .with_inner_size(LogicalSize::new(
                f64::from(self.config.window.width),
                f64::from(self.config.window.height),
            ));

        event_loop
            .create_window(attrs)
            .map(Arc::new)
            .map_err(|e| HostError::WindowCreation(e.to_string()))
    }

    fn start_runtime(&mut self) {
        if self.tokio_runtime.is_some() {
            return;
        }
        match tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
        {
            Ok(rt) => self.tokio_runtime = Some(rt),
            Err(e) => tracing::warn!("Failed to start background runtime: {e}"),
        }
    }

    /// Start probing the content origin. Hosts without a network origin or
    /// without a runtime treat the network as always reachable.
    fn start_network_monitor(&mut self) -> Arc<dyn Reachability> {
        let (Some(rt), Some(target)) = (
            self.tokio_runtime.as_ref(),
            ProbeTarget::from_url(&self.config.content.url),
        ) else {
            return Arc::new(AlwaysReachable);
        };

        let monitor = NetworkMonitor::new();
        monitor.spawn(rt, target.clone(), ProbeSettings::from(&self.config.network));
        tracing::info!(host = %target.host, port = target.port, "Network monitor started");

        self.network = Some(Arc::clone(&monitor));
        monitor
    }

    /// Forward load-state changes to the event loop so the title follows.
    fn watch_load_state(&self, host: &ContentHost) {
        let Some(rt) = self.tokio_runtime.as_ref() else {
            return;
        };
        let mut rx = host.subscribe();
        let proxy = self.proxy.clone();
        rt.spawn(async move {
            while rx.changed().await.is_ok() {
                if proxy.send_event(AppEvent::LoadStateChanged).is_err() {
                    break;
                }
            }
        });
    }
}
