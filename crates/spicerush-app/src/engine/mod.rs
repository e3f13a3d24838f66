//! wry-backed browser engine.
//!
//! wry exposes a single IPC pipe, so the engine keeps its own handler table
//! keyed by channel name and routes `{kind, payload}` envelopes into it.
//! Page-load callbacks and readyState progress reports are forwarded to the
//! content host through its [`NavigationSink`].

mod handlers;

use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use spicerush_webview::{
    ipc, BrowserEngine, NavigationSink, ScriptChannel, ScriptHandlerTable, ScriptMessageHandler,
    SurfaceSettings,
};
use tracing::{debug, warn};
use wry::raw_window_handle;
use wry::{WebView, WebViewBuilder};

/// Browser engine backed by the platform webview.
pub struct WryEngine {
    settings: Mutex<SurfaceSettings>,
    handlers: Arc<ScriptHandlerTable>,
}

impl WryEngine {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            settings: Mutex::new(SurfaceSettings::default()),
            handlers: Arc::new(ScriptHandlerTable::new()),
        })
    }

    fn settings(&self) -> SurfaceSettings {
        self.settings
            .lock()
            .map(|s| s.clone())
            .unwrap_or_default()
    }

    /// Create the web surface as a child of `window` and start loading `url`.
    pub fn build<W: raw_window_handle::HasWindowHandle>(
        &self,
        window: &W,
        bounds: wry::Rect,
        url: &str,
        sink: NavigationSink,
    ) -> Result<WebView, wry::Error> {
        let settings = self.settings();
        let channels: Vec<&str> = ScriptChannel::ALL.iter().map(|c| c.name()).collect();
        let script = ipc::init_script(&channels);
        // Progress reports are only meaningful between Started and Finished.
        let loading = Arc::new(AtomicBool::new(false));

        let mut builder = WebViewBuilder::new()
            .with_bounds(bounds)
            .with_devtools(settings.devtools)
            .with_autoplay(settings.inline_media)
            .with_initialization_script(&script);

        if let Some(ua) = &settings.user_agent {
            builder = builder.with_user_agent(ua.as_str());
        }

        builder = handlers::attach_ipc_handler(
            builder,
            Arc::clone(&self.handlers),
            sink.clone(),
            Arc::clone(&loading),
        );
        builder = handlers::attach_page_load_handler(builder, sink, loading);

        let webview = builder.with_url(url).build_as_child(window)?;

        debug!(url = %url, "WebView created");
        Ok(webview)
    }
}

impl BrowserEngine for WryEngine {
    fn configure(&self, settings: &SurfaceSettings) {
        if !settings.javascript_enabled {
            warn!("the platform webview cannot disable JavaScript; setting ignored");
        }
        if settings.suppress_incremental_rendering {
            debug!("incremental rendering suppression is not supported; setting ignored");
        }
        if let Ok(mut current) = self.settings.lock() {
            *current = settings.clone();
        }
    }

    fn add_script_message_handler(&self, channel: &str, handler: ScriptMessageHandler) {
        self.handlers.insert(channel, handler);
    }

    fn remove_script_message_handler(&self, channel: &str, handler: &ScriptMessageHandler) {
        self.handlers.remove(channel, handler);
    }
}

/// Full-window bounds in logical coordinates.
pub fn window_bounds(width: f64, height: f64) -> wry::Rect {
    wry::Rect {
        position: wry::dpi::Position::Logical(wry::dpi::LogicalPosition::new(0.0, 0.0)),
        size: wry::dpi::Size::Logical(wry::dpi::LogicalSize::new(width, height)),
    }
}
