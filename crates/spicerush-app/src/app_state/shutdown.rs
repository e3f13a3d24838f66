//! Orderly teardown before the event loop exits.

use super::core::SpiceRushApp;

impl SpiceRushApp {
    /// Drop the web surface before the host so no script message arrives
    /// after the channels are unregistered, then stop background work.
    pub(super) fn shutdown(&mut self) {
        self.webview = None;
        self.host = None;
        self.network = None;

        self.windows.clear();
        self.host_window = None;

        if let Some(rt) = self.tokio_runtime.take() {
            rt.shutdown_background();
        }
        tracing::info!("Content host shut down");
    }
}
