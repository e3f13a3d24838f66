//! Events delivered to the winit loop through its proxy.

/// User events for the application's event loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// Orientation work was queued for the UI thread.
    UiTasksPending,
    /// The content host published a new load state.
    LoadStateChanged,
}
