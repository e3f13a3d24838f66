//! `ApplicationHandler` implementation for the winit event loop.

use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::WindowId;

use crate::engine::window_bounds;
use crate::windowing::Reshape;

use super::core::SpiceRushApp;
use super::types::AppEvent;

impl ApplicationHandler<AppEvent> for SpiceRushApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if !self.initialize(event_loop) {
            event_loop.exit();
            return;
        }

        self.drain_ui_tasks();
        self.update_window_title();
    }

    fn user_event(&mut self, _event_loop: &ActiveEventLoop, event: AppEvent) {
        match event {
            AppEvent::UiTasksPending => self.drain_ui_tasks(),
            AppEvent::LoadStateChanged => self.update_window_title(),
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Window close requested");
                self.shutdown();
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if size.width > 0 && size.height > 0 {
                    self.handle_resize(size);
                }
            }

            _ => {}
        }
    }
}

impl SpiceRushApp {
    fn handle_resize(&self, size: PhysicalSize<u32>) {
        let reshape = match self.host_window {
            Some(ref host_window) => host_window.enforce(),
            None => Reshape::Unchanged,
        };
        // A pending correction arrives as another Resized event.
        if let Some(layout) = reshape.layout_size(size) {
            self.sync_webview_bounds(layout);
        }
    }

    /// Lay the web surface out over the whole window at `size`.
    pub(super) fn sync_webview_bounds(&self, size: PhysicalSize<u32>) {
        let (Some(window), Some(webview)) = (self.window.as_ref(), self.webview.as_ref()) else {
            return;
        };
        let logical = size.to_logical::<f64>(window.scale_factor());
        if let Err(e) = webview.set_bounds(window_bounds(logical.width, logical.height)) {
            tracing::warn!("Failed to resize webview: {e}");
        }
    }
}
