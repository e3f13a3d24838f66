//! Desktop window system for the orientation lock.
//!
//! Desktop windows have no device orientation. A window wider than it is
//! tall counts as landscape, anything else as portrait. When the allowed
//! mask rules out the current shape, the window's inner size is swapped.

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Arc, Mutex};

use spicerush_webview::{OrientationMask, OrientationWindow, WindowSystem};
use tracing::debug;
use winit::dpi::PhysicalSize;
use winit::window::Window;

/// The size a `width` x `height` window should take to satisfy `allowed`,
/// or `None` if its shape is already permitted or cannot be fixed by a swap.
pub(crate) fn reshape_for_mask(
    width: u32,
    height: u32,
    allowed: OrientationMask,
) -> Option<(u32, u32)> {
    let landscape = width > height;
    let portrait = height > width;
    let swap = (landscape && !allowed.allows_landscape() && allowed.allows_portrait())
        || (portrait && !allowed.allows_portrait() && allowed.allows_landscape());
    swap.then_some((height, width))
}

/// Outcome of [`HostWindow::enforce`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reshape {
    /// The current shape is allowed.
    Unchanged,
    /// A new size was requested and will arrive as a `Resized` event.
    Pending,
    /// The platform applied the new size immediately.
    Applied(PhysicalSize<u32>),
}

impl Reshape {
    /// The size the web surface should be laid out at after a window
    /// reported `reported`, or `None` while a corrected size is pending.
    pub fn layout_size(self, reported: PhysicalSize<u32>) -> Option<PhysicalSize<u32>> {
        match self {
            Self::Unchanged => Some(reported),
            Self::Pending => None,
            Self::Applied(size) => Some(size),
        }
    }
}

/// A top-level winit window tracked by the orientation lock.
pub struct HostWindow {
    window: Arc<Window>,
    allowed: AtomicU8,
}

impl HostWindow {
    pub fn new(window: Arc<Window>, allowed: OrientationMask) -> Arc<Self> {
        Arc::new(Self {
            window,
            allowed: AtomicU8::new(allowed.bits()),
        })
    }

    /// Orientations this window last re-queried.
    pub fn supported_orientations(&self) -> OrientationMask {
        OrientationMask::from_bits_truncate(self.allowed.load(Ordering::Acquire))
    }

    /// Request a swapped inner size if the current shape is not allowed.
    pub fn enforce(&self) -> Reshape {
        let size = self.window.inner_size();
        let Some((width, height)) =
            reshape_for_mask(size.width, size.height, self.supported_orientations())
        else {
            return Reshape::Unchanged;
        };
        debug!(
            from = ?(size.width, size.height),
            to = ?(width, height),
            "reshaping window to an allowed orientation"
        );
        match self.window.request_inner_size(PhysicalSize::new(width, height)) {
            Some(applied) => Reshape::Applied(applied),
            None => Reshape::Pending,
        }
    }
}

impl OrientationWindow for HostWindow {
    fn set_needs_supported_orientations_update(&self, allowed: OrientationMask) {
        self.allowed.store(allowed.bits(), Ordering::Release);
        self.enforce();
        self.window.request_redraw();
    }
}

/// The application's windows, as seen by the orientation lock.
#[derive(Default)]
pub struct WinitWindowSystem {
    windows: Mutex<Vec<Arc<HostWindow>>>,
}

impl WinitWindowSystem {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn add(&self, window: Arc<HostWindow>) {
        if let Ok(mut windows) = self.windows.lock() {
            windows.push(window);
        }
    }

    pub fn clear(&self) {
        if let Ok(mut windows) = self.windows.lock() {
            windows.clear();
        }
    }

    fn snapshot(&self) -> Vec<Arc<HostWindow>> {
        self.windows
            .lock()
            .map(|w| w.clone())
            .unwrap_or_default()
    }
}

impl WindowSystem for WinitWindowSystem {
    fn active_windows(&self) -> Vec<Arc<dyn OrientationWindow>> {
        self.snapshot()
            .into_iter()
            .map(|w| w as Arc<dyn OrientationWindow>)
            .collect()
    }

    fn attempt_rotation_to_device_orientation(&self, _allowed: OrientationMask) {
        for window in self.snapshot() {
            window.enforce();
        }
    }
}
