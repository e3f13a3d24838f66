//! Host window system collaborator.

use std::sync::Arc;

use super::OrientationMask;

/// A top-level window whose root view answers supported-orientation queries.
pub trait OrientationWindow: Send + Sync {
    /// Ask the window to re-query its supported orientations.
    fn set_needs_supported_orientations_update(&self, allowed: OrientationMask);
}

/// The host application's window/scene collection.
///
/// Called only from the UI context.
pub trait WindowSystem: Send + Sync {
    fn active_windows(&self) -> Vec<Arc<dyn OrientationWindow>>;

    /// Rotate to the physical device orientation if `allowed` permits it.
    fn attempt_rotation_to_device_orientation(&self, allowed: OrientationMask);
}

/// A window system with no scenes. Every notification is a no-op.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoWindows;

impl WindowSystem for NoWindows {
    fn active_windows(&self) -> Vec<Arc<dyn OrientationWindow>> {
        Vec::new()
    }

    fn attempt_rotation_to_device_orientation(&self, _allowed: OrientationMask) {}
}
