use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::sync::Arc;

use tracing::{debug, info, trace};

use super::{OrientationMask, UiScheduler, WindowSystem};

/// Single source of truth for the orientations the host may rotate into.
///
/// Construct once at application start and share the `Arc` with every
/// content host. Reads are lock-free from any thread; writes are posted to
/// the UI scheduler, where the check-and-set and the window notifications
/// run together.
pub struct OrientationLock {
    mask: AtomicU8,
    /// Set once the mask has been widened to [`OrientationMask::ALL`].
    unlocked: AtomicBool,
    scheduler: Arc<dyn UiScheduler>,
    windows: Arc<dyn WindowSystem>,
}

impl OrientationLock {
    /// Mask in effect before any host seeds its default.
    pub const INITIAL_MASK: OrientationMask = OrientationMask::ALL_BUT_UPSIDE_DOWN;

    pub fn new(scheduler: Arc<dyn UiScheduler>, windows: Arc<dyn WindowSystem>) -> Arc<Self> {
        Arc::new(Self {
            mask: AtomicU8::new(Self::INITIAL_MASK.bits()),
            unlocked: AtomicBool::new(false),
            scheduler,
            windows,
        })
    }

    pub fn current_mask(&self) -> OrientationMask {
        OrientationMask::from_bits_truncate(self.mask.load(Ordering::Acquire))
    }

    /// Whether the mask has ever been widened to all orientations.
    pub fn is_unlocked(&self) -> bool {
        self.unlocked.load(Ordering::Acquire)
    }

    /// Set the allowed orientations. A no-op when `mask` equals the
    /// current value, so redundant calls never re-notify windows.
    ///
    /// Safe to call from any thread; the work runs on the UI scheduler.
    pub fn update_allowed_orientations(self: &Arc<Self>, mask: OrientationMask) {
        let this = Arc::clone(self);
        self.scheduler.post(Box::new(move || this.apply(mask)));
    }

    /// Seed a host's default mask. Ignored once the lock has been unlocked
    /// to all orientations; there is no path back to a restricted mask.
    pub fn apply_default(self: &Arc<Self>, mask: OrientationMask) {
        let this = Arc::clone(self);
        self.scheduler.post(Box::new(move || {
            if this.is_unlocked() {
                debug!(%mask, "default orientation ignored: already unlocked");
                return;
            }
            this.apply(mask);
        }));
    }

    fn apply(&self, mask: OrientationMask) {
        let previous = self.mask.swap(mask.bits(), Ordering::AcqRel);
        if previous == mask.bits() {
            trace!(%mask, "orientation mask unchanged");
            return;
        }
        if mask == OrientationMask::ALL {
            self.unlocked.store(true, Ordering::Release);
        }

        info!(
            from = %OrientationMask::from_bits_truncate(previous),
            to = %mask,
            "allowed orientations changed"
        );

        for window in self.windows.active_windows() {
            window.set_needs_supported_orientations_update(mask);
        }
        self.windows.attempt_rotation_to_device_orientation(mask);
    }
}
