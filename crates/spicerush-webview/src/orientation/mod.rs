//! Process-wide orientation authority.
//!
//! [`OrientationLock`] owns the single allowed-orientation mask shared by
//! every content host. Writes are marshalled onto the UI context through a
//! [`UiScheduler`] and fan out to the host's [`WindowSystem`].

mod lock;
mod mask;
mod scheduler;
mod window;

pub use lock::OrientationLock;
pub use mask::OrientationMask;
pub use scheduler::{ImmediateScheduler, TaskQueue, UiScheduler, UiTask};
pub use window::{NoWindows, OrientationWindow, WindowSystem};
