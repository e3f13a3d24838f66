//! Content host core for embedding hosted web content in a native shell.
//!
//! Provides:
//! - [`LoadState`]: the discriminated load snapshot the UI renders
//! - [`OrientationLock`]: the process-wide allowed-orientation mask
//! - [`MessageBridge`]: translation of script messages into unlock requests
//! - [`ContentHost`]: the web surface owner tying engine events, the bridge,
//!   and the orientation lock together
//!
//! The browser engine and the window system are collaborators behind the
//! [`BrowserEngine`] and [`WindowSystem`] traits.

pub mod bridge;
pub mod engine;
pub mod events;
pub mod host;
pub mod ipc;
pub mod load_state;
pub mod orientation;

#[cfg(test)]
pub(crate) mod testing;

pub use bridge::{parse_incoming_message, BridgeSignal, MessageBridge, ScriptChannel, UnlockHandler};
pub use engine::{
    AlwaysReachable, BrowserEngine, Reachability, ScriptHandlerTable, ScriptMessageHandler,
    SurfaceSettings,
};
pub use events::{NavigationEvent, NavigationFailure};
pub use host::{ContentHost, HostOptions, NavigationSink};
pub use ipc::IpcMessage;
pub use load_state::{LoadState, LoadStateKind};
pub use orientation::{
    ImmediateScheduler, NoWindows, OrientationLock, OrientationMask, OrientationWindow,
    TaskQueue, UiScheduler, UiTask, WindowSystem,
};
