//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Coordinates the window, the web surface, the content host,
//! and the process-wide orientation lock.

mod core;
mod event_handler;
mod init;
mod scheduler;
mod shutdown;
mod title;
mod types;

pub use core::SpiceRushApp;
pub use types::AppEvent;
