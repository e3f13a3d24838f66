//! Browser engine collaborator contract.
//!
//! The content host never drives the engine itself. It needs three things
//! from it: a configuration surface, a script-message facility keyed by
//! channel name, and navigation signals (delivered through
//! [`NavigationSink`](crate::NavigationSink)).

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tracing::debug;

/// Callback invoked with the body of a script message.
pub type ScriptMessageHandler = Arc<dyn Fn(serde_json::Value) + Send + Sync>;

/// Settings applied once to a web surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurfaceSettings {
    /// Play media inline without a user gesture.
    pub inline_media: bool,
    pub javascript_enabled: bool,
    /// Hold rendering until the document has fully loaded.
    pub suppress_incremental_rendering: bool,
    pub devtools: bool,
    pub user_agent: Option<String>,
}

impl Default for SurfaceSettings {
    fn default() -> Self {
        Self {
            inline_media: true,
            javascript_enabled: true,
            suppress_incremental_rendering: false,
            devtools: cfg!(debug_assertions),
            user_agent: None,
        }
    }
}

/// The embedded browser engine, as seen by the content host.
pub trait BrowserEngine: Send + Sync {
    fn configure(&self, settings: &SurfaceSettings);

    /// Route script messages posted on `channel` to `handler`, replacing
    /// any previous handler for that channel.
    fn add_script_message_handler(&self, channel: &str, handler: ScriptMessageHandler);

    /// Remove `handler` from `channel`. Does nothing if another handler
    /// has since been registered on that channel.
    fn remove_script_message_handler(&self, channel: &str, handler: &ScriptMessageHandler);
}

/// Whether the network needed by the hosted content is reachable.
pub trait Reachability: Send + Sync {
    fn is_reachable(&self) -> bool;
}

/// Reachability for hosts without a network monitor.
#[derive(Debug, Default, Clone, Copy)]
pub struct AlwaysReachable;

impl Reachability for AlwaysReachable {
    fn is_reachable(&self) -> bool {
        true
    }
}

/// Channel-name to handler table shared between an engine adapter and its
/// message delivery callback.
#[derive(Default)]
pub struct ScriptHandlerTable {
    handlers: Mutex<HashMap<String, ScriptMessageHandler>>,
}

impl ScriptHandlerTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, channel: &str, handler: ScriptMessageHandler) {
        if let Ok(mut handlers) = self.handlers.lock() {
            handlers.insert(channel.to_string(), handler);
        }
    }

    /// Remove `handler` if it is still the one registered on `channel`.
    /// Returns whether anything was removed.
    pub fn remove(&self, channel: &str, handler: &ScriptMessageHandler) -> bool {
        let Ok(mut handlers) = self.handlers.lock() else {
            return false;
        };
        match handlers.get(channel) {
            Some(current) if Arc::ptr_eq(current, handler) => {
                handlers.remove(channel);
                true
            }
            Some(_) => {
                debug!(channel, "handler not removed: channel was re-registered");
                false
            }
            None => false,
        }
    }

    pub fn contains(&self, channel: &str) -> bool {
        self.handlers
            .lock()
            .map(|handlers| handlers.contains_key(channel))
            .unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.handlers.lock().map(|h| h.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Deliver `body` to the handler for `channel`. Returns `false` when no
    /// handler is registered.
    ///
    /// The handler runs after the table lock is released, so it may
    /// register or remove handlers itself.
    pub fn dispatch(&self, channel: &str, body: serde_json::Value) -> bool {
        let handler = match self.handlers.lock() {
            Ok(handlers) => handlers.get(channel).cloned(),
            Err(_) => None,
        };
        match handler {
            Some(handler) => {
                handler(body);
                true
            }
            None => {
                debug!(channel, "script message dropped: no handler");
                false
            }
        }
    }
}
