//! Scoped registration of the bridge's script channels.

use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use crate::bridge::{MessageBridge, ScriptChannel};
use crate::engine::{BrowserEngine, ScriptMessageHandler};

/// Both bridge channels, registered together and released together on drop.
///
/// Release only removes the handlers this registration installed, so a
/// host created on the same engine before this one is dropped keeps its
/// channels.
pub(crate) struct ChannelRegistration {
    engine: Arc<dyn BrowserEngine>,
    handlers: Vec<(ScriptChannel, ScriptMessageHandler)>,
}

impl ChannelRegistration {
    pub(crate) fn register(engine: Arc<dyn BrowserEngine>, bridge: Arc<MessageBridge>) -> Self {
        let handlers = ScriptChannel::ALL
            .into_iter()
            .map(|channel| {
                let bridge = Arc::clone(&bridge);
                let handler: ScriptMessageHandler = Arc::new(move |body: Value| {
                    bridge.handle(channel.name(), &body);
                });
                engine.add_script_message_handler(channel.name(), Arc::clone(&handler));
                (channel, handler)
            })
            .collect();
        debug!("script channels registered");
        Self { engine, handlers }
    }
}

impl Drop for ChannelRegistration {
    fn drop(&mut self) {
        for (channel, handler) in &self.handlers {
            self.engine
                .remove_script_message_handler(channel.name(), handler);
        }
        debug!("script channels released");
    }
}
