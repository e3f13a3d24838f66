//! Script-to-host message bridge.
//!
//! Hosted content talks to the host on two named channels:
//! - **orientation**: carries the unlock token and nothing else.
//! - **jsHandler**: a generic callback channel. Every payload is logged for
//!   diagnostics, and the unlock token is honored here too.
//!
//! The unlock token is the string `"ok"`, compared case-insensitively, sent
//! either bare or as the `status` field of an object. Anything else is not
//! an error; it simply does not match.

use std::sync::Weak;

use serde_json::Value;
use tracing::{debug, info, warn};

/// Literal token hosted content sends to unlock orientation.
pub const UNLOCK_TOKEN: &str = "ok";

/// The two channels the bridge registers with the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScriptChannel {
    /// Dedicated orientation-signal channel.
    Orientation,
    /// Generic callback channel.
    Callback,
}

impl ScriptChannel {
    pub const ALL: [ScriptChannel; 2] = [ScriptChannel::Orientation, ScriptChannel::Callback];

    /// Name the channel is registered under in the script environment.
    pub fn name(self) -> &'static str {
        match self {
            Self::Orientation => "orientation",
            Self::Callback => "jsHandler",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }
}

/// Outcome of translating one script message.
#[derive(Debug, Clone, PartialEq)]
pub enum BridgeSignal {
    /// The orientation channel carried the unlock token.
    Unlock,
    /// A callback-channel payload. `unlock` is set when it also carried the
    /// unlock token.
    Diagnostic { body: Value, unlock: bool },
    /// Unknown channel, or an orientation message without the token.
    Ignored,
}

impl BridgeSignal {
    pub fn requests_unlock(&self) -> bool {
        matches!(
            self,
            Self::Unlock | Self::Diagnostic { unlock: true, .. }
        )
    }
}

/// Whether `body` is the unlock token, bare or in a `status` field.
pub fn is_unlock_token(body: &Value) -> bool {
    let token = match body {
        Value::String(s) => Some(s.as_str()),
        Value::Object(map) => map.get("status").and_then(Value::as_str),
        _ => None,
    };
    token.is_some_and(|t| t.to_lowercase() == UNLOCK_TOKEN)
}

/// Translate a raw script message into a [`BridgeSignal`].
pub fn parse_incoming_message(channel: &str, body: &Value) -> BridgeSignal {
    match ScriptChannel::from_name(channel) {
        Some(ScriptChannel::Orientation) if is_unlock_token(body) => BridgeSignal::Unlock,
        Some(ScriptChannel::Orientation) | None => BridgeSignal::Ignored,
        Some(ScriptChannel::Callback) => BridgeSignal::Diagnostic {
            unlock: is_unlock_token(body),
            body: body.clone(),
        },
    }
}

/// Receiver of the bridge's single decision.
pub trait UnlockHandler: Send + Sync {
    /// Unlock orientation unless this host already did.
    fn unlock_orientation_if_needed(&self);
}

/// Translates script messages into unlock requests for its owning host.
///
/// Holds only a weak reference to the host, so a message racing with host
/// teardown is dropped instead of keeping the host alive.
pub struct MessageBridge {
    target: Weak<dyn UnlockHandler>,
}

impl MessageBridge {
    pub fn new(target: Weak<dyn UnlockHandler>) -> Self {
        Self { target }
    }

    /// Handle one message from the script environment.
    pub fn handle(&self, channel: &str, body: &Value) -> BridgeSignal {
        let signal = parse_incoming_message(channel, body);

        match &signal {
            BridgeSignal::Diagnostic { body, .. } => {
                info!(channel, payload = %body, "received callback message");
            }
            BridgeSignal::Ignored if ScriptChannel::from_name(channel).is_none() => {
                warn!(channel, "script message on unknown channel ignored");
            }
            BridgeSignal::Ignored => {
                debug!(channel, "script message did not carry the unlock token");
            }
            BridgeSignal::Unlock => {}
        }

        if signal.requests_unlock() {
            match self.target.upgrade() {
                Some(target) => target.unlock_orientation_if_needed(),
                None => debug!(channel, "unlock request dropped: host is gone"),
            }
        }

        signal
    }
}
