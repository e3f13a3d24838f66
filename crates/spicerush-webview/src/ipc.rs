//! Wire envelope for engines with a single IPC pipe.
//!
//! Engines that expose one `postMessage` pipe instead of named handlers
//! carry the channel name inside a JSON envelope:
//! `window.ipc.postMessage(JSON.stringify({kind, payload}))`.
//! [`init_script`] installs a shim so hosted content can keep calling
//! `window.webkit.messageHandlers.<channel>.postMessage(body)`.

use serde::{Deserialize, Serialize};

/// Reserved kind used by the shim to report document load progress.
pub const PROGRESS_KIND: &str = "__spicerush_progress";

/// A message from JavaScript to the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IpcMessage {
    /// Channel name the script posted on.
    pub kind: String,
    /// Message body, passed through untouched.
    #[serde(default)]
    pub payload: serde_json::Value,
}

impl IpcMessage {
    /// Parse an envelope from a raw `postMessage` string.
    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }

    pub fn new(kind: impl Into<String>, payload: serde_json::Value) -> Self {
        Self {
            kind: kind.into(),
            payload,
        }
    }

    /// The reported fraction when this is a progress envelope.
    pub fn progress(&self) -> Option<f64> {
        if self.kind == PROGRESS_KIND {
            self.payload.as_f64()
        } else {
            None
        }
    }
}

/// Build the initialization script exposing `channels` to page scripts.
pub fn init_script(channels: &[&str]) -> String {
    let names = serde_json::to_string(channels).unwrap_or_else(|_| "[]".to_string());
    format!(
        r#"
(function() {{
    var post = function(kind, payload) {{
        window.ipc.postMessage(JSON.stringify({{
            kind: kind,
            payload: payload === undefined ? null : payload
        }}));
    }};

    window.webkit = window.webkit || {{}};
    window.webkit.messageHandlers = window.webkit.messageHandlers || {{}};
    {names}.forEach(function(name) {{
        window.webkit.messageHandlers[name] = {{
            postMessage: function(body) {{ post(name, body); }}
        }};
    }});

    var report = function() {{
        var fraction = {{ loading: 0.1, interactive: 0.5 }}[document.readyState];
        if (fraction !== undefined) {{
            post("{progress}", fraction);
        }}
    }};
    document.addEventListener("readystatechange", report);
    report();
}})();
"#,
        progress = PROGRESS_KIND,
    )
}
