//! Window title management: reflects the current load state.

use spicerush_webview::LoadState;

use super::core::SpiceRushApp;

/// Short status text for a load state.
pub(super) fn status_text(state: &LoadState) -> Option<String> {
    match state {
        LoadState::Idle => Some("Waiting".to_string()),
        LoadState::Progress { .. } => Some(format!(
            "Loading {}%",
            state.progress_percentage().unwrap_or(0)
        )),
        LoadState::Success => None,
        LoadState::Error { message } => Some(format!("Error: {message}")),
        LoadState::Offline => Some("Offline".to_string()),
    }
}

/// Format: "{base} | {status}", or just "{base}" once content has loaded.
pub(super) fn compose_title(base: &str, state: &LoadState) -> String {
    match status_text(state) {
        Some(status) => format!("{base} | {status}"),
        None => base.to_string(),
    }
}

impl SpiceRushApp {
    pub(super) fn update_window_title(&self) {
        let (Some(window), Some(host)) = (self.window.as_ref(), self.host.as_ref()) else {
            return;
        };
        window.set_title(&compose_title(&self.config.window.title, &host.load_state()));
    }
}
