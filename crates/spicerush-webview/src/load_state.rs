//! Load lifecycle snapshot surfaced to the UI.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Discriminated snapshot of web content load progress.
///
/// Values are immutable; the host supersedes the current snapshot with a
/// new one on every engine event. Equality is variant-aware: `Progress`
/// compares its percent exactly and `Error` compares its message exactly.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum LoadState {
    /// No navigation has started yet.
    #[default]
    Idle,
    /// Navigation in flight. `percent` is a fraction in `[0, 1]`.
    Progress { percent: f64 },
    Success,
    /// Navigation failed for a reason other than connectivity.
    Error { message: String },
    /// Navigation failed because the network is unreachable.
    Offline,
}

/// Field-less discriminant of a [`LoadState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoadStateKind {
    Idle,
    Progress,
    Success,
    Error,
    Offline,
}

impl LoadStateKind {
    /// Human readable name of the state.
    pub fn description(self) -> &'static str {
        match self {
            Self::Idle => "Waiting",
            Self::Progress => "Loading",
            Self::Success => "Loaded",
            Self::Error => "Error",
            Self::Offline => "No connection",
        }
    }
}

impl LoadState {
    pub fn idle() -> Self {
        Self::Idle
    }

    /// No range check is applied; the content host clamps before calling.
    pub fn progress(percent: f64) -> Self {
        Self::Progress { percent }
    }

    pub fn success() -> Self {
        Self::Success
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
        }
    }

    pub fn offline() -> Self {
        Self::Offline
    }

    pub fn kind(&self) -> LoadStateKind {
        match self {
            Self::Idle => LoadStateKind::Idle,
            Self::Progress { .. } => LoadStateKind::Progress,
            Self::Success => LoadStateKind::Success,
            Self::Error { .. } => LoadStateKind::Error,
            Self::Offline => LoadStateKind::Offline,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Progress { .. })
    }

    pub fn is_successful(&self) -> bool {
        matches!(self, Self::Success)
    }

    pub fn has_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }

    pub fn percent(&self) -> Option<f64> {
        match self {
            Self::Progress { percent } => Some(*percent),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error { message } => Some(message),
            _ => None,
        }
    }

    /// Whole-number percentage for display, rounded down.
    pub fn progress_percentage(&self) -> Option<u32> {
        self.percent()
            .map(|p| (p.clamp(0.0, 1.0) * 100.0).floor() as u32)
    }
}

impl fmt::Display for LoadState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = self.kind().description();
        match self {
            Self::Progress { .. } => {
                write!(f, "{label} ({}%)", self.progress_percentage().unwrap_or(0))
            }
            Self::Error { message } => write!(f, "{label} ({message})"),
            _ => f.write_str(label),
        }
    }
}
