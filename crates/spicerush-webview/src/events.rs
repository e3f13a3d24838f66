//! Navigation events reported by the browser engine.

use serde::{Deserialize, Serialize};

/// Why a navigation failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavigationFailure {
    /// The network is unreachable.
    Offline,
    /// Any other failure, with the engine's human readable description.
    Other(String),
}

/// A navigation lifecycle signal from the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum NavigationEvent {
    /// Navigation has started.
    Started,
    /// Fractional completion of the current navigation.
    Progress(f64),
    /// Navigation finished without an engine error.
    Finished,
    Failed(NavigationFailure),
}

impl NavigationEvent {
    pub fn failed(description: impl Into<String>) -> Self {
        Self::Failed(NavigationFailure::Other(description.into()))
    }

    pub fn offline() -> Self {
        Self::Failed(NavigationFailure::Offline)
    }
}
