use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),

    #[error("could not determine the platform config directory")]
    NoConfigDir,

    #[error("config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Failures while standing up the native shell around the content host.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("window creation error: {0}")]
    WindowCreation(String),

    #[error("webview error: {0}")]
    WebView(String),

    #[error("event loop error: {0}")]
    EventLoop(String),
}

/// Any failure that stops the application from starting.
#[derive(Debug, thiserror::Error)]
pub enum SpiceRushError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Host(#[from] HostError),
}
