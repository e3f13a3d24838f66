//! Translation from the config file to content host options.

use spicerush_config::SpiceRushConfig;
use spicerush_webview::{HostOptions, OrientationMask, SurfaceSettings};

/// Build the options a content host is created with.
pub(crate) fn host_options(config: &SpiceRushConfig) -> HostOptions {
    let default_orientations: OrientationMask = config.orientation.default.iter().collect();
    let user_agent = config.webview.user_agent.trim();

    HostOptions {
        default_orientations,
        surface: SurfaceSettings {
            inline_media: config.webview.inline_media,
            javascript_enabled: config.webview.javascript,
            suppress_incremental_rendering: config.webview.suppress_incremental_rendering,
            devtools: config.webview.devtools,
            user_agent: (!user_agent.is_empty()).then(|| user_agent.to_string()),
        },
    }
}
