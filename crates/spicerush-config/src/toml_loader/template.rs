//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Spice Rush Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[content]
# url = "https://spicerush.app/play/index.html"

[orientation]
# Orientations allowed until the page sends the unlock token.
# One or more of: portrait, portrait_upside_down, landscape_left, landscape_right
# default = ["portrait"]

[webview]
# inline_media = true
# javascript = true
# suppress_incremental_rendering = false
# devtools = false
# user_agent = ""

[network]
# probe_interval_secs = 5    # 1-300
# probe_timeout_ms = 1500    # 100-10000

[window]
# title = "Spice Rush"
# width = 430                # 200-4096
# height = 860               # 200-4096

[logging]
# level = "INFO"             # TRACE, DEBUG, INFO, WARNING, ERROR
"##
    .to_string()
}
