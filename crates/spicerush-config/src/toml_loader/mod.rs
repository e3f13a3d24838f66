//! TOML config file loading and creation.

mod loader;
mod paths;
mod template;


pub use loader::{load, load_from_path};
pub use paths::{create_default_config, platform_config_path, ConfigLocation};
