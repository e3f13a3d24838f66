mod app_state;
mod cli;
mod engine;
mod network;
mod settings;
mod windowing;

use spicerush_common::{HostError, Result};
use spicerush_config::{LoadedConfig, SpiceRushConfig};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

use app_state::{AppEvent, SpiceRushApp};

const DEFAULT_LOG_DIRECTIVE: &str = "spicerush=info";

fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        tracing::error!("Spice Rush crashed: {info}");
        default_hook(info);
    }));
}

fn init_logging(directive: &str) {
    let filter = EnvFilter::from_default_env();
    let filter = match directive.parse() {
        Ok(d) => filter.add_directive(d),
        Err(e) => {
            eprintln!("Invalid log directive {directive:?} ({e}), using {DEFAULT_LOG_DIRECTIVE}");
            match DEFAULT_LOG_DIRECTIVE.parse() {
                Ok(d) => filter.add_directive(d),
                Err(_) => filter.add_directive(LevelFilter::INFO.into()),
            }
        }
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Replace the content URL with a command-line override, if it is loadable.
fn apply_url_override(config: &mut SpiceRushConfig, url: String) -> Result<()> {
    spicerush_config::validation::validate_content_url(&url)?;
    config.content.url = url;
    Ok(())
}

fn run(config: SpiceRushConfig) -> Result<()> {
    let event_loop = EventLoop::<AppEvent>::with_user_event()
        .build()
        .map_err(|e| HostError::EventLoop(e.to_string()))?;
    let mut app = SpiceRushApp::new(config, event_loop.create_proxy());

    tracing::info!("Entering event loop");
    event_loop
        .run_app(&mut app)
        .map_err(|e| HostError::EventLoop(e.to_string()))?;
    Ok(())
}

fn main() {
    install_panic_hook();

    let args = cli::parse();

    // Load config before logging so its level can seed the filter
    let loaded = spicerush_config::load_config(args.config.as_deref());

    let directive = args.log_level.clone().unwrap_or_else(|| {
        let level = loaded
            .as_ref()
            .map(|l| l.config.logging.level)
            .unwrap_or_default();
        format!("spicerush={}", level.as_directive())
    });
    init_logging(&directive);

    tracing::info!("Spice Rush v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {}", path.display());
    }
    let mut config = match loaded {
        Ok(LoadedConfig { config, problems }) => {
            if let Some(e) = problems {
                tracing::warn!("{e}; keeping the parsed config");
            }
            config
        }
        Err(e) => {
            tracing::warn!("Config load failed, using defaults: {e}");
            SpiceRushConfig::default()
        }
    };

    if let Some(url) = args.url {
        if let Err(e) = apply_url_override(&mut config, url) {
            tracing::error!("Rejected --url override: {e}");
            std::process::exit(2);
        }
    }
    tracing::info!(url = %config.content.url, "Config loaded");

    if args.print_config {
        println!("{}", spicerush_config::config_to_json(&config));
        return;
    }

    if let Err(e) = run(config) {
        tracing::error!("{e}");
        std::process::exit(1);
    }
    tracing::info!("Shutdown complete");
}
