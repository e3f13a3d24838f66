//! Background network reachability monitor.
//!
//! Periodically opens a TCP connection to the content origin and records
//! whether it succeeded. The content host reads the latest answer when a
//! navigation finishes.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use spicerush_config::schema::NetworkConfig;
use spicerush_webview::Reachability;
use tokio::net::TcpStream;
use tokio::runtime::Runtime;
use tracing::{debug, info};
use url::Url;

/// Host and port probed for reachability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeTarget {
    pub host: String,
    pub port: u16,
}

impl ProbeTarget {
    /// Derive the probe target from a content URL.
    ///
    /// Returns `None` for URLs without a network origin (e.g. `file://`).
    pub fn from_url(raw: &str) -> Option<Self> {
        let url = Url::parse(raw).ok()?;
        let host = url.host_str()?.to_string();
        let port = url.port_or_known_default()?;
        Some(Self { host, port })
    }
}

/// Probe timing, taken from the `[network]` config section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeSettings {
    pub interval: Duration,
    pub timeout: Duration,
}

impl From<&NetworkConfig> for ProbeSettings {
    fn from(config: &NetworkConfig) -> Self {
        Self {
            interval: Duration::from_secs(u64::from(config.probe_interval_secs)),
            timeout: Duration::from_millis(u64::from(config.probe_timeout_ms)),
        }
    }
}

/// Attempt one TCP connection within `timeout`.
pub async fn probe(target: &ProbeTarget, timeout: Duration) -> bool {
    let addr = (target.host.as_str(), target.port);
    matches!(
        tokio::time::timeout(timeout, TcpStream::connect(addr)).await,
        Ok(Ok(_))
    )
}

/// Latest reachability answer, refreshed by a background task.
pub struct NetworkMonitor {
    reachable: AtomicBool,
}

impl NetworkMonitor {
    /// A monitor that reports reachable until the first probe says otherwise.
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            reachable: AtomicBool::new(true),
        })
    }

    /// Start probing `target` on `runtime`. The task stops once the monitor
    /// is dropped or the runtime shuts down.
    pub fn spawn(self: &Arc<Self>, runtime: &Runtime, target: ProbeTarget, settings: ProbeSettings) {
        let weak = Arc::downgrade(self);
        runtime.spawn(async move {
            let mut ticker = tokio::time::interval(settings.interval);
            loop {
                ticker.tick().await;
                let reachable = probe(&target, settings.timeout).await;
                let Some(monitor) = weak.upgrade() else {
                    debug!("network monitor dropped; stopping probes");
                    break;
                };
                monitor.record(reachable, &target);
            }
        });
    }

    fn record(&self, reachable: bool, target: &ProbeTarget) {
        let previous = self.reachable.swap(reachable, Ordering::AcqRel);
        if previous != reachable {
            info!(
                reachable,
                host = %target.host,
                port = target.port,
                "network reachability changed"
            );
        }
    }
}

impl Reachability for NetworkMonitor {
    fn is_reachable(&self) -> bool {
        self.reachable.load(Ordering::Acquire)
    }
}
