use std::env;
use std::time::Duration;

use cardpulse::SiteConfig;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 15;

/// Process settings, read once at startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: String,
    pub upstream_timeout: Duration,
    pub site: SiteConfig,
}

impl ServerConfig {
    /// Read `BIND_ADDR`, `UPSTREAM_TIMEOUT_SECS` and the site variables.
    /// Unset or unparsable values fall back to defaults.
    pub fn from_env() -> Self {
        let bind_addr = env::var("BIND_ADDR")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let timeout_secs = env::var("UPSTREAM_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_UPSTREAM_TIMEOUT_SECS);

        Self {
            bind_addr,
            upstream_timeout: Duration::from_secs(timeout_secs),
            site: SiteConfig::from_env(),
        }
    }
}
