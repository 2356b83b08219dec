//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::navigation::interceptor::{DEFAULT_SITE_ORIGIN, DEFAULT_TITLE};
use crate::routing::StaticPages;

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct SiteConfig {
    /// Origin and fallback title used by the navigation interceptor.
    pub site: SiteSection,

    /// Metadata for the home and FAQ routes.
    pub pages: StaticPages,

    /// Where platform descriptors come from.
    pub registry: RegistrySource,

    /// Prerender server settings.
    pub server: ServerConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct SiteSection {
    /// Scheme and host prefixed to canonical links (e.g. "https://viddl.me").
    pub origin: String,

    /// Title used when a route has none.
    pub default_title: String,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            origin: DEFAULT_SITE_ORIGIN.to_string(),
            default_title: DEFAULT_TITLE.to_string(),
        }
    }
}

/// Registry source. Without a path the built-in registry is used.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct RegistrySource {
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,

    /// HTML shell template; the built-in shell when unset.
    pub shell_path: Option<PathBuf>,

    /// Directory of static assets served ahead of page routes.
    pub static_dir: Option<PathBuf>,

    /// Request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
            shell_path: None,
            static_dir: None,
            request_timeout_secs: 10,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level or filter directive (e.g. "info", "viddl_nav=debug").
    pub log_level: String,

    /// Emit JSON log lines instead of human-readable ones.
    pub json_logs: bool,

    /// Enable the Prometheus scrape endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json_logs: false,
            metrics_enabled: false,
            metrics_address: "127.0.0.1:9090".to_string(),
        }
    }
}
