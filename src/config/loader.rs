//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::SiteConfig;
use crate::config::validation::{validate_config, ValidationError};
use crate::registry::loader::join_errors;

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

/// Parse and validate configuration from TOML text.
pub fn parse_config(content: &str) -> Result<SiteConfig, ConfigError> {
    let config: SiteConfig = toml::from_str(content)?;
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<SiteConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

/// Load `path` if given, otherwise validate and return the defaults.
pub fn load_or_default(path: Option<&Path>) -> Result<SiteConfig, ConfigError> {
    match path {
        Some(path) => load_config(path),
        None => {
            let config = SiteConfig::default();
            validate_config(&config).map_err(ConfigError::Validation)?;
            Ok(config)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.site.origin, "https://viddl.me");
    }

    #[test]
    fn test_partial_sections() {
        let config = parse_config(
            r#"
[site]
origin = "https://staging.viddl.me"

[pages.faq]
title = "Help | viddl.me"
description = "Answers."

[server]
bind_address = "127.0.0.1:3000"
"#,
        )
        .unwrap();

        assert_eq!(config.site.origin, "https://staging.viddl.me");
        assert_eq!(config.site.default_title, "viddl.me - Free Video Downloader");
        assert_eq!(config.pages.faq.title, "Help | viddl.me");
        assert!(config.pages.home.title.starts_with("viddl.me - Free Video Downloader for"));
        assert_eq!(config.server.request_timeout_secs, 10);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let err = parse_config("[site]\norigin = \"ftp://viddl.me\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(ref errors) if errors.len() == 1));
        assert!(err.to_string().starts_with("Validation failed"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[observability]\nlog_level = \"debug\"").unwrap();

        let config = load_or_default(Some(file.path())).unwrap();
        assert_eq!(config.observability.log_level, "debug");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_config(Path::new("/nonexistent/viddl-nav.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
