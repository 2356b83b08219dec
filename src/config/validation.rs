//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the site origin is a bare http(s) origin
//! - Check required metadata is non-empty
//! - Validate addresses, timeouts and log filters
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: SiteConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use thiserror::Error;
use tracing_subscriber::EnvFilter;
use url::Url;

use crate::config::schema::SiteConfig;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("site.origin '{origin}' is invalid: {reason}")]
    InvalidOrigin { origin: String, reason: String },

    #[error("{0} must not be empty")]
    EmptyField(&'static str),

    #[error("{field} '{value}' is not a socket address")]
    InvalidAddress { field: &'static str, value: String },

    #[error("server.request_timeout_secs must be greater than zero")]
    ZeroTimeout,

    #[error("observability.log_level '{0}' is not a valid filter")]
    InvalidLogLevel(String),
}

/// Validate a configuration, collecting every problem.
pub fn validate_config(config: &SiteConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Err(reason) = check_origin(&config.site.origin) {
        errors.push(ValidationError::InvalidOrigin {
            origin: config.site.origin.clone(),
            reason,
        });
    }

    let required = [
        ("site.default_title", &config.site.default_title),
        ("pages.home.title", &config.pages.home.title),
        ("pages.home.description", &config.pages.home.description),
        ("pages.faq.title", &config.pages.faq.title),
        ("pages.faq.description", &config.pages.faq.description),
    ];
    for (field, value) in required {
        if value.trim().is_empty() {
            errors.push(ValidationError::EmptyField(field));
        }
    }

    if config.server.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidAddress {
            field: "server.bind_address",
            value: config.server.bind_address.clone(),
        });
    }

    if config.server.request_timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::InvalidAddress {
            field: "observability.metrics_address",
            value: config.observability.metrics_address.clone(),
        });
    }

    if EnvFilter::try_new(&config.observability.log_level).is_err() {
        errors.push(ValidationError::InvalidLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// The origin must be `scheme://host[:port]`, optionally with a trailing `/`.
fn check_origin(origin: &str) -> Result<(), String> {
    let url = Url::parse(origin).map_err(|e| e.to_string())?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(format!("unsupported scheme '{}'", url.scheme()));
    }
    if url.host_str().is_none() {
        return Err("missing host".to_string());
    }
    if url.path() != "/" || url.query().is_some() || url.fragment().is_some() {
        return Err("must not contain a path, query or fragment".to_string());
    }
    if !url.username().is_empty() || url.password().is_some() {
        return Err("must not contain credentials".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(validate_config(&SiteConfig::default()), Ok(()));
    }

    #[test]
    fn test_origin_rules() {
        assert!(check_origin("https://viddl.me").is_ok());
        assert!(check_origin("https://viddl.me/").is_ok());
        assert!(check_origin("http://localhost:5173").is_ok());
        assert!(check_origin("viddl.me").is_err());
        assert!(check_origin("ftp://viddl.me").is_err());
        assert!(check_origin("https://viddl.me/app").is_err());
        assert!(check_origin("https://viddl.me/?a=b").is_err());
        assert!(check_origin("https://user:pw@viddl.me").is_err());
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = SiteConfig::default();
        config.site.default_title = " ".into();
        config.pages.faq.description = String::new();
        config.server.bind_address = "not-an-address".into();
        config.server.request_timeout_secs = 0;
        config.observability.log_level = "viddl_nav=loud".into();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::EmptyField("site.default_title"),
                ValidationError::EmptyField("pages.faq.description"),
                ValidationError::InvalidAddress {
                    field: "server.bind_address",
                    value: "not-an-address".into()
                },
                ValidationError::ZeroTimeout,
                ValidationError::InvalidLogLevel("viddl_nav=loud".into()),
            ]
        );
    }

    #[test]
    fn test_metrics_address_checked_only_when_enabled() {
        let mut config = SiteConfig::default();
        config.observability.metrics_address = "nowhere".into();
        assert!(validate_config(&config).is_ok());

        config.observability.metrics_enabled = true;
        assert_eq!(validate_config(&config).unwrap_err().len(), 1);
    }
}
