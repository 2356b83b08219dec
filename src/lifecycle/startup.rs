//! Startup orchestration.
//!
//! # Responsibilities
//! - Build the platform registry (file or built-in) and validate it
//! - Build the route table and the navigation interceptor
//! - Hand out navigators and prerendered pages
//!
//! # Design Decisions
//! - Fail fast: an invalid registry aborts startup
//! - Subsystems initialize in order, not concurrently
//! - Everything built here is immutable and shared through `Arc`

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;

use crate::config::SiteConfig;
use crate::document::html::{HtmlDocument, DEFAULT_SHELL};
use crate::navigation::{MetadataSink, NavigationInterceptor, Navigator};
use crate::registry::loader::{join_errors, load_registry, RegistryLoadError};
use crate::registry::{PlatformRegistry, RegistryError};
use crate::routing::{build_routes, Resolved, RouteTable};

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Failed to load registry {}: {source}", .path.display())]
    Registry {
        path: PathBuf,
        #[source]
        source: RegistryLoadError,
    },

    #[error("Built-in registry is invalid: {}", join_errors(.0))]
    ReferenceRegistry(Vec<RegistryError>),

    #[error("Failed to read shell template {}: {source}", .path.display())]
    Shell {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A page rendered from the HTML shell for one navigation target.
#[derive(Debug, Clone)]
pub struct RenderedPage {
    pub resolved: Resolved,
    pub html: String,
}

/// The assembled application: registry, route table and interceptor.
#[derive(Debug, Clone)]
pub struct Site {
    config: SiteConfig,
    registry: Arc<PlatformRegistry>,
    routes: Arc<RouteTable>,
    interceptor: NavigationInterceptor,
}

impl Site {
    /// Build every component from a validated configuration.
    pub fn bootstrap(config: SiteConfig) -> Result<Self, StartupError> {
        let registry = match &config.registry.path {
            Some(path) => load_registry(path).map_err(|source| StartupError::Registry {
                path: path.clone(),
                source,
            })?,
            None => PlatformRegistry::reference().map_err(StartupError::ReferenceRegistry)?,
        };
        tracing::info!(
            platforms = registry.len(),
            source = config
                .registry
                .path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "built-in".to_string()),
            "Platform registry loaded"
        );

        let routes = build_routes(&registry, &config.pages);
        tracing::info!(routes = routes.len(), "Route table built");

        let interceptor =
            NavigationInterceptor::new(&config.site.origin, &config.site.default_title);

        Ok(Self {
            config,
            registry: Arc::new(registry),
            routes: Arc::new(routes),
            interceptor,
        })
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// The validated registry, e.g. for building a navigation menu.
    pub fn registry(&self) -> &Arc<PlatformRegistry> {
        &self.registry
    }

    pub fn routes(&self) -> &Arc<RouteTable> {
        &self.routes
    }

    pub fn interceptor(&self) -> &NavigationInterceptor {
        &self.interceptor
    }

    /// A fresh router object writing metadata into `sink`.
    pub fn navigator<S: MetadataSink>(&self, sink: S) -> Navigator<S> {
        Navigator::new(self.routes.clone(), self.interceptor.clone(), sink)
    }

    /// The configured HTML shell, or the built-in one.
    pub fn load_shell(&self) -> Result<String, StartupError> {
        match &self.config.server.shell_path {
            Some(path) => fs::read_to_string(path).map_err(|source| StartupError::Shell {
                path: path.clone(),
                source,
            }),
            None => Ok(DEFAULT_SHELL.to_string()),
        }
    }

    /// Resolve `target` and write its metadata into a copy of `shell`.
    pub fn render(&self, shell: &str, target: &str) -> RenderedPage {
        self.render_resolved(shell, self.routes.resolve(target))
    }

    pub fn render_resolved(&self, shell: &str, resolved: Resolved) -> RenderedPage {
        let mut document = HtmlDocument::new(shell);
        self.interceptor.before_each(&resolved, None, &mut document);

        RenderedPage {
            resolved,
            html: document.into_html(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::MemoryDocument;
    use std::io::Write;

    #[test]
    fn test_bootstrap_with_defaults() {
        let site = Site::bootstrap(SiteConfig::default()).unwrap();
        assert_eq!(site.registry().len(), 6);
        assert_eq!(site.routes().len(), 9);

        let mut nav = site.navigator(MemoryDocument::with_elements());
        nav.push("/youtube-downloader");
        assert_eq!(
            nav.sink().canonical_href.as_deref(),
            Some("https://viddl.me/youtube-downloader")
        );
    }

    #[test]
    fn test_custom_origin_reaches_interceptor() {
        let mut config = SiteConfig::default();
        config.site.origin = "http://localhost:5173/".into();
        let site = Site::bootstrap(config).unwrap();

        let page = site.render(DEFAULT_SHELL, "/faq");
        assert!(page
            .html
            .contains(r#"<link rel="canonical" href="http://localhost:5173/faq" />"#));
    }

    #[test]
    fn test_invalid_registry_file_aborts() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[[platforms]]\nslug = \"x\"").unwrap();

        let mut config = SiteConfig::default();
        config.registry.path = Some(file.path().to_path_buf());

        let err = Site::bootstrap(config).unwrap_err();
        assert!(matches!(err, StartupError::Registry { .. }));
    }

    #[test]
    fn test_missing_shell_template() {
        let mut config = SiteConfig::default();
        config.server.shell_path = Some(PathBuf::from("/nonexistent/index.html"));
        let site = Site::bootstrap(config).unwrap();

        assert!(matches!(site.load_shell(), Err(StartupError::Shell { .. })));
    }
}
