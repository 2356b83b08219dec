//! Navigation interceptor.
//!
//! # Responsibilities
//! - Set the document title (route title, or the default title)
//! - Overwrite the meta description when the route has one
//! - Point the canonical link at `site origin + route path`
//!
//! # Design Decisions
//! - Returns `()`: navigation always proceeds after the hook
//! - A missing document element is logged and skipped, never an error
//! - Idempotent: replaying the same target writes the same values

use crate::navigation::sink::{MetadataSink, SinkError};
use crate::routing::{RouteDescriptor, Resolved};

/// Title used when the target route carries none.
pub const DEFAULT_TITLE: &str = "viddl.me - Free Video Downloader";

/// Origin prefixed to canonical links.
pub const DEFAULT_SITE_ORIGIN: &str = "https://viddl.me";

/// Synchronizes document metadata with the route being navigated to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationInterceptor {
    site_origin: String,
    default_title: String,
}

impl NavigationInterceptor {
    /// Create an interceptor. A trailing `/` on the origin is dropped.
    pub fn new(site_origin: impl Into<String>, default_title: impl Into<String>) -> Self {
        let site_origin = site_origin.into().trim_end_matches('/').to_string();
        Self {
            site_origin,
            default_title: default_title.into(),
        }
    }

    pub fn site_origin(&self) -> &str {
        &self.site_origin
    }

    /// Title the document gets for `route`.
    pub fn effective_title<'a>(&'a self, route: &'a RouteDescriptor) -> &'a str {
        route
            .meta
            .as_ref()
            .map(|m| m.title.as_str())
            .filter(|t| !t.is_empty())
            .unwrap_or(self.default_title.as_str())
    }

    /// Absolute canonical URL for a resolved target.
    pub fn canonical_url(&self, to: &Resolved) -> String {
        format!("{}{}", self.site_origin, to.canonical_path())
    }

    /// Runs before `to` is committed. Writes metadata into `sink`; has no
    /// say over whether the navigation happens.
    pub fn before_each<S>(&self, to: &Resolved, from: Option<&Resolved>, sink: &mut S)
    where
        S: MetadataSink + ?Sized,
    {
        tracing::trace!(
            from = from.map(|f| f.route.label()),
            to = to.route.label(),
            "Applying route metadata"
        );

        sink.set_title(self.effective_title(&to.route));

        let description = to
            .route
            .meta
            .as_ref()
            .map(|m| m.description.as_str())
            .filter(|d| !d.is_empty());
        if let Some(description) = description {
            skip_missing(sink.set_description_content(description), &to.route);
        }

        skip_missing(sink.set_canonical_href(&self.canonical_url(to)), &to.route);
    }
}

impl Default for NavigationInterceptor {
    fn default() -> Self {
        Self::new(DEFAULT_SITE_ORIGIN, DEFAULT_TITLE)
    }
}

fn skip_missing(result: Result<(), SinkError>, route: &RouteDescriptor) {
    if let Err(SinkError::MissingElement(element)) = result {
        tracing::warn!(
            route = route.label(),
            selector = element.selector(),
            "Metadata element not found, skipping update"
        );
        metrics::counter!("viddl_metadata_skipped_total", "element" => element.as_str()).increment(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::MemoryDocument;
    use crate::registry::PlatformRegistry;
    use crate::routing::{build_routes, RouteTable, StaticPages};

    fn table() -> RouteTable {
        build_routes(&PlatformRegistry::reference().unwrap(), &StaticPages::default())
    }

    #[test]
    fn test_platform_metadata() {
        let interceptor = NavigationInterceptor::default();
        let mut doc = MemoryDocument::with_elements();

        interceptor.before_each(&table().resolve("/instagram-downloader"), None, &mut doc);

        assert_eq!(
            doc.title,
            "Instagram Video Downloader - Download Reels & Stories Free | viddl.me"
        );
        assert_eq!(
            doc.canonical_href.as_deref(),
            Some("https://viddl.me/instagram-downloader")
        );
        assert!(doc
            .description_content
            .as_deref()
            .unwrap()
            .starts_with("Download Instagram Reels"));
    }

    #[test]
    fn test_missing_description_element_is_skipped() {
        let interceptor = NavigationInterceptor::default();
        let mut doc = MemoryDocument::with_elements();
        doc.description_content = None;

        interceptor.before_each(&table().resolve("/faq"), None, &mut doc);

        assert_eq!(doc.title, "FAQ - Frequently Asked Questions | viddl.me");
        assert_eq!(doc.canonical_href.as_deref(), Some("https://viddl.me/faq"));
        assert_eq!(doc.description_content, None);
    }

    #[test]
    fn test_empty_title_falls_back_to_default() {
        let pages = StaticPages {
            home: crate::routing::RouteMeta::new("", ""),
            ..StaticPages::default()
        };
        let table = build_routes(&PlatformRegistry::reference().unwrap(), &pages);
        let interceptor = NavigationInterceptor::new("https://example.org/", "Fallback");
        let mut doc = MemoryDocument::with_elements();
        doc.description_content = Some("untouched".into());

        interceptor.before_each(&table.resolve("/"), None, &mut doc);

        assert_eq!(doc.title, "Fallback");
        assert_eq!(doc.description_content.as_deref(), Some("untouched"));
        assert_eq!(doc.canonical_href.as_deref(), Some("https://example.org/"));
    }

    #[test]
    fn test_replay_is_idempotent() {
        let interceptor = NavigationInterceptor::default();
        let target = table().resolve("/reddit-downloader");
        let mut once = MemoryDocument::with_elements();
        let mut twice = MemoryDocument::with_elements();

        interceptor.before_each(&target, None, &mut once);
        interceptor.before_each(&target, None, &mut twice);
        interceptor.before_each(&target, None, &mut twice);

        assert_eq!(once, twice);
    }
}
