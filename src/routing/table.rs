//! Route table construction.
//!
//! # Responsibilities
//! - Merge the platform registry with the static pages
//! - Fix the route order: home, platforms, FAQ, catch-all
//! - Store compiled routes behind `Arc` for cheap sharing
//!
//! # Design Decisions
//! - `build_routes` is pure: same inputs, deeply equal table
//! - The only way to obtain a `RouteTable` is `build_routes`, so the
//!   home route is always first and the catch-all always last

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::registry::{PlatformDescriptor, PlatformRegistry};
use crate::routing::matcher::PathPattern;

pub const HOME_PATH: &str = "/";
pub const FAQ_PATH: &str = "/faq";

/// SEO metadata attached to a renderable route.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RouteMeta {
    pub title: String,
    pub description: String,
}

impl RouteMeta {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Metadata for the routes that do not come from the registry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct StaticPages {
    pub home: RouteMeta,
    pub faq: RouteMeta,
}

impl Default for StaticPages {
    fn default() -> Self {
        Self {
            home: RouteMeta::new(
                "viddl.me - Free Video Downloader for YouTube, Twitter, Instagram & More",
                "Download videos from YouTube, Twitter/X, Instagram, Facebook, Reddit, and Threads. Fast, free, no signup required.",
            ),
            faq: RouteMeta::new(
                "FAQ - Frequently Asked Questions | viddl.me",
                "Common questions about viddl.me video downloader. Learn how to download videos from YouTube, Twitter, Instagram, and more.",
            ),
        }
    }
}

/// The external view a route renders. Views themselves live outside this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewRef {
    Home,
    Platform,
    Faq,
}

/// Props handed to a platform view: the full descriptor plus its slug as `path`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlatformProps {
    #[serde(flatten)]
    pub platform: PlatformDescriptor,
    pub path: String,
}

/// Props for a route's view. Platform views receive `{ platform: {...} }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RouteProps {
    None,
    Platform { platform: PlatformProps },
}

/// What happens when a route matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteTarget {
    /// Render `view` with `props`.
    View { view: ViewRef, props: RouteProps },
    /// Resolve again against `to`.
    Redirect { to: String },
}

/// One entry of the route table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteDescriptor {
    /// Route identifier for logging/metrics; the catch-all has none.
    pub name: Option<String>,
    pub path: PathPattern,
    pub target: RouteTarget,
    /// Read only by the navigation interceptor.
    pub meta: Option<RouteMeta>,
}

impl RouteDescriptor {
    /// Label used in logs and metrics.
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or("catch-all")
    }

    pub fn view(&self) -> Option<ViewRef> {
        match &self.target {
            RouteTarget::View { view, .. } => Some(*view),
            RouteTarget::Redirect { .. } => None,
        }
    }

    pub fn props(&self) -> Option<&RouteProps> {
        match &self.target {
            RouteTarget::View { props, .. } => Some(props),
            RouteTarget::Redirect { .. } => None,
        }
    }

    fn page(name: &str, path: &str, view: ViewRef, meta: &RouteMeta) -> Self {
        Self {
            name: Some(name.to_string()),
            path: PathPattern::literal(path),
            target: RouteTarget::View {
                view,
                props: RouteProps::None,
            },
            meta: Some(meta.clone()),
        }
    }

    fn platform(platform: &PlatformDescriptor) -> Self {
        Self {
            name: Some(platform.name.clone()),
            path: PathPattern::literal(platform.route_path()),
            target: RouteTarget::View {
                view: ViewRef::Platform,
                props: RouteProps::Platform {
                    platform: PlatformProps {
                        platform: platform.clone(),
                        path: platform.slug.clone(),
                    },
                },
            },
            meta: Some(RouteMeta::new(&platform.title, &platform.description)),
        }
    }

    fn catch_all() -> Self {
        Self {
            name: None,
            path: PathPattern::CatchAll,
            target: RouteTarget::Redirect {
                to: HOME_PATH.to_string(),
            },
            meta: None,
        }
    }
}

/// Ordered, immutable route list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RouteTable {
    routes: Vec<Arc<RouteDescriptor>>,
}

impl RouteTable {
    pub fn iter(&self) -> impl Iterator<Item = &Arc<RouteDescriptor>> {
        self.routes.iter()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Arc<RouteDescriptor>> {
        self.routes.get(index)
    }

    /// The home route, always at index 0.
    pub fn home(&self) -> &Arc<RouteDescriptor> {
        &self.routes[0]
    }

    pub(crate) fn routes_slice(&self) -> &[Arc<RouteDescriptor>] {
        &self.routes
    }

    #[cfg(test)]
    pub(crate) fn from_routes(routes: Vec<RouteDescriptor>) -> Self {
        Self {
            routes: routes.into_iter().map(Arc::new).collect(),
        }
    }

    /// Look up a route by name.
    pub fn by_name(&self, name: &str) -> Option<&Arc<RouteDescriptor>> {
        self.routes.iter().find(|r| r.name.as_deref() == Some(name))
    }
}

/// Build the route table: home, one route per platform in registry order,
/// FAQ, then the catch-all redirect to `/`.
pub fn build_routes(registry: &PlatformRegistry, pages: &StaticPages) -> RouteTable {
    let mut routes = Vec::with_capacity(registry.len() + 3);

    routes.push(RouteDescriptor::page("Home", HOME_PATH, ViewRef::Home, &pages.home));
    routes.extend(registry.iter().map(RouteDescriptor::platform));
    routes.push(RouteDescriptor::page("FAQ", FAQ_PATH, ViewRef::Faq, &pages.faq));
    routes.push(RouteDescriptor::catch_all());

    RouteTable {
        routes: routes.into_iter().map(Arc::new).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_table() -> RouteTable {
        let registry = PlatformRegistry::reference().unwrap();
        build_routes(&registry, &StaticPages::default())
    }

    #[test]
    fn test_route_order() {
        let table = reference_table();
        let paths: Vec<_> = table.iter().map(|r| r.path.to_string()).collect();
        assert_eq!(
            paths,
            vec![
                "/",
                "/youtube-downloader",
                "/twitter-downloader",
                "/instagram-downloader",
                "/facebook-downloader",
                "/reddit-downloader",
                "/threads-downloader",
                "/faq",
                "/:pathMatch(.*)*",
            ]
        );
    }

    #[test]
    fn test_empty_registry_still_has_static_routes() {
        let registry = PlatformRegistry::new(Vec::new()).unwrap();
        let table = build_routes(&registry, &StaticPages::default());

        assert_eq!(table.len(), 3);
        assert_eq!(table.home().path, PathPattern::literal("/"));
        assert_eq!(table.get(1).unwrap().view(), Some(ViewRef::Faq));
        assert_eq!(table.get(2).unwrap().path, PathPattern::CatchAll);
    }

    #[test]
    fn test_platform_props_carry_slug() {
        let table = reference_table();
        let route = table.by_name("Reddit").unwrap();

        match route.props() {
            Some(RouteProps::Platform { platform }) => {
                assert_eq!(platform.path, "reddit-downloader");
                assert_eq!(platform.platform.domain, "reddit.com");
            }
            other => panic!("unexpected props {:?}", other),
        }
    }

    #[test]
    fn test_catch_all_has_no_meta_and_redirects_home() {
        let table = reference_table();
        let last = table.get(table.len() - 1).unwrap();

        assert!(last.meta.is_none());
        assert_eq!(last.view(), None);
        assert_eq!(
            last.target,
            RouteTarget::Redirect {
                to: HOME_PATH.to_string()
            }
        );
    }

    #[test]
    fn test_platform_props_nest_under_platform_key() {
        let table = reference_table();
        let route = table.by_name("Threads").unwrap();
        let json = serde_json::to_value(route.props().unwrap()).unwrap();

        assert_eq!(json["platform"]["path"], "threads-downloader");
        assert_eq!(json["platform"]["slug"], "threads-downloader");
        assert_eq!(json["platform"]["name"], "Threads");
        assert!(json.get("path").is_none());

        let home = serde_json::to_value(table.home().props().unwrap()).unwrap();
        assert!(home.is_null());
    }
}
