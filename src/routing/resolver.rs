//! Route lookup and redirect handling.
//!
//! # Responsibilities
//! - Match a location against the table in declared order
//! - Follow redirect targets (the catch-all points at `/`)
//! - Always end in a renderable route
//!
//! # Design Decisions
//! - Immutable table, so lookups need no locks
//! - O(n) scan; tables hold a handful of routes
//! - Redirect hops are bounded; exhausting them lands on home

use std::sync::Arc;

use crate::routing::location::Location;
use crate::routing::table::{RouteDescriptor, RouteTable, RouteTarget, HOME_PATH};

/// Upper bound on redirect hops for a single resolution.
const MAX_REDIRECTS: usize = 4;

/// Outcome of resolving a navigation target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    /// The renderable route that matched.
    pub route: Arc<RouteDescriptor>,
    /// Location that matched `route` (after any redirect).
    pub location: Location,
    /// The originally requested location when a redirect was followed.
    pub redirected_from: Option<Location>,
}

impl Resolved {
    /// Path the route is published under, used for canonical links.
    ///
    /// Uses the declared path rather than the requested one, so `/FAQ/`
    /// canonicalizes to `/faq`. Falls back to the matched location for
    /// routes without a literal path.
    pub fn canonical_path(&self) -> &str {
        self.route
            .path
            .as_literal()
            .unwrap_or(self.location.path.as_str())
    }

    pub fn was_redirected(&self) -> bool {
        self.redirected_from.is_some()
    }
}

enum ResolveState {
    Resolving(Location),
    Matched(usize, Location),
    Redirect { to: Location },
}

impl RouteTable {
    /// Resolve a raw navigation target such as `/faq?ref=nav`.
    pub fn resolve(&self, target: &str) -> Resolved {
        self.resolve_location(Location::parse(target))
    }

    /// Resolve a parsed location. Never fails: unknown paths end on home.
    pub fn resolve_location(&self, requested: Location) -> Resolved {
        let mut redirected_from = None;
        let mut hops = 0;
        let mut state = ResolveState::Resolving(requested);

        loop {
            state = match state {
                ResolveState::Resolving(location) => match self.first_match(&location.path) {
                    Some(index) => ResolveState::Matched(index, location),
                    None => {
                        let next = location.redirect_to(HOME_PATH);
                        redirected_from.get_or_insert(location);
                        ResolveState::Redirect { to: next }
                    }
                },
                ResolveState::Matched(index, location) => {
                    let route = &self.routes_slice()[index];
                    match &route.target {
                        RouteTarget::View { .. } => {
                            tracing::debug!(
                                path = %location.path,
                                route = route.label(),
                                "Route matched"
                            );
                            return Resolved {
                                route: route.clone(),
                                location,
                                redirected_from,
                            };
                        }
                        RouteTarget::Redirect { to } => {
                            tracing::debug!(from = %location.path, to = %to, "Redirecting");
                            metrics::counter!("viddl_redirects_total").increment(1);
                            let next = location.redirect_to(to);
                            redirected_from.get_or_insert(location);
                            ResolveState::Redirect { to: next }
                        }
                    }
                }
                ResolveState::Redirect { to } => {
                    hops += 1;
                    if hops > MAX_REDIRECTS {
                        tracing::warn!(hops, "Redirect limit reached, falling back to home");
                        return Resolved {
                            route: self.home().clone(),
                            location: to.redirect_to(HOME_PATH),
                            redirected_from,
                        };
                    }
                    ResolveState::Resolving(to)
                }
            };
        }
    }

    fn first_match(&self, path: &str) -> Option<usize> {
        self.routes_slice().iter().position(|r| r.path.matches(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::PlatformRegistry;
    use crate::routing::matcher::PathPattern;
    use crate::routing::table::{build_routes, RouteProps, StaticPages, ViewRef};

    fn redirect(from: &str, to: &str) -> RouteDescriptor {
        RouteDescriptor {
            name: None,
            path: PathPattern::literal(from),
            target: RouteTarget::Redirect { to: to.into() },
            meta: None,
        }
    }

    fn table() -> RouteTable {
        build_routes(&PlatformRegistry::reference().unwrap(), &StaticPages::default())
    }

    #[test]
    fn test_resolves_platform_route() {
        let resolved = table().resolve("/youtube-downloader");
        assert_eq!(resolved.route.name.as_deref(), Some("YouTube"));
        assert_eq!(resolved.canonical_path(), "/youtube-downloader");
        assert!(!resolved.was_redirected());
    }

    #[test]
    fn test_unknown_path_redirects_home() {
        let resolved = table().resolve("/no/such/page?x=1");
        assert_eq!(resolved.route.view(), Some(ViewRef::Home));
        assert_eq!(resolved.location.path, "/");
        assert_eq!(resolved.location.query.as_deref(), Some("x=1"));
        assert_eq!(
            resolved.redirected_from.as_ref().map(|l| l.full_path()),
            Some("/no/such/page?x=1".to_string())
        );
    }

    #[test]
    fn test_redirect_carries_query_and_hash() {
        let resolved = table().resolve("/nope?utm_source=x#top");
        assert_eq!(resolved.route.view(), Some(ViewRef::Home));
        assert_eq!(resolved.location.full_path(), "/?utm_source=x#top");
        assert_eq!(resolved.canonical_path(), "/");
    }

    #[test]
    fn test_redirect_loop_falls_back_to_home() {
        let routes = vec![
            RouteDescriptor {
                name: Some("Home".into()),
                path: PathPattern::literal("/"),
                target: RouteTarget::View {
                    view: ViewRef::Home,
                    props: RouteProps::None,
                },
                meta: None,
            },
            redirect("/a", "/b"),
            redirect("/b", "/a"),
        ];
        let resolved = RouteTable::from_routes(routes).resolve("/a?keep=1");

        assert_eq!(resolved.route.view(), Some(ViewRef::Home));
        assert_eq!(resolved.location.full_path(), "/?keep=1");
        assert_eq!(
            resolved.redirected_from.map(|l| l.full_path()),
            Some("/a?keep=1".to_string())
        );
    }

    #[test]
    fn test_trailing_slash_and_case_use_declared_path() {
        let resolved = table().resolve("/FAQ/");
        assert_eq!(resolved.route.view(), Some(ViewRef::Faq));
        assert_eq!(resolved.location.path, "/FAQ/");
        assert_eq!(resolved.canonical_path(), "/faq");
    }

    #[test]
    fn test_prefix_of_platform_is_not_a_match() {
        let resolved = table().resolve("/youtube-downloader/extra");
        assert_eq!(resolved.route.view(), Some(ViewRef::Home));
        assert!(resolved.was_redirected());
    }
}
