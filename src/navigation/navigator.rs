//! The router object mounted into the application shell.
//!
//! # Responsibilities
//! - Resolve navigation targets against the route table
//! - Keep session history (push, replace, back/forward)
//! - Run the interceptor, then the scroll policy, for every navigation
//!
//! # Design Decisions
//! - `&mut self` on every navigation serializes them
//! - History stores the resolved location, so a redirected push records `/`
//!   with the original query and fragment
//! - Traversal past either end of history is a no-op

use std::sync::Arc;

use serde::Serialize;

use crate::navigation::history::History;
use crate::navigation::interceptor::NavigationInterceptor;
use crate::navigation::scroll::{scroll_behavior, NavigationKind, ScrollPosition};
use crate::navigation::sink::MetadataSink;
use crate::routing::{Location, RouteDescriptor, RouteTable, Resolved};

/// A committed navigation, ready to be rendered.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Navigation {
    pub route: Arc<RouteDescriptor>,
    pub full_path: String,
    pub redirected_from: Option<String>,
    pub kind: NavigationKind,
    pub scroll: ScrollPosition,
}

pub struct Navigator<S> {
    routes: Arc<RouteTable>,
    interceptor: NavigationInterceptor,
    history: History,
    current: Option<Resolved>,
    sink: S,
}

impl<S: MetadataSink> Navigator<S> {
    pub fn new(routes: Arc<RouteTable>, interceptor: NavigationInterceptor, sink: S) -> Self {
        Self {
            routes,
            interceptor,
            history: History::new(),
            current: None,
            sink,
        }
    }

    /// Navigate to `target`, adding a history entry.
    pub fn push(&mut self, target: &str) -> Navigation {
        let resolved = self.routes.resolve(target);
        self.history.push(resolved.location.clone());
        self.commit(resolved, NavigationKind::Push)
    }

    /// Navigate to `target`, overwriting the current history entry.
    pub fn replace(&mut self, target: &str) -> Navigation {
        let resolved = self.routes.resolve(target);
        self.history.replace(resolved.location.clone());
        self.commit(resolved, NavigationKind::Replace)
    }

    pub fn back(&mut self) -> Option<Navigation> {
        self.go(-1)
    }

    pub fn forward(&mut self) -> Option<Navigation> {
        self.go(1)
    }

    /// Move `delta` entries through history. `None` if out of range.
    pub fn go(&mut self, delta: isize) -> Option<Navigation> {
        let location = self.history.go(delta)?.clone();
        let resolved = self.routes.resolve_location(location);
        Some(self.commit(resolved, NavigationKind::Traverse))
    }

    pub fn current(&self) -> Option<&Resolved> {
        self.current.as_ref()
    }

    pub fn current_location(&self) -> Option<&Location> {
        self.history.current()
    }

    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    fn commit(&mut self, resolved: Resolved, kind: NavigationKind) -> Navigation {
        self.interceptor
            .before_each(&resolved, self.current.as_ref(), &mut self.sink);

        let scroll = scroll_behavior(kind);
        metrics::counter!("viddl_navigations_total", "route" => resolved.route.label().to_string())
            .increment(1);

        tracing::debug!(
            route = resolved.route.label(),
            path = %resolved.location,
            kind = ?kind,
            "Navigation committed"
        );

        let navigation = Navigation {
            route: resolved.route.clone(),
            full_path: resolved.location.full_path(),
            redirected_from: resolved.redirected_from.as_ref().map(Location::full_path),
            kind,
            scroll,
        };
        self.current = Some(resolved);
        navigation
    }
}
