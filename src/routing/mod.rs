//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Route Compilation (at startup):
//!     PlatformRegistry + StaticPages
//!     → table.rs (build_routes: home, platforms, faq, catch-all)
//!     → Freeze as immutable RouteTable
//!
//! Navigation request (raw path)
//!     → location.rs (split path / query / fragment)
//!     → matcher.rs (evaluate path patterns in table order)
//!     → resolver.rs (follow catch-all redirect back to "/")
//!     → Return: Resolved route, never "not found"
//! ```
//!
//! # Design Decisions
//! - Routes compiled at startup, immutable at runtime
//! - No regex: literal comparison plus a single catch-all
//! - Deterministic: same input always matches same route
//! - First match wins; table order is the tie-break

pub mod location;
pub mod matcher;
pub mod resolver;
pub mod table;

pub use location::Location;
pub use matcher::PathPattern;
pub use resolver::Resolved;
pub use table::{
    build_routes, PlatformProps, RouteDescriptor, RouteMeta, RouteProps, RouteTable, RouteTarget,
    StaticPages, ViewRef, FAQ_PATH, HOME_PATH,
};
