//! Navigation core for viddl.me: platform registry, route table,
//! navigation interceptor and scroll policy, plus a prerender server.

pub mod config;
pub mod document;
pub mod http;
pub mod lifecycle;
pub mod navigation;
pub mod observability;
pub mod registry;
pub mod routing;

pub use config::SiteConfig;
pub use http::HttpServer;
pub use lifecycle::Site;
pub use navigation::{MetadataSink, NavigationInterceptor, Navigator};
pub use registry::{PlatformDescriptor, PlatformRegistry};
pub use routing::{build_routes, RouteDescriptor, RouteTable};
