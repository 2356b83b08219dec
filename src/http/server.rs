//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (request ID, tracing, timeout)
//! - Serve static assets ahead of page routes when configured
//! - Render the HTML shell with the metadata of the resolved route
//! - Redirect unknown paths to `/`

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::State,
    handler::Handler,
    http::{header, HeaderMap, HeaderName, Method, StatusCode, Uri},
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    services::ServeDir,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::http::request::{request_id, MakeRequestUuid, X_REQUEST_ID};
use crate::lifecycle::signals::shutdown_signal;
use crate::lifecycle::Site;
use crate::observability::metrics::record_page_request;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub site: Arc<Site>,
    pub shell: Arc<str>,
}

/// HTTP server prerendering page metadata.
pub struct HttpServer {
    router: Router,
    site: Arc<Site>,
}

impl HttpServer {
    /// Create a server for `site`, rendering pages from `shell`.
    pub fn new(site: Site, shell: String) -> Self {
        let site = Arc::new(site);
        let state = AppState {
            site: site.clone(),
            shell: Arc::from(shell),
        };
        let router = Self::build_router(state);
        Self { router, site }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(state: AppState) -> Router {
        let config = &state.site.config().server;
        let request_id_header = HeaderName::from_static(X_REQUEST_ID);

        let router = Router::new().route("/healthz", get(healthz));
        let router = match &config.static_dir {
            Some(dir) => router.fallback_service(
                ServeDir::new(dir).fallback(page_handler.with_state(state.clone())),
            ),
            None => router.fallback(page_handler),
        };

        router.with_state(state.clone()).layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::new(
                    request_id_header.clone(),
                    MakeRequestUuid,
                ))
                .layer(TraceLayer::new_for_http())
                .layer(TimeoutLayer::new(Duration::from_secs(
                    config.request_timeout_secs,
                )))
                .layer(PropagateRequestIdLayer::new(request_id_header)),
        )
    }

    /// The router, for driving the server without a listener.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    pub fn site(&self) -> &Arc<Site> {
        &self.site
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            routes = self.site.routes().len(),
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

async fn healthz(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "routes": state.site.routes().len(),
    }))
}

/// Renders the shell for the resolved route, or redirects unknown paths home.
async fn page_handler(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    let request_id = request_id(&headers);

    if method != Method::GET && method != Method::HEAD {
        return (
            StatusCode::METHOD_NOT_ALLOWED,
            [(header::ALLOW, "GET, HEAD")],
            "Method not allowed",
        )
            .into_response();
    }

    let target = uri.path_and_query().map(|pq| pq.as_str()).unwrap_or("/");
    let resolved = state.site.routes().resolve(target);

    if resolved.was_redirected() {
        let location = resolved.location.full_path();
        tracing::debug!(request_id = %request_id, from = %target, to = %location, "Redirecting unknown path");
        record_page_request("catch-all", StatusCode::TEMPORARY_REDIRECT.as_u16());
        return Redirect::temporary(&location).into_response();
    }

    let page = state.site.render_resolved(&state.shell, resolved);
    let route = page.resolved.route.label();
    tracing::debug!(request_id = %request_id, path = %target, route = route, "Rendering page");
    record_page_request(route, StatusCode::OK.as_u16());

    Html(page.html).into_response()
}
