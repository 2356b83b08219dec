//! Metrics exposition.
//!
//! # Metrics
//! - `viddl_navigations_total` (counter): committed navigations by route
//! - `viddl_redirects_total` (counter): catch-all redirects followed
//! - `viddl_metadata_skipped_total` (counter): writes skipped for a missing element
//! - `viddl_page_requests_total` (counter): prerendered pages by route, status
//!
//! # Design Decisions
//! - Counters are recorded through the `metrics` facade everywhere
//! - The Prometheus exporter is opt-in and binds its own listener

use std::net::SocketAddr;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter with an HTTP listener on `addr`.
///
/// Must be called from within a tokio runtime.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint listening"),
        Err(e) => tracing::error!(error = %e, "Failed to install metrics exporter"),
    }
}

/// Record one prerendered page request.
pub fn record_page_request(route: &str, status: u16) {
    metrics::counter!(
        "viddl_page_requests_total",
        "route" => route.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
}
