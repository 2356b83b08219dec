//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Load config → Validate → Build registry → Build route table → Site
//!
//! Signals (signals.rs):
//!     SIGINT/Ctrl+C → Trigger graceful shutdown of the server
//! ```
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Registry and route table are built once, before any traffic

pub mod signals;
pub mod startup;

pub use startup::{RenderedPage, Site, StartupError};
