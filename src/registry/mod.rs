//! Platform registry subsystem.
//!
//! # Data Flow
//! ```text
//! Built-in reference data (reference.rs)  or  registry TOML file (loader.rs)
//!     → Vec<PlatformDescriptor>
//!     → PlatformRegistry::new (eager validation)
//!     → PlatformRegistry (ordered, immutable)
//!     → shared via Arc with the route table builder and navigation menus
//! ```
//!
//! # Design Decisions
//! - Declared order is preserved; nothing depends on map iteration order
//! - Every defect is reported at construction, never at first lookup
//! - Validation returns all problems, not just the first

pub mod descriptor;
pub mod loader;
pub mod reference;

pub use descriptor::{Faq, PlatformDescriptor, PlatformRegistry, RegistryError};
