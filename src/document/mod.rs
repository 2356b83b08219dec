//! Document metadata sinks.
//!
//! # Responsibilities
//! - `MemoryDocument`: plain fields, for headless use and tests
//! - `HtmlDocument`: rewrites an HTML shell in place
//!
//! # Design Decisions
//! - Both follow `document.querySelector` semantics: first match only
//! - A missing element is reported to the caller, which decides what to do

pub mod html;
pub mod memory;

pub use html::HtmlDocument;
pub use memory::MemoryDocument;
