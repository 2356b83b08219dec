//! Navigation subsystem.
//!
//! # Data Flow
//! ```text
//! push / replace / back / forward
//!     → navigator.rs (history bookkeeping)
//!     → RouteTable::resolve (routing)
//!     → interceptor.rs (title, description, canonical → MetadataSink)
//!     → scroll.rs (always top of viewport)
//!     → Navigation handed to the application shell
//! ```
//!
//! # Design Decisions
//! - Synchronous: one navigation runs start to finish before the next
//! - The interceptor cannot cancel or redirect; it only writes metadata
//! - Document access goes through the `MetadataSink` trait

pub mod history;
pub mod interceptor;
pub mod navigator;
pub mod scroll;
pub mod sink;

pub use interceptor::{NavigationInterceptor, DEFAULT_TITLE};
pub use navigator::{Navigation, Navigator};
pub use scroll::{scroll_behavior, NavigationKind, ScrollPosition};
pub use sink::{MetadataElement, MetadataSink, SinkError};
