//! Navigation runtime.
//!
//! # Data Flow
//! ```text
//! push(location)
//!     → Router::resolve (chain or NoMatch)
//!     → resolve lazy views in the chain (load-before-render)
//!     → render: leaf first, each parent wraps its outlet
//!     → history push, active snapshot swap
//!     → RouteEvent broadcast to subscribers
//! ```
//!
//! # Design Decisions
//! - A failed navigation leaves the active route and history untouched
//! - Active snapshot reads are lock-free (arc-swap)
//! - History is bounded; the oldest entries are discarded

pub mod history;
pub mod navigator;

pub use history::History;
pub use navigator::{ActiveRoute, NavigationError, Navigator, RouteEvent};
