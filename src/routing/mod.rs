//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Declarative table (code or TOML):
//!     RouteDef[]
//!     → validation.rs (unique names, sibling paths, path shape)
//!     → flatten (compute full paths, link parents)
//!     → Freeze as immutable Router
//!
//! Navigation (at runtime):
//!     location string
//!     → matcher.rs (normalize: strip query/fragment, trailing slash)
//!     → router.rs (exact full-path lookup)
//!     → Return: RouteMatch chain (parent first) or explicit no-match
//! ```
//!
//! # Design Decisions
//! - Table compiled once at startup, immutable at runtime
//! - Validation reports all violations, not just the first
//! - Exact matching only; the table carries no parameters or wildcards
//! - Explicit no-match rather than a silent fallback route

pub mod matcher;
pub mod router;
pub mod table;
pub mod validation;

pub use router::{RouteMatch, RouteRecord, Router};
pub use table::RouteDef;
pub use validation::RouteError;
