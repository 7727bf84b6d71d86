//! Route table configuration.
//!
//! # Data Flow
//! ```text
//! routes file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → bind view names against the ViewRegistry
//!     → RouteDef table
//!     → Router::new (semantic validation, freeze)
//! ```
//!
//! # Design Decisions
//! - Parsing (serde) and semantic checks stay separate
//! - Every `view` name must reference a registered view
//! - Files describe the same table shape as the code-level API

pub mod loader;
pub mod schema;

pub use loader::{load_routes, ConfigError};
pub use schema::{RouteEntry, RoutesFile};
