//! Routes file schema definitions.
//!
//! This module defines the on-disk structure of a route table.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root of a routes file.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RoutesFile {
    /// Top-level route declarations.
    pub routes: Vec<RouteEntry>,
}

/// One declared route.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RouteEntry {
    /// Absolute path for roots, relative path for children.
    pub path: String,

    /// Route name, unique across the whole tree.
    pub name: String,

    /// Registered view this route renders.
    pub view: String,

    /// Nested child routes rendered inside this route's view.
    #[serde(default)]
    pub children: Vec<RouteEntry>,
}
