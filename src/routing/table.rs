//! Declarative route table definitions.

use crate::view::ViewSource;

/// One entry of the declarative route table.
///
/// Root entries carry absolute paths (`/sponsors`); children carry paths
/// relative to their parent (`ugoira-extend` under `/`).
#[derive(Debug, Clone)]
pub struct RouteDef {
    /// Absolute path for roots, relative path for children.
    pub path: String,

    /// Name, unique across the whole tree.
    pub name: String,

    /// The view this route renders.
    pub view: ViewSource,

    /// Child routes rendered inside this route's view.
    pub children: Vec<RouteDef>,
}

impl RouteDef {
    pub fn new(path: impl Into<String>, name: impl Into<String>, view: ViewSource) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            view,
            children: Vec::new(),
        }
    }

    /// Attach child routes rendered inside this route's view.
    pub fn with_children(mut self, children: Vec<RouteDef>) -> Self {
        self.children = children;
        self
    }
}
