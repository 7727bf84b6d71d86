//! View abstraction.
//!
//! # Responsibilities
//! - Define the renderable-view contract routes bind to
//! - Represent render output as a nestable tree
//! - Bind routes to views eagerly or through a deferred loader
//!
//! # Design Decisions
//! - Views are opaque: the router only knows "render with an optional outlet"
//! - A parent receives the matched child's output as its outlet
//! - Lazy views resolve at most once, before their route first renders

pub mod lazy;
pub mod registry;

pub use lazy::{LazyView, ViewLoadError};
pub use registry::ViewRegistry;

use std::sync::Arc;

use serde::Serialize;

/// A renderable view selected by a route.
///
/// `outlet` carries the rendered output of the matched child route, if any;
/// leaf views receive `None`.
pub trait View: Send + Sync {
    fn render(&self, outlet: Option<Rendered>) -> Rendered;
}

/// Output of one navigation: the matched views, nested parent-outward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rendered {
    /// Label of the view that produced this node.
    pub view: String,

    /// Output of the matched child route, rendered beneath this view.
    pub child: Option<Box<Rendered>>,
}

impl Rendered {
    pub fn leaf(view: impl Into<String>) -> Self {
        Self {
            view: view.into(),
            child: None,
        }
    }

    pub fn with_child(view: impl Into<String>, child: Rendered) -> Self {
        Self {
            view: view.into(),
            child: Some(Box::new(child)),
        }
    }

    /// View labels from the outermost parent down to the leaf.
    pub fn labels(&self) -> Vec<&str> {
        let mut labels = Vec::new();
        let mut node = Some(self);
        while let Some(rendered) = node {
            labels.push(rendered.view.as_str());
            node = rendered.child.as_deref();
        }
        labels
    }
}

impl std::fmt::Display for Rendered {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut depth = 0;
        let mut node = Some(self);
        while let Some(rendered) = node {
            writeln!(f, "{:indent$}{}", "", rendered.view, indent = depth * 2)?;
            node = rendered.child.as_deref();
            depth += 1;
        }
        Ok(())
    }
}

/// How a route obtains its view.
#[derive(Clone)]
pub enum ViewSource {
    /// View constructed up front and shared.
    Eager(Arc<dyn View>),

    /// View loaded on first navigation to its route.
    Lazy(LazyView),
}

impl ViewSource {
    pub fn eager<V: View + 'static>(view: V) -> Self {
        ViewSource::Eager(Arc::new(view))
    }

    /// Resolve to a concrete view, running the deferred loader if needed.
    pub async fn resolve(&self) -> Result<Arc<dyn View>, ViewLoadError> {
        match self {
            ViewSource::Eager(view) => Ok(view.clone()),
            ViewSource::Lazy(lazy) => lazy.resolve().await,
        }
    }
}

impl std::fmt::Debug for ViewSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViewSource::Eager(_) => f.write_str("ViewSource::Eager"),
            ViewSource::Lazy(_) => f.write_str("ViewSource::Lazy"),
        }
    }
}
