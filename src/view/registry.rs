//! View registry for config-declared route tables.
//!
//! Route entries loaded from disk reference views by name; the registry is
//! the binding point between those names and actual view constructors.

use std::collections::HashMap;

use super::ViewSource;

/// Name → view binding used when a route table comes from a file.
#[derive(Default)]
pub struct ViewRegistry {
    views: HashMap<String, ViewSource>,
}

impl ViewRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a view source under a name. Last registration wins.
    pub fn register(&mut self, name: impl Into<String>, source: ViewSource) -> &mut Self {
        self.views.insert(name.into(), source);
        self
    }

    pub fn get(&self, name: &str) -> Option<&ViewSource> {
        self.views.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.views.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }
}
