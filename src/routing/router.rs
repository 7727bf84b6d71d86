//! Route lookup.
//!
//! # Responsibilities
//! - Store the compiled, flattened route records
//! - Resolve a location to its matched record chain
//! - Look up routes by their unique name
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - O(1) lookups via full-path and name maps
//! - Resolution returns the whole parent chain so nested views can wrap
//!   their matched child

use std::collections::HashMap;
use std::sync::Arc;

use crate::routing::matcher;
use crate::routing::table::RouteDef;
use crate::routing::validation::{validate_table, RouteError};
use crate::view::ViewSource;

/// A compiled route: full path, unique name, view binding, parent link.
#[derive(Debug)]
pub struct RouteRecord {
    pub full_path: String,
    pub name: String,
    pub view: ViewSource,
    parent: Option<usize>,
}

/// Resolution result: matched records, outermost parent first.
#[derive(Debug, Clone)]
pub struct RouteMatch {
    chain: Vec<Arc<RouteRecord>>,
}

impl RouteMatch {
    /// Matched records, outermost parent first.
    pub fn chain(&self) -> &[Arc<RouteRecord>] {
        &self.chain
    }

    /// The innermost matched route.
    pub fn leaf(&self) -> &RouteRecord {
        self.chain.last().expect("match chain is never empty")
    }
}

/// Immutable compiled router.
#[derive(Debug)]
pub struct Router {
    records: Vec<Arc<RouteRecord>>,
    by_path: HashMap<String, usize>,
    by_name: HashMap<String, usize>,
}

impl Router {
    /// Compile a declarative table, reporting every invariant violation.
    pub fn new(routes: Vec<RouteDef>) -> Result<Self, Vec<RouteError>> {
        validate_table(&routes)?;

        let mut router = Router {
            records: Vec::new(),
            by_path: HashMap::new(),
            by_name: HashMap::new(),
        };
        let mut errors = Vec::new();
        for def in routes {
            router.insert(def, None, &mut errors);
        }
        if !errors.is_empty() {
            return Err(errors);
        }

        tracing::debug!(routes = router.records.len(), "route table compiled");
        Ok(router)
    }

    fn insert(&mut self, def: RouteDef, parent: Option<usize>, errors: &mut Vec<RouteError>) {
        let full_path = match parent {
            None => matcher::normalize(&def.path),
            Some(index) => matcher::join(&self.records[index].full_path, &def.path),
        };

        let index = self.records.len();
        if let Some(previous) = self.by_path.insert(full_path.clone(), index) {
            errors.push(RouteError::ConflictingPath {
                path: full_path.clone(),
                first: self.records[previous].name.clone(),
                second: def.name.clone(),
            });
        }
        self.by_name.insert(def.name.clone(), index);
        self.records.push(Arc::new(RouteRecord {
            full_path,
            name: def.name,
            view: def.view,
            parent,
        }));

        for child in def.children {
            self.insert(child, Some(index), errors);
        }
    }

    /// Resolve a location to its matched route chain.
    pub fn resolve(&self, location: &str) -> Option<RouteMatch> {
        let path = matcher::normalize(location);
        let index = *self.by_path.get(&path)?;
        Some(self.chain_for(index))
    }

    /// Look up a route by its unique name.
    pub fn route_by_name(&self, name: &str) -> Option<RouteMatch> {
        let index = *self.by_name.get(name)?;
        Some(self.chain_for(index))
    }

    fn chain_for(&self, index: usize) -> RouteMatch {
        let mut chain = Vec::new();
        let mut cursor = Some(index);
        while let Some(current) = cursor {
            chain.push(self.records[current].clone());
            cursor = self.records[current].parent;
        }
        chain.reverse();
        RouteMatch { chain }
    }

    /// Compiled records in definition order.
    pub fn records(&self) -> impl Iterator<Item = &Arc<RouteRecord>> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
