//! Route table validation.
//!
//! # Responsibilities
//! - Semantic validation of the declarative table before compilation
//! - Name uniqueness across the whole tree
//! - Path uniqueness among siblings
//! - Path shape (absolute roots, relative children)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is a pure function: &[RouteDef] → Result<(), Vec<RouteError>>
//! - Runs before the table is compiled into a Router

use std::collections::HashSet;

use crate::routing::table::RouteDef;

/// A violation of the route table invariants.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    #[error("duplicate route name `{0}`")]
    DuplicateName(String),

    #[error("duplicate sibling path `{path}` under `{parent}`")]
    DuplicateSiblingPath { parent: String, path: String },

    #[error("root path `{0}` must start with `/`")]
    RelativeRoot(String),

    #[error("child path `{path}` of `{parent}` must be relative")]
    AbsoluteChild { parent: String, path: String },

    #[error("route at `{0}` has an empty name")]
    EmptyName(String),

    #[error("routes `{first}` and `{second}` compile to the same full path `{path}`")]
    ConflictingPath {
        path: String,
        first: String,
        second: String,
    },
}

/// Validate a route table, collecting every violation.
pub fn validate_table(routes: &[RouteDef]) -> Result<(), Vec<RouteError>> {
    let mut errors = Vec::new();
    let mut names = HashSet::new();
    check_level(routes, None, &mut names, &mut errors);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_level(
    routes: &[RouteDef],
    parent: Option<&str>,
    names: &mut HashSet<String>,
    errors: &mut Vec<RouteError>,
) {
    let mut sibling_paths = HashSet::new();

    for route in routes {
        if route.name.is_empty() {
            errors.push(RouteError::EmptyName(route.path.clone()));
        } else if !names.insert(route.name.clone()) {
            errors.push(RouteError::DuplicateName(route.name.clone()));
        }

        match parent {
            None if !route.path.starts_with('/') => {
                errors.push(RouteError::RelativeRoot(route.path.clone()));
            }
            Some(parent_name) if route.path.starts_with('/') => {
                errors.push(RouteError::AbsoluteChild {
                    parent: parent_name.to_string(),
                    path: route.path.clone(),
                });
            }
            _ => {}
        }

        if !sibling_paths.insert(route.path.clone()) {
            errors.push(RouteError::DuplicateSiblingPath {
                parent: parent.unwrap_or("<root>").to_string(),
                path: route.path.clone(),
            });
        }

        check_level(&route.children, Some(&route.name), names, errors);
    }
}
