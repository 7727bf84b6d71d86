//! Route table loading from disk.

use std::fs;
use std::path::Path;

use crate::config::schema::{RouteEntry, RoutesFile};
use crate::routing::RouteDef;
use crate::view::ViewRegistry;

/// Error type for route table loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    UnknownView { route: String, view: String },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::UnknownView { route, view } => {
                write!(f, "Route `{}` references unregistered view `{}`", route, view)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Load a routes file and bind its view names against the registry.
pub fn load_routes(path: &Path, registry: &ViewRegistry) -> Result<Vec<RouteDef>, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let file: RoutesFile = toml::from_str(&content).map_err(ConfigError::Parse)?;

    bind_entries(file.routes, registry)
}

/// Bind parsed entries to registered views.
pub fn bind_entries(
    entries: Vec<RouteEntry>,
    registry: &ViewRegistry,
) -> Result<Vec<RouteDef>, ConfigError> {
    entries
        .into_iter()
        .map(|entry| bind_entry(entry, registry))
        .collect()
}

fn bind_entry(entry: RouteEntry, registry: &ViewRegistry) -> Result<RouteDef, ConfigError> {
    let view = registry
        .get(&entry.view)
        .cloned()
        .ok_or_else(|| ConfigError::UnknownView {
            route: entry.name.clone(),
            view: entry.view.clone(),
        })?;
    let children = bind_entries(entry.children, registry)?;

    Ok(RouteDef {
        path: entry.path,
        name: entry.name,
        view,
        children,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::{Rendered, View, ViewSource};

    struct Stub;

    impl View for Stub {
        fn render(&self, _outlet: Option<Rendered>) -> Rendered {
            Rendered::leaf("Stub")
        }
    }

    fn registry() -> ViewRegistry {
        let mut registry = ViewRegistry::new();
        registry.register("options", ViewSource::eager(Stub));
        registry.register("sponsors", ViewSource::eager(Stub));
        registry
    }

    const ROUTES: &str = r#"
        [[routes]]
        path = "/"
        name = "Options"
        view = "options"

        [[routes.children]]
        path = "ugoira-extend"
        name = "UgoiraExtend"
        view = "sponsors"

        [[routes]]
        path = "/sponsors"
        name = "Sponsors"
        view = "sponsors"
    "#;

    #[test]
    fn binds_a_nested_table() {
        let file: RoutesFile = toml::from_str(ROUTES).unwrap();
        let routes = bind_entries(file.routes, &registry()).unwrap();

        assert_eq!(routes.len(), 2);
        assert_eq!(routes[0].name, "Options");
        assert_eq!(routes[0].children.len(), 1);
        assert_eq!(routes[0].children[0].path, "ugoira-extend");
    }

    #[test]
    fn rejects_unregistered_views() {
        let file: RoutesFile = toml::from_str(
            r#"
            [[routes]]
            path = "/history"
            name = "History"
            view = "history"
            "#,
        )
        .unwrap();
        let error = bind_entries(file.routes, &registry()).unwrap_err();
        assert!(matches!(error, ConfigError::UnknownView { .. }));
    }

    #[test]
    fn empty_file_is_an_empty_table() {
        let file: RoutesFile = toml::from_str("").unwrap();
        assert!(bind_entries(file.routes, &registry()).unwrap().is_empty());
    }
}
