//! Active route state and navigation operations.

use std::sync::Arc;

use arc_swap::ArcSwapOption;
use tokio::sync::{broadcast, Mutex};
use uuid::Uuid;

use crate::navigation::history::History;
use crate::routing::{RouteMatch, Router};
use crate::view::{Rendered, View, ViewLoadError};

const HISTORY_CAPACITY: usize = 64;
const EVENT_CHANNEL_CAPACITY: usize = 16;

/// Errors surfaced by navigation operations.
#[derive(Debug, thiserror::Error)]
pub enum NavigationError {
    #[error("no route matches `{path}`")]
    NoMatch { path: String },

    #[error("no route named `{name}`")]
    UnknownName { name: String },

    #[error("route `{name}`: {source}")]
    ViewLoad {
        name: String,
        source: ViewLoadError,
    },

    #[error("history boundary reached")]
    NoHistory,
}

/// Snapshot of the route currently on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveRoute {
    pub name: String,
    pub full_path: String,
}

/// Emitted after every successful navigation, carrying route names.
#[derive(Debug, Clone)]
pub struct RouteEvent {
    pub from: Option<String>,
    pub to: String,
}

/// Navigation runtime over a compiled router.
pub struct Navigator {
    router: Arc<Router>,
    active: ArcSwapOption<ActiveRoute>,
    history: Mutex<History>,
    events: broadcast::Sender<RouteEvent>,
}

impl Navigator {
    pub fn new(router: Arc<Router>) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            router,
            active: ArcSwapOption::empty(),
            history: Mutex::new(History::new(HISTORY_CAPACITY)),
            events,
        }
    }

    /// Navigate to a location, pushing a history entry.
    pub async fn push(&self, location: &str) -> Result<Rendered, NavigationError> {
        let matched = self.resolve(location)?;
        let rendered = self.commit(&matched).await?;
        self.history
            .lock()
            .await
            .push(matched.leaf().full_path.clone());
        Ok(rendered)
    }

    /// Navigate without growing history: the current entry is replaced.
    pub async fn replace(&self, location: &str) -> Result<Rendered, NavigationError> {
        let matched = self.resolve(location)?;
        let rendered = self.commit(&matched).await?;
        self.history
            .lock()
            .await
            .replace(matched.leaf().full_path.clone());
        Ok(rendered)
    }

    /// Navigate to a route by its unique name.
    pub async fn push_named(&self, name: &str) -> Result<Rendered, NavigationError> {
        let matched = self
            .router
            .route_by_name(name)
            .ok_or_else(|| NavigationError::UnknownName {
                name: name.to_string(),
            })?;
        let rendered = self.commit(&matched).await?;
        self.history
            .lock()
            .await
            .push(matched.leaf().full_path.clone());
        Ok(rendered)
    }

    /// Re-render the previous history entry.
    pub async fn back(&self) -> Result<Rendered, NavigationError> {
        let mut history = self.history.lock().await;
        let location = history
            .back()
            .ok_or(NavigationError::NoHistory)?
            .to_string();
        match self.render_location(&location).await {
            Ok(rendered) => Ok(rendered),
            Err(error) => {
                // Undo the step so the index still points at what is shown.
                history.forward();
                Err(error)
            }
        }
    }

    /// Re-render the next history entry.
    pub async fn forward(&self) -> Result<Rendered, NavigationError> {
        let mut history = self.history.lock().await;
        let location = history
            .forward()
            .ok_or(NavigationError::NoHistory)?
            .to_string();
        match self.render_location(&location).await {
            Ok(rendered) => Ok(rendered),
            Err(error) => {
                history.back();
                Err(error)
            }
        }
    }

    /// Snapshot of the route currently rendered, if any.
    pub fn current(&self) -> Option<Arc<ActiveRoute>> {
        self.active.load_full()
    }

    /// Subscribe to navigation events.
    pub fn subscribe(&self) -> broadcast::Receiver<RouteEvent> {
        self.events.subscribe()
    }

    pub fn router(&self) -> &Arc<Router> {
        &self.router
    }

    fn resolve(&self, location: &str) -> Result<RouteMatch, NavigationError> {
        self.router
            .resolve(location)
            .ok_or_else(|| NavigationError::NoMatch {
                path: location.to_string(),
            })
    }

    async fn render_location(&self, location: &str) -> Result<Rendered, NavigationError> {
        let matched = self.resolve(location)?;
        self.commit(&matched).await
    }

    async fn commit(&self, matched: &RouteMatch) -> Result<Rendered, NavigationError> {
        let navigation_id = Uuid::new_v4();
        let leaf = matched.leaf();
        tracing::debug!(
            navigation_id = %navigation_id,
            path = %leaf.full_path,
            name = %leaf.name,
            "navigating"
        );

        // Every view in the chain resolves before anything renders.
        let mut views = Vec::with_capacity(matched.chain().len());
        for record in matched.chain() {
            let view = record
                .view
                .resolve()
                .await
                .map_err(|source| NavigationError::ViewLoad {
                    name: record.name.clone(),
                    source,
                })?;
            views.push(view);
        }

        // Leaf renders first; each parent wraps its child's output.
        let rendered = views
            .into_iter()
            .rev()
            .fold(None, |outlet, view| Some(view.render(outlet)))
            .expect("match chain is never empty");

        let previous = self.active.swap(Some(Arc::new(ActiveRoute {
            name: leaf.name.clone(),
            full_path: leaf.full_path.clone(),
        })));

        // Nobody listening is fine.
        let _ = self.events.send(RouteEvent {
            from: previous.as_ref().map(|active| active.name.clone()),
            to: leaf.name.clone(),
        });

        tracing::info!(
            navigation_id = %navigation_id,
            path = %leaf.full_path,
            name = %leaf.name,
            "navigation committed"
        );
        Ok(rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::RouteDef;
    use crate::view::{View, ViewSource};

    struct Labeled(&'static str);

    impl View for Labeled {
        fn render(&self, outlet: Option<Rendered>) -> Rendered {
            match outlet {
                Some(child) => Rendered::with_child(self.0, child),
                None => Rendered::leaf(self.0),
            }
        }
    }

    fn navigator() -> Navigator {
        let router = Router::new(vec![
            RouteDef::new("/", "Options", ViewSource::eager(Labeled("Options"))).with_children(
                vec![RouteDef::new(
                    "ugoira-extend",
                    "UgoiraExtend",
                    ViewSource::eager(Labeled("UgoiraExtendDialog")),
                )],
            ),
            RouteDef::new("/sponsors", "Sponsors", ViewSource::eager(Labeled("Sponsors"))),
        ])
        .unwrap();
        Navigator::new(Arc::new(router))
    }

    #[tokio::test]
    async fn push_swaps_the_active_snapshot() {
        let nav = navigator();
        assert!(nav.current().is_none());

        nav.push("/sponsors").await.unwrap();
        let active = nav.current().unwrap();
        assert_eq!(active.name, "Sponsors");
        assert_eq!(active.full_path, "/sponsors");
    }

    #[tokio::test]
    async fn children_render_beneath_their_parent() {
        let nav = navigator();
        let rendered = nav.push("/ugoira-extend").await.unwrap();
        assert_eq!(rendered.labels(), ["Options", "UgoiraExtendDialog"]);
    }

    #[tokio::test]
    async fn push_named_reaches_the_same_route() {
        let nav = navigator();
        let rendered = nav.push_named("UgoiraExtend").await.unwrap();
        assert_eq!(rendered.labels(), ["Options", "UgoiraExtendDialog"]);
        assert!(matches!(
            nav.push_named("Nope").await,
            Err(NavigationError::UnknownName { .. })
        ));
    }

    #[tokio::test]
    async fn unmatched_location_does_not_change_the_active_route() {
        let nav = navigator();
        nav.push("/sponsors").await.unwrap();

        let error = nav.push("/missing").await.unwrap_err();
        assert!(matches!(error, NavigationError::NoMatch { .. }));
        assert_eq!(nav.current().unwrap().name, "Sponsors");
    }

    #[tokio::test]
    async fn replace_does_not_leave_a_back_entry() {
        let nav = navigator();
        nav.push("/").await.unwrap();
        nav.replace("/sponsors").await.unwrap();

        assert_eq!(nav.current().unwrap().name, "Sponsors");
        assert!(matches!(nav.back().await, Err(NavigationError::NoHistory)));
    }

    #[tokio::test]
    async fn back_at_the_boundary_is_no_history() {
        let nav = navigator();
        nav.push("/").await.unwrap();
        assert!(matches!(nav.back().await, Err(NavigationError::NoHistory)));
        assert!(matches!(
            nav.forward().await,
            Err(NavigationError::NoHistory)
        ));
    }
}
