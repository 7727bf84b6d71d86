//! Deferred view loading.
//!
//! # Responsibilities
//! - Defer constructing a view until its route is first navigated to
//! - Run the loader at most once; cache the view afterwards
//! - Surface load failures to the caller without caching them
//!
//! # Design Decisions
//! - No retry, no cancellation: one load at a time, losers wait on the cell
//! - The route never renders before the loader has resolved

use std::future::Future;
use std::sync::Arc;

use futures_util::future::BoxFuture;
use tokio::sync::OnceCell;

use super::View;

/// Error returned when a deferred view fails to load.
#[derive(Debug, Clone, thiserror::Error)]
#[error("view load failed: {reason}")]
pub struct ViewLoadError {
    pub reason: String,
}

impl ViewLoadError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

type Loader =
    dyn Fn() -> BoxFuture<'static, Result<Arc<dyn View>, ViewLoadError>> + Send + Sync;

/// A view constructed on first navigation to its route.
#[derive(Clone)]
pub struct LazyView {
    loader: Arc<Loader>,
    cell: Arc<OnceCell<Arc<dyn View>>>,
}

impl LazyView {
    pub fn new<F, Fut>(loader: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Arc<dyn View>, ViewLoadError>> + Send + 'static,
    {
        Self {
            loader: Arc::new(
                move || -> BoxFuture<'static, Result<Arc<dyn View>, ViewLoadError>> {
                    Box::pin(loader())
                },
            ),
            cell: Arc::new(OnceCell::new()),
        }
    }

    /// True once the loader has resolved successfully.
    pub fn is_loaded(&self) -> bool {
        self.cell.initialized()
    }

    /// Run the loader on first resolution, otherwise return the cached view.
    /// A failed load leaves the cell empty.
    pub async fn resolve(&self) -> Result<Arc<dyn View>, ViewLoadError> {
        self.cell
            .get_or_try_init(|| {
                tracing::debug!("loading deferred view");
                (self.loader)()
            })
            .await
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::Rendered;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Stub;

    impl View for Stub {
        fn render(&self, _outlet: Option<Rendered>) -> Rendered {
            Rendered::leaf("Stub")
        }
    }

    #[tokio::test]
    async fn loader_runs_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let calls_in_loader = calls.clone();
        let lazy = LazyView::new(move || {
            let calls = calls_in_loader.clone();
            async move {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok(Arc::new(Stub) as Arc<dyn View>)
            }
        });

        assert!(!lazy.is_loaded());
        lazy.resolve().await.unwrap();
        lazy.resolve().await.unwrap();
        assert!(lazy.is_loaded());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn failed_load_is_not_cached() {
        let calls = Arc::new(AtomicUsize::new(0));
        let calls_in_loader = calls.clone();
        let lazy = LazyView::new(move || {
            let calls = calls_in_loader.clone();
            async move {
                let attempt = calls.fetch_add(1, Ordering::SeqCst);
                if attempt == 0 {
                    Err(ViewLoadError::new("chunk missing"))
                } else {
                    Ok(Arc::new(Stub) as Arc<dyn View>)
                }
            }
        });

        assert!(lazy.resolve().await.is_err());
        assert!(!lazy.is_loaded());
        assert!(lazy.resolve().await.is_ok());
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }
}
