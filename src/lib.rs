//! Navigation router for the extension options page.

pub mod config;
pub mod navigation;
pub mod pages;
pub mod routing;
pub mod view;

pub use navigation::{NavigationError, Navigator};
pub use routing::{RouteDef, Router};
pub use view::{Rendered, View, ViewSource};
