//! The options-page route table.
//!
//! Wires the named views of the extension's options page into a nested
//! route tree. `Options` is the parent frame; the ugoira/rename dialogs are
//! its children and render inside it. `IllustHistory` is deferred until the
//! first navigation to `/illust-history`.

use std::sync::Arc;

use crate::routing::RouteDef;
use crate::view::{LazyView, Rendered, View, ViewLoadError, ViewRegistry, ViewSource};

/// The options frame; child dialogs render in its outlet.
pub struct Options;

impl View for Options {
    fn render(&self, outlet: Option<Rendered>) -> Rendered {
        match outlet {
            Some(child) => Rendered::with_child("Options", child),
            None => Rendered::leaf("Options"),
        }
    }
}

/// A leaf page or dialog with no outlet of its own.
pub struct Page {
    label: &'static str,
}

impl Page {
    pub fn new(label: &'static str) -> Self {
        Self { label }
    }
}

impl View for Page {
    fn render(&self, _outlet: Option<Rendered>) -> Rendered {
        Rendered::leaf(self.label)
    }
}

fn illust_history() -> ViewSource {
    ViewSource::Lazy(LazyView::new(|| async {
        Ok::<Arc<dyn View>, ViewLoadError>(Arc::new(Page::new("IllustHistory")))
    }))
}

/// The declarative route table for the options page.
pub fn routes() -> Vec<RouteDef> {
    vec![
        RouteDef::new("/", "Options", ViewSource::eager(Options)).with_children(vec![
            RouteDef::new(
                "ugoira-extend",
                "UgoiraExtend",
                ViewSource::eager(Page::new("UgoiraExtendDialog")),
            ),
            RouteDef::new(
                "rename-ugoira",
                "RenameUgoira",
                ViewSource::eager(Page::new("RenameUgoiraDialog")),
            ),
            RouteDef::new(
                "rename-manga",
                "RenameManga",
                ViewSource::eager(Page::new("RenameMangaDialog")),
            ),
            RouteDef::new(
                "rename-manga-image",
                "RenameMangaImage",
                ViewSource::eager(Page::new("RenameMangaImageDialog")),
            ),
            RouteDef::new(
                "download-relative-dialog",
                "DownloadRelativeLocationDialog",
                ViewSource::eager(Page::new("DownloadRelativeLocationDialog")),
            ),
        ]),
        RouteDef::new("/illust-history", "IllustHistory", illust_history()),
        RouteDef::new(
            "/third-party",
            "ThirdParty",
            ViewSource::eager(Page::new("ThirdParty")),
        ),
        RouteDef::new(
            "/sponsors",
            "Sponsors",
            ViewSource::eager(Page::new("Sponsors")),
        ),
        RouteDef::new(
            "/history",
            "History",
            ViewSource::eager(Page::new("History")),
        ),
        RouteDef::new(
            "/subscribes",
            "Subscribes",
            ViewSource::eager(Page::new("Subscribes")),
        ),
    ]
}

/// The same views by name, for TOML-declared tables.
pub fn registry() -> ViewRegistry {
    let mut registry = ViewRegistry::new();
    registry.register("options", ViewSource::eager(Options));
    registry.register(
        "ugoira-extend-dialog",
        ViewSource::eager(Page::new("UgoiraExtendDialog")),
    );
    registry.register(
        "rename-ugoira-dialog",
        ViewSource::eager(Page::new("RenameUgoiraDialog")),
    );
    registry.register(
        "rename-manga-dialog",
        ViewSource::eager(Page::new("RenameMangaDialog")),
    );
    registry.register(
        "rename-manga-image-dialog",
        ViewSource::eager(Page::new("RenameMangaImageDialog")),
    );
    registry.register(
        "download-relative-location-dialog",
        ViewSource::eager(Page::new("DownloadRelativeLocationDialog")),
    );
    registry.register("illust-history", illust_history());
    registry.register("third-party", ViewSource::eager(Page::new("ThirdParty")));
    registry.register("sponsors", ViewSource::eager(Page::new("Sponsors")));
    registry.register("history", ViewSource::eager(Page::new("History")));
    registry.register("subscribes", ViewSource::eager(Page::new("Subscribes")));
    registry
}
