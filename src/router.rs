//! Page registry and current-route tracking.
//!
//! Routing is deliberately flat: every page is registered under its full
//! path, and a page's `parent` is what "back" goes to. The router also owns
//! the landing page's lifecycle hook: entering `/` mounts the carousel and
//! leaving it unmounts, so autoplay only runs while the carousel is on
//! screen.

use std::collections::HashMap;

use tokio::time::Instant;
use tracing::{info, warn};

use crate::carousel::Carousel;
use crate::error::{PortalError, PortalResult};
use crate::navigation::PlaceholderAction;

/// Path of the landing page.
pub const HOME: &str = "/";

/// A card button. With a path it navigates; without one it is a placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub label: String,
    pub path: Option<String>,
    pub action: Option<PlaceholderAction>,
}

impl Button {
    pub fn link(label: &str, path: &str) -> Self {
        Self {
            label: label.into(),
            path: Some(path.into()),
            action: None,
        }
    }

    pub fn placeholder(label: &str, action: &str) -> Self {
        Self {
            label: label.into(),
            path: None,
            action: Some(PlaceholderAction::new(action)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub title: String,
    pub description: String,
    pub buttons: Vec<Button>,
}

impl Card {
    pub fn new(title: &str, description: &str, buttons: Vec<Button>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            buttons,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub path: String,
    pub title: String,
    pub description: String,
    /// Where "back" leads. `None` only for the landing page.
    pub parent: Option<String>,
    pub cards: Vec<Card>,
}

/// Current route plus the static page table.
#[derive(Debug, Clone)]
pub struct Router {
    pages: HashMap<String, Page>,
    current: String,
}

impl Router {
    /// Build a router positioned at `/`. The table must contain a landing page.
    pub fn new(pages: Vec<Page>) -> PortalResult<Self> {
        let pages: HashMap<String, Page> =
            pages.into_iter().map(|p| (p.path.clone(), p)).collect();
        if !pages.contains_key(HOME) {
            return Err(PortalError::UnknownRoute(HOME.into()));
        }
        Ok(Self {
            pages,
            current: HOME.into(),
        })
    }

    pub fn current_path(&self) -> &str {
        &self.current
    }

    pub fn current_page(&self) -> &Page {
        // `current` is only ever set to a registered path.
        &self.pages[&self.current]
    }

    pub fn page(&self, path: &str) -> Option<&Page> {
        self.pages.get(path)
    }

    pub fn is_home(&self) -> bool {
        self.current == HOME
    }

    /// Move to `path`, mounting or unmounting the carousel as the landing
    /// page is entered or left. Unknown paths leave everything untouched.
    pub fn navigate(
        &mut self,
        path: &str,
        carousel: &mut Carousel,
        now: Instant,
    ) -> PortalResult<()> {
        if !self.pages.contains_key(path) {
            warn!(path, "navigation to unregistered page");
            return Err(PortalError::UnknownRoute(path.into()));
        }
        if self.current == path {
            return Ok(());
        }
        let was_home = self.is_home();
        self.current = path.to_string();
        match (was_home, self.is_home()) {
            (true, false) => carousel.unmount(),
            (false, true) => carousel.mount(now),
            _ => {}
        }
        info!(path, "navigated");
        Ok(())
    }

    /// Go to the current page's parent. No-op on the landing page.
    pub fn back(&mut self, carousel: &mut Carousel, now: Instant) -> PortalResult<()> {
        match self.current_page().parent.clone() {
            Some(parent) => self.navigate(&parent, carousel, now),
            None => Ok(()),
        }
    }
}
