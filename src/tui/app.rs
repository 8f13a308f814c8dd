//! PortalApp — the TEA model.
//!
//! All state lives here. Update receives PortalMessages, mutates state.
//! View reads state to produce ratatui widgets and records where clickable
//! things landed in [`HitMap`] so mouse events can be resolved next frame.

use ratatui::layout::{Position, Rect};
use tokio::time::Instant;
use tracing::info;

use crate::carousel::Carousel;
use crate::config::PortalConfig;
use crate::content;
use crate::error::PortalResult;
use crate::navigation::{invoke_placeholder, DropdownNav, NavTarget, PlaceholderAction};
use crate::router::{Router, HOME};

use super::event::PortalMessage;

/// Something a click can land on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickTarget {
    /// Navigate to a registered page.
    Link(String),
    /// Inert trigger. Shows a notice and nothing else.
    Placeholder {
        label: String,
        action: Option<PlaceholderAction>,
    },
    /// Sub-item `index` of the dropdown for nav entry `key`.
    SubItem { key: String, index: usize },
    PrevSlide,
    NextSlide,
    Slide(usize),
    Back,
}

/// Screen regions recorded by the last render.
#[derive(Debug, Clone, Default)]
pub struct HitMap {
    /// Top-level nav labels, in table order.
    pub nav_labels: Vec<(String, Rect)>,
    /// The open dropdown, including its border.
    pub dropdown: Option<Rect>,
    /// Everything clickable. Later entries are drawn on top.
    pub targets: Vec<(Rect, ClickTarget)>,
}

impl HitMap {
    pub fn clear(&mut self) {
        self.nav_labels.clear();
        self.dropdown = None;
        self.targets.clear();
    }

    pub fn nav_label_at(&self, pos: Position) -> Option<&str> {
        self.nav_labels
            .iter()
            .find(|(_, rect)| rect.contains(pos))
            .map(|(key, _)| key.as_str())
    }

    pub fn in_dropdown(&self, pos: Position) -> bool {
        self.dropdown.is_some_and(|rect| rect.contains(pos))
    }

    /// Topmost click target under `pos`.
    pub fn target_at(&self, pos: Position) -> Option<&ClickTarget> {
        self.targets
            .iter()
            .rev()
            .find(|(rect, _)| rect.contains(pos))
            .map(|(_, target)| target)
    }
}

/// The main TUI application state (TEA model).
pub struct PortalApp {
    pub router: Router,
    pub carousel: Carousel,
    pub nav: DropdownNav,
    /// Whether the app should quit.
    pub should_quit: bool,
    /// One-line message for the status bar (placeholder notices, bad routes).
    pub notice: Option<String>,
    /// Nav label the pointer is currently over.
    pub hovered: Option<String>,
    /// Clickable regions from the last render.
    pub hits: HitMap,
}

impl PortalApp {
    /// Assemble the app at the landing page with autoplay armed.
    pub fn new(router: Router, mut carousel: Carousel, nav: DropdownNav) -> Self {
        if router.is_home() {
            carousel.mount(Instant::now());
        }
        Self {
            router,
            carousel,
            nav,
            should_quit: false,
            notice: None,
            hovered: None,
            hits: HitMap::default(),
        }
    }

    pub fn from_config(config: &PortalConfig) -> PortalResult<Self> {
        let router = Router::new(content::default_pages())?;
        Ok(Self::new(router, config.build_carousel()?, config.build_nav()?))
    }

    /// Release lifecycle-scoped resources. Called once the loop exits.
    pub fn teardown(&mut self) {
        self.carousel.unmount();
        self.nav.on_leave();
        self.hovered = None;
    }

    /// Handle a TUI message (TEA update).
    pub fn update(&mut self, msg: PortalMessage) {
        match msg {
            PortalMessage::Input(key) => super::input::handle_key(self, key),
            PortalMessage::Mouse(mouse) => super::input::handle_mouse(self, mouse),
            PortalMessage::Autoplay => {
                self.carousel.on_autoplay(Instant::now());
            }
            PortalMessage::Render => {
                // Render handled externally by runner
            }
            PortalMessage::Quit => {
                self.should_quit = true;
            }
        }
    }

    /// Navigate, reporting unknown routes on the status bar.
    pub fn open(&mut self, path: &str) {
        match self.router.navigate(path, &mut self.carousel, Instant::now()) {
            Ok(()) => self.notice = None,
            Err(e) => self.notice = Some(e.to_string()),
        }
    }

    /// Navigate or fail; used for the `--start` page.
    pub fn start_at(&mut self, path: &str) -> PortalResult<()> {
        self.router.navigate(path, &mut self.carousel, Instant::now())
    }

    pub fn back(&mut self) {
        if let Err(e) = self.router.back(&mut self.carousel, Instant::now()) {
            self.notice = Some(e.to_string());
        }
    }

    pub fn go_home(&mut self) {
        self.open(HOME);
    }

    pub fn next_slide(&mut self) {
        self.carousel.next_slide(Instant::now());
    }

    pub fn prev_slide(&mut self) {
        self.carousel.prev_slide(Instant::now());
    }

    /// Jump to a slide if it exists. Out-of-range requests are ignored.
    pub fn go_to_slide(&mut self, index: usize) {
        if index < self.carousel.len() {
            self.carousel.go_to_slide(index, Instant::now());
        }
    }

    /// Move to the next (or previous) top-level section.
    pub fn cycle_section(&mut self, forward: bool) {
        let paths: Vec<String> = self.nav.entries().iter().map(|e| e.path.clone()).collect();
        if paths.is_empty() {
            return;
        }
        let n = paths.len();
        let current_path = self.router.current_path();
        let current = paths
            .iter()
            .position(|p| current_path == p || current_path.starts_with(&format!("{p}/")));
        let next = match (current, forward) {
            (Some(i), true) => (i + 1) % n,
            (Some(i), false) => (i + n - 1) % n,
            (None, true) => 0,
            (None, false) => n - 1,
        };
        self.open(&paths[next]);
    }

    /// Pointer moved to `pos`. Drives the dropdown enter/leave events.
    pub fn hover(&mut self, pos: Position) {
        if let Some(key) = self.hits.nav_label_at(pos) {
            if self.hovered.as_deref() != Some(key) {
                let key = key.to_string();
                self.nav.on_leave();
                self.nav.on_enter(&key);
                self.hovered = Some(key);
            }
            return;
        }
        if self.nav.open_key().is_some() && self.hits.in_dropdown(pos) {
            return;
        }
        if self.hovered.is_some() || self.nav.open_key().is_some() {
            self.nav.on_leave();
            self.hovered = None;
        }
    }

    /// Left click at `pos`.
    pub fn click(&mut self, pos: Position) {
        if let Some(target) = self.hits.target_at(pos).cloned() {
            self.activate(target);
        }
    }

    pub fn activate(&mut self, target: ClickTarget) {
        match target {
            ClickTarget::Link(path) => self.open(&path),
            ClickTarget::Placeholder { label, action } => {
                self.notice = Some(invoke_placeholder(&label, action.as_ref()));
            }
            ClickTarget::SubItem { key, index } => {
                let Some(target) = self.nav.activate(&key, index) else {
                    return;
                };
                // The menu is dismissed once something in it is chosen.
                self.nav.on_leave();
                self.hovered = None;
                match target {
                    NavTarget::Link(path) => {
                        info!(menu = %key, %path, "dropdown link");
                        self.open(&path);
                    }
                    NavTarget::Action { label, action } => {
                        self.notice = Some(invoke_placeholder(&label, action.as_ref()));
                    }
                }
            }
            ClickTarget::PrevSlide => self.prev_slide(),
            ClickTarget::NextSlide => self.next_slide(),
            ClickTarget::Slide(i) => self.go_to_slide(i),
            ClickTarget::Back => self.back(),
        }
    }
}
