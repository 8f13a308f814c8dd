//! Esther — terminal front end for a university student portal.
//!
//! Two small controllers carry the interaction: the announcement
//! [`carousel`] (active slide plus autoplay deadline) and the hover
//! [`navigation`] dropdowns. Everything else is static content, a flat
//! [`router`], and the ratatui [`tui`]. Portal actions are placeholders;
//! nothing is fetched or persisted.

pub mod carousel;
pub mod config;
pub mod content;
pub mod error;
pub mod navigation;
pub mod router;
pub mod tui;

pub use error::{PortalError, PortalResult};
