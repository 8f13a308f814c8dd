//! Terminal front end — ratatui presentation layer for the portal.
//!
//! Renders the header, hover-driven navigation bar, the landing page with
//! its announcement carousel, and the category pages. Mouse capture is on:
//! pointer movement over the nav bar opens and closes dropdowns.
//!
//! ## Architecture (TEA)
//!
//! Model (`PortalApp`) + Update (message handler) + View (render).
//! Immediate mode, no retained widget state. The view records clickable
//! regions in a hit map that the next mouse event is resolved against.

pub mod app;
pub mod event;
pub mod input;
pub mod layout;
pub mod runner;
