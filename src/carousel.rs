//! Announcement carousel — rotating slides with an autoplay deadline.
//!
//! The carousel never owns a timer task. It owns a deadline: the event loop
//! sleeps until [`Carousel::deadline`] and then calls
//! [`Carousel::on_autoplay`]. Manual navigation replaces the deadline, so
//! there is never more than one pending autoplay tick and unmounting leaves
//! nothing behind.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::time::Instant;
use tracing::debug;

use crate::error::{PortalError, PortalResult};

/// Autoplay cadence used when neither the config nor the CLI override it.
pub const DEFAULT_AUTOPLAY_PERIOD: Duration = Duration::from_secs(10);

/// A single dated line on a slide ("Nov 3 — Spring registration opens").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRow {
    pub date: String,
    pub label: String,
}

/// Body of a slide: free text or a short table of date rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SlideContent {
    Text(String),
    Rows(Vec<DateRow>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    pub title: String,
    pub content: SlideContent,
}

impl Slide {
    pub fn text(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: SlideContent::Text(body.into()),
        }
    }

    pub fn rows(title: impl Into<String>, rows: &[(&str, &str)]) -> Self {
        Self {
            title: title.into(),
            content: SlideContent::Rows(
                rows.iter()
                    .map(|(date, label)| DateRow {
                        date: (*date).into(),
                        label: (*label).into(),
                    })
                    .collect(),
            ),
        }
    }
}

/// Carousel controller: active slide plus autoplay deadline.
#[derive(Debug, Clone)]
pub struct Carousel {
    slides: Vec<Slide>,
    active: usize,
    period: Duration,
    /// Pending autoplay tick. `None` while unmounted.
    deadline: Option<Instant>,
}

impl Carousel {
    /// Build a carousel over a fixed slide list. Starts unmounted at slide 0.
    pub fn new(slides: Vec<Slide>, period: Duration) -> PortalResult<Self> {
        if slides.is_empty() {
            return Err(PortalError::NoSlides);
        }
        if period.is_zero() {
            return Err(PortalError::ZeroAutoplayPeriod);
        }
        Ok(Self {
            slides,
            active: 0,
            period,
            deadline: None,
        })
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Always false; construction rejects empty slide lists.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active_slide(&self) -> &Slide {
        &self.slides[self.active]
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// When the next autoplay advance is due, if the timer is armed.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn is_mounted(&self) -> bool {
        self.deadline.is_some()
    }

    /// Arm autoplay. The first advance happens one full period after `now`.
    pub fn mount(&mut self, now: Instant) {
        self.deadline = Some(now + self.period);
    }

    /// Cancel autoplay. The active slide is kept.
    pub fn unmount(&mut self) {
        self.deadline = None;
    }

    /// Jump to `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`. Callers check bounds first.
    pub fn go_to_slide(&mut self, index: usize, now: Instant) {
        assert!(
            index < self.slides.len(),
            "slide index {index} out of range (0..{})",
            self.slides.len()
        );
        self.active = index;
        self.restart_timer(now);
    }

    pub fn next_slide(&mut self, now: Instant) {
        self.advance();
        self.restart_timer(now);
    }

    pub fn prev_slide(&mut self, now: Instant) {
        let n = self.slides.len();
        self.active = (self.active + n - 1) % n;
        self.restart_timer(now);
    }

    /// Autoplay tick. Advances one slide if the deadline has passed and
    /// re-arms on the same cadence. Returns whether a slide change happened.
    ///
    /// If the loop stalled past several deadlines, only one slide is
    /// advanced and the next deadline is the first grid point after `now`.
    pub fn on_autoplay(&mut self, now: Instant) -> bool {
        let Some(deadline) = self.deadline else {
            return false;
        };
        if now < deadline {
            return false;
        }
        self.advance();
        self.deadline = Some(self.next_on_grid(deadline, now));
        debug!(slide = self.active, "carousel autoplay advanced");
        true
    }

    /// First `deadline + k * period` strictly after `now`, k >= 1.
    fn next_on_grid(&self, deadline: Instant, now: Instant) -> Instant {
        let missed = (now - deadline).as_nanos() / self.period.as_nanos();
        u32::try_from(missed + 1)
            .ok()
            .and_then(|k| self.period.checked_mul(k))
            .and_then(|offset| deadline.checked_add(offset))
            .unwrap_or(now + self.period)
    }

    fn advance(&mut self) {
        self.active = (self.active + 1) % self.slides.len();
    }

    /// Push the deadline a full period out. No-op while unmounted.
    fn restart_timer(&mut self, now: Instant) {
        if self.deadline.is_some() {
            self.deadline = Some(now + self.period);
        }
    }
}
