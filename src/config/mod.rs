//! Portal configuration — optional YAML overrides for the built-in content.
//!
//! Explicit file: `--config PATH` (must load, errors are fatal)
//! Project file: `.esther/config.yaml` in the working directory (ignored with
//! a warning if it fails to parse)
//!
//! Resolution: explicit file → project file → built-in defaults. Any field
//! left out falls back to the built-in value.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::carousel::{Carousel, Slide, DEFAULT_AUTOPLAY_PERIOD};
use crate::content;
use crate::error::{PortalError, PortalResult};
use crate::navigation::{DropdownNav, NavEntry};

/// Project-level config location, relative to the working directory.
pub const PROJECT_CONFIG: &str = ".esther/config.yaml";

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct PortalConfig {
    /// Seconds between autoplay advances.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autoplay_secs: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slides: Option<Vec<Slide>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nav: Option<Vec<NavEntry>>,
}

impl PortalConfig {
    /// Resolve config for a session rooted at `work_dir`.
    pub fn load(explicit: Option<&Path>, work_dir: &Path) -> PortalResult<Self> {
        if let Some(path) = explicit {
            let config = Self::from_file(path)?;
            info!("loaded config from {}", path.display());
            return Ok(config);
        }
        Ok(Self::load_project_config(&work_dir.join(PROJECT_CONFIG)))
    }

    /// Read and validate a config file.
    pub fn from_file(path: &Path) -> PortalResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| PortalError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    fn load_project_config(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::from_file(path) {
            Ok(config) => {
                info!("loaded project config from {}", path.display());
                config
            }
            Err(e) => {
                warn!("ignoring {}: {e}", path.display());
                Self::default()
            }
        }
    }

    /// CLI override for the autoplay period. `None` keeps the file value.
    pub fn with_autoplay_secs(mut self, secs: Option<u64>) -> Self {
        if secs.is_some() {
            self.autoplay_secs = secs;
        }
        self
    }

    pub fn autoplay_period(&self) -> Duration {
        self.autoplay_secs
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_AUTOPLAY_PERIOD)
    }

    pub fn slides(&self) -> Vec<Slide> {
        self.slides.clone().unwrap_or_else(content::default_slides)
    }

    pub fn nav(&self) -> Vec<NavEntry> {
        self.nav.clone().unwrap_or_else(content::default_nav)
    }

    pub fn build_carousel(&self) -> PortalResult<Carousel> {
        Carousel::new(self.slides(), self.autoplay_period())
    }

    pub fn build_nav(&self) -> PortalResult<DropdownNav> {
        DropdownNav::new(self.nav())
    }

    /// Check that the resolved slides and navigation table are usable.
    pub fn validate(&self) -> PortalResult<()> {
        self.build_carousel()?;
        self.build_nav()?;
        Ok(())
    }
}
