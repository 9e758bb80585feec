//! Site configuration
//!
//! Values are layered: built-in defaults, then an optional JSON file, then the
//! `CRSMAP_HOME_DIR` environment variable. The binary applies its own flags on
//! top of the result.

use crate::core::constants::{
    DEFAULT_RECTANGLE_COLOR, HOME_DIR_ENV, LIST_FILE, MAX_ZOOM, OSM_ATTRIBUTION, OSM_TILE_URL,
    ZOOM_LIMIT,
};
use crate::{CrsMapError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Prefix of every site link, `.` for a site served from its own root
    pub home_dir: String,
    /// File name of the record index below `home_dir`
    pub list_file: String,
    pub rectangle_color: String,
    pub map: MapConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    pub tile_url_template: String,
    pub tile_attribution: String,
    pub max_zoom: u8,
    /// Viewport size in pixels, `[width, height]`
    pub size: [f64; 2],
    /// Pixels kept free around a fitted rectangle
    pub fit_padding: f64,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            tile_url_template: OSM_TILE_URL.to_string(),
            tile_attribution: OSM_ATTRIBUTION.to_string(),
            max_zoom: MAX_ZOOM,
            size: [400.0, 300.0],
            fit_padding: 0.0,
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            home_dir: ".".to_string(),
            list_file: LIST_FILE.to_string(),
            rectangle_color: DEFAULT_RECTANGLE_COLOR.to_string(),
            map: MapConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Reads a JSON config file. Missing keys keep their defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        log::debug!("loaded site config from {}", path.display());
        config.validate()?;
        Ok(config)
    }

    /// Defaults, then the optional file, then the environment
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        Ok(config.with_env_overrides())
    }

    pub fn with_env_overrides(self) -> Self {
        self.with_home_dir_override(std::env::var(HOME_DIR_ENV).ok())
    }

    fn with_home_dir_override(mut self, home_dir: Option<String>) -> Self {
        if let Some(home_dir) = home_dir.filter(|dir| !dir.is_empty()) {
            log::debug!("home_dir overridden from environment: {}", home_dir);
            self.home_dir = home_dir;
        }
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.list_file.is_empty() {
            return Err(CrsMapError::Config("list_file must not be empty".to_string()));
        }
        if !self.map.tile_url_template.contains("{z}") {
            return Err(CrsMapError::Config(format!(
                "tile url template has no {{z}} placeholder: {}",
                self.map.tile_url_template
            )));
        }
        if self.map.max_zoom > ZOOM_LIMIT {
            return Err(CrsMapError::Config(format!(
                "max_zoom {} is above {}",
                self.map.max_zoom, ZOOM_LIMIT
            )));
        }
        if self.map.size.iter().any(|side| *side <= 0.0) {
            return Err(CrsMapError::Config("map size must be positive".to_string()));
        }
        Ok(())
    }

    /// Location of the record index, `<home_dir>/crslist.json`
    pub fn list_location(&self) -> String {
        join_home(&self.home_dir, &self.list_file)
    }
}

/// Joins a site-relative path onto the home dir without doubling slashes
pub(crate) fn join_home(home_dir: &str, rest: &str) -> String {
    format!("{}/{}", home_dir.trim_end_matches('/'), rest.trim_start_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_match_the_page() {
        let config = SiteConfig::default();
        assert_eq!(config.rectangle_color, "green");
        assert_eq!(config.map.max_zoom, 18);
        assert_eq!(config.list_location(), "./crslist.json");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"home_dir": "https://example.org/crs/", "rectangle_color": "red"}}"#)
            .unwrap();

        let config = SiteConfig::from_file(file.path()).unwrap();
        assert_eq!(config.home_dir, "https://example.org/crs/");
        assert_eq!(config.rectangle_color, "red");
        assert_eq!(config.list_file, "crslist.json");
        assert_eq!(config.list_location(), "https://example.org/crs/crslist.json");
    }

    #[test]
    fn test_invalid_template_is_rejected() {
        let mut config = SiteConfig::default();
        config.map.tile_url_template = "https://tiles.example/static.png".to_string();
        assert!(matches!(config.validate(), Err(CrsMapError::Config(_))));
    }

    #[test]
    fn test_zoom_beyond_tile_grid_is_rejected() {
        let mut config = SiteConfig::default();
        config.map.max_zoom = 30;
        assert!(config.validate().is_ok());

        config.map.max_zoom = 32;
        assert!(matches!(config.validate(), Err(CrsMapError::Config(_))));
    }

    #[test]
    fn test_home_dir_override() {
        let config = SiteConfig::default().with_home_dir_override(Some("/srv/site".to_string()));
        assert_eq!(config.home_dir, "/srv/site");

        let untouched = SiteConfig::default().with_home_dir_override(Some(String::new()));
        assert_eq!(untouched.home_dir, ".");
    }
}
