use crate::core::constants::OSM_TILE_URL;
use crate::core::geo::TileCoord;

/// Trait representing anything that can produce tile URLs for a given coordinate.
pub trait TileSource: Send + Sync {
    /// Build a URL for the requested `coord`.
    fn url(&self, coord: TileCoord) -> String;
}

/// Source driven by a Leaflet-style `{s}`/`{z}`/`{x}`/`{y}` URL template.
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateSource {
    template: String,
    subdomains: Vec<String>,
}

impl TemplateSource {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            subdomains: vec!["a".to_string(), "b".to_string(), "c".to_string()],
        }
    }

    /// Plain OpenStreetMap tiles, as used on the CRS pages
    pub fn openstreetmap() -> Self {
        Self::new(OSM_TILE_URL)
    }

    pub fn template(&self) -> &str {
        &self.template
    }
}

impl TileSource for TemplateSource {
    fn url(&self, coord: TileCoord) -> String {
        let mut url = self
            .template
            .replace("{z}", &coord.z.to_string())
            .replace("{x}", &coord.x.to_string())
            .replace("{y}", &coord.y.to_string());

        if url.contains("{s}") && !self.subdomains.is_empty() {
            let idx = ((coord.x + coord.y) % self.subdomains.len() as u32) as usize;
            url = url.replace("{s}", &self.subdomains[idx]);
        }
        url
    }
}
