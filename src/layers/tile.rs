use crate::{
    core::{
        config::MapConfig,
        constants::{MAX_ZOOM, OSM_ATTRIBUTION, TILE_SIZE},
        geo::{LatLng, LatLngBounds, TileCoord},
    },
    layers::base::{LayerProperties, LayerTrait, LayerType},
    tiles::source::{TemplateSource, TileSource},
};

/// Configuration for a tile layer
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TileLayerOptions {
    /// URL template for tiles (e.g., "https://tile.openstreetmap.org/{z}/{x}/{y}.png")
    pub url_template: String,
    /// Attribution text, HTML allowed
    pub attribution: String,
    /// Tile size in pixels
    pub tile_size: u32,
    /// Maximum zoom level for this tile source
    pub max_zoom: u8,
    /// Minimum zoom level for this tile source
    pub min_zoom: u8,
}

impl Default for TileLayerOptions {
    fn default() -> Self {
        Self {
            url_template: TemplateSource::openstreetmap().template().to_string(),
            attribution: OSM_ATTRIBUTION.to_string(),
            tile_size: TILE_SIZE,
            max_zoom: MAX_ZOOM,
            min_zoom: 0,
        }
    }
}

impl From<&MapConfig> for TileLayerOptions {
    fn from(config: &MapConfig) -> Self {
        Self {
            url_template: config.tile_url_template.clone(),
            attribution: config.tile_attribution.clone(),
            max_zoom: config.max_zoom,
            ..Self::default()
        }
    }
}

/// A tile-based base layer. It only knows which tiles a view needs; fetching
/// and drawing them is the map library's job.
pub struct TileLayer {
    properties: LayerProperties,
    options: TileLayerOptions,
    tile_source: Box<dyn TileSource>,
}

impl TileLayer {
    pub fn new(id: impl Into<String>, options: TileLayerOptions) -> Self {
        let tile_source = Box::new(TemplateSource::new(options.url_template.clone()));
        Self {
            properties: LayerProperties::new(id, LayerType::Tile),
            options,
            tile_source,
        }
    }

    /// The OpenStreetMap layer the CRS pages use
    pub fn openstreetmap() -> Self {
        Self::new("osm", TileLayerOptions::default())
    }

    pub fn options(&self) -> &TileLayerOptions {
        &self.options
    }

    pub fn attribution(&self) -> &str {
        &self.options.attribution
    }

    /// Clamps a requested zoom into what the source serves
    pub fn clamp_zoom(&self, zoom: f64) -> u8 {
        let zoom = zoom.floor().max(0.0) as u32;
        (zoom as u8).clamp(self.options.min_zoom, self.options.max_zoom)
    }

    /// Tiles covering `bounds` at `zoom`, row by row from the north-west.
    /// Bounds shifted past the antimeridian wrap onto the other side of the world.
    pub fn tiles_for_bounds(&self, bounds: &LatLngBounds, zoom: f64) -> Vec<TileCoord> {
        let z = self.clamp_zoom(zoom);
        let n = 1u64 << z;
        let nw = TileCoord::from_lat_lng(&LatLng::new(bounds.north(), bounds.west()), z);
        let se = TileCoord::from_lat_lng(&LatLng::new(bounds.south(), bounds.east()), z);

        // Horizontal tile count, taken from the unwrapped span
        let span = (bounds.east() - bounds.west()).clamp(0.0, 360.0);
        let columns = ((span / 360.0 * n as f64).ceil() as u64 + 1).min(n);

        let mut tiles = Vec::new();
        for y in nw.y..=se.y {
            for dx in 0..columns {
                let x = ((nw.x as u64 + dx) % n) as u32;
                tiles.push(TileCoord::new(x, y, z));
            }
        }
        tiles.dedup();
        tiles
    }

    pub fn tile_url(&self, coord: TileCoord) -> String {
        self.tile_source.url(coord)
    }
}

impl LayerTrait for TileLayer {
    fn properties(&self) -> &LayerProperties {
        &self.properties
    }
}

impl std::fmt::Debug for TileLayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TileLayer")
            .field("properties", &self.properties)
            .field("options", &self.options)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openstreetmap_defaults() {
        let layer = TileLayer::openstreetmap();
        assert_eq!(layer.options().max_zoom, 18);
        assert!(layer.attribution().contains("OpenStreetMap"));
        assert_eq!(layer.layer_type(), LayerType::Tile);
        assert!(LayerTrait::bounds(&layer).is_none());
    }

    #[test]
    fn test_zoom_is_clamped() {
        let layer = TileLayer::openstreetmap();
        assert_eq!(layer.clamp_zoom(25.0), 18);
        assert_eq!(layer.clamp_zoom(-3.0), 0);
        assert_eq!(layer.clamp_zoom(4.7), 4);
    }

    #[test]
    fn test_whole_world_at_zoom_one() {
        let layer = TileLayer::openstreetmap();
        let world = LatLngBounds::from_coords(-85.0, -180.0, 85.0, 180.0);
        let tiles = layer.tiles_for_bounds(&world, 1.0);
        assert_eq!(tiles.len(), 4);
    }

    #[test]
    fn test_crossing_bounds_wrap_tiles() {
        let layer = TileLayer::openstreetmap();
        let bounds = LatLngBounds::from_coords(-10.0, -190.0, 10.0, -170.0);
        let tiles = layer.tiles_for_bounds(&bounds, 2.0);

        assert!(tiles.iter().all(|t| t.x < 4 && t.y < 4 && t.z == 2));
        assert!(tiles.iter().any(|t| t.x == 3));
        assert!(tiles.iter().any(|t| t.x == 0));
        assert_eq!(
            layer.tile_url(tiles[0]),
            format!("https://tile.openstreetmap.org/2/{}/{}.png", tiles[0].x, tiles[0].y)
        );
    }
}
