//! The map widget shown on every CRS page.
//!
//! It starts on a world view, gets an OpenStreetMap base layer and the
//! area-of-use rectangle, then zooms to the rectangle.

use crate::{
    core::{
        area::AreaOfUse,
        config::SiteConfig,
        constants::INITIAL_ZOOM,
        geo::{LatLng, LatLngBounds, TileCoord},
    },
    layers::{
        base::LayerTrait,
        rectangle::Rectangle,
        tile::{TileLayer, TileLayerOptions},
    },
};

#[derive(Debug)]
pub struct MapView {
    pub center: LatLng,
    pub zoom: f64,
    /// Viewport size in pixels
    pub size: (f64, f64),
    pub padding: f64,
    tile_layer: TileLayer,
    rectangle: Option<Rectangle>,
}

impl MapView {
    /// World view at zoom 1 with the configured base layer
    pub fn new(config: &SiteConfig) -> Self {
        let [width, height] = config.map.size;
        Self {
            center: LatLng::new(0.0, 0.0),
            zoom: INITIAL_ZOOM,
            size: (width, height),
            padding: config.map.fit_padding,
            tile_layer: TileLayer::new("osm", TileLayerOptions::from(&config.map)),
            rectangle: None,
        }
    }

    /// The full page setup: base layer, area rectangle, view fitted to it
    pub fn for_area(area: &AreaOfUse, config: &SiteConfig) -> Self {
        let mut map = Self::new(config);
        let rectangle = Rectangle::from_area(area, config.rectangle_color.clone());
        let bounds = rectangle.get_bounds();
        map.add_rectangle(rectangle);
        map.fit_bounds(&bounds);
        map
    }

    pub fn add_rectangle(&mut self, rectangle: Rectangle) {
        self.rectangle = Some(rectangle);
    }

    pub fn rectangle(&self) -> Option<&Rectangle> {
        self.rectangle.as_ref()
    }

    pub fn tile_layer(&self) -> &TileLayer {
        &self.tile_layer
    }

    /// Layers bottom to top
    pub fn layers(&self) -> Vec<&dyn LayerTrait> {
        let mut layers: Vec<&dyn LayerTrait> = vec![&self.tile_layer];
        if let Some(rectangle) = &self.rectangle {
            layers.push(rectangle);
        }
        layers
    }

    /// Centers on `bounds` and picks the highest integer zoom at which the
    /// projected bounds still fit inside the padded viewport.
    pub fn fit_bounds(&mut self, bounds: &LatLngBounds) {
        self.center = bounds.center();

        let available = (
            (self.size.0 - 2.0 * self.padding).max(1.0),
            (self.size.1 - 2.0 * self.padding).max(1.0),
        );
        let max_zoom = self.tile_layer.options().max_zoom;

        let mut best_zoom = 0;
        for zoom in 0..=max_zoom {
            let level = zoom as f64;
            let (west_px, north_px) = LatLng::new(bounds.north(), bounds.west()).to_pixel(level);
            let (east_px, south_px) = LatLng::new(bounds.south(), bounds.east()).to_pixel(level);

            let width = (east_px - west_px).abs();
            let height = (south_px - north_px).abs();

            if width <= available.0 && height <= available.1 {
                best_zoom = zoom;
            } else {
                break;
            }
        }

        log::debug!(
            "fit bounds {:?} -> center ({:.4}, {:.4}) zoom {}",
            bounds.corners(),
            self.center.lat,
            self.center.lng,
            best_zoom
        );
        self.zoom = best_zoom as f64;
    }

    /// Approximate geographic extent of the current view
    pub fn view_bounds(&self) -> LatLngBounds {
        let scale = crate::core::constants::TILE_SIZE as f64 * 2_f64.powf(self.zoom);
        let half_lng = self.size.0 / scale * 180.0;
        let lat_per_px = 170.1022 / scale;
        let half_lat = self.size.1 * lat_per_px / 2.0;
        LatLngBounds::from_coords(
            LatLng::clamp_lat(self.center.lat - half_lat),
            self.center.lng - half_lng,
            LatLng::clamp_lat(self.center.lat + half_lat),
            self.center.lng + half_lng,
        )
    }

    /// Tiles needed to paint the current view
    pub fn visible_tiles(&self) -> Vec<TileCoord> {
        self.tile_layer.tiles_for_bounds(&self.view_bounds(), self.zoom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_map_starts_on_world_view() {
        let map = MapView::new(&SiteConfig::default());
        assert_eq!(map.center, LatLng::new(0.0, 0.0));
        assert_eq!(map.zoom, 1.0);
        assert!(map.rectangle().is_none());
        assert_eq!(map.layers().len(), 1);
    }

    #[test]
    fn test_for_area_adds_rectangle_and_fits() {
        let config = SiteConfig::default();
        let area = AreaOfUse::new(170.0, -10.0, -170.0, 10.0);
        let map = MapView::for_area(&area, &config);

        let rectangle = map.rectangle().unwrap();
        assert_eq!(rectangle.corners(), [[-10.0, -190.0], [10.0, -170.0]]);
        assert_eq!(rectangle.style.color, "green");
        assert_eq!(map.center, LatLng::new(0.0, -180.0));
        assert_eq!(map.layers().len(), 2);
        // 20x20 degrees is ~228px at zoom 4 and ~456px at zoom 5
        assert_eq!(map.zoom, 4.0);
    }

    #[test]
    fn test_world_area_stays_zoomed_out() {
        let map = MapView::for_area(
            &AreaOfUse::new(-180.0, -90.0, 180.0, 90.0),
            &SiteConfig::default(),
        );
        assert!(map.zoom <= 1.0);
        assert!(!map.visible_tiles().is_empty());
    }

    #[test]
    fn test_tiny_area_is_capped_at_max_zoom() {
        let map = MapView::for_area(
            &AreaOfUse::new(4.0, 52.0, 4.00001, 52.00001),
            &SiteConfig::default(),
        );
        assert_eq!(map.zoom, 18.0);
    }
}
