use crate::{
    core::{
        area::{normalize, AreaOfUse},
        constants::DEFAULT_RECTANGLE_COLOR,
        geo::LatLngBounds,
    },
    layers::base::{LayerProperties, LayerTrait, LayerType},
};
use serde::{Deserialize, Serialize};

/// Stroke and fill of a path, in Leaflet option names
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathStyle {
    /// Any CSS colour
    pub color: String,
    pub weight: f32,
    pub opacity: f32,
    pub fill_opacity: f32,
}

impl PathStyle {
    pub fn with_color(color: impl Into<String>) -> Self {
        Self {
            color: color.into(),
            ..Self::default()
        }
    }
}

impl Default for PathStyle {
    fn default() -> Self {
        Self {
            color: DEFAULT_RECTANGLE_COLOR.to_string(),
            weight: 3.0,
            opacity: 1.0,
            fill_opacity: 0.2,
        }
    }
}

/// A rectangle drawn over the map, the shape of an area of use
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    properties: LayerProperties,
    bounds: LatLngBounds,
    pub style: PathStyle,
}

impl Rectangle {
    pub fn new(bounds: LatLngBounds, style: PathStyle) -> Self {
        Self {
            properties: LayerProperties::new("area_of_use", LayerType::Vector),
            bounds,
            style,
        }
    }

    /// Builds the rectangle for an area of use, normalizing antimeridian crossings
    pub fn from_area(area: &AreaOfUse, color: impl Into<String>) -> Self {
        Self::new(normalize(area), PathStyle::with_color(color))
    }

    pub fn get_bounds(&self) -> LatLngBounds {
        self.bounds
    }

    /// `[[south, west], [north, east]]`, ready to hand to Leaflet
    pub fn corners(&self) -> [[f64; 2]; 2] {
        self.bounds.corners()
    }
}

impl LayerTrait for Rectangle {
    fn properties(&self) -> &LayerProperties {
        &self.properties
    }

    fn bounds(&self) -> Option<LatLngBounds> {
        Some(self.bounds)
    }
}
