use crate::core::geo::LatLngBounds;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayerType {
    Tile,
    Vector,
}

impl std::fmt::Display for LayerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayerType::Tile => write!(f, "tile"),
            LayerType::Vector => write!(f, "vector"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LayerProperties {
    pub id: String,
    pub layer_type: LayerType,
}

impl LayerProperties {
    pub fn new(id: impl Into<String>, layer_type: LayerType) -> Self {
        Self {
            id: id.into(),
            layer_type,
        }
    }
}

/// Something a [`MapView`](crate::core::map::MapView) can stack
pub trait LayerTrait {
    fn properties(&self) -> &LayerProperties;

    fn id(&self) -> &str {
        &self.properties().id
    }

    fn layer_type(&self) -> LayerType {
        self.properties().layer_type
    }

    /// Geographic extent of the layer, `None` for layers covering the world
    fn bounds(&self) -> Option<LatLngBounds> {
        None
    }
}
