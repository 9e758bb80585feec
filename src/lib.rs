//! # crsmap
//!
//! The logic behind a static coordinate reference system (CRS) documentation
//! site: the area-of-use rectangle drawn on a small Leaflet-style map, and the
//! searchable, paginated reference list built from `crslist.json`.
//!
//! Everything here is plain data in, plain data out. The page (or the
//! `crsmap` binary) owns the I/O around it.

pub mod core;
pub mod data;
pub mod download;
pub mod layers;
pub mod listing;
pub mod prelude;
pub mod tiles;
#[cfg(feature = "wasm")]
pub mod wasm;
pub use crate::core::constants;

// Re-export public API
pub use crate::core::{
    area::{normalize, AreaOfUse},
    config::SiteConfig,
    geo::{LatLng, LatLngBounds, TileCoord},
    map::MapView,
};

pub use crate::layers::{rectangle::Rectangle, tile::TileLayer};

pub use crate::listing::{
    filter::SearchFilter,
    page::{filter_and_paginate, PageLink, PageLinks, PageView},
    query::PageState,
};

pub use crate::data::{
    catalog::CrsCatalog,
    loader::{CatalogSource, FileCatalogSource, HttpCatalogSource},
    record::CrsRecord,
};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, CrsMapError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum CrsMapError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid data URI: {0}")]
    InvalidDataUri(String),

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Config error: {0}")]
    Config(String),
}

/// Error type alias for convenience
pub type Error = CrsMapError;
