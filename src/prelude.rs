//! Prelude module for common crsmap types and traits
//!
//! This module re-exports the most commonly used types, traits, and functions
//! for easy importing with `use crsmap::prelude::*;`

pub use crate::core::{
    area::{normalize, AreaOfUse},
    config::{MapConfig, SiteConfig},
    constants::{HALF_PAGE_SIZE, PAGE_SIZE},
    geo::{LatLng, LatLngBounds, TileCoord},
    map::MapView,
};

pub use crate::layers::{
    base::{LayerTrait, LayerType},
    rectangle::{PathStyle, Rectangle},
    tile::{TileLayer, TileLayerOptions},
};

pub use crate::listing::{
    filter::SearchFilter,
    page::{filter_and_paginate, ListEntry, PageLink, PageLinks, PageView},
    query::PageState,
};

pub use crate::data::{
    catalog::{CrsCatalog, IndexReport},
    loader::{source_for, CatalogSource, FileCatalogSource, HttpCatalogSource},
    record::CrsRecord,
    wkt::{export_wkt, WktFlavor, WKT1_GDAL, WKT2_2019, WKT_FLAVORS},
};

pub use crate::download::{save_download, DownloadSource};

pub use crate::tiles::{TemplateSource, TileSource};

pub use crate::{CrsMapError, Result};
