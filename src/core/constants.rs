//! Site-wide constants taken from the documentation page and its Leaflet setup.
//! Keeping them in a single place makes it easier to find the magic numbers.

/// Number of records on one page of the reference list.
pub const PAGE_SIZE: usize = 50;

/// Records per column; each page is shown as two columns.
pub const HALF_PAGE_SIZE: usize = PAGE_SIZE / 2;

/// Name of the static record index next to the site root.
pub const LIST_FILE: &str = "crslist.json";

/// Colour of the area-of-use rectangle.
pub const DEFAULT_RECTANGLE_COLOR: &str = "green";

/// Tile server used by the map widget.
pub const OSM_TILE_URL: &str = "https://tile.openstreetmap.org/{z}/{x}/{y}.png";

/// Attribution shown in the map corner.
pub const OSM_ATTRIBUTION: &str = "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";

/// Deepest zoom the tile layer offers.
pub const MAX_ZOOM: u8 = 18;

/// Upper limit for a configured `max_zoom`; tile indices are `u32`.
pub const ZOOM_LIMIT: u8 = 30;

/// Zoom the map starts at before fitting the rectangle.
pub const INITIAL_ZOOM: f64 = 1.0;

/// Default square tile size in pixels.
pub const TILE_SIZE: u32 = 256;

/// One full turn of longitude.
pub const FULL_TURN_DEGREES: f64 = 360.0;

/// Width the generator pads codes to when sorting the index.
pub const CODE_SORT_WIDTH: usize = 7;

/// Environment variable overriding the configured home directory.
pub const HOME_DIR_ENV: &str = "CRSMAP_HOME_DIR";
