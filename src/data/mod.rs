pub mod catalog;
pub mod loader;
pub mod record;
pub mod wkt;
