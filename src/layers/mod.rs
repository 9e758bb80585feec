pub mod base;
pub mod rectangle;
pub mod tile;
