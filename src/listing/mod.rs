//! The searchable, paginated CRS reference list.

pub mod filter;
pub mod page;
pub mod query;
