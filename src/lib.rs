//! In-memory database of near-Earth objects and their close approaches to Earth,
//! with composable filters and a lazy, limit-aware query.

pub mod collectors;
pub mod model;
pub mod output;
pub mod query;
pub mod utils;
