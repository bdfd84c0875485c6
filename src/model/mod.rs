pub mod database;
pub mod entities;
pub mod time;

#[cfg(test)]
pub(crate) mod fixtures;

pub use database::{ApproachRef, LinkError, NeoDatabase};
pub use entities::{CloseApproach, NearEarthObject, ValidationError};
