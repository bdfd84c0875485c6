pub mod engine;
pub mod filters;

pub use engine::{limit, query};
pub use filters::{create_filters, AttributeFilter, Comparator, QueryOptions};
