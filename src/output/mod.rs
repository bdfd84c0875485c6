pub mod types;
pub mod write;

pub use write::{write_results, write_to_csv, write_to_json, WriteError};
