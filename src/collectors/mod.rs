pub mod extract;

pub use extract::{load_approaches, load_neos, ExtractError};
