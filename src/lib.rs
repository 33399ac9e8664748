pub mod config;
mod error;
pub mod generator;
pub mod options;
pub mod pattern;
pub mod permutations;
pub mod sample;

pub use error::Error;
pub use generator::{generate, generate_with};
pub use options::{Options, PartialOptions};
pub use permutations::{Permutations, permutations};

/// Result type for the library.
pub type Result<T> = std::result::Result<T, Error>;
