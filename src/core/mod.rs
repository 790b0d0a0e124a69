// Public modules
pub mod console;
pub mod error;
pub mod fscopy;
pub mod generate;
pub mod math;
pub mod paths;
pub mod platform;
pub mod prompt;
pub mod strings;
pub mod urls;

// Re-export common types for convenience
pub use error::{Error, PathKind, Result};
