//! Personal developer utilities: random string generation, config file
//! templates, file/directory copying and platform detection.

pub mod core;

// Re-export everything from core for ergonomic library use
// Users can write `toolbelt::fscopy` instead of `toolbelt::core::fscopy`
pub use core::*;
