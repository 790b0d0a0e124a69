pub mod copy;
pub mod generate;
pub mod platform;
pub mod random;
