//! Coordinate handling for geographic positions
//!
//! This module provides the validated coordinate type together with its
//! degrees/minutes/seconds and Maidenhead grid locator representations.

mod errors;
mod hemisphere;
mod dms;
pub mod maidenhead;
mod point;

#[cfg(test)]
mod tests;

// Re-export key types
pub use self::errors::{ValidationError, ValidationResult};
pub use self::hemisphere::Hemisphere;
pub use self::dms::{Dms, DEFAULT_SECONDS_DECIMALS};
pub use self::maidenhead::GridStage;
pub use self::point::Coordinate;
