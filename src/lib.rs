pub mod coordinate;
pub mod utils;
pub mod settings;
pub mod commands;
pub mod api;

pub use crate::api::{from_decimal_degrees, from_deg_min_sec, from_maidenhead, to_deg_min_sec, to_maidenhead};

pub use coordinate::{Coordinate, Dms, GridStage, Hemisphere, ValidationError, ValidationResult};
pub use settings::Settings;
