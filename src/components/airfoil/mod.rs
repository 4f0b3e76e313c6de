mod config;
mod loader;

pub use config::{corrected_lift_slope, AirfoilConfig, AirfoilParams};
pub use loader::{load_airfoil, AirfoilLibrary, ConfigError};
