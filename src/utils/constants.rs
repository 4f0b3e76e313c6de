pub const AIR_DENSITY_SEA_LEVEL: f64 = 1.225; // kg/m^3
pub const AIR_GAS_CONSTANT: f64 = 287.05287; // J/(kg·K)
pub const ISA_SEA_LEVEL_TEMP: f64 = 288.15; // K
pub const ISA_LAPSE_RATE: f64 = -0.0065; // K/m
pub const ISA_TROPOPAUSE_ALTITUDE: f64 = 11_000.0; // m
pub const GRAVITY: f64 = 9.80665; // m/s^2

// Airfoil validation limits
pub const MIN_CHORD: f64 = 1e-3; // m
pub const MAX_FLAP_FRACTION: f64 = 0.4;
pub const DEFAULT_MAX_FLAP_ANGLE_DEG: f64 = 30.0;

// Numerical guards
pub const MIN_VELOCITY_SQUARED: f64 = 1e-12;
pub const MIN_EFFECTIVE_AOA_COS: f64 = 1e-4;
pub const MIN_FORCE_SQUARED: f64 = 1e-12;
