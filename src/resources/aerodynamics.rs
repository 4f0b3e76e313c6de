use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Evaluation options shared by every aerodynamic body.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AerodynamicsConfig {
    /// Add the section pitching moment `Cm * chord` to each surface's torque
    pub include_pitching_moment: bool,
    /// Evaluate the surfaces of a body on the rayon pool
    pub parallel_surfaces: bool,
    /// Surfaces slower than this through the air carry no load [m/s]
    pub min_airspeed_threshold: f64,
}

impl Default for AerodynamicsConfig {
    fn default() -> Self {
        Self {
            include_pitching_moment: false,
            parallel_surfaces: false,
            min_airspeed_threshold: 1e-6,
        }
    }
}
