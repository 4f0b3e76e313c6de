use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WindConfig {
    /// Uniform wind, world frame [m/s]
    Constant { velocity: Vector3<f64> },
    /// Boundary-layer profile `u = u_r * (z / z_r)^alpha`, blowing towards `bearing`
    /// (degrees clockwise from +Y). Calm at and below ground level.
    PowerLaw {
        u_r: f64,
        z_r: f64,
        bearing: f64,
        alpha: f64,
    },
}

impl Default for WindConfig {
    fn default() -> Self {
        WindConfig::Constant {
            velocity: Vector3::zeros(),
        }
    }
}
