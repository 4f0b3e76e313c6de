mod atmosphere;
mod wind;

pub use atmosphere::{AtmosphereConfig, AtmosphereType};
pub use wind::WindConfig;

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvironmentConfig {
    pub wind: WindConfig,
    pub atmosphere: AtmosphereConfig,
}

impl EnvironmentConfig {
    pub fn new(wind: WindConfig, atmosphere: AtmosphereConfig) -> Self {
        Self { wind, atmosphere }
    }

    /// Uniform horizontal wind of `wind_speed` [m/s] blowing towards `wind_direction`
    /// (degrees clockwise from +Y).
    pub fn with_constant_wind(wind_speed: f64, wind_direction: f64) -> Self {
        let angle_rad = wind_direction.to_radians();
        let velocity = Vector3::new(
            wind_speed * angle_rad.sin(),
            wind_speed * angle_rad.cos(),
            0.0,
        );

        Self {
            wind: WindConfig::Constant { velocity },
            atmosphere: AtmosphereConfig::default(),
        }
    }

    pub fn with_power_law_wind(u_r: f64, z_r: f64, bearing: f64, alpha: f64) -> Self {
        Self {
            wind: WindConfig::PowerLaw {
                u_r,
                z_r,
                bearing,
                alpha,
            },
            atmosphere: AtmosphereConfig::default(),
        }
    }

    pub fn with_atmosphere(mut self, atmosphere: AtmosphereConfig) -> Self {
        self.atmosphere = atmosphere;
        self
    }
}
