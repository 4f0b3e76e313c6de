use bevy::prelude::*;
use nalgebra::Vector3;

use super::config::{AtmosphereConfig, AtmosphereType, EnvironmentConfig, WindConfig};
use crate::physics::AtmosphereModel;
use crate::utils::{AIR_GAS_CONSTANT, GRAVITY, ISA_LAPSE_RATE, ISA_TROPOPAUSE_ALTITUDE};

/// Wind and density seen by every aerodynamic body. Altitude is world +Z.
#[derive(Resource, Debug, Clone, Default)]
pub struct EnvironmentResource {
    config: EnvironmentConfig,
}

impl EnvironmentResource {
    pub fn new(config: &EnvironmentConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    pub fn config(&self) -> &EnvironmentConfig {
        &self.config
    }

    pub fn get_wind(&self, position: &Vector3<f64>) -> Vector3<f64> {
        match &self.config.wind {
            WindConfig::Constant { velocity } => *velocity,
            WindConfig::PowerLaw {
                u_r,
                z_r,
                bearing,
                alpha,
            } => {
                if position.z <= 0.0 || *z_r <= 0.0 {
                    return Vector3::zeros();
                }
                let speed = u_r * (position.z / z_r).powf(*alpha);
                let bearing = bearing.to_radians();
                Vector3::new(speed * bearing.sin(), speed * bearing.cos(), 0.0)
            }
        }
    }

    pub fn get_density(&self, position: &Vector3<f64>) -> f64 {
        let atmosphere = &self.config.atmosphere;
        match atmosphere.model_type {
            AtmosphereType::Constant => atmosphere.sea_level_density,
            AtmosphereType::Standard => standard_density(atmosphere, position.z),
        }
    }
}

impl AtmosphereModel for EnvironmentResource {
    fn wind(&self, position: &Vector3<f64>) -> Vector3<f64> {
        self.get_wind(position)
    }

    fn density(&self, position: &Vector3<f64>) -> f64 {
        self.get_density(position)
    }
}

fn standard_density(atmosphere: &AtmosphereConfig, altitude: f64) -> f64 {
    let t0 = atmosphere.sea_level_temperature;
    let rho0 = atmosphere.sea_level_density;
    let exponent = -GRAVITY / (ISA_LAPSE_RATE * AIR_GAS_CONSTANT) - 1.0;

    let troposphere_altitude = altitude.min(ISA_TROPOPAUSE_ALTITUDE);
    let temperature = (t0 + ISA_LAPSE_RATE * troposphere_altitude).max(1.0);
    let density = rho0 * (temperature / t0).powf(exponent);

    if altitude <= ISA_TROPOPAUSE_ALTITUDE {
        density
    } else {
        // Isothermal above the tropopause
        let excess = altitude - ISA_TROPOPAUSE_ALTITUDE;
        density * (-GRAVITY * excess / (AIR_GAS_CONSTANT * temperature)).exp()
    }
}
