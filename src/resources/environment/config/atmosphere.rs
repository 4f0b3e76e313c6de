use serde::{Deserialize, Serialize};

use crate::utils::{AIR_DENSITY_SEA_LEVEL, ISA_SEA_LEVEL_TEMP};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AtmosphereConfig {
    pub model_type: AtmosphereType,
    /// [kg/m^3]
    pub sea_level_density: f64,
    /// [K]
    pub sea_level_temperature: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AtmosphereType {
    /// Sea-level density everywhere
    Constant,
    /// ISA troposphere with an isothermal layer above the tropopause
    Standard,
}

impl Default for AtmosphereConfig {
    fn default() -> Self {
        Self {
            model_type: AtmosphereType::Constant,
            sea_level_density: AIR_DENSITY_SEA_LEVEL,
            sea_level_temperature: ISA_SEA_LEVEL_TEMP,
        }
    }
}

impl AtmosphereConfig {
    pub fn standard() -> Self {
        Self {
            model_type: AtmosphereType::Standard,
            ..Default::default()
        }
    }
}
