mod aerodynamics;
mod environment;

pub use aerodynamics::AerodynamicsConfig;
pub use environment::{
    AtmosphereConfig, AtmosphereType, EnvironmentConfig, EnvironmentResource, WindConfig,
};
