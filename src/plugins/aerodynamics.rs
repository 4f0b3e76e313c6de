use bevy::prelude::*;

use crate::resources::{AerodynamicsConfig, EnvironmentConfig, EnvironmentResource};
use crate::systems::{aero_force_system, force_calculator_system, surface_control_system};

#[derive(Debug, Hash, PartialEq, Eq, Clone, SystemSet)]
pub enum AerodynamicsSet {
    /// Control inputs to flap deflections
    Control,
    /// Per-surface loads and body totals
    Forces,
    /// Net force and moment for the integrator
    Accumulate,
}

#[derive(Default)]
pub struct AerodynamicsPlugin {
    pub environment: EnvironmentConfig,
    pub config: AerodynamicsConfig,
}

impl AerodynamicsPlugin {
    pub fn new(environment: EnvironmentConfig, config: AerodynamicsConfig) -> Self {
        Self {
            environment,
            config,
        }
    }
}

impl Plugin for AerodynamicsPlugin {
    fn build(&self, app: &mut App) {
        info!(
            "Building aerodynamics plugin (pitching moment: {}, parallel surfaces: {})",
            self.config.include_pitching_moment, self.config.parallel_surfaces
        );

        app.insert_resource(EnvironmentResource::new(&self.environment))
            .insert_resource(self.config.clone());

        app.configure_sets(
            FixedUpdate,
            (
                AerodynamicsSet::Control,
                AerodynamicsSet::Forces,
                AerodynamicsSet::Accumulate,
            )
                .chain(),
        );

        app.add_systems(
            FixedUpdate,
            (
                surface_control_system.in_set(AerodynamicsSet::Control),
                aero_force_system.in_set(AerodynamicsSet::Forces),
                force_calculator_system.in_set(AerodynamicsSet::Accumulate),
            ),
        );
    }
}
