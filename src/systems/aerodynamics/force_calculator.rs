use bevy::prelude::*;

use crate::components::{
    AeroBody, ControlInput, Force, ForceCategory, Moment, PhysicsComponent, ReferenceFrame,
    SpatialComponent,
};
use crate::resources::{AerodynamicsConfig, EnvironmentResource};
use crate::systems::aerodynamics::aggregate_body_forces;

/// Routes each body's control input to its surfaces' flaps.
pub fn surface_control_system(
    mut bodies: Query<(&ControlInput, &mut AeroBody), Changed<ControlInput>>,
) {
    for (input, mut body) in bodies.iter_mut() {
        body.surfaces.apply_control(&input.vector);
    }
}

/// Evaluates every aerodynamic body and replaces its aerodynamic entries in the
/// physics hand-off with the new totals.
pub fn aero_force_system(
    mut bodies: Query<(&SpatialComponent, &mut AeroBody, &mut PhysicsComponent)>,
    environment: Res<EnvironmentResource>,
    aero_config: Res<AerodynamicsConfig>,
) {
    for (spatial, mut aero_body, mut physics) in bodies.iter_mut() {
        let forces = aggregate_body_forces(&mut aero_body, spatial, &*environment, &aero_config);

        physics.clear_category(&ForceCategory::Aerodynamic);
        physics.add_force(Force {
            vector: forces.total_force(),
            point: None,
            frame: ReferenceFrame::Inertial,
            category: ForceCategory::Aerodynamic,
        });
        physics.add_moment(Moment {
            vector: forces.torque,
            frame: ReferenceFrame::Inertial,
            category: ForceCategory::Aerodynamic,
        });

        debug!(
            "aero totals: lift={:.3?} drag={:.3?} torque={:.3?}",
            forces.lift, forces.drag, forces.torque
        );
    }
}
