use bevy::prelude::*;

use crate::components::{PhysicsComponent, SpatialComponent};

/// Sums each body's categorized forces and moments into the world-frame net
/// force and moment read by the integrator.
pub fn force_calculator_system(mut query: Query<(&mut PhysicsComponent, &SpatialComponent)>) {
    for (mut physics, spatial) in query.iter_mut() {
        physics.accumulate(&spatial.attitude);
    }
}
