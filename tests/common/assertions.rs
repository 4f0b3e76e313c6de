use aerosurf::components::{AeroBody, AeroForces, PhysicsComponent};
use approx::assert_relative_eq;
use nalgebra::Vector3;

#[track_caller]
pub fn assert_vector_eq(actual: &Vector3<f64>, expected: &Vector3<f64>, epsilon: f64) {
    assert_relative_eq!(*actual, *expected, epsilon = epsilon);
}

#[track_caller]
pub fn assert_forces_finite(forces: &AeroForces) {
    assert!(forces.lift.iter().all(|x| x.is_finite()), "Lift contains non-finite values");
    assert!(forces.drag.iter().all(|x| x.is_finite()), "Drag contains non-finite values");
    assert!(
        forces.torque.iter().all(|x| x.is_finite()),
        "Torque contains non-finite values"
    );
}

/// The net force and moment handed to the integrator equal the body's aerodynamic
/// totals when no other forces are present.
#[track_caller]
pub fn assert_physics_matches_body(physics: &PhysicsComponent, body: &AeroBody) {
    let forces = body.forces();
    assert_forces_finite(&forces);
    assert_vector_eq(&physics.net_force, &forces.total_force(), 1e-9);
    assert_vector_eq(&physics.net_moment, &forces.torque, 1e-9);
}
