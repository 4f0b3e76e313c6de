use nalgebra::{UnitQuaternion, Vector3};

/// Kinematic state of the rigid body a set of surfaces is attached to. Supplied by
/// the external integrator; aerodynamics only reads it.
pub trait RigidBodyView {
    /// World-space center of mass [m]
    fn center_of_mass(&self) -> Vector3<f64>;

    /// Rotation from the body frame to world
    fn attitude(&self) -> UnitQuaternion<f64>;

    /// World-space velocity of the material point at `world_point` [m/s]
    fn point_velocity(&self, world_point: &Vector3<f64>) -> Vector3<f64>;
}

/// Ambient air conditions.
pub trait AtmosphereModel {
    /// Wind velocity at `position` [m/s]
    fn wind(&self, position: &Vector3<f64>) -> Vector3<f64>;

    /// Air density at `position` [kg/m^3]
    fn density(&self, position: &Vector3<f64>) -> f64;
}
