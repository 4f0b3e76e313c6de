use bevy::prelude::*;
use nalgebra::{UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

use crate::physics::RigidBodyView;

/// Component for storing spatial state of a rigid body
#[derive(Component, Debug, Clone, Serialize, Deserialize)]
pub struct SpatialComponent {
    /// Center of mass in world space [m]
    pub position: Vector3<f64>,

    /// Linear velocity of the center of mass in world space [m/s]
    pub velocity: Vector3<f64>,

    /// Attitude quaternion (rotation from body to world frame)
    pub attitude: UnitQuaternion<f64>,

    /// Angular velocity in body frame [rad/s]
    pub angular_velocity: Vector3<f64>,
}

impl Default for SpatialComponent {
    fn default() -> Self {
        Self {
            position: Vector3::zeros(),
            velocity: Vector3::zeros(),
            attitude: UnitQuaternion::identity(),
            angular_velocity: Vector3::zeros(),
        }
    }
}

impl SpatialComponent {
    /// Create a new spatial component with initial values
    pub fn new(
        position: Vector3<f64>,
        velocity: Vector3<f64>,
        attitude: UnitQuaternion<f64>,
        angular_velocity: Vector3<f64>,
    ) -> Self {
        Self {
            position,
            velocity,
            attitude,
            angular_velocity,
        }
    }

    /// Angular velocity expressed in the world frame [rad/s]
    pub fn angular_velocity_world(&self) -> Vector3<f64> {
        self.attitude * self.angular_velocity
    }

    /// World-space position of a point given in body coordinates
    pub fn body_to_world(&self, body_point: &Vector3<f64>) -> Vector3<f64> {
        self.position + self.attitude * body_point
    }
}

impl RigidBodyView for SpatialComponent {
    fn center_of_mass(&self) -> Vector3<f64> {
        self.position
    }

    fn attitude(&self) -> UnitQuaternion<f64> {
        self.attitude
    }

    fn point_velocity(&self, world_point: &Vector3<f64>) -> Vector3<f64> {
        self.velocity + self.angular_velocity_world().cross(&(world_point - self.position))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_point_velocity_includes_rotation() {
        let spatial = SpatialComponent::new(
            Vector3::new(10.0, 0.0, 0.0),
            Vector3::new(50.0, 0.0, 0.0),
            UnitQuaternion::identity(),
            Vector3::new(1.0, 0.0, 0.0), // rolling
        );

        // Right wing tip (body -Y) drops when rolling about +X
        let tip = spatial.body_to_world(&Vector3::new(0.0, -5.0, 0.0));
        let velocity = spatial.point_velocity(&tip);
        assert_relative_eq!(velocity, Vector3::new(50.0, 0.0, -5.0), epsilon = 1e-12);

        assert_relative_eq!(spatial.point_velocity(&spatial.position), spatial.velocity);
    }

    #[test]
    fn test_angular_velocity_rotated_to_world() {
        let spatial = SpatialComponent {
            attitude: UnitQuaternion::from_axis_angle(&Vector3::z_axis(), FRAC_PI_2),
            angular_velocity: Vector3::new(1.0, 0.0, 0.0),
            ..Default::default()
        };
        assert_relative_eq!(
            spatial.angular_velocity_world(),
            Vector3::new(0.0, 1.0, 0.0),
            epsilon = 1e-12
        );
    }
}
