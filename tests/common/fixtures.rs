use aerosurf::components::{
    AeroBody, AeroSurface, AirfoilConfig, AirfoilParams, PhysicsComponent, SpatialComponent,
};
use nalgebra::{UnitQuaternion, Vector3};
use std::sync::Arc;

pub fn wing_profile() -> Arc<AirfoilConfig> {
    Arc::new(
        AirfoilConfig::new(AirfoilParams {
            span: 4.0,
            chord: 1.2,
            aspect_ratio: 7.0,
            stall_angle_positive_deg: 15.0,
            stall_angle_negative_deg: -12.0,
            flap_fraction: 0.25,
            ..Default::default()
        })
        .expect("valid wing profile"),
    )
}

pub fn tail_profile() -> Arc<AirfoilConfig> {
    Arc::new(
        AirfoilConfig::new(AirfoilParams {
            span: 2.0,
            chord: 0.6,
            aspect_ratio: 4.0,
            flap_fraction: 0.4,
            ..Default::default()
        })
        .expect("valid tail profile"),
    )
}

/// Two wing halves either side of the center of mass and an elevator behind it that
/// responds to the pitch axis.
pub fn create_test_aero_body() -> AeroBody {
    let wing = wing_profile();
    AeroBody::with_surfaces([
        AeroSurface::new(
            "left_wing",
            wing.clone(),
            Vector3::new(0.2, 2.0, 0.0),
            UnitQuaternion::identity(),
        ),
        AeroSurface::new(
            "right_wing",
            wing,
            Vector3::new(0.2, -2.0, 0.0),
            UnitQuaternion::identity(),
        ),
        AeroSurface::new(
            "elevator",
            tail_profile(),
            Vector3::new(-4.0, 0.0, 0.0),
            UnitQuaternion::identity(),
        )
        .with_control_axis(Vector3::new(0.0, 1.0, 0.0)),
    ])
}

/// Level glide at 50 m/s with a slight sink rate, 1 km up.
pub fn create_test_spatial() -> SpatialComponent {
    SpatialComponent {
        position: Vector3::new(0.0, 0.0, 1000.0),
        velocity: Vector3::new(50.0, 0.0, -2.5),
        attitude: UnitQuaternion::identity(),
        angular_velocity: Vector3::zeros(),
    }
}

pub fn create_test_physics() -> PhysicsComponent {
    PhysicsComponent::new()
}
