use nalgebra::Vector3;

use crate::components::{AeroForces, AirfoilConfig, FlightCoefficients, SurfaceFrame};
use crate::systems::aerodynamics::calculate_coefficients;
use crate::utils::{project_on_plane, signed_angle, AIR_DENSITY_SEA_LEVEL, MIN_VELOCITY_SQUARED};

/// Air conditions at a surface, in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Airflow {
    /// Velocity of the surface through the air (point velocity minus wind) [m/s]
    pub velocity: Vector3<f64>,
    /// Surface position relative to the body's center of mass [m]
    pub relative_position: Vector3<f64>,
    /// Air density [kg/m^3]
    pub density: f64,
}

impl Airflow {
    pub fn new(velocity: Vector3<f64>, relative_position: Vector3<f64>) -> Self {
        Self {
            velocity,
            relative_position,
            density: AIR_DENSITY_SEA_LEVEL,
        }
    }

    pub fn with_density(mut self, density: f64) -> Self {
        self.density = density;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceEvaluation {
    pub forces: AeroForces,
    pub coefficients: FlightCoefficients,
    pub angle_of_attack: f64,
    pub is_stalling: bool,
}

/// Angle between the chord and `velocity` about the span axis [rad]. Spanwise flow
/// must already be removed. Zero when the surface is not moving through the air.
pub fn angle_of_attack(frame: &SurfaceFrame, velocity: &Vector3<f64>) -> f64 {
    if velocity.norm_squared() < MIN_VELOCITY_SQUARED {
        return 0.0;
    }
    signed_angle(&frame.chord_axis, velocity, &frame.span_axis)
}

/// Lift, drag and torque on one surface for the current tick.
///
/// Spanwise flow is ignored. The stall flag compares against the profile's raw
/// stall angles, not the flap-corrected ones used by the coefficient model.
pub fn compute_surface_forces(
    config: &AirfoilConfig,
    frame: &SurfaceFrame,
    flap_angle: f64,
    airflow: &Airflow,
    include_pitching_moment: bool,
) -> SurfaceEvaluation {
    let velocity = project_on_plane(&airflow.velocity, &frame.span_axis);
    let aoa = angle_of_attack(frame, &velocity);
    let is_stalling = aoa > config.stall_angle_positive() || aoa < config.stall_angle_negative();
    let coefficients = calculate_coefficients(config, aoa, flap_angle);

    let speed_sq = velocity.norm_squared();
    if speed_sq < MIN_VELOCITY_SQUARED {
        return SurfaceEvaluation {
            forces: AeroForces::zero(),
            coefficients,
            angle_of_attack: aoa,
            is_stalling,
        };
    }

    let dynamic_pressure = 0.5 * airflow.density * speed_sq;
    let area = config.area();
    let drag_direction = -velocity / speed_sq.sqrt();

    let lift = frame.up_axis * (area * coefficients.lift * dynamic_pressure);
    let drag = drag_direction * (area * coefficients.drag * dynamic_pressure);
    let mut torque = airflow.relative_position.cross(&(lift + drag));
    if include_pitching_moment {
        torque -= frame.span_axis * (area * coefficients.moment * config.chord() * dynamic_pressure);
    }

    SurfaceEvaluation {
        forces: AeroForces { lift, drag, torque },
        coefficients,
        angle_of_attack: aoa,
        is_stalling,
    }
}
