use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::{Add, AddAssign};

use crate::utils::{lerp, MIN_FORCE_SQUARED};

/// Dimensionless lift, drag and pitching moment coefficients.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FlightCoefficients {
    pub lift: f64,
    pub drag: f64,
    pub moment: f64,
}

impl FlightCoefficients {
    pub fn new(lift: f64, drag: f64, moment: f64) -> Self {
        Self { lift, drag, moment }
    }

    /// Componentwise linear interpolation, `t` unclamped.
    pub fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            lift: lerp(a.lift, b.lift, t),
            drag: lerp(a.drag, b.drag, t),
            moment: lerp(a.moment, b.moment, t),
        }
    }

    pub fn is_finite(&self) -> bool {
        self.lift.is_finite() && self.drag.is_finite() && self.moment.is_finite()
    }
}

/// Values shared by both flight regimes for a given flap angle. Recomputed on every
/// evaluation since the flap angle can change every tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AeroIntermediates {
    pub flap_angle: f64,
    pub corrected_lift_slope: f64,
    pub flap_effectiveness: f64,
    /// Lift shift induced by the flap
    pub delta_lift: f64,
    /// Zero-lift angle of attack corrected for the flap
    pub zero_lift_aoa: f64,
    /// Stall bounds corrected for the flap
    pub stall_angle_positive: f64,
    pub stall_angle_negative: f64,
}

/// Dimensioned aerodynamic loads in world space [N], [N·m].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AeroForces {
    pub lift: Vector3<f64>,
    pub drag: Vector3<f64>,
    pub torque: Vector3<f64>,
}

impl Default for AeroForces {
    fn default() -> Self {
        Self::zero()
    }
}

impl AeroForces {
    pub fn zero() -> Self {
        Self {
            lift: Vector3::zeros(),
            drag: Vector3::zeros(),
            torque: Vector3::zeros(),
        }
    }

    /// Lift plus drag.
    pub fn total_force(&self) -> Vector3<f64> {
        self.lift + self.drag
    }

    /// Point on the line of action of the total force closest to `center_of_mass`.
    /// `None` when the force is too small to define one.
    pub fn center_of_pressure(&self, center_of_mass: &Vector3<f64>) -> Option<Vector3<f64>> {
        let force = self.total_force();
        let force_sq = force.norm_squared();
        if force_sq < MIN_FORCE_SQUARED {
            return None;
        }
        Some(center_of_mass + force.cross(&self.torque) / force_sq)
    }
}

impl Add for AeroForces {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            lift: self.lift + other.lift,
            drag: self.drag + other.drag,
            torque: self.torque + other.torque,
        }
    }
}

impl AddAssign for AeroForces {
    fn add_assign(&mut self, other: Self) {
        self.lift += other.lift;
        self.drag += other.drag;
        self.torque += other.torque;
    }
}

impl Sum for AeroForces {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}
