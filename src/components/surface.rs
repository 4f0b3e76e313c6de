use nalgebra::{UnitQuaternion, Vector3};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

use crate::components::{AeroForces, AirfoilConfig, FlightCoefficients};
use crate::systems::aerodynamics::{compute_surface_forces, Airflow, SurfaceEvaluation};
use crate::utils::{deg_to_rad, finite_or_zero, DEFAULT_MAX_FLAP_ANGLE_DEG};

/// World-space axes of a surface. Chord is local +X, up (lift direction) local +Z and
/// span local +Y.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceFrame {
    pub chord_axis: Vector3<f64>,
    pub up_axis: Vector3<f64>,
    pub span_axis: Vector3<f64>,
}

impl SurfaceFrame {
    pub fn from_orientation(orientation: &UnitQuaternion<f64>) -> Self {
        Self {
            chord_axis: orientation * Vector3::x(),
            up_axis: orientation * Vector3::z(),
            span_axis: orientation * Vector3::y(),
        }
    }
}

impl Default for SurfaceFrame {
    fn default() -> Self {
        Self::from_orientation(&UnitQuaternion::identity())
    }
}

/// Results of the most recent force calculation, kept for telemetry.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct SurfaceState {
    forces: AeroForces,
    coefficients: FlightCoefficients,
    angle_of_attack: f64,
    is_stalling: bool,
}

/// A lifting surface mounted on a rigid body.
#[derive(Debug, Clone)]
pub struct AeroSurface {
    /// Label for telemetry
    pub name: String,
    pub config: Arc<AirfoilConfig>,
    /// Mount point in the body frame, relative to the center of mass [m]
    pub position: Vector3<f64>,
    /// Rotation from the surface frame to the body frame
    pub orientation: UnitQuaternion<f64>,
    /// Flap deflection at full deploy ratio [rad]
    pub max_flap_angle: f64,
    /// Body-frame control axis this surface responds to
    pub control_axis: Vector3<f64>,
    flap_deploy_ratio: f64,
    state: SurfaceState,
}

impl AeroSurface {
    pub fn new(
        name: impl Into<String>,
        config: Arc<AirfoilConfig>,
        position: Vector3<f64>,
        orientation: UnitQuaternion<f64>,
    ) -> Self {
        Self {
            name: name.into(),
            config,
            position,
            orientation,
            max_flap_angle: deg_to_rad(DEFAULT_MAX_FLAP_ANGLE_DEG),
            control_axis: Vector3::zeros(),
            flap_deploy_ratio: 0.0,
            state: SurfaceState::default(),
        }
    }

    pub fn with_max_flap_angle(mut self, max_flap_angle: f64) -> Self {
        self.max_flap_angle = max_flap_angle;
        self
    }

    pub fn with_control_axis(mut self, control_axis: Vector3<f64>) -> Self {
        self.control_axis = control_axis;
        self
    }

    pub fn flap_deploy_ratio(&self) -> f64 {
        self.flap_deploy_ratio
    }

    /// Sets the deploy ratio, clamped to [-1, 1]. NaN is treated as neutral.
    pub fn set_flap_deploy_ratio(&mut self, ratio: f64) {
        self.flap_deploy_ratio = if ratio.is_nan() {
            0.0
        } else {
            ratio.clamp(-1.0, 1.0)
        };
    }

    /// Deploys the flap by the projection of `control` on this surface's control axis.
    pub fn apply_control(&mut self, control: &Vector3<f64>) {
        self.set_flap_deploy_ratio(control.dot(&self.control_axis));
    }

    pub fn flap_angle(&self) -> f64 {
        self.flap_deploy_ratio * self.max_flap_angle
    }

    /// Computes and caches the loads for one tick.
    ///
    /// `attitude` maps the body frame to world, `airflow` holds the surface's velocity
    /// through the air and its lever arm from the center of mass, both in world space.
    pub fn calculate_forces(
        &mut self,
        attitude: &UnitQuaternion<f64>,
        airflow: &Airflow,
        include_pitching_moment: bool,
    ) -> AeroForces {
        let frame = SurfaceFrame::from_orientation(&(attitude * self.orientation));
        let evaluation = compute_surface_forces(
            &self.config,
            &frame,
            self.flap_angle(),
            airflow,
            include_pitching_moment,
        );
        self.record(&evaluation);
        evaluation.forces
    }

    fn record(&mut self, evaluation: &SurfaceEvaluation) {
        self.state = SurfaceState {
            forces: evaluation.forces,
            coefficients: evaluation.coefficients,
            angle_of_attack: evaluation.angle_of_attack,
            is_stalling: evaluation.is_stalling,
        };
    }

    pub fn forces(&self) -> AeroForces {
        self.state.forces
    }

    pub fn coefficients(&self) -> FlightCoefficients {
        self.state.coefficients
    }

    pub fn angle_of_attack(&self) -> f64 {
        self.state.angle_of_attack
    }

    pub fn is_stalling(&self) -> bool {
        self.state.is_stalling
    }

    pub fn telemetry(&self) -> SurfaceTelemetry {
        SurfaceTelemetry::from_surface(self)
    }
}

/// Read-only snapshot of a surface for debug displays. Non-finite values are
/// replaced by zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceTelemetry {
    pub name: String,
    pub flap_angle: f64,
    pub angle_of_attack: f64,
    pub coefficients: FlightCoefficients,
    pub forces: AeroForces,
    pub is_stalling: bool,
}

impl SurfaceTelemetry {
    pub fn from_surface(surface: &AeroSurface) -> Self {
        let coefficients = surface.coefficients();
        let forces = surface.forces();
        Self {
            name: surface.name.clone(),
            flap_angle: finite_or_zero(surface.flap_angle()),
            angle_of_attack: finite_or_zero(surface.angle_of_attack()),
            coefficients: FlightCoefficients {
                lift: finite_or_zero(coefficients.lift),
                drag: finite_or_zero(coefficients.drag),
                moment: finite_or_zero(coefficients.moment),
            },
            forces: AeroForces {
                lift: forces.lift.map(finite_or_zero),
                drag: forces.drag.map(finite_or_zero),
                torque: forces.torque.map(finite_or_zero),
            },
            is_stalling: surface.is_stalling(),
        }
    }
}

/// Stable handle of a surface inside a [`SurfaceRegistry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SurfaceId(u32);

impl SurfaceId {
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for SurfaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "surface#{}", self.0)
    }
}

/// Surfaces attached to one rigid body. Ids are never reused, so a removed
/// surface's id stays invalid.
#[derive(Debug, Clone, Default)]
pub struct SurfaceRegistry {
    slots: Vec<Option<AeroSurface>>,
}

impl SurfaceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, surface: AeroSurface) -> SurfaceId {
        let id = SurfaceId(self.slots.len() as u32);
        self.slots.push(Some(surface));
        id
    }

    pub fn remove(&mut self, id: SurfaceId) -> Option<AeroSurface> {
        self.slots.get_mut(id.index()).and_then(Option::take)
    }

    pub fn get(&self, id: SurfaceId) -> Option<&AeroSurface> {
        self.slots.get(id.index()).and_then(Option::as_ref)
    }

    pub fn get_mut(&mut self, id: SurfaceId) -> Option<&mut AeroSurface> {
        self.slots.get_mut(id.index()).and_then(Option::as_mut)
    }

    /// Returns `false` if `id` does not name a surface.
    pub fn set_flap_deploy_ratio(&mut self, id: SurfaceId, ratio: f64) -> bool {
        match self.get_mut(id) {
            Some(surface) => {
                surface.set_flap_deploy_ratio(ratio);
                true
            }
            None => false,
        }
    }

    /// Routes a per-axis control vector to every surface.
    pub fn apply_control(&mut self, control: &Vector3<f64>) {
        for (_, surface) in self.iter_mut() {
            surface.apply_control(control);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (SurfaceId, &AeroSurface)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|surface| (SurfaceId(i as u32), surface)))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (SurfaceId, &mut AeroSurface)> {
        self.slots
            .iter_mut()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_mut().map(|surface| (SurfaceId(i as u32), surface)))
    }

    pub fn par_iter_mut(&mut self) -> impl ParallelIterator<Item = &mut AeroSurface> {
        self.slots.par_iter_mut().filter_map(Option::as_mut)
    }

    pub fn telemetry(&self) -> Vec<SurfaceTelemetry> {
        self.iter().map(|(_, surface)| surface.telemetry()).collect()
    }

    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
