use bevy::prelude::*;
use nalgebra::Vector3;

use crate::components::{AeroForces, AeroSurface, SurfaceId, SurfaceRegistry, SurfaceTelemetry};

/// The lifting surfaces of one rigid body together with the last aggregated loads.
#[derive(Component, Debug, Clone, Default)]
pub struct AeroBody {
    pub surfaces: SurfaceRegistry,
    forces: AeroForces,
}

impl AeroBody {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_surfaces(surfaces: impl IntoIterator<Item = AeroSurface>) -> Self {
        let mut body = Self::new();
        for surface in surfaces {
            body.surfaces.insert(surface);
        }
        body
    }

    pub fn add_surface(&mut self, surface: AeroSurface) -> SurfaceId {
        self.surfaces.insert(surface)
    }

    /// Totals from the most recent tick, world frame. Torque is about the center of mass.
    pub fn forces(&self) -> AeroForces {
        self.forces
    }

    pub(crate) fn set_forces(&mut self, forces: AeroForces) {
        self.forces = forces;
    }

    pub fn center_of_pressure(&self, center_of_mass: &Vector3<f64>) -> Option<Vector3<f64>> {
        self.forces.center_of_pressure(center_of_mass)
    }

    pub fn telemetry(&self) -> Vec<SurfaceTelemetry> {
        self.surfaces.telemetry()
    }
}

/// Pilot or autopilot command, one entry per control axis (body frame), each in [-1, 1].
#[derive(Component, Debug, Clone, Copy, PartialEq, Default)]
pub struct ControlInput {
    pub vector: Vector3<f64>,
}

impl ControlInput {
    pub fn new(roll: f64, pitch: f64, yaw: f64) -> Self {
        Self {
            vector: Vector3::new(roll, pitch, yaw),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::AirfoilConfig;
    use nalgebra::UnitQuaternion;
    use std::sync::Arc;

    #[test]
    fn test_with_surfaces_assigns_ids() {
        let config = Arc::new(AirfoilConfig::default());
        let body = AeroBody::with_surfaces((0..3).map(|i| {
            AeroSurface::new(
                format!("panel_{i}"),
                config.clone(),
                Vector3::new(0.0, i as f64, 0.0),
                UnitQuaternion::identity(),
            )
        }));

        assert_eq!(body.surfaces.len(), 3);
        assert_eq!(body.telemetry().len(), 3);
        assert_eq!(body.forces(), AeroForces::zero());
        assert!(body.center_of_pressure(&Vector3::zeros()).is_none());
    }

    #[test]
    fn test_control_input_axes() {
        let input = ControlInput::new(0.1, -0.5, 1.0);
        assert_eq!(input.vector, Vector3::new(0.1, -0.5, 1.0));
    }
}
