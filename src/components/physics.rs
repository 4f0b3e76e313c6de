use bevy::prelude::*;
use nalgebra::{UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

/// Forces and moments handed to the external rigid-body integrator.
#[derive(Component, Debug, Clone, Default, Serialize, Deserialize)]
pub struct PhysicsComponent {
    /// Sum of all forces, world frame [N]
    pub net_force: Vector3<f64>,
    /// Sum of all moments about the center of mass, world frame [N·m]
    pub net_moment: Vector3<f64>,
    pub forces: Vec<Force>,
    pub moments: Vec<Moment>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Force {
    pub vector: Vector3<f64>,
    /// Application point relative to the center of mass, in `frame`
    pub point: Option<Vector3<f64>>,
    pub frame: ReferenceFrame,
    pub category: ForceCategory,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Moment {
    pub vector: Vector3<f64>,
    pub frame: ReferenceFrame,
    pub category: ForceCategory,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ReferenceFrame {
    Body,
    Inertial,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ForceCategory {
    Aerodynamic,
    Custom(String),
}

impl PhysicsComponent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_force(&mut self, force: Force) {
        self.forces.push(force);
    }

    pub fn add_moment(&mut self, moment: Moment) {
        self.moments.push(moment);
    }

    /// Drops every force and moment of `category`, keeping the rest.
    pub fn clear_category(&mut self, category: &ForceCategory) {
        self.forces.retain(|f| &f.category != category);
        self.moments.retain(|m| &m.category != category);
    }

    /// Recomputes `net_force` and `net_moment` in the world frame. Forces with an
    /// application point also contribute their lever-arm moment.
    pub fn accumulate(&mut self, attitude: &UnitQuaternion<f64>) {
        let to_world = |frame: ReferenceFrame, vector: &Vector3<f64>| match frame {
            ReferenceFrame::Body => attitude * vector,
            ReferenceFrame::Inertial => *vector,
        };

        let mut net_force = Vector3::zeros();
        let mut net_moment = Vector3::zeros();

        for force in &self.forces {
            let force_world = to_world(force.frame, &force.vector);
            net_force += force_world;

            if let Some(point) = &force.point {
                net_moment += to_world(force.frame, point).cross(&force_world);
            }
        }

        for moment in &self.moments {
            net_moment += to_world(moment.frame, &moment.vector);
        }

        self.net_force = net_force;
        self.net_moment = net_moment;
    }
}
