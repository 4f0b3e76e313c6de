pub mod aerodynamics;
pub mod physics;

pub use aerodynamics::{aero_force_system, surface_control_system};
pub use physics::force_calculator_system;
