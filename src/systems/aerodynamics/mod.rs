mod aggregator;
mod coefficients;
mod force_calculator;
mod surface_forces;

pub use aggregator::{
    aggregate_body_forces, aggregate_surface_forces, aggregate_surface_forces_parallel,
};
pub use coefficients::{
    calculate_coefficients, calculate_high_angle_coefficients, calculate_intermediates,
    calculate_low_angle_coefficients, coefficients_with_intermediates, drag_coefficient_at_90,
    sweep_coefficients, torque_coefficient_proportion, CoefficientSample,
};
pub use force_calculator::{aero_force_system, surface_control_system};
pub use surface_forces::{angle_of_attack, compute_surface_forces, Airflow, SurfaceEvaluation};
