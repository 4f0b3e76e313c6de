use nalgebra::{UnitQuaternion, Vector3};
use rayon::prelude::*;

use crate::components::{AeroBody, AeroForces, AeroSurface, SurfaceRegistry};
use crate::physics::{AtmosphereModel, RigidBodyView};
use crate::resources::AerodynamicsConfig;
use crate::systems::aerodynamics::Airflow;

/// Air conditions at one surface: point velocity through the air, lever arm from the
/// center of mass, and local density.
fn surface_airflow<B, A>(
    surface: &AeroSurface,
    body: &B,
    atmosphere: &A,
    attitude: &UnitQuaternion<f64>,
    center_of_mass: &Vector3<f64>,
    config: &AerodynamicsConfig,
) -> Airflow
where
    B: RigidBodyView + ?Sized,
    A: AtmosphereModel + ?Sized,
{
    let relative_position = attitude * surface.position;
    let world_position = center_of_mass + relative_position;

    let mut velocity = body.point_velocity(&world_position) - atmosphere.wind(&world_position);
    if velocity.norm() < config.min_airspeed_threshold {
        velocity = Vector3::zeros();
    }

    Airflow::new(velocity, relative_position).with_density(atmosphere.density(&world_position))
}

/// Evaluates every surface in `registry` for the current body state and returns the
/// world-frame total. Torque is about the center of mass.
pub fn aggregate_surface_forces<B, A>(
    registry: &mut SurfaceRegistry,
    body: &B,
    atmosphere: &A,
    config: &AerodynamicsConfig,
) -> AeroForces
where
    B: RigidBodyView + ?Sized,
    A: AtmosphereModel + ?Sized,
{
    let attitude = body.attitude();
    let center_of_mass = body.center_of_mass();

    registry
        .iter_mut()
        .map(|(_, surface)| {
            let airflow =
                surface_airflow(surface, body, atmosphere, &attitude, &center_of_mass, config);
            surface.calculate_forces(&attitude, &airflow, config.include_pitching_moment)
        })
        .sum()
}

/// Same as [`aggregate_surface_forces`] with the surfaces evaluated on the rayon pool.
pub fn aggregate_surface_forces_parallel<B, A>(
    registry: &mut SurfaceRegistry,
    body: &B,
    atmosphere: &A,
    config: &AerodynamicsConfig,
) -> AeroForces
where
    B: RigidBodyView + Sync + ?Sized,
    A: AtmosphereModel + Sync + ?Sized,
{
    let attitude = body.attitude();
    let center_of_mass = body.center_of_mass();

    registry
        .par_iter_mut()
        .map(|surface| {
            let airflow =
                surface_airflow(surface, body, atmosphere, &attitude, &center_of_mass, config);
            surface.calculate_forces(&attitude, &airflow, config.include_pitching_moment)
        })
        .reduce(AeroForces::zero, |a, b| a + b)
}

/// Aggregates the loads on `aero_body` and stores them as its latest totals.
pub fn aggregate_body_forces<B, A>(
    aero_body: &mut AeroBody,
    body: &B,
    atmosphere: &A,
    config: &AerodynamicsConfig,
) -> AeroForces
where
    B: RigidBodyView + Sync + ?Sized,
    A: AtmosphereModel + Sync + ?Sized,
{
    let forces = if config.parallel_surfaces {
        aggregate_surface_forces_parallel(&mut aero_body.surfaces, body, atmosphere, config)
    } else {
        aggregate_surface_forces(&mut aero_body.surfaces, body, atmosphere, config)
    };
    aero_body.set_forces(forces);
    forces
}
