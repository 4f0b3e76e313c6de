mod common;

use aerosurf::components::{
    AeroBody, ControlInput, Force, ForceCategory, PhysicsComponent, ReferenceFrame,
    SpatialComponent,
};
use aerosurf::resources::{
    AerodynamicsConfig, AtmosphereConfig, EnvironmentConfig, EnvironmentResource, WindConfig,
};
use aerosurf::utils::AIR_DENSITY_SEA_LEVEL;
use approx::assert_relative_eq;
use bevy::prelude::*;
use nalgebra::Vector3;
use pretty_assertions::assert_eq;

use common::{
    assert_forces_finite, assert_physics_matches_body, assert_vector_eq, create_test_aero_body,
    create_test_physics, create_test_spatial, TestApp, TestAppBuilder,
};

fn gliding_app(builder: TestAppBuilder) -> (TestApp, Entity) {
    let mut app = builder.build();
    let entity = app.spawn_body(
        create_test_spatial(),
        create_test_aero_body(),
        create_test_physics(),
    );
    (app, entity)
}

fn flap_ratio(body: &AeroBody, name: &str) -> f64 {
    body.surfaces
        .iter()
        .find(|(_, surface)| surface.name == name)
        .map(|(_, surface)| surface.flap_deploy_ratio())
        .expect("surface present")
}

#[test]
fn test_plugin_inserts_resources() {
    let app = TestAppBuilder::new().build();

    assert_eq!(
        app.get_state::<AerodynamicsConfig>(),
        Some(&AerodynamicsConfig::default())
    );
    assert!(app.get_state::<EnvironmentResource>().is_some());
}

#[test]
fn test_glide_step_hands_forces_to_integrator() {
    let (mut app, entity) = gliding_app(TestAppBuilder::new());
    app.run_fixed_step();

    let body = app.get::<AeroBody>(entity).expect("aero body");
    let physics = app.get::<PhysicsComponent>(entity).expect("physics");

    let forces = body.forces();
    assert!(forces.lift.z > 0.0);
    assert!(forces.drag.x < 0.0);
    assert_physics_matches_body(physics, body);

    assert_eq!(physics.forces.len(), 1);
    assert_eq!(physics.moments.len(), 1);
    assert_eq!(physics.forces[0].category, ForceCategory::Aerodynamic);
}

#[test]
fn test_symmetric_body_has_no_roll_or_yaw() {
    let (mut app, entity) = gliding_app(TestAppBuilder::new());
    app.run_fixed_step();

    let body = app.get::<AeroBody>(entity).expect("aero body");
    let torque = body.forces().torque;
    assert_relative_eq!(torque.x, 0.0, epsilon = 1e-9);
    assert_relative_eq!(torque.z, 0.0, epsilon = 1e-9);

    let spatial = app.get::<SpatialComponent>(entity).expect("spatial");
    let center_of_pressure = body
        .center_of_pressure(&spatial.position)
        .expect("loaded body has a center of pressure");
    assert_relative_eq!(center_of_pressure.y, spatial.position.y, epsilon = 1e-9);
}

#[test]
fn test_repeated_steps_replace_aerodynamic_forces() {
    let mut physics = create_test_physics();
    let weight = Vector3::new(0.0, 0.0, -9.81 * 800.0);
    physics.add_force(Force {
        vector: weight,
        point: None,
        frame: ReferenceFrame::Inertial,
        category: ForceCategory::Custom("gravity".to_string()),
    });

    let mut app = TestAppBuilder::new().build();
    let entity = app.spawn_body(create_test_spatial(), create_test_aero_body(), physics);
    app.run_fixed_steps(3);

    let body = app.get::<AeroBody>(entity).expect("aero body");
    let physics = app.get::<PhysicsComponent>(entity).expect("physics");

    assert_eq!(physics.forces.len(), 2);
    assert_eq!(physics.moments.len(), 1);
    assert_vector_eq(
        &physics.net_force,
        &(body.forces().total_force() + weight),
        1e-9,
    );
}

#[test]
fn test_control_input_deflects_elevator() {
    let mut app = TestAppBuilder::new().build();
    let entity = app.spawn_controlled_body(
        create_test_spatial(),
        create_test_aero_body(),
        create_test_physics(),
        ControlInput::new(0.0, 0.5, 0.0),
    );
    app.run_fixed_step();

    let body = app.get::<AeroBody>(entity).expect("aero body");
    assert_eq!(flap_ratio(body, "elevator"), 0.5);
    assert_eq!(flap_ratio(body, "left_wing"), 0.0);
    let deflected_pitch = body.forces().torque.y;

    app.get_mut::<ControlInput>(entity)
        .expect("control input")
        .vector = Vector3::new(0.0, -2.0, 0.0);
    app.run_fixed_step();

    let body = app.get::<AeroBody>(entity).expect("aero body");
    assert_eq!(flap_ratio(body, "elevator"), -1.0);
    // Trailing edge up on the tail loses tail lift: less nose-down torque
    assert!(body.forces().torque.y < deflected_pitch);
}

#[test]
fn test_wind_matching_body_velocity_unloads_surfaces() {
    let spatial = create_test_spatial();
    let environment = EnvironmentConfig::new(
        WindConfig::Constant {
            velocity: spatial.velocity,
        },
        AtmosphereConfig::default(),
    );
    let (mut app, entity) = gliding_app(TestAppBuilder::new().with_environment(environment));
    app.run_fixed_step();

    let body = app.get::<AeroBody>(entity).expect("aero body");
    let forces = body.forces();
    assert_eq!(forces.total_force(), Vector3::zeros());
    assert_eq!(forces.torque, Vector3::zeros());

    for telemetry in body.telemetry() {
        assert_eq!(telemetry.angle_of_attack, 0.0);
        assert!(!telemetry.is_stalling);
    }
}

#[test]
fn test_standard_atmosphere_scales_loads_with_density() {
    let (mut sea_level, sea_entity) = gliding_app(TestAppBuilder::new());
    let standard_environment =
        EnvironmentConfig::default().with_atmosphere(AtmosphereConfig::standard());
    let (mut standard, standard_entity) =
        gliding_app(TestAppBuilder::new().with_environment(standard_environment));
    sea_level.run_fixed_step();
    standard.run_fixed_step();

    let altitude = create_test_spatial().position;
    let density = standard
        .get_state::<EnvironmentResource>()
        .expect("environment")
        .get_density(&altitude);
    assert!(density < AIR_DENSITY_SEA_LEVEL);

    let dense = sea_level.get::<AeroBody>(sea_entity).expect("aero body").forces();
    let thin = standard.get::<AeroBody>(standard_entity).expect("aero body").forces();
    assert_vector_eq(
        &thin.lift,
        &(dense.lift * (density / AIR_DENSITY_SEA_LEVEL)),
        1e-9,
    );
}

#[test]
fn test_parallel_surfaces_match_sequential() {
    let spatial = SpatialComponent {
        angular_velocity: Vector3::new(0.3, -0.2, 0.1),
        ..create_test_spatial()
    };

    let mut sequential = TestAppBuilder::new().build();
    let a = sequential.spawn_body(spatial.clone(), create_test_aero_body(), create_test_physics());

    let mut parallel = TestAppBuilder::new()
        .with_aerodynamics(AerodynamicsConfig {
            parallel_surfaces: true,
            ..Default::default()
        })
        .build();
    let b = parallel.spawn_body(spatial, create_test_aero_body(), create_test_physics());

    sequential.run_fixed_step();
    parallel.run_fixed_step();

    let expected = sequential.get::<PhysicsComponent>(a).expect("physics");
    let actual = parallel.get::<PhysicsComponent>(b).expect("physics");
    assert_vector_eq(&actual.net_force, &expected.net_force, 1e-9);
    assert_vector_eq(&actual.net_moment, &expected.net_moment, 1e-9);
}

#[test]
fn test_pitching_moment_only_changes_torque() {
    let (mut without, a) = gliding_app(TestAppBuilder::new());
    let (mut with, b) = gliding_app(TestAppBuilder::new().with_aerodynamics(AerodynamicsConfig {
        include_pitching_moment: true,
        ..Default::default()
    }));
    without.run_fixed_step();
    with.run_fixed_step();

    let without = without.get::<AeroBody>(a).expect("aero body").forces();
    let with = with.get::<AeroBody>(b).expect("aero body").forces();
    assert_forces_finite(&with);

    assert_vector_eq(&with.total_force(), &without.total_force(), 1e-12);
    assert_relative_eq!(with.torque.x, without.torque.x, epsilon = 1e-9);
    // Positive lift gives a nose-down section moment (positive about +Y)
    assert!(with.torque.y > without.torque.y);
}
