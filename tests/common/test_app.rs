use aerosurf::{
    components::{AeroBody, ControlInput, PhysicsComponent, SpatialComponent},
    plugins::AerodynamicsPlugin,
    resources::{AerodynamicsConfig, EnvironmentConfig},
};
use bevy::prelude::*;

// Builder for creating a test application with customizable configuration
#[derive(Default)]
pub struct TestAppBuilder {
    environment_config: Option<EnvironmentConfig>,
    aero_config: Option<AerodynamicsConfig>,
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_environment(mut self, config: EnvironmentConfig) -> Self {
        self.environment_config = Some(config);
        self
    }

    pub fn with_aerodynamics(mut self, config: AerodynamicsConfig) -> Self {
        self.aero_config = Some(config);
        self
    }

    pub fn build(self) -> TestApp {
        let mut app = App::new();
        app.add_plugins(AerodynamicsPlugin::new(
            self.environment_config.unwrap_or_default(),
            self.aero_config.unwrap_or_default(),
        ));

        TestApp { app }
    }
}

/// Main test application wrapper
pub struct TestApp {
    pub app: App,
}

impl TestApp {
    pub fn spawn_body(
        &mut self,
        spatial: SpatialComponent,
        body: AeroBody,
        physics: PhysicsComponent,
    ) -> Entity {
        self.app.world_mut().spawn((spatial, body, physics)).id()
    }

    pub fn spawn_controlled_body(
        &mut self,
        spatial: SpatialComponent,
        body: AeroBody,
        physics: PhysicsComponent,
        input: ControlInput,
    ) -> Entity {
        self.app
            .world_mut()
            .spawn((spatial, body, physics, input))
            .id()
    }

    /// Runs the fixed-timestep schedule once, independent of wall-clock time.
    pub fn run_fixed_step(&mut self) {
        self.app.world_mut().run_schedule(FixedUpdate);
    }

    pub fn run_fixed_steps(&mut self, steps: usize) {
        for _ in 0..steps {
            self.run_fixed_step();
        }
    }

    pub fn get_state<T: Resource>(&self) -> Option<&T> {
        self.app.world().get_resource::<T>()
    }

    pub fn get<T: Component>(&self, entity: Entity) -> Option<&T> {
        self.app.world().get::<T>(entity)
    }

    pub fn get_mut<T: Component>(&mut self, entity: Entity) -> Option<Mut<T>> {
        self.app.world_mut().get_mut::<T>(entity)
    }
}
