#![allow(dead_code)]

mod assertions;
mod fixtures;
mod test_app;

// Re-export
pub use assertions::{assert_forces_finite, assert_physics_matches_body, assert_vector_eq};
pub use fixtures::*;
pub use test_app::{TestApp, TestAppBuilder};
