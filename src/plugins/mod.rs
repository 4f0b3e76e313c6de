mod aerodynamics;

pub use aerodynamics::{AerodynamicsPlugin, AerodynamicsSet};
