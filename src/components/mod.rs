pub mod aerodynamics;
pub mod airfoil;
pub mod body;
pub mod physics;
pub mod spatial;
pub mod surface;

pub use aerodynamics::{AeroForces, AeroIntermediates, FlightCoefficients};
pub use airfoil::{
    corrected_lift_slope, load_airfoil, AirfoilConfig, AirfoilLibrary, AirfoilParams, ConfigError,
};
pub use body::{AeroBody, ControlInput};
pub use physics::{Force, ForceCategory, Moment, PhysicsComponent, ReferenceFrame};
pub use spatial::SpatialComponent;
pub use surface::{AeroSurface, SurfaceFrame, SurfaceId, SurfaceRegistry, SurfaceTelemetry};
