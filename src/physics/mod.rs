pub mod traits;

pub use traits::{AtmosphereModel, RigidBodyView};
