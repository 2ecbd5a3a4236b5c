pub mod point_mass;
pub mod state;

pub use point_mass::{ConstantForce, ForceModel, PointMass};
pub use state::{KinematicState, Sample, SimConfig, State};
