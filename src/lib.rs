pub mod dynamics;
pub mod io;
pub mod physics;
pub mod sim;

// Flat re-exports for the common entry points
pub mod integrator {
    pub use crate::sim::integrator::rk4_step;
    pub use crate::sim::runner::{diverged, propagate, propagate_until};
}

pub mod types {
    pub use crate::dynamics::point_mass::{ConstantForce, ForceModel, PointMass};
    pub use crate::dynamics::state::{
        kinematic_state, position, velocity, KinematicState, Sample, SimConfig, State, G0,
    };
}
