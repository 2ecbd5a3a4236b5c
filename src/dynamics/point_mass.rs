use nalgebra::Vector3;

use crate::dynamics::state::{velocity, KinematicState};
use crate::physics::gravity;

// ---------------------------------------------------------------------------
// Force models
// ---------------------------------------------------------------------------

/// Net external force on the body at a given time and state.
///
/// Implementations must be pure: no side effects, no hidden state, total over
/// the numeric domain. Non-finite inputs simply propagate to the output.
pub trait ForceModel {
    fn force(&self, t: f64, x: &KinematicState) -> Vector3<f64>;
}

/// Any closure (time, state) -> force is a force model.
impl<F> ForceModel for F
where
    F: Fn(f64, &KinematicState) -> Vector3<f64>,
{
    fn force(&self, t: f64, x: &KinematicState) -> Vector3<f64> {
        self(t, x)
    }
}

/// Force that is constant in time and state.
#[derive(Debug, Clone, Copy)]
pub struct ConstantForce(pub Vector3<f64>);

impl ForceModel for ConstantForce {
    fn force(&self, _t: f64, _x: &KinematicState) -> Vector3<f64> {
        self.0
    }
}

// ---------------------------------------------------------------------------
// Point-mass equations of motion
// ---------------------------------------------------------------------------

/// Point-mass dynamics under a force law: d(pos)/dt = vel, d(vel)/dt = F/m.
#[derive(Debug, Clone)]
pub struct PointMass<F> {
    pub mass: f64,            // kg
    pub force: F,
}

impl<F: ForceModel> PointMass<F> {
    pub fn new(mass: f64, force: F) -> Self {
        Self { mass, force }
    }

    /// State derivative at (t, x): velocity in slots 0-2, acceleration in 3-5.
    pub fn derivative(&self, t: f64, x: &KinematicState) -> KinematicState {
        let v = velocity(x);
        let a = self.force.force(t, x) / self.mass;
        KinematicState::new(v.x, v.y, v.z, a.x, a.y, a.z)
    }
}

impl PointMass<ConstantForce> {
    /// Free fall under uniform gravity: F = (0, 0, -g*m).
    pub fn constant_gravity(mass: f64) -> Self {
        Self::new(mass, ConstantForce(gravity::uniform_force(mass)))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
