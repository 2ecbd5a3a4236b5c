use nalgebra::Vector3;

use crate::dynamics::state::G0;

/// Uniform gravity acceleration (flat-Earth approximation, ENU, z up).
pub fn uniform_accel() -> Vector3<f64> {
    Vector3::new(0.0, 0.0, -G0)
}

/// Gravity force on a body of the given mass.
pub fn uniform_force(mass: f64) -> Vector3<f64> {
    uniform_accel() * mass
}
