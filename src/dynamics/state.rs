use nalgebra::{SVector, Vector3};

// ---------------------------------------------------------------------------
// Physical constants
// ---------------------------------------------------------------------------

pub const G0: f64 = 9.80665; // standard gravity, m/s^2

// ---------------------------------------------------------------------------
// State vector
// ---------------------------------------------------------------------------

/// Flat state vector with compile-time dimension. The integrator operates on
/// these by plain array arithmetic and never interprets individual slots.
pub type State<const N: usize> = SVector<f64, N>;

/// Point-mass kinematic state: [pos_x, pos_y, pos_z, vel_x, vel_y, vel_z].
/// Frame: East-North-Up, origin at the release point.
pub type KinematicState = State<6>;

/// Build a kinematic state from position and velocity vectors.
pub fn kinematic_state(pos: Vector3<f64>, vel: Vector3<f64>) -> KinematicState {
    KinematicState::new(pos.x, pos.y, pos.z, vel.x, vel.y, vel.z)
}

/// Position components of a kinematic state.
pub fn position(x: &KinematicState) -> Vector3<f64> {
    Vector3::new(x[0], x[1], x[2])
}

/// Velocity components of a kinematic state.
pub fn velocity(x: &KinematicState) -> Vector3<f64> {
    Vector3::new(x[3], x[4], x[5])
}

// ---------------------------------------------------------------------------
// Trajectory samples
// ---------------------------------------------------------------------------

/// One point of a trajectory time series.
#[derive(Debug, Clone)]
pub struct Sample<const N: usize> {
    pub time: f64,            // s
    pub state: State<N>,
}

impl Sample<6> {
    /// Up component of position.
    pub fn altitude(&self) -> f64 {
        self.state[2]
    }

    /// Up component of velocity.
    pub fn vertical_velocity(&self) -> f64 {
        self.state[5]
    }

    /// Velocity magnitude.
    pub fn speed(&self) -> f64 {
        velocity(&self.state).norm()
    }
}

// ---------------------------------------------------------------------------
// Simulation configuration
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct SimConfig {
    pub t_start: f64,         // s
    pub t_end: f64,           // s
    pub dt: f64,              // integration timestep, s
}

impl SimConfig {
    /// Number of fixed steps covering [t_start, t_end].
    pub fn step_count(&self) -> usize {
        ((self.t_end - self.t_start) / self.dt).round() as usize
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            t_start: 0.0,
            t_end: 60.0,
            dt: 0.01,         // 100 Hz
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
