use crate::dynamics::state::{Sample, SimConfig, State};

use super::integrator::rk4_step;

// ---------------------------------------------------------------------------
// Driving loop
// ---------------------------------------------------------------------------

/// True if any state component is non-finite.
///
/// The integrator and derivative model never guard against numeric blow-up;
/// the loop (or its caller) decides what to do when this reports true.
pub fn diverged<const N: usize>(x: &State<N>) -> bool {
    x.iter().any(|c| !c.is_finite())
}

/// Propagate `x0` over the configured time span, threading each step's output
/// into the next. Returns the full time series, start sample included.
pub fn propagate<const N: usize, F>(x0: &State<N>, config: &SimConfig, f: F) -> Vec<Sample<N>>
where
    F: Fn(f64, &State<N>) -> State<N>,
{
    propagate_until(x0, config, f, |_| false)
}

/// Propagate with an early-out: after each step the new sample is passed to
/// `stop`, and the run ends once it returns true. The stopping sample is the
/// last one recorded.
pub fn propagate_until<const N: usize, F, S>(
    x0: &State<N>,
    config: &SimConfig,
    f: F,
    stop: S,
) -> Vec<Sample<N>>
where
    F: Fn(f64, &State<N>) -> State<N>,
    S: Fn(&Sample<N>) -> bool,
{
    let steps = config.step_count();
    let mut samples = Vec::with_capacity((steps + 1).min(200_000));

    let mut state = *x0;
    let mut t = config.t_start;
    samples.push(Sample { time: t, state });

    for _ in 0..steps {
        let (next, t_next) = rk4_step(&state, t, config.dt, &f);
        state = next;
        t = t_next;

        let sample = Sample { time: t, state };
        let done = stop(&sample);
        samples.push(sample);
        if done {
            break;
        }
    }

    samples
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
