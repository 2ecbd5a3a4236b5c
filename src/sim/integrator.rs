use crate::dynamics::state::State;

// ---------------------------------------------------------------------------
// Classical 4th-order Runge-Kutta, fixed step, dimension-agnostic
// ---------------------------------------------------------------------------

/// Advance `x` at time `t` by a single step of size `dt` under the derivative
/// function `f`, returning the new state and time.
///
/// Each intermediate slope is evaluated at the base state plus the scaled
/// previous slope (`x + dt/2*k1`, `x + dt/2*k2`, `x + dt*k3`), and the update
/// combines the four slopes with the (1,2,2,1)/6 weights. Exactly four
/// derivative evaluations per call, no other work.
///
/// `dt = 0` returns the inputs unchanged; a negative `dt` integrates
/// backward. The caller's vector is left untouched.
pub fn rk4_step<const N: usize, F>(x: &State<N>, t: f64, dt: f64, f: F) -> (State<N>, f64)
where
    F: Fn(f64, &State<N>) -> State<N>,
{
    let half = dt * 0.5;

    let k1 = f(t, x);
    let k2 = f(t + half, &(x + k1 * half));
    let k3 = f(t + half, &(x + k2 * half));
    let k4 = f(t + dt, &(x + k3 * dt));

    let x_next = x + (k1 + k2 * 2.0 + k3 * 2.0 + k4) * (dt / 6.0);
    (x_next, t + dt)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::cell::Cell;

    #[test]
    fn constant_derivative_is_exact() {
        let c = State::<6>::from_element(2.5);
        let x0 = State::<6>::from_element(1.0);
        let (x1, t1) = rk4_step(&x0, 3.0, 0.25, |_t, _x| c);
        assert_relative_eq!(x1, x0 + c * 0.25, epsilon = 1e-14);
        assert_relative_eq!(t1, 3.25);
    }

    #[test]
    fn dimension_agnostic_over_2_and_4_components() {
        let c2 = State::<2>::new(1.0, -2.0);
        let (x1, _) = rk4_step(&State::<2>::zeros(), 0.0, 0.5, |_t, _x| c2);
        assert_relative_eq!(x1, c2 * 0.5, epsilon = 1e-14);

        let c4 = State::<4>::new(1.0, 2.0, 3.0, 4.0);
        let (x1, _) = rk4_step(&State::<4>::zeros(), 0.0, 0.5, |_t, _x| c4);
        assert_relative_eq!(x1, c4 * 0.5, epsilon = 1e-14);
    }

    #[test]
    fn zero_step_returns_input_unchanged() {
        let x0 = State::<6>::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0);
        let (x1, t1) = rk4_step(&x0, 7.0, 0.0, |_t, x| *x);
        assert_eq!(x1, x0);
        assert_eq!(t1, 7.0);
    }

    #[test]
    fn negative_step_integrates_backward() {
        let c = State::<2>::new(3.0, -1.0);
        let x0 = State::<2>::new(10.0, 10.0);
        let (x1, t1) = rk4_step(&x0, 5.0, -0.5, |_t, _x| c);
        assert_relative_eq!(x1, x0 - c * 0.5, epsilon = 1e-14);
        assert_relative_eq!(t1, 4.5);
    }

    #[test]
    fn exactly_four_derivative_evaluations() {
        let calls = Cell::new(0u32);
        let f = |_t: f64, x: &State<3>| {
            calls.set(calls.get() + 1);
            *x
        };
        rk4_step(&State::<3>::from_element(1.0), 0.0, 0.1, f);
        assert_eq!(calls.get(), 4);
    }

    #[test]
    fn staging_uses_base_state_plus_scaled_slope() {
        // dx/dt = x over one step matches the degree-4 Taylor polynomial of
        // e^dt; an integrator that feeds k_i*dt/2 alone into f lands far away.
        let h = 0.1;
        let (x1, _) = rk4_step(&State::<1>::new(1.0), 0.0, h, |_t, x| *x);
        let taylor4 = 1.0 + h + h * h / 2.0 + h * h * h / 6.0 + h * h * h * h / 24.0;
        assert_relative_eq!(x1[0], taylor4, epsilon = 1e-13);
    }

    #[test]
    fn off_grid_evaluation_times() {
        // Stage times must be t, t+dt/2, t+dt/2, t+dt.
        let seen = Cell::new([0.0f64; 4]);
        let idx = Cell::new(0usize);
        let f = |t: f64, _x: &State<1>| {
            let mut ts = seen.get();
            ts[idx.get()] = t;
            seen.set(ts);
            idx.set(idx.get() + 1);
            State::<1>::zeros()
        };
        rk4_step(&State::<1>::zeros(), 2.0, 0.4, f);
        let ts = seen.get();
        assert_relative_eq!(ts[0], 2.0);
        assert_relative_eq!(ts[1], 2.2);
        assert_relative_eq!(ts[2], 2.2);
        assert_relative_eq!(ts[3], 2.4);
    }

    #[test]
    fn fourth_order_convergence_on_oscillator() {
        // dx/dt = [v, -x], exact solution (cos t, -sin t) from (1, 0).
        let f = |_t: f64, x: &State<2>| State::<2>::new(x[1], -x[0]);

        let global_error = |dt: f64| {
            let steps = (1.0 / dt).round() as usize;
            let mut x = State::<2>::new(1.0, 0.0);
            let mut t = 0.0;
            for _ in 0..steps {
                let (xn, tn) = rk4_step(&x, t, dt, f);
                x = xn;
                t = tn;
            }
            (State::<2>::new(1.0_f64.cos(), -1.0_f64.sin()) - x).norm()
        };

        let coarse = global_error(0.1);
        let fine = global_error(0.05);
        let ratio = coarse / fine;
        assert!(
            ratio > 12.0 && ratio < 20.0,
            "halving dt should cut global error ~16x, got {:.1}x",
            ratio
        );
    }
}
