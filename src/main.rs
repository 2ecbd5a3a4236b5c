use nalgebra::Vector3;

use pointmass_sim::integrator;
use pointmass_sim::io::csv;
use pointmass_sim::io::summary::TrajectorySummary;
use pointmass_sim::sim::event;
use pointmass_sim::types::{kinematic_state, PointMass, SimConfig, G0};

fn main() {
    // -----------------------------------------------------------------------
    // Scenario: 10 kg body released from rest at 100 m, uniform gravity
    // -----------------------------------------------------------------------
    let mass = 10.0;        // kg
    let h0 = 100.0;         // m

    let model = PointMass::constant_gravity(mass);
    let config = SimConfig {
        t_start: 0.0,
        t_end: 60.0,
        dt: 0.01,
    };
    let x0 = kinematic_state(Vector3::new(0.0, 0.0, h0), Vector3::zeros());

    // -----------------------------------------------------------------------
    // Run simulation (stop at ground impact or numeric blow-up)
    // -----------------------------------------------------------------------
    let samples = integrator::propagate_until(
        &x0,
        &config,
        |t, x| model.derivative(t, x),
        |s| s.altitude() <= 0.0 || integrator::diverged(&s.state),
    );

    let summary = TrajectorySummary::from_samples(&samples);
    let events = event::scan(&samples);
    let last = samples.last().unwrap();

    // Closed-form free fall for comparison
    let t_impact = (2.0 * h0 / G0).sqrt();
    let v_impact = G0 * t_impact;

    // -----------------------------------------------------------------------
    // Print results
    // -----------------------------------------------------------------------
    println!();
    println!("====================================================================");
    println!("  POINT-MASS TRAJECTORY SIMULATION — Drop Test");
    println!("====================================================================");
    println!();
    println!("  Scenario Parameters");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  Mass:          {:>8.1} kg    Release alt:  {:>8.1} m",
        mass, h0
    );
    println!(
        "  Gravity:       {:>8.4} m/s^2 Timestep:     {:>8.3} s",
        G0, config.dt
    );
    println!();

    println!("  Events");
    println!("  ──────────────────────────────────────────────────────────────────");
    for e in &events {
        println!(
            "  {:?}   t={:>6.2}s   alt={:>8.2}m   vel={:>7.2}m/s",
            e.kind,
            e.time,
            e.state[2],
            e.state[5],
        );
    }
    println!();

    println!("  Performance Summary");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  Flight time:   {:>8.2} s     (analytic: {:.2} s)",
        summary.flight_time, t_impact
    );
    println!(
        "  Impact speed:  {:>8.2} m/s   (analytic: {:.2} m/s)",
        summary.final_speed, v_impact
    );
    println!(
        "  Max speed:     {:>8.2} m/s   Peak alt:     {:>8.1} m",
        summary.max_speed, summary.peak_altitude
    );
    println!();

    // -----------------------------------------------------------------------
    // Trajectory table (sampled)
    // -----------------------------------------------------------------------
    println!("  Trajectory");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!("  {:>7}  {:>9}  {:>9}  {:>9}", "t (s)", "alt (m)", "vz (m/s)", "speed");
    println!("  {}", "─".repeat(42));

    let sample_interval = (samples.len() / 20).max(1);
    for (i, s) in samples.iter().enumerate() {
        if i % sample_interval != 0 && i != samples.len() - 1 {
            continue;
        }
        println!(
            "  {:>7.2}  {:>9.2}  {:>9.2}  {:>9.2}",
            s.time,
            s.altitude(),
            s.vertical_velocity(),
            s.speed(),
        );
    }
    println!();

    // -----------------------------------------------------------------------
    // Persist time series for external plotting
    // -----------------------------------------------------------------------
    let out_path = "trajectory.csv";
    csv::write_trajectory_file(out_path, &samples)
        .expect("failed to write trajectory CSV");
    println!("  Time series written to {}", out_path);

    println!(
        "  Simulation: {} steps, dt={} s, final t={:.2} s",
        samples.len() - 1,
        config.dt,
        last.time
    );
    println!("====================================================================");
    println!();
}
