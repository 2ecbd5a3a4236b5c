use crate::dynamics::state::Sample;

/// Summary statistics computed from a trajectory time series.
#[derive(Debug, Clone)]
pub struct TrajectorySummary {
    pub peak_altitude: f64,
    pub peak_altitude_time: f64,
    pub max_speed: f64,
    pub flight_time: f64,
    pub final_speed: f64,
}

impl TrajectorySummary {
    /// Compute summary statistics from a non-empty trajectory.
    pub fn from_samples(samples: &[Sample<6>]) -> Self {
        let peak = samples
            .iter()
            .max_by(|a, b| a.altitude().partial_cmp(&b.altitude()).unwrap())
            .unwrap();

        let max_speed = samples.iter().map(|s| s.speed()).fold(0.0_f64, f64::max);

        let last = samples.last().unwrap();

        TrajectorySummary {
            peak_altitude: peak.altitude(),
            peak_altitude_time: peak.time,
            max_speed,
            flight_time: last.time - samples[0].time,
            final_speed: last.speed(),
        }
    }
}
