use crate::dynamics::state::{KinematicState, Sample};

use super::runner::diverged;

// ---------------------------------------------------------------------------
// Trajectory events
// ---------------------------------------------------------------------------

/// Kinds of trajectory events.
#[derive(Debug, Clone, PartialEq)]
pub enum EventKind {
    Apogee,
    GroundImpact,
    Divergence,
}

/// A discrete event observed between two consecutive samples.
#[derive(Debug, Clone)]
pub struct SimEvent {
    pub time: f64,
    pub kind: EventKind,
    pub state: KinematicState,
}

/// Trait for passive event detectors.
/// Implementations inspect consecutive samples and report events.
pub trait EventDetector {
    fn check(&mut self, prev: &Sample<6>, current: &Sample<6>) -> Option<EventKind>;
}

/// Detects apogee (vertical velocity going from positive to non-positive).
pub struct ApogeeDetector;

impl EventDetector for ApogeeDetector {
    fn check(&mut self, prev: &Sample<6>, current: &Sample<6>) -> Option<EventKind> {
        if prev.vertical_velocity() > 0.0 && current.vertical_velocity() <= 0.0 {
            Some(EventKind::Apogee)
        } else {
            None
        }
    }
}

/// Detects altitude crossing zero from above.
pub struct GroundImpactDetector;

impl EventDetector for GroundImpactDetector {
    fn check(&mut self, prev: &Sample<6>, current: &Sample<6>) -> Option<EventKind> {
        if prev.altitude() > 0.0 && current.altitude() <= 0.0 {
            Some(EventKind::GroundImpact)
        } else {
            None
        }
    }
}

/// Detects the first appearance of a non-finite state component.
pub struct DivergenceDetector {
    fired: bool,
}

impl DivergenceDetector {
    pub fn new() -> Self {
        Self { fired: false }
    }
}

impl EventDetector for DivergenceDetector {
    fn check(&mut self, _prev: &Sample<6>, current: &Sample<6>) -> Option<EventKind> {
        if self.fired {
            return None;
        }
        if diverged(&current.state) {
            self.fired = true;
            Some(EventKind::Divergence)
        } else {
            None
        }
    }
}

/// Run the standard detectors over a finished trajectory.
pub fn scan(samples: &[Sample<6>]) -> Vec<SimEvent> {
    let mut detectors: Vec<Box<dyn EventDetector>> = vec![
        Box::new(ApogeeDetector),
        Box::new(GroundImpactDetector),
        Box::new(DivergenceDetector::new()),
    ];

    let mut events = Vec::new();
    for pair in samples.windows(2) {
        for det in detectors.iter_mut() {
            if let Some(kind) = det.check(&pair[0], &pair[1]) {
                events.push(SimEvent {
                    time: pair[1].time,
                    kind,
                    state: pair[1].state,
                });
            }
        }
    }
    events
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
