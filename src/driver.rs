//! Step driver: external pacing for the simulation.
//!
//! The engine's [`Simulation::step`] is a pure synchronous call; this
//! module owns everything temporal around it. A [`StepDriver`] holds the
//! tick interval (`1 / speed` seconds), a lifecycle state, and the next
//! deadline, and issues at most one tick per elapsed interval.
//!
//! Pacing is poll-based rather than timer-callback-based: the caller (or
//! [`StepDriver::run_to_completion`]) supplies the clock, so the driver is
//! testable without sleeping and the engine is testable without the driver.

use crate::engine::{Simulation, Tick};
use std::thread;
use std::time::{Duration, Instant};

/// Lifecycle of a driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DriverState {
    /// Created but not yet started.
    #[default]
    Idle,
    /// Issuing ticks as intervals elapse.
    Running,
    /// Suspended; engine state is retained and resumable.
    Paused,
    /// Permanently stopped.
    Stopped,
}

/// Paces a [`Simulation`] at a fixed tick interval.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use tick_sched::driver::StepDriver;
/// use tick_sched::engine::Simulation;
/// use tick_sched::models::{Policy, ProcessSet};
///
/// let set = ProcessSet::from_durations([(1, 2), (2, 1)]);
/// let mut sim = Simulation::new(set, Policy::Fcfs).unwrap();
///
/// let mut driver = StepDriver::new(Duration::from_millis(1));
/// driver.run_to_completion(&mut sim);
/// assert!(sim.is_complete());
/// ```
#[derive(Debug, Clone)]
pub struct StepDriver {
    interval: Duration,
    state: DriverState,
    next_due: Option<Instant>,
}

impl StepDriver {
    /// Creates a driver issuing one tick per `interval`.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            state: DriverState::Idle,
            next_due: None,
        }
    }

    /// Creates a driver from an animation speed in ticks per second.
    ///
    /// Non-positive or non-finite speeds fall back to one tick per second.
    pub fn from_speed(ticks_per_second: f64) -> Self {
        let interval = if ticks_per_second.is_finite() && ticks_per_second > 0.0 {
            Duration::from_secs_f64(1.0 / ticks_per_second)
        } else {
            Duration::from_secs(1)
        };
        Self::new(interval)
    }

    /// The configured tick interval.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Current lifecycle state.
    pub fn state(&self) -> DriverState {
        self.state
    }

    /// Begins issuing ticks. The first poll after `start` fires
    /// immediately. No-op unless the driver is idle.
    pub fn start(&mut self) {
        if self.state == DriverState::Idle {
            self.state = DriverState::Running;
            self.next_due = None;
        }
    }

    /// Suspends tick issuance. Engine state is untouched.
    pub fn pause(&mut self) {
        if self.state == DriverState::Running {
            self.state = DriverState::Paused;
        }
    }

    /// Resumes from a pause; the next poll fires immediately and pacing
    /// continues from there.
    pub fn resume(&mut self) {
        if self.state == DriverState::Paused {
            self.state = DriverState::Running;
            self.next_due = None;
        }
    }

    /// Stops the driver permanently. Terminal: `start` and `resume` are
    /// no-ops afterwards.
    pub fn stop(&mut self) {
        self.state = DriverState::Stopped;
        self.next_due = None;
    }

    /// Issues at most one tick if the driver is running and the interval
    /// has elapsed, using the caller-supplied clock.
    ///
    /// Stops the driver once the simulation reports completion.
    pub fn poll_at(&mut self, now: Instant, sim: &mut Simulation) -> Option<Tick> {
        if self.state != DriverState::Running {
            return None;
        }
        if let Some(due) = self.next_due {
            if now < due {
                return None;
            }
        }
        self.next_due = Some(now + self.interval);
        let tick = sim.step();
        if tick.finished {
            self.stop();
        }
        Some(tick)
    }

    /// [`poll_at`](Self::poll_at) against the real clock.
    pub fn poll(&mut self, sim: &mut Simulation) -> Option<Tick> {
        self.poll_at(Instant::now(), sim)
    }

    /// Blocking convenience loop: starts the driver and steps the
    /// simulation at the configured interval until it completes or the
    /// driver is stopped.
    pub fn run_to_completion(&mut self, sim: &mut Simulation) {
        self.start();
        while self.state == DriverState::Running {
            let tick = sim.step();
            if tick.finished {
                self.stop();
                break;
            }
            thread::sleep(self.interval);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Policy, ProcessSet};

    fn make_sim(durations: &[(u32, u32)]) -> Simulation {
        Simulation::new(
            ProcessSet::from_durations(durations.iter().copied()),
            Policy::Fcfs,
        )
        .expect("valid configuration")
    }

    #[test]
    fn test_idle_driver_does_not_tick() {
        let mut sim = make_sim(&[(1, 3)]);
        let mut driver = StepDriver::new(Duration::from_secs(1));
        assert_eq!(driver.poll_at(Instant::now(), &mut sim), None);
        assert_eq!(sim.time_left(1), Some(3));
    }

    #[test]
    fn test_first_poll_fires_immediately() {
        let mut sim = make_sim(&[(1, 3)]);
        let mut driver = StepDriver::new(Duration::from_secs(1));
        driver.start();
        let t0 = Instant::now();
        let tick = driver.poll_at(t0, &mut sim).expect("due immediately");
        assert_eq!(tick.ran, Some(1));
    }

    #[test]
    fn test_paced_by_interval() {
        let mut sim = make_sim(&[(1, 3)]);
        let interval = Duration::from_secs(1);
        let mut driver = StepDriver::new(interval);
        driver.start();
        let t0 = Instant::now();

        assert!(driver.poll_at(t0, &mut sim).is_some());
        // Same instant again: not due yet.
        assert!(driver.poll_at(t0, &mut sim).is_none());
        assert!(driver
            .poll_at(t0 + interval / 2, &mut sim)
            .is_none());
        assert!(driver.poll_at(t0 + interval, &mut sim).is_some());
        assert_eq!(sim.time_left(1), Some(1));
    }

    #[test]
    fn test_pause_and_resume_retain_state() {
        let mut sim = make_sim(&[(1, 3)]);
        let interval = Duration::from_secs(1);
        let mut driver = StepDriver::new(interval);
        driver.start();
        let t0 = Instant::now();
        driver.poll_at(t0, &mut sim);

        driver.pause();
        assert_eq!(driver.state(), DriverState::Paused);
        assert!(driver.poll_at(t0 + interval * 10, &mut sim).is_none());
        assert_eq!(sim.time_left(1), Some(2));

        driver.resume();
        let tick = driver
            .poll_at(t0 + interval * 10, &mut sim)
            .expect("fires on resume");
        assert_eq!(tick.ran, Some(1));
        assert_eq!(sim.time_left(1), Some(1));
    }

    #[test]
    fn test_stop_is_terminal() {
        let mut sim = make_sim(&[(1, 3)]);
        let mut driver = StepDriver::new(Duration::from_secs(1));
        driver.start();
        driver.stop();
        assert_eq!(driver.state(), DriverState::Stopped);
        driver.start();
        driver.resume();
        assert_eq!(driver.state(), DriverState::Stopped);
        assert!(driver.poll_at(Instant::now(), &mut sim).is_none());
    }

    #[test]
    fn test_stops_on_completion() {
        let mut sim = make_sim(&[(1, 1)]);
        let interval = Duration::from_secs(1);
        let mut driver = StepDriver::new(interval);
        driver.start();
        let t0 = Instant::now();

        let tick = driver.poll_at(t0, &mut sim).expect("first tick");
        assert!(tick.finished);
        assert_eq!(driver.state(), DriverState::Stopped);
        assert!(driver.poll_at(t0 + interval, &mut sim).is_none());
    }

    #[test]
    fn test_run_to_completion() {
        let mut sim = make_sim(&[(1, 2), (2, 1)]);
        let mut driver = StepDriver::new(Duration::from_micros(10));
        driver.run_to_completion(&mut sim);
        assert!(sim.is_complete());
        assert_eq!(driver.state(), DriverState::Stopped);
    }

    #[test]
    fn test_from_speed() {
        assert_eq!(
            StepDriver::from_speed(4.0).interval(),
            Duration::from_millis(250)
        );
        assert_eq!(StepDriver::from_speed(0.0).interval(), Duration::from_secs(1));
        assert_eq!(
            StepDriver::from_speed(f64::NAN).interval(),
            Duration::from_secs(1)
        );
    }
}
