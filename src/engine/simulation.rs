//! Tick-driven simulation state and per-policy step machines.
//!
//! A [`Simulation`] owns the live process set and all per-policy cursor
//! state. Each call to [`Simulation::step`] grants exactly one unit of
//! service time to the process selected by the active policy and reports
//! which process ran. Pacing, pause, and resume live entirely outside, in
//! the driver: the engine never blocks, spawns, or self-schedules.

use crate::models::{Policy, ProcessId, ProcessSet};
use crate::validation::{validate_config, ValidationError};
use serde::{Deserialize, Serialize};

/// Outcome of a single simulation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tick {
    /// The process that received this tick of service time.
    ///
    /// `None` only when the simulation is (or has just become) complete
    /// and no work was performed.
    pub ran: Option<ProcessId>,
    /// Whether every process has now finished.
    pub finished: bool,
}

/// A configured scheduling simulation.
///
/// Created from a submission-ordered process set and a policy; the initial
/// set is cloned and frozen at configuration time so waiting-time metrics
/// stay reproducible no matter how far the live simulation has advanced.
///
/// # Example
///
/// ```
/// use tick_sched::engine::Simulation;
/// use tick_sched::models::{Policy, ProcessSet};
///
/// let set = ProcessSet::from_durations([(1, 2), (2, 1)]);
/// let mut sim = Simulation::new(set, Policy::Fcfs).unwrap();
///
/// let tick = sim.step();
/// assert_eq!(tick.ran, Some(1));
/// assert!(!tick.finished);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Simulation {
    live: ProcessSet,
    initial: ProcessSet,
    policy: Policy,
    /// FCFS / round-robin rotation position (indexes modulo set length).
    cursor: usize,
    /// Index of the process mid-burst under non-preemptive SJF.
    running: Option<usize>,
    /// Ticks consumed by the current round-robin slice.
    slice_ticks: u32,
    done: bool,
}

impl Simulation {
    /// Configures a new simulation run.
    ///
    /// Validates the configuration, clones the process set as the frozen
    /// metrics snapshot, and resets all cursors and counters.
    pub fn new(processes: ProcessSet, policy: Policy) -> Result<Self, Vec<ValidationError>> {
        validate_config(&processes, &policy)?;
        Ok(Self::unchecked(processes, policy))
    }

    /// Builds a simulation without configuration validation.
    ///
    /// Used by the metrics calculator, which replays already-validated
    /// snapshots; the step machines themselves tolerate any input.
    pub(crate) fn unchecked(processes: ProcessSet, policy: Policy) -> Self {
        Self {
            initial: processes.clone(),
            live: processes,
            policy,
            cursor: 0,
            running: None,
            slice_ticks: 0,
            done: false,
        }
    }

    /// The active policy.
    pub fn policy(&self) -> Policy {
        self.policy
    }

    /// The live process set, reflecting simulation progress.
    pub fn processes(&self) -> &ProcessSet {
        &self.live
    }

    /// The frozen snapshot taken at configuration time.
    pub fn initial_processes(&self) -> &ProcessSet {
        &self.initial
    }

    /// Whether the run has terminated.
    pub fn is_complete(&self) -> bool {
        self.done || self.live.all_finished()
    }

    /// Restores the run to its configured starting point.
    ///
    /// The live set is refilled from the immutable service requirements and
    /// all cursors and counters are cleared.
    pub fn reset(&mut self) {
        self.live.reset();
        self.cursor = 0;
        self.running = None;
        self.slice_ticks = 0;
        self.done = false;
    }

    /// Advances the simulation by one tick under the active policy.
    ///
    /// Exactly one unit of service time is granted per call while any
    /// process remains unfinished. Stepping an already-complete simulation
    /// is a no-op that reports `finished: true`; the driver may legitimately
    /// issue one more tick before observing completion.
    pub fn step(&mut self) -> Tick {
        if self.is_complete() {
            self.done = true;
            return Tick {
                ran: None,
                finished: true,
            };
        }

        let ran = match self.policy {
            Policy::Fcfs => self.step_fcfs(),
            Policy::Sjf => self.step_sjf(),
            Policy::Psjf => self.step_psjf(),
            Policy::RoundRobin { quantum } => self.step_round_robin(quantum),
        };

        if ran.is_none() || self.live.all_finished() {
            self.done = true;
        }
        Tick {
            ran,
            finished: self.done,
        }
    }

    /// First-come-first-served: strict submission order, advance only when
    /// the running process completes.
    ///
    /// Finished processes at the cursor are skipped without consuming
    /// simulated time, so a tick always performs one unit of work while
    /// any process remains.
    fn step_fcfs(&mut self) -> Option<ProcessId> {
        let n = self.live.len();
        for _ in 0..n {
            let index = self.cursor % n;
            match self.live.get_mut(index) {
                Some(p) if p.is_finished() => self.cursor += 1,
                Some(p) => {
                    p.decrement();
                    let id = p.id;
                    if p.is_finished() {
                        self.cursor += 1;
                    }
                    return Some(id);
                }
                None => return None,
            }
        }
        None
    }

    /// Non-preemptive shortest-job-first: the selected process runs to
    /// completion without re-evaluation; a new shortest is chosen only at
    /// run start and after each completion.
    fn step_sjf(&mut self) -> Option<ProcessId> {
        let index = match self.running {
            Some(i) if self.live.get(i).is_some_and(|p| !p.is_finished()) => i,
            _ => {
                let i = self.live.shortest_unfinished()?;
                self.running = Some(i);
                i
            }
        };
        let p = self.live.get_mut(index)?;
        p.decrement();
        let id = p.id;
        if p.is_finished() {
            self.running = None;
        }
        Some(id)
    }

    /// Preemptive shortest-job-first: re-select before every tick. The
    /// first-minimum scan in [`ProcessSet::shortest_unfinished`] breaks
    /// exact ties toward the earliest submission, so a tie never displaces
    /// an earlier-submitted running process.
    fn step_psjf(&mut self) -> Option<ProcessId> {
        let index = self.live.shortest_unfinished()?;
        let p = self.live.get_mut(index)?;
        p.decrement();
        Some(p.id)
    }

    /// Round-robin: up to `quantum` consecutive ticks per process, re-queued
    /// implicitly by the modulo cursor rotation.
    fn step_round_robin(&mut self, quantum: u32) -> Option<ProcessId> {
        let n = self.live.len();
        for _ in 0..n {
            let index = self.cursor % n;
            match self.live.get_mut(index) {
                Some(p) if p.is_finished() => {
                    self.cursor += 1;
                    self.slice_ticks = 0;
                }
                Some(p) => {
                    p.decrement();
                    let id = p.id;
                    self.slice_ticks += 1;
                    if p.is_finished() || self.slice_ticks >= quantum {
                        self.slice_ticks = 0;
                        self.cursor += 1;
                    }
                    return Some(id);
                }
                None => return None,
            }
        }
        None
    }

    /// Remaining service time of the process with `id`, if present.
    pub fn time_left(&self, id: ProcessId) -> Option<u32> {
        self.live
            .processes()
            .iter()
            .find(|p| p.id == id)
            .map(|p| p.time_left)
    }

    /// Runs the simulation to completion, returning the sequence of ticks.
    ///
    /// Intended for headless use (metrics, tests); interactive callers
    /// should pace individual [`step`](Self::step) calls through a driver.
    pub fn run_to_end(&mut self) -> Vec<Tick> {
        let mut trace = Vec::new();
        while !self.is_complete() {
            let tick = self.step();
            if tick.ran.is_none() {
                break;
            }
            trace.push(tick);
        }
        trace
    }

    /// Average waiting time for `policy`, computed from the frozen
    /// configuration snapshot.
    ///
    /// Independent of live progress: calling this mid-run, after
    /// completion, or repeatedly always yields the same result.
    pub fn average_waiting_time(&self, policy: Policy) -> f64 {
        super::WaitingTimes::calculate(&self.initial, policy).average()
    }
}
