//! Waiting-time metrics.
//!
//! Computes per-policy waiting times from the frozen configuration
//! snapshot, never from the live simulation. Non-preemptive policies have
//! closed forms (the k-th process in service order waits for the sum of
//! the durations served before it); preemptive policies are replayed
//! through the same step machines as the live engine, with no pacing.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2:
//! Scheduling Criteria

use serde::{Deserialize, Serialize};

use super::Simulation;
use crate::models::{Policy, ProcessId, ProcessSet};

/// Per-policy waiting-time report.
///
/// Waiting time is the span a process spends ready-but-not-running before
/// it completes. The report is computed once from an immutable snapshot
/// and is therefore idempotent: recomputing with the same inputs yields
/// identical values regardless of any live simulation progress.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaitingTimes {
    /// Policy the report was computed for.
    pub policy: Policy,
    /// Waiting time per process, in submission order.
    pub per_process: Vec<(ProcessId, u64)>,
    /// Sum of all waiting times.
    pub total: u64,
}

impl WaitingTimes {
    /// Computes waiting times for `policy` over the initial durations.
    pub fn calculate(initial: &ProcessSet, policy: Policy) -> Self {
        let waits = match policy {
            Policy::Fcfs => fcfs_waits(initial),
            Policy::Sjf => sjf_waits(initial),
            // No closed form once preemption can reorder completions;
            // replay the actual state machine.
            Policy::Psjf | Policy::RoundRobin { .. } => simulated_waits(initial, policy),
        };

        let per_process: Vec<(ProcessId, u64)> = initial
            .processes()
            .iter()
            .map(|p| p.id)
            .zip(waits.iter().copied())
            .collect();
        let total = waits.iter().sum();

        Self {
            policy,
            per_process,
            total,
        }
    }

    /// Arithmetic mean of the waiting times, rounded to two decimal places
    /// (half away from zero). `0.0` for an empty process set.
    pub fn average(&self) -> f64 {
        if self.per_process.is_empty() {
            return 0.0;
        }
        let avg = self.total as f64 / self.per_process.len() as f64;
        round_two_decimals(avg)
    }
}

/// Rounds to the hundredths digit, half away from zero.
fn round_two_decimals(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// FCFS: the k-th submitted process waits for the sum of all durations
/// submitted before it.
fn fcfs_waits(initial: &ProcessSet) -> Vec<u64> {
    let mut elapsed: u64 = 0;
    initial
        .processes()
        .iter()
        .map(|p| {
            let wait = elapsed;
            elapsed += u64::from(p.needed_time);
            wait
        })
        .collect()
}

/// SJF: same running sum, taken over ascending-duration order. The stable
/// sort preserves submission order among equal durations.
fn sjf_waits(initial: &ProcessSet) -> Vec<u64> {
    let n = initial.len();
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by_key(|&i| initial.processes()[i].needed_time);

    let mut waits = vec![0u64; n];
    let mut elapsed: u64 = 0;
    for &i in &order {
        waits[i] = elapsed;
        elapsed += u64::from(initial.processes()[i].needed_time);
    }
    waits
}

/// Replays the policy's step machine to completion and derives each
/// process's waiting time as `completion_tick - needed_time`.
fn simulated_waits(initial: &ProcessSet, policy: Policy) -> Vec<u64> {
    let n = initial.len();
    let mut completion = vec![0u64; n];
    let mut sim = Simulation::unchecked(initial.clone(), policy);
    let mut now: u64 = 0;

    while !sim.is_complete() {
        let tick = sim.step();
        let Some(ran) = tick.ran else { break };
        now += 1;
        if sim.time_left(ran) == Some(0) {
            if let Some(index) = initial.processes().iter().position(|p| p.id == ran) {
                completion[index] = now;
            }
        }
        if tick.finished {
            break;
        }
    }

    initial
        .processes()
        .iter()
        .enumerate()
        .map(|(i, p)| completion[i].saturating_sub(u64::from(p.needed_time)))
        .collect()
}
