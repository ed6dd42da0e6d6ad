//! Scheduling policy selection.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The scheduling discipline applied by the engine.
///
/// All four policies operate at tick granularity: exactly one unit of
/// service time is granted per step, to whichever process the policy
/// selects.
///
/// # Reference
/// Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Policy {
    /// First-Come-First-Served: strict submission order, non-preemptive.
    Fcfs,
    /// Shortest-Job-First: shortest remaining time runs to completion.
    Sjf,
    /// Preemptive Shortest-Job-First (shortest-remaining-time-first):
    /// the shortest remaining time is re-evaluated before every tick.
    Psjf,
    /// Round-robin rotation with a fixed time quantum.
    ///
    /// `quantum` is the maximum number of consecutive ticks a process
    /// receives before being preempted; it must be positive and is
    /// immutable for the duration of a run.
    RoundRobin { quantum: u32 },
}

impl Policy {
    /// The round-robin quantum, if this policy has one.
    pub fn quantum(&self) -> Option<u32> {
        match self {
            Policy::RoundRobin { quantum } => Some(*quantum),
            _ => None,
        }
    }

    /// Whether the policy may interrupt a process before it completes.
    pub fn is_preemptive(&self) -> bool {
        matches!(self, Policy::Psjf | Policy::RoundRobin { .. })
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Policy::Fcfs => write!(f, "FCFS"),
            Policy::Sjf => write!(f, "SJF"),
            Policy::Psjf => write!(f, "PSJF"),
            Policy::RoundRobin { quantum } => write!(f, "RR(q={quantum})"),
        }
    }
}
