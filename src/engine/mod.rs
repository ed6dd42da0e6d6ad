//! Scheduling-decision engine.
//!
//! The algorithmic heart of the crate: per-policy step state machines and
//! the waiting-time calculator.
//!
//! # Design
//!
//! [`Simulation`] owns the live process set exclusively and advances it one
//! tick per [`Simulation::step`] call; it never blocks or self-schedules,
//! so an external driver controls pacing, pause, and resume.
//! [`WaitingTimes`] reads only the frozen configuration snapshot, keeping
//! metrics reproducible independent of simulation progress.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2015), "Modern Operating Systems", Ch. 2.4

mod metrics;
mod simulation;

pub use metrics::WaitingTimes;
pub use simulation::{Simulation, Tick};
