//! Tick-driven CPU-scheduling simulator.
//!
//! Simulates the classic single-CPU scheduling disciplines — FCFS,
//! shortest-job-first (non-preemptive and preemptive), and round-robin
//! with a time quantum — over a fixed set of synthetic processes,
//! advancing simulated time in discrete ticks and reporting per-policy
//! average waiting times.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Process`, `ProcessSet`, `Policy`
//! - **`engine`**: The scheduling-decision engine — `Simulation`, `Tick`,
//!   `WaitingTimes`
//! - **`driver`**: External pacing — `StepDriver` with pause/resume/stop
//! - **`workload`**: Synthetic process-set generation
//! - **`validation`**: Configuration checks (empty sets, zero durations,
//!   duplicate ids, zero quantum)
//!
//! # Architecture
//!
//! The engine is a pure step function over explicitly owned state: a
//! `Simulation` holds the live process set and all cursors, and each
//! `step()` grants one tick of service time. Pacing, pause, and resume
//! belong to the `StepDriver`; metrics read only the frozen configuration
//! snapshot. Rendering and input collection are the caller's concern.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2015), "Modern Operating Systems", Ch. 2.4

pub mod driver;
pub mod engine;
pub mod models;
pub mod validation;
pub mod workload;
