//! Simulation domain models.
//!
//! Core data types for the scheduling simulation: processes with their
//! service-time requirements, the submission-ordered process set, and the
//! policy selection.
//!
//! The live process set is mutated tick-by-tick by the engine; metrics are
//! always computed from a frozen snapshot of the same types, so everything
//! here is `Clone` and serde-serializable.

mod policy;
mod process;

pub use policy::Policy;
pub use process::{Process, ProcessId, ProcessSet};
