//! Process model.
//!
//! A process is the unit of simulated work: a fixed service-time
//! requirement (`needed_time`) plus the portion still outstanding
//! (`time_left`). The engine burns `time_left` down one tick at a time;
//! `needed_time` never changes after creation and is the baseline for
//! waiting-time metrics.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5

use serde::{Deserialize, Serialize};

/// Stable process identity. Assigned at creation, never reused within a set.
pub type ProcessId = u32;

/// A simulated process.
///
/// # Invariant
/// `0 <= time_left <= needed_time` at all times. `time_left` starts equal
/// to `needed_time` and only ever decreases; `0` means finished.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Unique identifier.
    pub id: ProcessId,
    /// Total service time required (ticks). Immutable after creation.
    pub needed_time: u32,
    /// Remaining service time (ticks).
    pub time_left: u32,
}

impl Process {
    /// Creates a new process needing `needed_time` ticks of service.
    pub fn new(id: ProcessId, needed_time: u32) -> Self {
        Self {
            id,
            needed_time,
            time_left: needed_time,
        }
    }

    /// Whether this process has received all its service time.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.time_left == 0
    }

    /// Grants one tick of service time.
    ///
    /// Calling this on a finished process is a precondition violation;
    /// saturating arithmetic keeps the invariant intact in release builds.
    pub fn decrement(&mut self) {
        debug_assert!(self.time_left > 0, "decrement on finished process");
        self.time_left = self.time_left.saturating_sub(1);
    }
}

/// An ordered set of processes.
///
/// Order is submission order and is significant: FCFS serves it directly,
/// round-robin rotates through it, and SJF/PSJF break remaining-time ties
/// in its favor (earliest submitted wins).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessSet {
    processes: Vec<Process>,
}

impl ProcessSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from `(id, needed_time)` pairs in submission order.
    pub fn from_durations<I>(durations: I) -> Self
    where
        I: IntoIterator<Item = (ProcessId, u32)>,
    {
        Self {
            processes: durations
                .into_iter()
                .map(|(id, needed)| Process::new(id, needed))
                .collect(),
        }
    }

    /// Appends a process, returning `self` for chaining.
    pub fn with_process(mut self, process: Process) -> Self {
        self.processes.push(process);
        self
    }

    /// Number of processes.
    pub fn len(&self) -> usize {
        self.processes.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    /// The processes in submission order.
    pub fn processes(&self) -> &[Process] {
        &self.processes
    }

    /// The process at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Process> {
        self.processes.get(index)
    }

    /// Mutable access to the process at `index`, if any.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Process> {
        self.processes.get_mut(index)
    }

    /// Whether every process has finished.
    ///
    /// Global termination predicate for FCFS and round-robin. Vacuously
    /// true for an empty set.
    pub fn all_finished(&self) -> bool {
        self.processes.iter().all(Process::is_finished)
    }

    /// Index of the unfinished process with the smallest `time_left`.
    ///
    /// Ties go to the earliest submitted process (first minimum wins).
    /// `None` when every process has finished.
    pub fn shortest_unfinished(&self) -> Option<usize> {
        self.processes
            .iter()
            .enumerate()
            .filter(|(_, p)| !p.is_finished())
            .min_by_key(|(_, p)| p.time_left)
            .map(|(index, _)| index)
    }

    /// Sum of all `needed_time` values: an upper bound on simulation length.
    pub fn total_needed_time(&self) -> u64 {
        self.processes.iter().map(|p| u64::from(p.needed_time)).sum()
    }

    /// Restores every process to its full service requirement.
    pub fn reset(&mut self) {
        for p in &mut self.processes {
            p.time_left = p.needed_time;
        }
    }
}

impl FromIterator<Process> for ProcessSet {
    fn from_iter<I: IntoIterator<Item = Process>>(iter: I) -> Self {
        Self {
            processes: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_new() {
        let p = Process::new(1, 5);
        assert_eq!(p.id, 1);
        assert_eq!(p.needed_time, 5);
        assert_eq!(p.time_left, 5);
        assert!(!p.is_finished());
    }

    #[test]
    fn test_decrement_to_finish() {
        let mut p = Process::new(1, 2);
        p.decrement();
        assert_eq!(p.time_left, 1);
        assert!(!p.is_finished());
        p.decrement();
        assert_eq!(p.time_left, 0);
        assert!(p.is_finished());
    }

    #[test]
    fn test_zero_duration_is_finished() {
        let p = Process::new(1, 0);
        assert!(p.is_finished());
    }

    #[test]
    fn test_from_durations_preserves_order() {
        let set = ProcessSet::from_durations([(10, 3), (20, 1), (30, 2)]);
        let ids: Vec<ProcessId> = set.processes().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![10, 20, 30]);
    }

    #[test]
    fn test_all_finished() {
        let mut set = ProcessSet::from_durations([(1, 1), (2, 1)]);
        assert!(!set.all_finished());
        set.get_mut(0).unwrap().decrement();
        assert!(!set.all_finished());
        set.get_mut(1).unwrap().decrement();
        assert!(set.all_finished());
    }

    #[test]
    fn test_all_finished_empty_set() {
        assert!(ProcessSet::new().all_finished());
    }

    #[test]
    fn test_shortest_unfinished() {
        let set = ProcessSet::from_durations([(1, 5), (2, 3), (3, 4)]);
        assert_eq!(set.shortest_unfinished(), Some(1));
    }

    #[test]
    fn test_shortest_unfinished_tie_break() {
        // Equal remaining times: earliest submitted wins.
        let set = ProcessSet::from_durations([(1, 3), (2, 3), (3, 5)]);
        assert_eq!(set.shortest_unfinished(), Some(0));
    }

    #[test]
    fn test_shortest_unfinished_skips_finished() {
        let mut set = ProcessSet::from_durations([(1, 1), (2, 4)]);
        set.get_mut(0).unwrap().decrement();
        assert_eq!(set.shortest_unfinished(), Some(1));
    }

    #[test]
    fn test_shortest_unfinished_none_left() {
        let mut set = ProcessSet::from_durations([(1, 1)]);
        set.get_mut(0).unwrap().decrement();
        assert_eq!(set.shortest_unfinished(), None);
        assert_eq!(ProcessSet::new().shortest_unfinished(), None);
    }

    #[test]
    fn test_reset() {
        let mut set = ProcessSet::from_durations([(1, 2), (2, 3)]);
        set.get_mut(0).unwrap().decrement();
        set.get_mut(0).unwrap().decrement();
        set.get_mut(1).unwrap().decrement();
        set.reset();
        assert_eq!(set.get(0).unwrap().time_left, 2);
        assert_eq!(set.get(1).unwrap().time_left, 3);
    }

    #[test]
    fn test_total_needed_time() {
        let set = ProcessSet::from_durations([(1, 5), (2, 3), (3, 1)]);
        assert_eq!(set.total_needed_time(), 9);
    }

    #[test]
    fn test_serde_round_trip() {
        let set = ProcessSet::from_durations([(1, 5), (2, 3)]);
        let json = serde_json::to_string(&set).unwrap();
        let back: ProcessSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, set);
    }
}
