//! Synthetic workload generation.
//!
//! Builds submission-ordered process sets with randomized service times,
//! for seeding simulations without hand-written fixtures. Generation is
//! generic over [`rand::Rng`] so callers control seeding and determinism;
//! library code never reaches for a hidden global RNG.

use crate::models::{ProcessId, ProcessSet};
use rand::Rng;
use std::ops::RangeInclusive;

/// Generates `count` processes with service times drawn uniformly from
/// `durations`.
///
/// Ids are assigned sequentially from 0 in submission order. The range
/// should start at 1 or above; zero durations are rejected later by
/// configuration validation.
///
/// # Example
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use tick_sched::workload;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let set = workload::random_set(4, 1..=10, &mut rng);
/// assert_eq!(set.len(), 4);
/// ```
pub fn random_set<R: Rng>(
    count: usize,
    durations: RangeInclusive<u32>,
    rng: &mut R,
) -> ProcessSet {
    ProcessSet::from_durations(
        (0..count).map(|i| (i as ProcessId, rng.random_range(durations.clone()))),
    )
}

/// Generates `count` processes of identical `duration`.
///
/// Useful for exercising pure rotation behavior, where every policy's
/// tie-breaks reduce to submission order.
pub fn uniform_set(count: usize, duration: u32) -> ProcessSet {
    ProcessSet::from_durations((0..count).map(|i| (i as ProcessId, duration)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Policy;
    use crate::validation::validate_config;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_set_within_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let set = random_set(10, 2..=6, &mut rng);
        assert_eq!(set.len(), 10);
        for p in set.processes() {
            assert!((2..=6).contains(&p.needed_time));
            assert_eq!(p.time_left, p.needed_time);
        }
    }

    #[test]
    fn test_random_set_ids_sequential() {
        let mut rng = StdRng::seed_from_u64(1);
        let set = random_set(5, 1..=3, &mut rng);
        let ids: Vec<ProcessId> = set.processes().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_random_set_deterministic_per_seed() {
        let a = random_set(8, 1..=20, &mut StdRng::seed_from_u64(9));
        let b = random_set(8, 1..=20, &mut StdRng::seed_from_u64(9));
        assert_eq!(a, b);
    }

    #[test]
    fn test_random_set_passes_validation() {
        let mut rng = StdRng::seed_from_u64(3);
        let set = random_set(6, 1..=10, &mut rng);
        assert!(validate_config(&set, &Policy::RoundRobin { quantum: 2 }).is_ok());
    }

    #[test]
    fn test_uniform_set() {
        let set = uniform_set(3, 4);
        assert_eq!(set.len(), 3);
        assert!(set.processes().iter().all(|p| p.needed_time == 4));
    }

    #[test]
    fn test_empty_count() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(random_set(0, 1..=5, &mut rng).is_empty());
        assert!(uniform_set(0, 3).is_empty());
    }
}
