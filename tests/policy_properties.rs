//! Property tests for the shared memory model and all four policies.

use std::collections::BTreeSet;

use pagesim::{simulate, Access, PageId, Policy, Simulator};
use proptest::prelude::*;

/// Small page alphabet so sequences revisit pages often.
fn sequence() -> impl Strategy<Value = Vec<PageId>> {
    prop::collection::vec((-3i64..8).prop_map(PageId::new), 0..80)
}

fn distinct(seq: &[PageId]) -> BTreeSet<PageId> {
    seq.iter().copied().collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Residency never exceeds the frame count, the index matches the
    /// slots, and swap and residency stay disjoint at every step.
    #[test]
    fn prop_model_invariants_hold_every_step(seq in sequence(), frames in 0usize..6) {
        for policy in Policy::ALL {
            let mut sim = Simulator::new(policy, &seq, frames);

            while let Some(access) = sim.step().unwrap() {
                prop_assert!(sim.frames().len() <= frames);
                prop_assert!(sim.frames().is_consistent());
                for page in sim.swap().iter() {
                    prop_assert!(
                        !sim.frames().contains(page),
                        "{}: {} both resident and swapped", policy, page
                    );
                }
                if let Access::Fault { evicted: Some(victim), frame_id } = access {
                    prop_assert!(sim.swap().contains(victim));
                    prop_assert!(!sim.frames().contains(victim));
                    prop_assert_eq!(sim.frames().page(frame_id), Some(seq[sim.position() - 1]));
                }
            }
        }
    }

    /// Every referenced page ends up either resident or swapped, never both.
    #[test]
    fn prop_final_state_partitions_referenced_pages(seq in sequence(), frames in 0usize..6) {
        for policy in Policy::ALL {
            let mut sim = Simulator::new(policy, &seq, frames);
            sim.run_to_end().unwrap();

            let resident: BTreeSet<PageId> = sim.frames().iter().map(|(_, page)| page).collect();
            let swapped: BTreeSet<PageId> = sim.swap().iter().collect();

            prop_assert!(resident.is_disjoint(&swapped));
            let all: BTreeSet<PageId> = resident.union(&swapped).copied().collect();
            prop_assert_eq!(all, distinct(&seq));
        }
    }

    /// Belady: MIN never faults more than any other policy.
    #[test]
    fn prop_optimal_is_a_lower_bound(seq in sequence(), frames in 0usize..6) {
        let optimal = simulate(Policy::Optimal, &seq, frames).unwrap().faults();

        for policy in [Policy::Fifo, Policy::Random, Policy::Lru] {
            let other = simulate(policy, &seq, frames).unwrap().faults();
            prop_assert!(
                optimal <= other,
                "MIN={} > {}={} with {} frames", optimal, policy, other, frames
            );
        }
    }

    /// With no frames every reference faults and every page is swapped.
    #[test]
    fn prop_zero_frames_all_fault(seq in sequence()) {
        for policy in Policy::ALL {
            let result = simulate(policy, &seq, 0).unwrap();
            prop_assert_eq!(result.faults(), seq.len() as u64);
            prop_assert_eq!(result.stats.hits, 0);
            let expected: Vec<PageId> = distinct(&seq).into_iter().collect();
            prop_assert_eq!(result.swap_pages, expected);
        }
    }

    /// Repeated runs agree exactly, including the seeded random policy.
    #[test]
    fn prop_runs_are_deterministic(seq in sequence(), frames in 0usize..6) {
        for policy in Policy::ALL {
            let a = simulate(policy, &seq, frames).unwrap();
            let b = simulate(policy, &seq, frames).unwrap();
            prop_assert_eq!(a.stats, b.stats);
            prop_assert_eq!(a.swap_pages, b.swap_pages);
        }
    }

    /// Counter bookkeeping: hits + faults = references, every distinct page
    /// faults at least once, and evictions only happen once frames are full.
    #[test]
    fn prop_counters_add_up(seq in sequence(), frames in 1usize..6) {
        let cold = distinct(&seq).len() as u64;

        for policy in Policy::ALL {
            let stats = simulate(policy, &seq, frames).unwrap().stats;
            prop_assert_eq!(stats.references, seq.len() as u64);
            prop_assert_eq!(stats.hits + stats.faults, stats.references);
            prop_assert!(stats.faults >= cold);
            prop_assert_eq!(stats.evictions, stats.faults.saturating_sub(frames as u64));
        }
    }

    /// With more frames than the trace has distinct pages, only cold misses
    /// fault and nothing is ever swapped out, however large the frame count.
    #[test]
    fn prop_ample_frames_only_cold_misses(
        seq in sequence(),
        frames in prop_oneof![100usize..1000, Just(1usize << 40), Just(1_000_000_000_000usize)],
    ) {
        let cold = distinct(&seq).len() as u64;

        for policy in Policy::ALL {
            let result = simulate(policy, &seq, frames).unwrap();
            prop_assert_eq!(result.stats.faults, cold, "{}", policy);
            prop_assert_eq!(result.stats.evictions, 0);
            prop_assert!(result.swap_pages.is_empty());
        }
    }
}
