//! Driver - runs every policy over every sequence.
//!
//! Each (sequence, policy) pair is an independent run with fresh state, so
//! the pairs can be executed serially or on separate threads with the same
//! outcome (apart from elapsed times).

use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

use log::{debug, info};
use parking_lot::Mutex;

use crate::common::{PageId, Result};
use crate::memory::{simulate, Policy, SimulationResult};

/// Results of all policies for one reference sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceReport {
    /// The sequence as given.
    pub sequence: Vec<PageId>,

    /// One result per policy, in [`Policy::ALL`] order.
    pub results: Vec<SimulationResult>,
}

impl SequenceReport {
    /// Result for a specific policy.
    pub fn result(&self, policy: Policy) -> Option<&SimulationResult> {
        self.results.iter().find(|r| r.policy == policy)
    }
}

/// Runs the four policies against each sequence with a fixed frame count.
///
/// # Usage
/// ```
/// use pagesim::{pages, Driver, Policy};
///
/// let driver = Driver::new(2);
/// let report = driver.run_sequence(&pages(&[1, 2, 3, 1, 2, 3])).unwrap();
/// assert_eq!(report.result(Policy::Optimal).unwrap().faults(), 4);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Driver {
    frame_count: usize,
}

impl Driver {
    /// Create a driver for `frame_count` frames.
    pub fn new(frame_count: usize) -> Self {
        Self { frame_count }
    }

    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    /// Run all policies over one sequence, in report order.
    pub fn run_sequence(&self, sequence: &[PageId]) -> Result<SequenceReport> {
        let results = Policy::ALL
            .iter()
            .map(|&policy| {
                let result = simulate(policy, sequence, self.frame_count)?;
                log_result(sequence, &result);
                Ok(result)
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(SequenceReport {
            sequence: sequence.to_vec(),
            results,
        })
    }

    /// Run all policies over every sequence, one run at a time.
    pub fn run(&self, sequences: &[Vec<PageId>]) -> Result<Vec<SequenceReport>> {
        sequences
            .iter()
            .map(|sequence| self.run_sequence(sequence))
            .collect()
    }

    /// Run every (sequence, policy) pair on a bounded pool of scoped workers.
    ///
    /// The pool has at most one worker per available core. Workers pull the
    /// next pair from a shared counter until none are left. Produces the
    /// same reports as [`Driver::run`], in input order.
    pub fn run_parallel(&self, sequences: &[Vec<PageId>]) -> Result<Vec<SequenceReport>> {
        let per_sequence = Policy::ALL.len();
        let jobs = sequences.len() * per_sequence;
        let workers = worker_count(jobs);
        let next_job = AtomicUsize::new(0);
        let outcomes: Mutex<Vec<(usize, Result<SimulationResult>)>> =
            Mutex::new(Vec::with_capacity(jobs));
        let frame_count = self.frame_count;

        debug!("running {} jobs on {} workers", jobs, workers);

        thread::scope(|scope| {
            for _ in 0..workers {
                let next_job = &next_job;
                let outcomes = &outcomes;
                scope.spawn(move || loop {
                    let job = next_job.fetch_add(1, Ordering::Relaxed);
                    if job >= jobs {
                        break;
                    }
                    let sequence = &sequences[job / per_sequence];
                    let policy = Policy::ALL[job % per_sequence];
                    let outcome = simulate(policy, sequence, frame_count);
                    if let Ok(result) = &outcome {
                        log_result(sequence, result);
                    }
                    outcomes.lock().push((job, outcome));
                });
            }
        });

        let mut outcomes = outcomes.into_inner();
        outcomes.sort_by_key(|(job, _)| *job);
        let mut outcomes = outcomes.into_iter().map(|(_, outcome)| outcome);

        sequences
            .iter()
            .map(|sequence| {
                let results = outcomes
                    .by_ref()
                    .take(per_sequence)
                    .collect::<Result<Vec<_>>>()?;
                Ok(SequenceReport {
                    sequence: sequence.clone(),
                    results,
                })
            })
            .collect()
    }
}

/// Worker threads for `jobs` runs: one per core, never more than the jobs.
fn worker_count(jobs: usize) -> usize {
    let cores = thread::available_parallelism().map_or(1, |n| n.get());
    cores.min(jobs)
}

fn summary(sequence: &[PageId], result: &SimulationResult) -> String {
    format!(
        "{} over {} refs: {}, {} swapped, {:?}",
        result.policy,
        sequence.len(),
        result.stats,
        result.swap_pages.len(),
        result.elapsed
    )
}

fn log_result(sequence: &[PageId], result: &SimulationResult) {
    info!("{}", summary(sequence, result));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::pages;

    #[test]
    fn test_run_sequence_order() {
        let driver = Driver::new(2);
        let report = driver.run_sequence(&pages(&[1, 2, 3])).unwrap();

        let order: Vec<_> = report.results.iter().map(|r| r.policy).collect();
        assert_eq!(order, Policy::ALL.to_vec());
        assert_eq!(report.sequence, pages(&[1, 2, 3]));
    }

    #[test]
    fn test_run_multiple_sequences() {
        let driver = Driver::new(1);
        let reports = driver
            .run(&[pages(&[1, 1]), pages(&[]), pages(&[4, 5, 4])])
            .unwrap();

        assert_eq!(reports.len(), 3);
        assert_eq!(reports[0].result(Policy::Fifo).unwrap().faults(), 1);
        assert_eq!(reports[1].result(Policy::Lru).unwrap().faults(), 0);
        assert_eq!(reports[2].result(Policy::Optimal).unwrap().faults(), 3);
    }

    #[test]
    fn test_run_parallel_matches_serial() {
        let driver = Driver::new(3);
        let sequences = vec![
            pages(&[7, 0, 1, 2, 0, 3, 0, 4, 2, 3, 0, 3, 2]),
            pages(&[1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5]),
            pages(&[]),
            pages(&[9, 9, 9]),
        ];

        let serial = driver.run(&sequences).unwrap();
        let parallel = driver.run_parallel(&sequences).unwrap();

        assert_eq!(serial.len(), parallel.len());
        for (s, p) in serial.iter().zip(&parallel) {
            assert_eq!(s.sequence, p.sequence);
            for (a, b) in s.results.iter().zip(&p.results) {
                assert_eq!(a.policy, b.policy);
                assert_eq!(a.stats, b.stats);
                assert_eq!(a.swap_pages, b.swap_pages);
            }
        }
    }

    #[test]
    fn test_run_parallel_empty() {
        let driver = Driver::new(4);
        assert!(driver.run_parallel(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_run_parallel_many_sequences() {
        let driver = Driver::new(2);
        let sequences: Vec<_> = (0..300i64)
            .map(|i| pages(&[i, i + 1, i, i + 2, i + 1, i + 3]))
            .collect();

        let serial = driver.run(&sequences).unwrap();
        let parallel = driver.run_parallel(&sequences).unwrap();

        assert_eq!(parallel.len(), 300);
        for (s, p) in serial.iter().zip(&parallel) {
            assert_eq!(s.sequence, p.sequence);
            let s_stats: Vec<_> = s.results.iter().map(|r| (r.policy, r.stats)).collect();
            let p_stats: Vec<_> = p.results.iter().map(|r| (r.policy, r.stats)).collect();
            assert_eq!(s_stats, p_stats);
        }
    }

    #[test]
    fn test_worker_count_bounded() {
        assert_eq!(worker_count(0), 0);
        assert_eq!(worker_count(1), 1);
        let cores = thread::available_parallelism().map_or(1, |n| n.get());
        assert_eq!(worker_count(10_000), cores);
    }

    #[test]
    fn test_summary_includes_hit_rate() {
        let result = simulate(Policy::Lru, &pages(&[1, 2, 1, 1]), 2).unwrap();
        let line = summary(&pages(&[1, 2, 1, 1]), &result);

        assert!(line.starts_with("LRU over 4 refs: "));
        assert!(line.contains("faults: 2"));
        assert!(line.contains("hit_rate: 50.00%"));
        assert!(line.contains("0 swapped"));
    }

    #[test]
    fn test_huge_frame_count_runs() {
        let driver = Driver::new(1_000_000_000_000);
        let report = driver.run_sequence(&pages(&[1, 2, 1])).unwrap();

        for result in &report.results {
            assert_eq!(result.faults(), 2, "{}", result.policy);
            assert!(result.swap_pages.is_empty());
        }
    }
}
