//! Property-based tests for shot allocation.
//!
//! Tests the allocation contracts over arbitrary task lists: uniform
//! allocation assigns the requested count everywhere, and proportional
//! allocation always spends exactly the total budget.

use alsvin_est::operators::{ExpectationValues, PauliSum, PauliTerm};
use alsvin_est::shot_allocation::{allocate_shots_proportionally, allocate_shots_uniformly};
use alsvin_est::task::EstimationTask;
use alsvin_ir::Circuit;
use proptest::prelude::*;

/// Generate a task list with arbitrary positive frame weights.
fn arb_tasks() -> impl Strategy<Value = Vec<EstimationTask>> {
    prop::collection::vec(0.01_f64..10.0, 1..=8).prop_map(|weights| {
        weights
            .into_iter()
            .enumerate()
            .map(|(i, w)| {
                let operator = PauliSum::from_terms(vec![PauliTerm::z(i as u32, w)]);
                EstimationTask::new(operator, Circuit::new("prep"), 1)
            })
            .collect()
    })
}

/// Priors in the physically meaningful range [−1, 1], one per task.
fn arb_priors(n: usize) -> impl Strategy<Value = ExpectationValues> {
    prop::collection::vec(-1.0_f64..=1.0, n).prop_map(ExpectationValues::new)
}

proptest! {
    #[test]
    fn uniform_assigns_count_to_every_task(
        tasks in arb_tasks(),
        n in 0_i64..100_000,
    ) {
        let allocated = allocate_shots_uniformly(&tasks, n).unwrap();
        prop_assert_eq!(allocated.len(), tasks.len());
        for task in &allocated {
            prop_assert_eq!(task.number_of_shots, n as u64);
        }
    }

    #[test]
    fn proportional_spends_exactly_the_budget(
        tasks in arb_tasks(),
        total in 0_i64..100_000,
    ) {
        let allocated = allocate_shots_proportionally(&tasks, total, None).unwrap();
        prop_assert_eq!(allocated.len(), tasks.len());
        let spent: u64 = allocated.iter().map(|t| t.number_of_shots).sum();
        prop_assert_eq!(spent, total as u64);
    }

    #[test]
    fn proportional_with_priors_spends_at_most_the_budget(
        (tasks, priors) in arb_tasks().prop_flat_map(|tasks| {
            let n = tasks.len();
            (Just(tasks), arb_priors(n))
        }),
        total in 0_i64..100_000,
    ) {
        let allocated = allocate_shots_proportionally(&tasks, total, Some(&priors)).unwrap();
        let spent: u64 = allocated.iter().map(|t| t.number_of_shots).sum();

        // All |E| = 1 collapses the weights and nothing is allocated;
        // otherwise the whole budget is spent.
        if priors.values().iter().all(|e| e.abs() >= 1.0) {
            prop_assert_eq!(spent, 0);
        } else {
            prop_assert_eq!(spent, total as u64);
        }
    }

    #[test]
    fn proportional_never_starves_weight_ordering(
        tasks in arb_tasks(),
        total in 1_i64..100_000,
    ) {
        // A strictly heavier frame never receives fewer shots than a
        // lighter one, modulo the single remainder shot.
        let allocated = allocate_shots_proportionally(&tasks, total, None).unwrap();
        for a in 0..allocated.len() {
            for b in 0..allocated.len() {
                let wa = tasks[a].operator.weight_sum();
                let wb = tasks[b].operator.weight_sum();
                if wa > wb {
                    prop_assert!(
                        allocated[a].number_of_shots + 1 >= allocated[b].number_of_shots
                    );
                }
            }
        }
    }
}
