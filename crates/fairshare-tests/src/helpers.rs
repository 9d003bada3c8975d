//! Shared test helpers for scenario and property tests.

use std::collections::BTreeSet;

use fairshare_core::types::{Budget, Decomposition, Preferences};

/// Tolerance used when checking invariants on returned matrices.
pub const EPS: f64 = 1e-9;

/// Build preferences from literal subject lists.
pub fn prefs(sets: &[&[usize]]) -> Preferences {
    Preferences::new(sets.iter().map(|s| s.iter().copied().collect()).collect())
}

/// Build raw preference sets, as taken by `find_decomposition`.
pub fn sets(sets: &[&[usize]]) -> Vec<BTreeSet<usize>> {
    sets.iter().map(|s| s.iter().copied().collect()).collect()
}

/// Every row sums to `budget.total() / citizens`.
pub fn assert_equal_shares(d: &Decomposition, budget: &Budget) {
    let share = budget.total() / d.citizens() as f64;
    for citizen in 0..d.citizens() {
        let sum = d.row_sum(citizen);
        assert!(
            (sum - share).abs() < EPS,
            "citizen {citizen} received {sum}, share is {share}"
        );
    }
}

/// Every column sums to that subject's budget.
pub fn assert_columns_conserved(d: &Decomposition, budget: &Budget) {
    for subject in 0..budget.len() {
        let sum = d.column_sum(subject);
        let expected = budget.amount(subject);
        assert!(
            (sum - expected).abs() < EPS,
            "subject {subject} distributed {sum}, budget is {expected}"
        );
    }
}

/// No citizen is credited with money from a subject they do not endorse.
pub fn assert_preferences_respected(d: &Decomposition, preferences: &Preferences) {
    for citizen in 0..d.citizens() {
        for (subject, &amount) in d.row(citizen).iter().enumerate() {
            if amount > 0.0 {
                assert!(
                    preferences.of(citizen).contains(&subject),
                    "citizen {citizen} credited {amount} from unendorsed subject {subject}"
                );
            }
        }
    }
}

/// No cell is negative.
pub fn assert_non_negative(d: &Decomposition) {
    for (citizen, row) in d.rows().enumerate() {
        for (subject, &amount) in row.iter().enumerate() {
            assert!(amount >= 0.0, "cell ({citizen}, {subject}) is {amount}");
        }
    }
}
