//! Basic-case detection and closed-form construction.
//!
//! A scenario is *basic* when every subject appears in exactly one
//! (citizen, subject) membership across all preference sets and the total
//! budget is at least the citizen count. Occurrences are counted, not
//! citizens: a citizen endorsing two subjects contributes two.
//!
//! The closed form credits each citizen with the full budget of the subject
//! they prefer. It does not equalise shares and is never verified.

use fairshare_core::types::{Budget, Decomposition, Preferences};

/// Whether `budget` and `preferences` qualify for the closed form.
///
/// Preferences must already be validated against `budget.len()`.
pub fn is_basic_case(budget: &Budget, preferences: &Preferences) -> bool {
    let mut claims = vec![0usize; budget.len()];
    for set in preferences.iter() {
        for &subject in set {
            if let Some(count) = claims.get_mut(subject) {
                *count += 1;
            }
        }
    }

    let unique_claims = claims.iter().all(|&count| count == 1);
    let sufficient_budget = budget.total() >= preferences.citizens() as f64;

    unique_claims && sufficient_budget
}

/// Build the basic-case decomposition: `d[i][p] = budget[p]` for the subject
/// `p` citizen `i` prefers, zero elsewhere.
///
/// A citizen with several subjects is credited only with the lowest-indexed
/// one. Citizens with an empty set get an all-zero row.
pub fn construct_basic(budget: &Budget, preferences: &Preferences) -> Decomposition {
    let mut decomposition = Decomposition::zeros(preferences.citizens(), budget.len());
    for (citizen, set) in preferences.iter().enumerate() {
        if let Some(&subject) = set.first() {
            decomposition.set(citizen, subject, budget.amount(subject));
        }
    }
    decomposition
}
