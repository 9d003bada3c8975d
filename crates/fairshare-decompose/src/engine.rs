//! Decomposer implementing the [`DecompositionStrategy`] trait.
//!
//! Runs the full pipeline: input validation, the empty-preference check,
//! the basic-case closed form, and otherwise greedy allocation followed by
//! share verification. Every run is a pure function of its inputs.

use std::collections::BTreeSet;

use fairshare_core::error::{FairshareError, Infeasibility, InputError};
use fairshare_core::traits::DecompositionStrategy;
use fairshare_core::types::{Budget, Decomposition, Outcome, Preferences, SolvePath};
use tracing::debug;

use crate::basic::{construct_basic, is_basic_case};
use crate::config::DecomposerConfig;
use crate::greedy::GreedyAllocator;
use crate::index::PreferenceIndex;
use crate::share::calculate_share;
use crate::verify::verify_allocation;

/// The production decomposition strategy.
#[derive(Debug, Clone, Default)]
pub struct Decomposer {
    config: DecomposerConfig,
}

impl Decomposer {
    /// Create a Decomposer with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a Decomposer with validated settings.
    pub fn with_config(config: DecomposerConfig) -> Result<Self, InputError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Settings in effect for every run.
    pub fn config(&self) -> &DecomposerConfig {
        &self.config
    }

    /// Decompose and fold both input errors and infeasibility into one error.
    pub fn solve(
        &self,
        budget: &Budget,
        preferences: &Preferences,
    ) -> Result<(Decomposition, SolvePath), FairshareError> {
        Ok(self.decompose(budget, preferences)?.into_result()?)
    }

    fn general_case(&self, budget: &Budget, preferences: &Preferences) -> Outcome {
        let citizens = preferences.citizens();
        let share = calculate_share(budget, citizens);
        let index = PreferenceIndex::build(preferences, budget.len());
        let mut decomposition = Decomposition::zeros(citizens, budget.len());

        debug!(
            citizens,
            subjects = budget.len(),
            total = share.total,
            share = share.per_citizen,
            "decompose: general case"
        );

        let allocator =
            GreedyAllocator::new(budget, &index, share.per_citizen, self.config.tolerance);
        if let Err(reason) = allocator.allocate_all(&mut decomposition) {
            debug!(%reason, "decompose: allocation failed");
            return reason.into();
        }

        if let Err(reason) =
            verify_allocation(&decomposition, share.per_citizen, self.config.tolerance)
        {
            debug!(%reason, "decompose: share verification failed");
            return reason.into();
        }

        Outcome::Decomposed {
            decomposition,
            path: SolvePath::General,
        }
    }
}

impl DecompositionStrategy for Decomposer {
    fn decompose(
        &self,
        budget: &Budget,
        preferences: &Preferences,
    ) -> Result<Outcome, InputError> {
        budget.validate()?;
        preferences.validate(budget.len())?;

        if let Some(citizen) = preferences.first_empty() {
            debug!(citizen, "decompose: citizen without preferences");
            return Ok(Infeasibility::EmptyPreference { citizen }.into());
        }

        if preferences.is_empty() {
            let total = budget.total();
            if total > 0.0 {
                debug!(total, "decompose: budget with no citizens");
                return Ok(Infeasibility::NoCitizens { total }.into());
            }
            return Ok(Outcome::Decomposed {
                decomposition: Decomposition::zeros(0, budget.len()),
                path: SolvePath::Degenerate,
            });
        }

        if self.config.basic_fast_path && is_basic_case(budget, preferences) {
            debug!(citizens = preferences.citizens(), "decompose: basic case");
            return Ok(Outcome::Decomposed {
                decomposition: construct_basic(budget, preferences),
                path: SolvePath::Basic,
            });
        }

        Ok(self.general_case(budget, preferences))
    }
}

/// Find any decomposition of `budget` over `preferences` with the default
/// configuration.
///
/// Returns `Ok(None)` when no decomposition is found and `Err` only for
/// malformed inputs (negative or non-finite budgets, out-of-range subjects).
///
/// # Examples
///
/// ```
/// use std::collections::BTreeSet;
/// use fairshare_decompose::find_decomposition;
///
/// let prefs: Vec<BTreeSet<usize>> = vec![[0].into(), [0].into()];
/// let d = find_decomposition(&[5.0], &prefs).unwrap().unwrap();
/// assert_eq!(d.to_rows(), vec![vec![2.5], vec![2.5]]);
/// ```
pub fn find_decomposition(
    budget: &[f64],
    preferences: &[BTreeSet<usize>],
) -> Result<Option<Decomposition>, InputError> {
    Decomposer::new().find(&Budget::from(budget), &Preferences::from(preferences))
}
