//! Greedy per-subject allocation for the general case.
//!
//! Subjects are processed in ascending index order. Each subject's budget is
//! poured into its endorsers in ascending citizen order, filling every
//! endorser up to the per-citizen share before moving to the next one. The
//! order on both axes determines the exact output when capacity is tight.

use fairshare_core::error::Infeasibility;
use fairshare_core::types::{Budget, Decomposition};
use tracing::trace;

use crate::index::PreferenceIndex;

/// Packs subject budgets into citizen rows without exceeding the share.
#[derive(Debug, Clone, Copy)]
pub struct GreedyAllocator<'a> {
    budget: &'a Budget,
    index: &'a PreferenceIndex,
    share: f64,
    tolerance: f64,
}

impl<'a> GreedyAllocator<'a> {
    pub fn new(budget: &'a Budget, index: &'a PreferenceIndex, share: f64, tolerance: f64) -> Self {
        Self {
            budget,
            index,
            share,
            tolerance,
        }
    }

    /// Allocate every subject in ascending order, stopping at the first
    /// subject that cannot be placed.
    pub fn allocate_all(&self, decomposition: &mut Decomposition) -> Result<(), Infeasibility> {
        for subject in 0..self.budget.len() {
            self.allocate_subject(subject, decomposition)?;
        }
        Ok(())
    }

    /// Distribute one subject's whole budget across its endorsers.
    ///
    /// On error the matrix may hold a partial column and must be discarded.
    ///
    /// # Panics
    ///
    /// Panics if `subject` is not below the budget's length, or if the index
    /// lists a citizen outside `decomposition`.
    pub fn allocate_subject(
        &self,
        subject: usize,
        decomposition: &mut Decomposition,
    ) -> Result<(), Infeasibility> {
        let budget = self.budget.amount(subject);
        let interested = self.index.interested(subject);

        if interested.is_empty() && budget > 0.0 {
            return Err(Infeasibility::UnendorsedSubject { subject, budget });
        }

        let capacities: Vec<f64> = interested
            .iter()
            .map(|&citizen| self.remaining_capacity(citizen, decomposition))
            .collect();
        let capacity: f64 = capacities.iter().sum();

        trace!(subject, budget, capacity, endorsers = interested.len(), "greedy: allocating subject");

        if capacity + self.tolerance < budget {
            return Err(Infeasibility::InsufficientCapacity {
                subject,
                capacity,
                budget,
            });
        }

        let mut remaining = budget;
        for (&citizen, &room) in interested.iter().zip(&capacities) {
            if remaining <= 0.0 {
                break;
            }
            let amount = room.min(remaining);
            decomposition.credit(citizen, subject, amount);
            remaining -= amount;
        }

        Ok(())
    }

    /// How much more `citizen` can receive before reaching the share.
    fn remaining_capacity(&self, citizen: usize, decomposition: &Decomposition) -> f64 {
        // Rounding can push a full row a hair past the share; never hand out
        // a negative amount.
        (self.share - decomposition.row_sum(citizen)).max(0.0)
    }
}
