//! Total budget and the per-citizen share.

use fairshare_core::types::{Budget, Share};

/// Sum the budget and divide it evenly across `citizens`.
///
/// With no citizens the share is 0 rather than a division by zero.
pub fn calculate_share(budget: &Budget, citizens: usize) -> Share {
    let total = budget.total();
    let per_citizen = if citizens == 0 {
        0.0
    } else {
        total / citizens as f64
    };
    Share { total, per_citizen }
}
