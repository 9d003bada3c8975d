//! Terminal share check for general-case decompositions.

use fairshare_core::error::Infeasibility;
use fairshare_core::types::Decomposition;

/// Confirm every citizen's row sums to `share` within `tolerance`.
///
/// Reports the first citizen (ascending) whose row misses the share. This is
/// a check only; the matrix is never repaired.
pub fn verify_allocation(
    decomposition: &Decomposition,
    share: f64,
    tolerance: f64,
) -> Result<(), Infeasibility> {
    for citizen in 0..decomposition.citizens() {
        let row_sum = decomposition.row_sum(citizen);
        if (row_sum - share).abs() >= tolerance {
            return Err(Infeasibility::ShareMismatch {
                citizen,
                row_sum,
                share,
            });
        }
    }
    Ok(())
}
