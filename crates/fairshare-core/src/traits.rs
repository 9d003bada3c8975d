//! Trait interfaces for fairshare.
//!
//! - [`DecompositionStrategy`]: turns a budget and preferences into an
//!   [`Outcome`] (fairshare-decompose implements)

use crate::error::InputError;
use crate::types::{Budget, Decomposition, Outcome, Preferences};

/// Pure computation of an equal-share decomposition.
///
/// Implementations must be deterministic: identical inputs produce
/// identical outcomes. Malformed inputs are reported as `Err`; a
/// well-formed input with no decomposition is `Ok(Outcome::Infeasible)`.
pub trait DecompositionStrategy: Send + Sync {
    /// Decompose `budget` over `preferences`, reporting the path taken or
    /// the reason no decomposition was found.
    fn decompose(&self, budget: &Budget, preferences: &Preferences)
        -> Result<Outcome, InputError>;

    /// The decomposition matrix, or `None` on any infeasibility.
    ///
    /// Default implementation delegates to [`decompose`](Self::decompose).
    fn find(
        &self,
        budget: &Budget,
        preferences: &Preferences,
    ) -> Result<Option<Decomposition>, InputError> {
        Ok(self.decompose(budget, preferences)?.into_decomposition())
    }
}
