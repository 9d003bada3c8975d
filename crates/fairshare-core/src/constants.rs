//! Decomposition constants. All monetary values are plain `f64` amounts.

/// Absolute tolerance when comparing a citizen's row sum against the share,
/// and when comparing endorser capacity against a subject's budget.
///
/// The tolerance is absolute, not relative. Near `1e12` adjacent `f64`
/// values are about `1e-4` apart, so `share * citizens` can undershoot the
/// total by far more than `1e-9` and a feasible budget is reported as
/// insufficient capacity. Callers with large amounts should pass a larger
/// tolerance through `DecomposerConfig`.
///
/// # Examples
///
/// ```
/// use fairshare_core::constants::SHARE_TOLERANCE;
/// assert!((0.1 + 0.2 - 0.3_f64).abs() < SHARE_TOLERANCE);
/// ```
pub const SHARE_TOLERANCE: f64 = 1e-9;

/// Whether the basic-case closed form is attempted before the greedy path.
pub const DEFAULT_BASIC_FAST_PATH: bool = true;
