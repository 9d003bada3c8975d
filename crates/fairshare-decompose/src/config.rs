//! Decomposer configuration.
//!
//! Provides [`DecomposerConfig`] with defaults for the comparison tolerance
//! and whether the basic-case closed form is tried first.

use fairshare_core::constants::{DEFAULT_BASIC_FAST_PATH, SHARE_TOLERANCE};
use fairshare_core::error::InputError;
use serde::{Deserialize, Serialize};

/// Configuration for a [`Decomposer`](crate::Decomposer).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecomposerConfig {
    /// Absolute tolerance for share and capacity comparisons.
    pub tolerance: f64,
    /// Try the basic-case closed form before the greedy path.
    pub basic_fast_path: bool,
}

impl Default for DecomposerConfig {
    fn default() -> Self {
        Self {
            tolerance: SHARE_TOLERANCE,
            basic_fast_path: DEFAULT_BASIC_FAST_PATH,
        }
    }
}

impl DecomposerConfig {
    /// Reject non-positive or non-finite tolerances.
    pub fn validate(&self) -> Result<(), InputError> {
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(InputError::InvalidTolerance(self.tolerance));
        }
        Ok(())
    }
}
