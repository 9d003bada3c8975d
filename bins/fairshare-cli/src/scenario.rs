//! Scenario files: a budget, the citizens' preferences, and optional
//! decomposer settings, stored as JSON.

use std::path::Path;

use anyhow::{Context, Result};
use fairshare_core::types::{Budget, Preferences};
use fairshare_decompose::DecomposerConfig;
use serde::{Deserialize, Serialize};

/// One decomposition problem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub budget: Budget,
    pub preferences: Preferences,
    /// Settings stored alongside the problem. Command-line flags win.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<DecomposerConfig>,
}

impl Scenario {
    /// Read and parse a scenario file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read scenario {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse scenario {}", path.display()))
    }

    /// Five citizens sharing a 500-unit budget over four subjects.
    pub fn demo() -> Self {
        let sets: [&[usize]; 5] = [&[0, 1], &[0, 2], &[0, 3], &[1, 2], &[0]];
        Self {
            budget: Budget::new(vec![400.0, 50.0, 50.0, 0.0]),
            preferences: Preferences::new(
                sets.iter().map(|s| s.iter().copied().collect()).collect(),
            ),
            config: None,
        }
    }
}
