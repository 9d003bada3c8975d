//! Human-readable and JSON rendering of decomposition outcomes.

use anyhow::{Context, Result};
use fairshare_core::types::Outcome;

/// One line per citizen, numbered from 1, or a single infeasibility line.
pub fn render_text(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Decomposed { decomposition, .. } => {
            let mut out = String::from("The budget is decomposable. One possible decomposition is:\n");
            for (citizen, row) in decomposition.rows().enumerate() {
                out.push_str(&format!("Citizen {}'s allocation: {:?}\n", citizen + 1, row));
            }
            out
        }
        Outcome::Infeasible { .. } => "The budget is not decomposable.\n".to_string(),
    }
}

pub fn render_json(outcome: &Outcome) -> Result<String> {
    serde_json::to_string_pretty(outcome).context("failed to serialize outcome")
}
