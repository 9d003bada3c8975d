//! Error types for fairshare.
//!
//! [`InputError`] covers malformed inputs and is returned as `Err`.
//! [`Infeasibility`] is a value-level answer: the inputs are well formed
//! but no decomposition exists (or the allocation order could not find one).
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    #[error("citizen {citizen} endorses subject {subject}, but only {subjects} subjects exist")] SubjectOutOfRange { citizen: usize, subject: usize, subjects: usize },
    #[error("invalid budget for subject {subject}: {value}")] InvalidBudget { subject: usize, value: f64 },
    #[error("invalid tolerance: {0}")] InvalidTolerance(f64),
    #[error("row {citizen} has {len} cells, expected {subjects}")] RaggedRow { citizen: usize, len: usize, subjects: usize },
}

#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum Infeasibility {
    #[error("citizen {citizen} endorses no subject")] EmptyPreference { citizen: usize },
    #[error("subject {subject} has budget {budget} but no endorser")] UnendorsedSubject { subject: usize, budget: f64 },
    #[error("subject {subject} needs {budget}, endorsers can absorb {capacity}")] InsufficientCapacity { subject: usize, capacity: f64, budget: f64 },
    #[error("citizen {citizen} received {row_sum}, share is {share}")] ShareMismatch { citizen: usize, row_sum: f64, share: f64 },
    #[error("total budget {total} with no citizens to receive it")] NoCitizens { total: f64 },
}

#[derive(Error, Debug)]
pub enum FairshareError {
    #[error(transparent)] Input(#[from] InputError),
    #[error("not decomposable: {0}")] Infeasible(#[from] Infeasibility),
}
