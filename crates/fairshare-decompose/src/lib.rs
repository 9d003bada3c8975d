//! # fairshare-decompose: equal-share budget decomposition engine.
//!
//! Splits a per-subject budget into a citizen x subject matrix where every
//! citizen receives `total / citizens` and only from subjects they endorse:
//! - **Basic case**: when every subject is claimed by exactly one
//!   membership and the total covers one unit per citizen, each subject's
//!   budget goes straight to its claimant. Shares are not equalised.
//! - **General case**: subjects are packed greedily, ascending subject index,
//!   into endorsers in ascending citizen index, each capped at the share.
//!   A final pass verifies every row reaches the share.

pub mod basic;
pub mod config;
pub mod engine;
pub mod greedy;
pub mod index;
pub mod share;
pub mod verify;

pub use config::DecomposerConfig;
pub use engine::{find_decomposition, Decomposer};
pub use greedy::GreedyAllocator;
pub use index::PreferenceIndex;
pub use share::calculate_share;
