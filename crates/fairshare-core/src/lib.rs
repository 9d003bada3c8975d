//! # fairshare-core
//! Foundation types and traits for equal-share budget decomposition.

pub mod constants;
pub mod error;
pub mod traits;
pub mod types;
