//! Integration test suite for fairshare.
//!
//! Runs the decomposition engine end to end and checks the share,
//! conservation, and preference invariants on every matrix it returns.

pub mod helpers;
