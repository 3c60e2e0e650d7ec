//! Cross-crate test suite for ytdrop.
//!
//! Scenario tests drive the full pipeline through hand-checkable configs;
//! property tests check invariants that must hold for any config.

pub mod helpers;
