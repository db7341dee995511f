//! Umbrella package for the mocha-lens workspace
//!
//! Re-exports the core library so the end-to-end tests under `tests/` can
//! exercise it the way an editor integration would.
pub use mocha_lens_core::*;
