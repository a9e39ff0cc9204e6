//! Test module for scenario and determinism tests.
//!
//! Per-module unit tests live next to the code they cover; this module holds
//! the tests that exercise the whole frame pipeline:
//! - **Integration tests**: multi-frame scenarios against real worlds
//! - **Determinism tests**: replay reproducibility and resolution idempotence
//! - **Helper functions**: world and actor factories
//!
//! # Test Structure
//!
//! - `integration.rs`: end-to-end movement scenarios
//! - `determinism.rs`: bitwise-identical replay and idempotence
//! - `helpers.rs`: test setup utilities and factory functions

mod helpers;
mod integration;

pub use helpers::*;
