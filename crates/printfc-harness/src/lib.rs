//! Conformance harness for the printfc format engine.
//!
//! Runs JSON fixture sets through [`printfc_core::sprintf`] and reports
//! pass/fail per case, optionally emitting JSONL records for tooling.

pub mod error;
pub mod fixtures;
pub mod runner;
pub mod structured_log;
