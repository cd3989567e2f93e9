//! Embeddable core library for projlint.
//!
//! Provides a clap-free, I/O-abstracted entry point suitable for linking
//! into an editor plugin, a CI harness, or another host process.
//!
//! # Port traits
//!
//! All I/O is abstracted behind port traits in [`ports`]:
//! - [`TreeSource`](ports::TreeSource) — enumerate the tree under check
//! - [`WritePort`](ports::WritePort) — write report artifacts
//!
//! The [`adapters`] module provides default filesystem-backed implementations.
//!
//! # Entry points
//!
//! - [`run_check`](pipeline::run_check) — scan a tree, evaluate rules, build a report
//! - [`write_report_artifacts`](pipeline::write_report_artifacts) — persist a report

pub mod adapters;
pub mod pipeline;
pub mod ports;
pub mod settings;

// Re-export scan types so embedders don't need projlint-scan directly.
pub use projlint_scan::{ScanError, ScanOutcome};
