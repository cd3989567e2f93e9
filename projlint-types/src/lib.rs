//! Shared DTOs (schemas-as-code) for the projlint workspace.
//!
//! # Design constraints
//! - These types are intended to be serialized to disk.
//! - Be conservative with breaking changes.
//! - Prefer adding optional fields over changing semantics.

pub mod record;
pub mod report;
pub mod result;
pub mod wire;

/// Schema identifiers.
pub mod schema {
    pub const PROJLINT_REPORT_V1: &str = "projlint.report.v1";
}
