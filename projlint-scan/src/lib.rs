//! Filesystem scanning for projlint.
//!
//! The scanner walks a project tree once, in a deterministic order, and turns
//! every surviving entry into a [`FileRecord`](projlint_types::record::FileRecord).
//! It is deliberately tolerant below the root: entries it cannot read or whose
//! names are not valid UTF-8 are reported as skipped instead of aborting the
//! scan. Only problems with the root itself are hard errors.

mod name;
mod walk;

pub use name::{
    Separator, file_stem, is_capitalized_words, is_lowercase, parse_name, separators_in,
};
pub use walk::{ScanError, ScanEvent, ScanIter, ScanOptions, ScanOutcome, TreeScanner};
