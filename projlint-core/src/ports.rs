//! Port traits abstracting all I/O away from the pipeline.

use camino::Utf8Path;
use projlint_scan::{ScanError, ScanOutcome};

/// Source of the tree under check.
///
/// The pipeline never touches the filesystem itself; everything it knows
/// about the tree comes through this trait.
pub trait TreeSource {
    /// Enumerate the tree and return its records plus any skipped entries.
    ///
    /// Root-level problems (missing, not a directory, unreadable) are hard
    /// errors; problems below the root surface as skipped entries instead.
    fn scan_tree(&self) -> Result<ScanOutcome, ScanError>;

    /// The root path this source scans, as given by the caller.
    fn root(&self) -> &Utf8Path;
}

/// File-system write operations.
pub trait WritePort {
    fn write_file(&self, path: &Utf8Path, contents: &[u8]) -> anyhow::Result<()>;
    fn create_dir_all(&self, path: &Utf8Path) -> anyhow::Result<()>;
}
