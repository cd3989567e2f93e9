//! Default filesystem-backed port implementations.

use crate::ports::{TreeSource, WritePort};
use crate::settings::CheckSettings;
use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use glob::Pattern;
use projlint_scan::{ScanError, ScanOptions, ScanOutcome, TreeScanner};
use projlint_types::record::FileRecord;
use projlint_types::report::SkippedEntry;

/// Scans the real filesystem via [`TreeScanner`].
#[derive(Debug)]
pub struct FsTreeSource {
    root: Utf8PathBuf,
    options: ScanOptions,
}

impl FsTreeSource {
    pub fn new(root: Utf8PathBuf) -> Self {
        Self {
            root,
            options: ScanOptions::default(),
        }
    }

    /// Build a source from pipeline settings, compiling exclude globs.
    pub fn from_settings(settings: &CheckSettings) -> anyhow::Result<Self> {
        let mut exclude = Vec::with_capacity(settings.exclude.len());
        for raw in &settings.exclude {
            let pattern =
                Pattern::new(raw).with_context(|| format!("invalid exclude pattern `{raw}`"))?;
            exclude.push(pattern);
        }
        Ok(Self {
            root: settings.root.clone(),
            options: ScanOptions {
                include_hidden: settings.include_hidden,
                follow_links: settings.follow_links,
                exclude,
            },
        })
    }
}

impl TreeSource for FsTreeSource {
    fn scan_tree(&self) -> Result<ScanOutcome, ScanError> {
        TreeScanner::with_options(self.root.clone(), self.options.clone()).scan()
    }

    fn root(&self) -> &Utf8Path {
        &self.root
    }
}

/// In-memory tree source for embedding and testing.
///
/// Accepts pre-built records and sorts them by path on construction so
/// evaluation sees the same deterministic ordering `FsTreeSource` produces.
#[derive(Debug, Clone)]
pub struct InMemoryTreeSource {
    root: Utf8PathBuf,
    records: Vec<FileRecord>,
    skipped: Vec<SkippedEntry>,
}

impl InMemoryTreeSource {
    pub fn new(records: Vec<FileRecord>) -> Self {
        Self::with_skipped(records, Vec::new())
    }

    pub fn with_skipped(mut records: Vec<FileRecord>, skipped: Vec<SkippedEntry>) -> Self {
        records.sort_by(|a, b| a.path.cmp(&b.path));
        Self {
            root: Utf8PathBuf::from("."),
            records,
            skipped,
        }
    }
}

impl TreeSource for InMemoryTreeSource {
    fn scan_tree(&self) -> Result<ScanOutcome, ScanError> {
        Ok(ScanOutcome {
            records: self.records.clone(),
            skipped: self.skipped.clone(),
        })
    }

    fn root(&self) -> &Utf8Path {
        &self.root
    }
}

/// Filesystem write operations.
#[derive(Debug, Clone, Default)]
pub struct FsWritePort;

impl WritePort for FsWritePort {
    fn write_file(&self, path: &Utf8Path, contents: &[u8]) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create parent dir for {}", path))?;
        }
        std::fs::write(path, contents).with_context(|| format!("write {}", path))
    }

    fn create_dir_all(&self, path: &Utf8Path) -> anyhow::Result<()> {
        std::fs::create_dir_all(path).with_context(|| format!("create_dir_all {}", path))
    }
}
