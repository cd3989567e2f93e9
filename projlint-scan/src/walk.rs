use std::path::Path;

use camino::{Utf8Path, Utf8PathBuf};
use glob::Pattern;
use projlint_types::record::{EntryKind, FileRecord, ParsedName};
use projlint_types::report::SkippedEntry;
use tracing::debug;
use walkdir::WalkDir;

use crate::name::parse_name;

/// Problems with the scan root itself. Everything below the root is
/// tolerated and reported as a skipped entry instead.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("root path `{path}` does not exist")]
    RootMissing { path: Utf8PathBuf },

    #[error("root path `{path}` is not a directory")]
    RootNotADirectory { path: Utf8PathBuf },

    #[error("root path `{path}` is not readable: {message}")]
    RootUnreadable { path: Utf8PathBuf, message: String },
}

#[derive(Debug, Clone, Default)]
pub struct ScanOptions {
    /// Record dot-prefixed entries instead of pruning them.
    pub include_hidden: bool,

    pub follow_links: bool,

    /// Globs matched against root-relative paths; matches are pruned
    /// together with their subtrees.
    pub exclude: Vec<Pattern>,
}

/// Collected form of a full scan.
#[derive(Debug, Clone, Default)]
pub struct ScanOutcome {
    pub records: Vec<FileRecord>,
    pub skipped: Vec<SkippedEntry>,
}

#[derive(Debug)]
pub enum ScanEvent {
    Record(FileRecord),
    Skipped(SkippedEntry),
}

/// Walks a project tree depth-first, parents before children, siblings in
/// byte-wise name order. Repeated scans of an unchanged tree yield identical
/// sequences.
pub struct TreeScanner {
    root: Utf8PathBuf,
    options: ScanOptions,
}

impl TreeScanner {
    pub fn new(root: impl Into<Utf8PathBuf>) -> Self {
        Self::with_options(root, ScanOptions::default())
    }

    pub fn with_options(root: impl Into<Utf8PathBuf>, options: ScanOptions) -> Self {
        Self {
            root: root.into(),
            options,
        }
    }

    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    /// Validate the root, then return the lazy event stream.
    pub fn iter(&self) -> Result<ScanIter, ScanError> {
        self.check_root()?;
        let walker = WalkDir::new(&self.root)
            .follow_links(self.options.follow_links)
            .sort_by_file_name();
        Ok(ScanIter {
            root: self.root.clone(),
            options: self.options.clone(),
            inner: walker.into_iter(),
        })
    }

    /// Scan the whole tree into a [`ScanOutcome`].
    pub fn scan(&self) -> Result<ScanOutcome, ScanError> {
        let mut outcome = ScanOutcome::default();
        for event in self.iter()? {
            match event {
                ScanEvent::Record(record) => outcome.records.push(record),
                ScanEvent::Skipped(skipped) => outcome.skipped.push(skipped),
            }
        }
        debug!(
            records = outcome.records.len(),
            skipped = outcome.skipped.len(),
            "scan complete"
        );
        Ok(outcome)
    }

    fn check_root(&self) -> Result<(), ScanError> {
        let metadata = match fs_err::metadata(self.root.as_std_path()) {
            Ok(metadata) => metadata,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Err(ScanError::RootMissing {
                    path: self.root.clone(),
                });
            }
            Err(err) => {
                return Err(ScanError::RootUnreadable {
                    path: self.root.clone(),
                    message: err.to_string(),
                });
            }
        };
        if !metadata.is_dir() {
            return Err(ScanError::RootNotADirectory {
                path: self.root.clone(),
            });
        }
        // Probe readability up front; an unreadable root must be a hard
        // error, not a tolerated skip.
        if let Err(err) = fs_err::read_dir(self.root.as_std_path()) {
            return Err(ScanError::RootUnreadable {
                path: self.root.clone(),
                message: err.to_string(),
            });
        }
        Ok(())
    }
}

pub struct ScanIter {
    root: Utf8PathBuf,
    options: ScanOptions,
    inner: walkdir::IntoIter,
}

impl Iterator for ScanIter {
    type Item = ScanEvent;

    fn next(&mut self) -> Option<ScanEvent> {
        loop {
            let entry = match self.inner.next()? {
                Ok(entry) => entry,
                Err(err) => {
                    let path = err
                        .path()
                        .map(|p| relative_display(&self.root, p))
                        .unwrap_or_else(|| "<unknown>".to_string());
                    let reason = match err.io_error() {
                        Some(io) => io.to_string(),
                        None => err.to_string(),
                    };
                    debug!(path = %path, reason = %reason, "skipping unreadable entry");
                    return Some(ScanEvent::Skipped(SkippedEntry { path, reason }));
                }
            };

            if entry.depth() == 0 {
                return Some(ScanEvent::Record(FileRecord {
                    path: Utf8PathBuf::from("."),
                    depth: 0,
                    kind: EntryKind::Dir,
                    name: ParsedName::default(),
                }));
            }

            // walkdir only yields paths under the root it was given.
            let Ok(rel) = entry.path().strip_prefix(self.root.as_std_path()) else {
                continue;
            };
            let is_dir = entry.file_type().is_dir();

            let Some(rel) = Utf8Path::from_path(rel) else {
                if is_dir {
                    self.inner.skip_current_dir();
                }
                return Some(ScanEvent::Skipped(SkippedEntry {
                    path: rel.to_string_lossy().into_owned(),
                    reason: "name is not valid UTF-8".to_string(),
                }));
            };

            let name = rel.file_name().unwrap_or_default();
            if !self.options.include_hidden && name.starts_with('.') {
                debug!(path = %rel, "skipping hidden entry");
                if is_dir {
                    self.inner.skip_current_dir();
                }
                continue;
            }
            if self.options.exclude.iter().any(|p| p.matches(rel.as_str())) {
                debug!(path = %rel, "pruning excluded entry");
                if is_dir {
                    self.inner.skip_current_dir();
                }
                continue;
            }

            let kind = if is_dir { EntryKind::Dir } else { EntryKind::File };
            return Some(ScanEvent::Record(FileRecord {
                path: rel.to_owned(),
                depth: entry.depth(),
                kind,
                name: parse_name(name, is_dir),
            }));
        }
    }
}

fn relative_display(root: &Utf8Path, path: &Path) -> String {
    path.strip_prefix(root.as_std_path())
        .unwrap_or(path)
        .to_string_lossy()
        .into_owned()
}
