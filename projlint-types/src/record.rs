use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};

/// A single scanned filesystem entry, relative to the tree root.
///
/// Every record corresponds to exactly one entry at scan time; the scanned
/// root itself is the depth-0 record with path `.`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    /// Path relative to the scanned root (`.` for the root itself).
    pub path: Utf8PathBuf,

    /// Nesting depth; the root is 0, its direct children 1.
    pub depth: usize,

    pub kind: EntryKind,

    /// Parsed final path component.
    pub name: ParsedName,
}

impl FileRecord {
    /// Final path component, or `.` for the root record.
    pub fn file_name(&self) -> &str {
        self.path.file_name().unwrap_or(".")
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Dir
    }

    pub fn is_root(&self) -> bool {
        self.depth == 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    Dir,
    File,
}

/// The pieces of a file or directory name that the naming rules inspect.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedName {
    /// Leading ordinal digits, if present (`01` in `01_load-data.py`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ordinal: Option<Ordinal>,

    /// Name segment after the ordinal prefix and before the extension.
    pub stem: String,

    /// Final extension without the dot, for files that carry one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,
}

/// Leading ordinal prefix of a name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ordinal {
    /// Digits exactly as written, zero padding preserved.
    pub digits: String,

    /// Numeric value of `digits`, saturating at `u64::MAX`.
    pub value: u64,
}
