//! Record builders shared by the unit tests.

use camino::Utf8PathBuf;
use projlint_scan::parse_name;
use projlint_types::record::{EntryKind, FileRecord, ParsedName};

use crate::policy::{DEFAULT_EXEMPT, DEFAULT_ROOT_CONFIG, NamingConfig};

pub(crate) fn root() -> FileRecord {
    FileRecord {
        path: Utf8PathBuf::from("."),
        depth: 0,
        kind: EntryKind::Dir,
        name: ParsedName::default(),
    }
}

pub(crate) fn dir(path: &str) -> FileRecord {
    record(path, EntryKind::Dir)
}

pub(crate) fn file(path: &str) -> FileRecord {
    record(path, EntryKind::File)
}

fn record(path: &str, kind: EntryKind) -> FileRecord {
    let path = Utf8PathBuf::from(path);
    let depth = path.components().count();
    let name = parse_name(path.file_name().unwrap_or_default(), kind == EntryKind::Dir);
    FileRecord {
        path,
        depth,
        kind,
        name,
    }
}

pub(crate) fn naming() -> NamingConfig {
    let exempt: Vec<String> = DEFAULT_EXEMPT.iter().map(|s| s.to_string()).collect();
    NamingConfig::new(DEFAULT_ROOT_CONFIG, &exempt).expect("default naming config")
}
