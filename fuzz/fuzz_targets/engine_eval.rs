#![no_main]

//! Fuzz target for rule evaluation over synthetic trees.
//!
//! This builds a flat tree from fuzzer-chosen entry names and runs the full
//! rule registry over it, twice, to ensure evaluation never panics and stays
//! deterministic regardless of how hostile the names are.

use camino::Utf8PathBuf;
use libfuzzer_sys::fuzz_target;
use projlint_rules::{NamingConfig, RuleEngine, RulePolicy, TreeView};
use projlint_scan::parse_name;
use projlint_types::record::{EntryKind, FileRecord};

/// Structured input so the fuzzer generates diverse tree shapes.
#[derive(Debug, arbitrary::Arbitrary)]
struct FuzzInput {
    /// Direct children of the root: (name, is_dir).
    entries: Vec<(String, bool)>,
}

fuzz_target!(|input: FuzzInput| {
    // Records mirror what the scanner would hand the engine: a depth-0 root
    // followed by its children, sorted by path.
    let mut records = vec![FileRecord {
        path: Utf8PathBuf::from("."),
        depth: 0,
        kind: EntryKind::Dir,
        name: parse_name(".", true),
    }];
    for (name, is_dir) in &input.entries {
        // Names with separators or NULs never come out of the scanner.
        if name.is_empty() || name.contains('/') || name.contains('\0') {
            continue;
        }
        let kind = if *is_dir { EntryKind::Dir } else { EntryKind::File };
        records.push(FileRecord {
            path: Utf8PathBuf::from(name.as_str()),
            depth: 1,
            kind,
            name: parse_name(name, *is_dir),
        });
    }
    records.sort_by(|a, b| a.path.cmp(&b.path));

    let exempt: Vec<String> = projlint_rules::DEFAULT_EXEMPT
        .iter()
        .map(|p| p.to_string())
        .collect();
    let naming = NamingConfig::new(projlint_rules::DEFAULT_ROOT_CONFIG, &exempt).unwrap();
    let policy = RulePolicy::default();

    let tree = TreeView {
        records: &records,
        naming: &naming,
    };

    // Evaluate twice - should never panic, and both runs must agree.
    let engine = RuleEngine::new();
    let first = engine.evaluate(&tree, &policy);
    let second = engine.evaluate(&tree, &policy);

    assert_eq!(first.results, second.results);
    assert_eq!(first.rules, second.rules);

    // Results come back sorted by (path, rule, message).
    let mut sorted = first.results.clone();
    sorted.sort_by(|a, b| {
        (&a.path, &a.rule, &a.message).cmp(&(&b.path, &b.rule, &b.message))
    });
    assert_eq!(first.results, sorted);
});
