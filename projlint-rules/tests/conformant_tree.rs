//! Engine-level tests over synthetic trees.

use camino::Utf8PathBuf;
use pretty_assertions::assert_eq;
use projlint_rules::{
    DEFAULT_EXEMPT, DEFAULT_ROOT_CONFIG, NamingConfig, RuleEngine, RulePolicy, SeverityLevel,
    TreeView, rule_ids,
};
use projlint_scan::parse_name;
use projlint_types::record::{EntryKind, FileRecord, ParsedName};
use projlint_types::result::RuleStatus;

fn root() -> FileRecord {
    FileRecord {
        path: Utf8PathBuf::from("."),
        depth: 0,
        kind: EntryKind::Dir,
        name: ParsedName::default(),
    }
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

fn dir(path: &str) -> FileRecord {
    record(path, EntryKind::Dir)
}

fn file(path: &str) -> FileRecord {
    record(path, EntryKind::File)
}

fn naming() -> NamingConfig {
    let exempt: Vec<String> = DEFAULT_EXEMPT.iter().map(|s| s.to_string()).collect();
    NamingConfig::new(DEFAULT_ROOT_CONFIG, &exempt).expect("default naming")
}

fn conformant_records() -> Vec<FileRecord> {
    vec![
        root(),
        dir("01_Data"),
        file("01_Data/01_raw.csv"),
        file("01_Data/02_clean.csv"),
        dir("02_Analysis"),
        file("02_Analysis/01_model.py"),
        file("config.yaml"),
        file("README.md"),
    ]
}

fn all_rule_ids() -> Vec<String> {
    rule_ids().iter().map(|id| id.to_string()).collect()
}

#[test]
fn conformant_tree_has_zero_failures() {
    let records = conformant_records();
    let naming = naming();
    let tree = TreeView {
        records: &records,
        naming: &naming,
    };

    let evaluation = RuleEngine::new().evaluate(&tree, &RulePolicy::default());

    assert!(
        evaluation
            .results
            .iter()
            .all(|r| r.status == RuleStatus::Pass),
        "unexpected non-pass results: {:?}",
        evaluation.results
    );
    // One pass marker per evaluated rule.
    assert_eq!(evaluation.results.len(), rule_ids().len());
    assert_eq!(evaluation.rules, all_rule_ids());
}

#[test]
fn missing_root_config_yields_exactly_one_failure() {
    let mut records = conformant_records();
    records.retain(|r| r.path.as_str() != "config.yaml");
    let naming = naming();
    let tree = TreeView {
        records: &records,
        naming: &naming,
    };

    let evaluation = RuleEngine::new().evaluate(&tree, &RulePolicy::default());
    let failures: Vec<_> = evaluation
        .results
        .iter()
        .filter(|r| r.status == RuleStatus::Fail)
        .collect();

    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].rule, "root-config");
    assert_eq!(failures[0].path.as_str(), ".");
}

#[test]
fn nonconformant_tree_collects_all_findings() {
    let records = vec![
        root(),
        dir("data"),
        file("data/Raw.csv"),
        file("config.yaml"),
    ];
    let naming = naming();
    let tree = TreeView {
        records: &records,
        naming: &naming,
    };

    let evaluation = RuleEngine::new().evaluate(&tree, &RulePolicy::default());
    let failing_rules: Vec<&str> = evaluation
        .results
        .iter()
        .filter(|r| r.status == RuleStatus::Fail)
        .map(|r| r.rule.as_str())
        .collect();

    // `data` misses its ordinal and is lowercase; `data/Raw.csv` misses its
    // ordinal and has an uppercase stem.
    assert_eq!(
        failing_rules,
        vec![
            "dir-name-style",
            "ordinal-prefix",
            "file-name-style",
            "ordinal-prefix",
        ]
    );
}

#[test]
fn severity_off_removes_results_and_capability() {
    let mut records = conformant_records();
    records.retain(|r| r.path.as_str() != "config.yaml");
    let naming = naming();
    let tree = TreeView {
        records: &records,
        naming: &naming,
    };

    let mut policy = RulePolicy::default();
    policy
        .severity
        .insert("root-config".to_string(), SeverityLevel::Off);

    let evaluation = RuleEngine::new().evaluate(&tree, &policy);
    assert!(evaluation.results.iter().all(|r| r.rule != "root-config"));
    assert!(!evaluation.rules.contains(&"root-config".to_string()));
}

#[test]
fn severity_warn_downgrades_failures() {
    let mut records = conformant_records();
    records.retain(|r| r.path.as_str() != "config.yaml");
    let naming = naming();
    let tree = TreeView {
        records: &records,
        naming: &naming,
    };

    let mut policy = RulePolicy::default();
    policy
        .severity
        .insert("root-config".to_string(), SeverityLevel::Warn);

    let evaluation = RuleEngine::new().evaluate(&tree, &policy);
    assert!(
        evaluation
            .results
            .iter()
            .all(|r| r.status != RuleStatus::Fail)
    );
    let warned: Vec<&str> = evaluation
        .results
        .iter()
        .filter(|r| r.status == RuleStatus::Warn)
        .map(|r| r.rule.as_str())
        .collect();
    assert_eq!(warned, vec!["root-config"]);
}

#[test]
fn allow_list_restricts_the_registry_and_deny_wins() {
    let records = conformant_records();
    let naming = naming();
    let tree = TreeView {
        records: &records,
        naming: &naming,
    };

    let policy = RulePolicy {
        allow: vec!["ordinal-*".to_string()],
        deny: vec!["ordinal-collision".to_string()],
        ..RulePolicy::default()
    };

    let evaluation = RuleEngine::new().evaluate(&tree, &policy);
    assert_eq!(evaluation.rules, vec!["ordinal-prefix".to_string()]);
    assert_eq!(evaluation.results.len(), 1);
}

#[test]
fn evaluating_twice_yields_identical_results() {
    let records = vec![
        root(),
        dir("01_Data"),
        file("01_Data/1_load.py"),
        file("01_Data/01_clean.py"),
        dir("02-analysis"),
    ];
    let naming = naming();
    let tree = TreeView {
        records: &records,
        naming: &naming,
    };

    let engine = RuleEngine::new();
    let first = engine.evaluate(&tree, &RulePolicy::default());
    let second = engine.evaluate(&tree, &RulePolicy::default());

    assert_eq!(first.results, second.results);
    assert_eq!(first.rules, second.rules);
}
