use std::collections::{BTreeMap, BTreeSet};

use projlint_scan::{Separator, file_stem, separators_in};
use projlint_types::record::FileRecord;
use projlint_types::result::RuleStatus;

use crate::engine::{Rule, TreeView, Violation};

/// One tree, one word separator. The majority separator across the tree sets
/// the convention; entries using any other kind are flagged.
pub struct SeparatorConsistencyRule;

impl SeparatorConsistencyRule {
    /// The part of a name whose separators count: the whole name for
    /// directories, the name without its extension for files.
    fn scope(record: &FileRecord) -> &str {
        if record.is_dir() {
            record.file_name()
        } else {
            file_stem(record.file_name())
        }
    }
}

impl Rule for SeparatorConsistencyRule {
    fn id(&self) -> &'static str {
        "separator-consistency"
    }

    fn summary(&self) -> &'static str {
        "the tree sticks to one word-separator convention"
    }

    fn default_severity(&self) -> RuleStatus {
        RuleStatus::Warn
    }

    fn evaluate(&self, tree: &TreeView<'_>) -> Vec<Violation> {
        let mut counts: BTreeMap<Separator, usize> = BTreeMap::new();
        let mut uses: Vec<(&FileRecord, BTreeSet<Separator>)> = Vec::new();

        for record in tree.records {
            if tree.naming.is_exempt(record) {
                continue;
            }
            let seps = separators_in(Self::scope(record));
            if seps.is_empty() {
                continue;
            }
            for sep in &seps {
                *counts.entry(*sep).or_default() += 1;
            }
            uses.push((record, seps));
        }

        // Majority by entry count; ties go to the smaller Separator variant.
        let mut majority: Option<(Separator, usize)> = None;
        for (sep, count) in &counts {
            match majority {
                Some((_, best)) if *count <= best => {}
                _ => majority = Some((*sep, *count)),
            }
        }
        let Some((majority, _)) = majority else {
            return vec![];
        };

        let mut violations = Vec::new();
        for (record, seps) in uses {
            let offending: Vec<&'static str> = seps
                .iter()
                .filter(|s| **s != majority)
                .map(|s| s.label())
                .collect();
            if offending.is_empty() {
                continue;
            }
            violations.push(Violation::new(
                record.path.clone(),
                format!(
                    "uses {} separators; tree convention is {}",
                    offending.join(" and "),
                    majority.label()
                ),
            ));
        }
        violations
    }
}
