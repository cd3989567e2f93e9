use std::collections::BTreeMap;

use projlint_types::record::FileRecord;
use projlint_types::result::RuleStatus;

use crate::engine::{Rule, TreeView, Violation};

/// Two siblings with the same ordinal value order ambiguously; `1_load` and
/// `01_clean` collide even though their digit strings differ.
pub struct OrdinalCollisionRule;

impl Rule for OrdinalCollisionRule {
    fn id(&self) -> &'static str {
        "ordinal-collision"
    }

    fn summary(&self) -> &'static str {
        "sibling entries do not share an ordinal value"
    }

    fn default_severity(&self) -> RuleStatus {
        RuleStatus::Warn
    }

    fn evaluate(&self, tree: &TreeView<'_>) -> Vec<Violation> {
        let mut groups: BTreeMap<(String, u64), Vec<&FileRecord>> = BTreeMap::new();
        for record in tree.records {
            let Some(ordinal) = &record.name.ordinal else {
                continue;
            };
            let parent = record
                .path
                .parent()
                .map(|p| p.to_string())
                .unwrap_or_default();
            groups
                .entry((parent, ordinal.value))
                .or_default()
                .push(record);
        }

        let mut violations = Vec::new();
        for ((_, value), members) in &groups {
            if members.len() < 2 {
                continue;
            }
            for record in members {
                violations.push(Violation::new(
                    record.path.clone(),
                    format!(
                        "ordinal {} is shared by {} sibling entries",
                        value,
                        members.len()
                    ),
                ));
            }
        }
        violations
    }
}
