use projlint_types::result::RuleStatus;

use crate::engine::{Rule, TreeView, Violation};

/// Ordinal prefixes make the on-disk order of a pipeline explicit instead of
/// leaving it to alphabetical accident.
pub struct OrdinalPrefixRule;

impl Rule for OrdinalPrefixRule {
    fn id(&self) -> &'static str {
        "ordinal-prefix"
    }

    fn summary(&self) -> &'static str {
        "files and directories carry a leading ordinal prefix"
    }

    fn default_severity(&self) -> RuleStatus {
        RuleStatus::Fail
    }

    fn evaluate(&self, tree: &TreeView<'_>) -> Vec<Violation> {
        tree.records
            .iter()
            .filter(|r| !tree.naming.is_exempt(r))
            .filter(|r| r.name.ordinal.is_none())
            .map(|r| Violation::new(r.path.clone(), "name has no leading ordinal prefix"))
            .collect()
    }
}
