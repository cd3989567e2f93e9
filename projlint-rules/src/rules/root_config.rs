use projlint_types::result::RuleStatus;

use crate::engine::{Rule, TreeView, Violation};

/// Every project tree is expected to carry a configuration file directly
/// under its root, so paths and parameters live in one known place.
pub struct RootConfigRule;

impl Rule for RootConfigRule {
    fn id(&self) -> &'static str {
        "root-config"
    }

    fn summary(&self) -> &'static str {
        "a configuration file exists at the tree root"
    }

    fn default_severity(&self) -> RuleStatus {
        RuleStatus::Fail
    }

    fn evaluate(&self, tree: &TreeView<'_>) -> Vec<Violation> {
        if tree.records.iter().any(|r| tree.naming.is_root_config(r)) {
            return vec![];
        }
        vec![Violation::new(
            ".",
            format!("no `{}.*` file at the tree root", tree.naming.root_config()),
        )]
    }
}
