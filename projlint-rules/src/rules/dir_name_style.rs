use projlint_scan::is_capitalized_words;
use projlint_types::result::RuleStatus;

use crate::engine::{Rule, TreeView, Violation};

/// Directory stems use Capitalized_Words so directories stand apart from the
/// lowercase files they contain.
pub struct DirNameStyleRule;

impl Rule for DirNameStyleRule {
    fn id(&self) -> &'static str {
        "dir-name-style"
    }

    fn summary(&self) -> &'static str {
        "directory stems are Capitalized_Words"
    }

    fn default_severity(&self) -> RuleStatus {
        RuleStatus::Fail
    }

    fn evaluate(&self, tree: &TreeView<'_>) -> Vec<Violation> {
        let mut violations = Vec::new();
        for record in tree.records {
            if !record.is_dir() || tree.naming.is_exempt(record) {
                continue;
            }
            if is_capitalized_words(&record.name.stem) {
                continue;
            }
            let message = if record.name.stem.is_empty() {
                "directory name is only an ordinal; expected words after the prefix".to_string()
            } else {
                format!(
                    "directory stem `{}` is not Capitalized_Words",
                    record.name.stem
                )
            };
            violations.push(Violation::new(record.path.clone(), message));
        }
        violations
    }
}
