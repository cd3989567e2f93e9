use projlint_scan::is_lowercase;
use projlint_types::result::RuleStatus;

use crate::engine::{Rule, TreeView, Violation};

/// File stems stay lowercase; the extension is not the stem and may be
/// whatever the format dictates.
pub struct FileNameStyleRule;

impl Rule for FileNameStyleRule {
    fn id(&self) -> &'static str {
        "file-name-style"
    }

    fn summary(&self) -> &'static str {
        "file stems are lowercase"
    }

    fn default_severity(&self) -> RuleStatus {
        RuleStatus::Fail
    }

    fn evaluate(&self, tree: &TreeView<'_>) -> Vec<Violation> {
        tree.records
            .iter()
            .filter(|r| !r.is_dir() && !tree.naming.is_exempt(r))
            .filter(|r| !is_lowercase(&r.name.stem))
            .map(|r| {
                Violation::new(
                    r.path.clone(),
                    format!("file stem `{}` contains uppercase characters", r.name.stem),
                )
            })
            .collect()
    }
}
