use camino::Utf8PathBuf;
use projlint_types::record::FileRecord;
use projlint_types::result::{RuleResult, RuleStatus};
use sha2::{Digest, Sha256};
use tracing::debug;

use crate::policy::{NamingConfig, RulePolicy};

/// Read-only view of one scanned tree, shared by every rule.
pub struct TreeView<'a> {
    /// Records in scan order; the first is the depth-0 root.
    pub records: &'a [FileRecord],
    pub naming: &'a NamingConfig,
}

/// One finding of one rule. Severity is attached later by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub path: Utf8PathBuf,
    pub message: String,
}

impl Violation {
    pub fn new(path: impl Into<Utf8PathBuf>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// A single convention check.
///
/// `evaluate` is total: a rule reports violations, it does not fail.
/// Anything that prevents the tree from being evaluated at all belongs to
/// the scanner, not here.
pub trait Rule {
    /// Stable kebab-case identifier.
    fn id(&self) -> &'static str;

    /// One-line summary for listings.
    fn summary(&self) -> &'static str;

    fn default_severity(&self) -> RuleStatus;

    fn evaluate(&self, tree: &TreeView<'_>) -> Vec<Violation>;
}

/// Runs a fixed set of rules over a tree under a [`RulePolicy`].
pub struct RuleEngine {
    rules: Vec<Box<dyn Rule>>,
}

/// Everything one engine run produced.
#[derive(Debug, Clone, Default)]
pub struct Evaluation {
    /// Results ordered by (path, rule id, message).
    pub results: Vec<RuleResult>,

    /// Ids of the rules that actually ran, in registry order.
    pub rules: Vec<String>,
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleEngine {
    /// Engine over the built-in registry.
    pub fn new() -> Self {
        Self::with_rules(crate::rules::builtin_rules())
    }

    pub fn with_rules(rules: Vec<Box<dyn Rule>>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[Box<dyn Rule>] {
        &self.rules
    }

    pub fn evaluate(&self, tree: &TreeView<'_>, policy: &RulePolicy) -> Evaluation {
        let mut evaluation = Evaluation::default();

        for rule in &self.rules {
            if !policy.selects(rule.id()) {
                debug!(rule = rule.id(), "rule deselected by policy");
                continue;
            }
            let Some(severity) = policy.effective_severity(rule.as_ref()) else {
                debug!(rule = rule.id(), "rule switched off");
                continue;
            };
            evaluation.rules.push(rule.id().to_string());

            let violations = rule.evaluate(tree);
            debug!(rule = rule.id(), violations = violations.len(), "rule evaluated");

            // A rule that ran and found nothing still leaves a mark, so a
            // green report proves which rules were evaluated.
            if violations.is_empty() {
                evaluation.results.push(RuleResult {
                    rule: rule.id().to_string(),
                    path: Utf8PathBuf::from("."),
                    status: RuleStatus::Pass,
                    message: "no violations".to_string(),
                    fingerprint: Some(result_fingerprint(rule.id(), ".")),
                });
                continue;
            }

            for violation in violations {
                let fingerprint = result_fingerprint(rule.id(), violation.path.as_str());
                evaluation.results.push(RuleResult {
                    rule: rule.id().to_string(),
                    path: violation.path,
                    status: severity,
                    message: violation.message,
                    fingerprint: Some(fingerprint),
                });
            }
        }

        // Identical trees must yield identical reports.
        evaluation.results.sort_by(|a, b| {
            (a.path.as_str(), a.rule.as_str(), a.message.as_str()).cmp(&(
                b.path.as_str(),
                b.rule.as_str(),
                b.message.as_str(),
            ))
        });

        evaluation
    }
}

/// Stable identity of a finding across runs of the same tree.
pub fn result_fingerprint(rule: &str, path: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(rule.as_bytes());
    hasher.update(b"|");
    hasher.update(path.as_bytes());
    hex::encode(hasher.finalize())
}
