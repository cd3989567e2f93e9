//! Rule engine and built-in convention rules.
//!
//! Rules are total: evaluating one never fails, it only yields violations.
//! Severity is policy, not a property of the rule, so the engine decides
//! whether a violation warns or fails and whether a rule runs at all. A rule
//! that ran and found nothing leaves a `pass` result behind; a green report
//! proves which rules were actually evaluated.

mod engine;
mod policy;
mod rules;

pub use engine::{Evaluation, Rule, RuleEngine, TreeView, Violation, result_fingerprint};
pub use policy::{
    DEFAULT_EXEMPT, DEFAULT_ROOT_CONFIG, NamingConfig, RulePolicy, SeverityLevel, glob_match,
};
pub use rules::{builtin_rules, rule_ids};

#[cfg(test)]
pub(crate) mod testutil;
