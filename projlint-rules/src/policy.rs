use std::collections::BTreeMap;

use anyhow::Context;
use glob::Pattern;
use projlint_types::record::FileRecord;
use projlint_types::result::RuleStatus;
use serde::Deserialize;

use crate::engine::Rule;

/// Stem of the configuration file expected at the tree root.
pub const DEFAULT_ROOT_CONFIG: &str = "config";

/// Names exempt from the naming rules unless overridden.
pub const DEFAULT_EXEMPT: &[&str] = &["README*", "LICENSE*", "CHANGELOG*", "projlint.toml"];

/// Naming knobs the rules consult: which file counts as the root config and
/// which names sit outside the naming conventions entirely.
#[derive(Debug, Clone)]
pub struct NamingConfig {
    root_config: String,
    exempt: Vec<Pattern>,
}

impl NamingConfig {
    pub fn new(root_config: &str, exempt: &[String]) -> anyhow::Result<Self> {
        let exempt = exempt
            .iter()
            .map(|raw| {
                Pattern::new(raw).with_context(|| format!("invalid exempt pattern `{raw}`"))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;
        Ok(Self {
            root_config: root_config.to_string(),
            exempt,
        })
    }

    pub fn root_config(&self) -> &str {
        &self.root_config
    }

    /// The configuration file the `root-config` rule looks for: a file
    /// directly under the root whose name, extension aside, equals the
    /// configured stem.
    pub fn is_root_config(&self, record: &FileRecord) -> bool {
        record.depth == 1
            && !record.is_dir()
            && projlint_scan::file_stem(record.file_name()) == self.root_config
    }

    /// Whether the naming rules should leave a record alone: the root
    /// itself, the root configuration file, and entries whose name matches
    /// an exempt pattern at any depth.
    pub fn is_exempt(&self, record: &FileRecord) -> bool {
        if record.is_root() || self.is_root_config(record) {
            return true;
        }
        let name = record.file_name();
        self.exempt.iter().any(|p| p.matches(name))
    }
}

/// Severity a rule runs at. `Off` removes the rule from the run entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeverityLevel {
    Off,
    Warn,
    Fail,
}

impl SeverityLevel {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "off" => Some(SeverityLevel::Off),
            "warn" => Some(SeverityLevel::Warn),
            "fail" => Some(SeverityLevel::Fail),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SeverityLevel::Off => "off",
            SeverityLevel::Warn => "warn",
            SeverityLevel::Fail => "fail",
        }
    }
}

/// Which rules run, and at what severity.
#[derive(Debug, Clone, Default)]
pub struct RulePolicy {
    /// Rule-id patterns to run; empty means all.
    pub allow: Vec<String>,

    /// Rule-id patterns to skip; deny wins over allow.
    pub deny: Vec<String>,

    /// Per-rule severity overrides.
    pub severity: BTreeMap<String, SeverityLevel>,
}

impl RulePolicy {
    pub fn selects(&self, id: &str) -> bool {
        if self.deny.iter().any(|pat| glob_match(pat, id)) {
            return false;
        }
        if self.allow.is_empty() {
            return true;
        }
        self.allow.iter().any(|pat| glob_match(pat, id))
    }

    /// Severity this rule's violations carry, or `None` when the rule is
    /// switched off.
    pub fn effective_severity(&self, rule: &dyn Rule) -> Option<RuleStatus> {
        match self.severity.get(rule.id()) {
            Some(SeverityLevel::Off) => None,
            Some(SeverityLevel::Warn) => Some(RuleStatus::Warn),
            Some(SeverityLevel::Fail) => Some(RuleStatus::Fail),
            None => Some(rule.default_severity()),
        }
    }
}

/// Minimal `*`/`?` matcher for rule-id patterns. Rule ids are flat, so there
/// is no separator handling here.
pub fn glob_match(pat: &str, text: &str) -> bool {
    let p = pat.as_bytes();
    let t = text.as_bytes();
    let mut dp = vec![vec![false; t.len() + 1]; p.len() + 1];
    dp[0][0] = true;

    for i in 1..=p.len() {
        if p[i - 1] == b'*' {
            dp[i][0] = dp[i - 1][0];
        }
    }

    for i in 1..=p.len() {
        for j in 1..=t.len() {
            dp[i][j] = match p[i - 1] {
                b'*' => dp[i - 1][j] || dp[i][j - 1],
                b'?' => dp[i - 1][j - 1],
                c => dp[i - 1][j - 1] && c == t[j - 1],
            };
        }
    }

    dp[p.len()][t.len()]
}
