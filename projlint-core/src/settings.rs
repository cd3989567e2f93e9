//! Clap-free settings for the check pipeline.

use std::collections::BTreeMap;

use camino::Utf8PathBuf;
use projlint_rules::{DEFAULT_EXEMPT, DEFAULT_ROOT_CONFIG, SeverityLevel};

/// Settings for the check pipeline.
#[derive(Debug, Clone)]
pub struct CheckSettings {
    pub root: Utf8PathBuf,

    // Policy
    pub allow: Vec<String>,
    pub deny: Vec<String>,
    pub severity: BTreeMap<String, SeverityLevel>,

    // Scan
    pub exclude: Vec<String>,
    pub include_hidden: bool,
    pub follow_links: bool,

    // Naming
    pub root_config: String,
    pub exempt: Vec<String>,

    // Artifacts
    pub report_dir: Option<Utf8PathBuf>,
}

impl Default for CheckSettings {
    fn default() -> Self {
        Self {
            root: Utf8PathBuf::from("."),
            allow: Vec::new(),
            deny: Vec::new(),
            severity: BTreeMap::new(),
            exclude: Vec::new(),
            include_hidden: false,
            follow_links: false,
            root_config: DEFAULT_ROOT_CONFIG.to_string(),
            exempt: DEFAULT_EXEMPT.iter().map(|s| s.to_string()).collect(),
            report_dir: None,
        }
    }
}
