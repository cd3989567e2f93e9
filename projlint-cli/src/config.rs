//! Configuration file loading for projlint.
//!
//! Discovers and loads `projlint.toml` from the scanned root.
//! Merges config file settings with CLI arguments (CLI takes precedence).

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use fs_err as fs;
use projlint_rules::{DEFAULT_EXEMPT, DEFAULT_ROOT_CONFIG, SeverityLevel};
use serde::Deserialize;
use std::collections::BTreeMap;
use tracing::debug;

/// The config file name to search for.
pub const CONFIG_FILE_NAME: &str = "projlint.toml";

/// Top-level configuration from projlint.toml.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProjlintConfig {
    /// Rule selection (allow/deny lists).
    pub rules: RulesConfig,

    /// Per-rule severity overrides, keyed by rule id.
    pub severity: BTreeMap<String, SeverityLevel>,

    /// Scanner settings.
    pub scan: ScanConfig,

    /// Naming convention knobs.
    pub naming: NamingSection,
}

/// Rules section of the config.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Allowlist patterns for rule ids.
    /// If non-empty, only allowlisted rules run.
    pub allow: Vec<String>,

    /// Denylist patterns for rule ids.
    pub deny: Vec<String>,
}

/// Scan section of the config.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Globs pruned from the scan, matched against root-relative paths.
    pub exclude: Vec<String>,

    /// Record dot-prefixed entries instead of pruning them.
    pub include_hidden: bool,

    /// Follow symbolic links into directories.
    pub follow_links: bool,
}

/// Naming section of the config.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NamingSection {
    /// Stem of the configuration file expected at the tree root.
    pub root_config: Option<String>,

    /// Name patterns exempt from the naming rules.
    pub exempt: Option<Vec<String>>,
}

/// Discover the projlint.toml config file.
///
/// Searches for `projlint.toml` in the scanned root directory.
/// Returns `None` if no config file is found.
pub fn discover_config(root: &Utf8Path) -> Option<Utf8PathBuf> {
    let config_path = root.join(CONFIG_FILE_NAME);
    if config_path.exists() {
        debug!("found config file at {}", config_path);
        Some(config_path)
    } else {
        debug!("no config file found at {}", config_path);
        None
    }
}

/// Load and parse a projlint.toml config file.
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_config(path: &Utf8Path) -> anyhow::Result<ProjlintConfig> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read config file {}", path))?;
    parse_config(&contents).with_context(|| format!("parse config file {}", path))
}

/// Parse a config file from a string.
pub fn parse_config(contents: &str) -> anyhow::Result<ProjlintConfig> {
    let config: ProjlintConfig = toml::from_str(contents).context("invalid TOML")?;
    Ok(config)
}

/// Load config from the scanned root, or return default if not found.
pub fn load_or_default(root: &Utf8Path) -> anyhow::Result<ProjlintConfig> {
    match discover_config(root) {
        Some(path) => load_config(&path),
        None => Ok(ProjlintConfig::default()),
    }
}

/// Merged configuration combining config file and CLI arguments.
///
/// CLI arguments take precedence over config file settings.
#[derive(Debug, Clone, Default)]
pub struct MergedConfig {
    /// Allow patterns (from config file, extended by CLI).
    pub allow: Vec<String>,

    /// Deny patterns (from config file, extended by CLI).
    pub deny: Vec<String>,

    /// Severity overrides (config file overlaid by CLI).
    pub severity: BTreeMap<String, SeverityLevel>,

    /// Exclude globs (from config file, extended by CLI).
    pub exclude: Vec<String>,

    /// Whether hidden entries are scanned.
    pub include_hidden: bool,

    /// Whether symbolic links are followed.
    pub follow_links: bool,

    /// Stem of the root configuration file.
    pub root_config: String,

    /// Name patterns exempt from the naming rules.
    pub exempt: Vec<String>,
}

/// Builder for merging config file with CLI arguments.
pub struct ConfigMerger {
    config: ProjlintConfig,
}

impl ConfigMerger {
    /// Create a new merger from a loaded config.
    pub fn new(config: ProjlintConfig) -> Self {
        Self { config }
    }

    /// Merge with check command CLI arguments.
    ///
    /// CLI `allow`, `deny`, and `exclude` lists extend the config file
    /// lists; CLI severity entries override config file entries rule by
    /// rule; boolean flags win when set on either side.
    pub fn merge_check_args(
        self,
        cli_allow: &[String],
        cli_deny: &[String],
        cli_severity: &BTreeMap<String, SeverityLevel>,
        cli_exclude: &[String],
        cli_include_hidden: bool,
        cli_follow_links: bool,
        cli_root_config: Option<&str>,
    ) -> MergedConfig {
        let mut allow = self.config.rules.allow.clone();
        let mut deny = self.config.rules.deny.clone();
        let mut exclude = self.config.scan.exclude.clone();

        // CLI extends the config file lists
        for pattern in cli_allow {
            if !allow.contains(pattern) {
                allow.push(pattern.clone());
            }
        }
        for pattern in cli_deny {
            if !deny.contains(pattern) {
                deny.push(pattern.clone());
            }
        }
        for pattern in cli_exclude {
            if !exclude.contains(pattern) {
                exclude.push(pattern.clone());
            }
        }

        let mut severity = self.config.severity.clone();
        for (rule, level) in cli_severity {
            severity.insert(rule.clone(), *level);
        }

        let root_config = cli_root_config
            .map(str::to_string)
            .or(self.config.naming.root_config)
            .unwrap_or_else(|| DEFAULT_ROOT_CONFIG.to_string());
        let exempt = self
            .config
            .naming
            .exempt
            .unwrap_or_else(|| DEFAULT_EXEMPT.iter().map(|s| s.to_string()).collect());

        MergedConfig {
            allow,
            deny,
            severity,
            exclude,
            include_hidden: cli_include_hidden || self.config.scan.include_hidden,
            follow_links: cli_follow_links || self.config.scan.follow_links,
            root_config,
            exempt,
        }
    }
}

/// Parse CLI severity overrides from `rule=level` strings.
pub fn parse_severity_overrides(
    entries: &[String],
) -> anyhow::Result<BTreeMap<String, SeverityLevel>> {
    let mut out = BTreeMap::new();
    for entry in entries {
        let mut parts = entry.splitn(2, '=');
        let rule = parts
            .next()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| anyhow::anyhow!("invalid severity '{}': missing rule id", entry))?;
        let level = parts
            .next()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| anyhow::anyhow!("invalid severity '{}': missing level", entry))?;
        let level = SeverityLevel::parse(level).ok_or_else(|| {
            anyhow::anyhow!(
                "invalid severity level '{}' (expected off, warn, or fail)",
                level
            )
        })?;
        out.insert(rule.to_string(), level);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_example_config() {
        let contents = r#"
[rules]
allow = ["ordinal-*", "root-config"]
deny = ["ordinal-collision"]

[severity]
"separator-consistency" = "off"
"ordinal-prefix" = "warn"

[scan]
exclude = ["target", "*.tmp"]
include_hidden = true

[naming]
root_config = "settings"
exempt = ["README*", "NOTES*"]
"#;

        let config = parse_config(contents).unwrap();
        assert_eq!(config.rules.allow.len(), 2);
        assert_eq!(config.rules.deny, vec!["ordinal-collision"]);
        assert_eq!(
            config.severity.get("separator-consistency"),
            Some(&SeverityLevel::Off)
        );
        assert_eq!(
            config.severity.get("ordinal-prefix"),
            Some(&SeverityLevel::Warn)
        );
        assert_eq!(config.scan.exclude, vec!["target", "*.tmp"]);
        assert!(config.scan.include_hidden);
        assert!(!config.scan.follow_links);
        assert_eq!(config.naming.root_config.as_deref(), Some("settings"));
        assert_eq!(
            config.naming.exempt,
            Some(vec!["README*".to_string(), "NOTES*".to_string()])
        );
    }

    #[test]
    fn test_parse_minimal_config() {
        let contents = r#"
[rules]
allow = ["ordinal-*"]
"#;

        let config = parse_config(contents).unwrap();
        assert_eq!(config.rules.allow, vec!["ordinal-*"]);
        assert!(config.rules.deny.is_empty());
        // Defaults
        assert!(config.severity.is_empty());
        assert!(!config.scan.include_hidden);
        assert!(config.naming.root_config.is_none());
    }

    #[test]
    fn test_parse_empty_config() {
        let contents = "";
        let config = parse_config(contents).unwrap();
        assert!(config.rules.allow.is_empty());
        assert!(config.rules.deny.is_empty());
        assert!(config.severity.is_empty());
    }

    #[test]
    fn test_parse_rejects_unknown_severity_level() {
        let contents = r#"
[severity]
"root-config" = "error"
"#;
        assert!(parse_config(contents).is_err());
    }

    #[test]
    fn test_merge_check_args_cli_extends_lists() {
        let config = ProjlintConfig {
            rules: RulesConfig {
                allow: vec!["ordinal-*".to_string()],
                deny: vec!["separator-consistency".to_string()],
            },
            scan: ScanConfig {
                exclude: vec!["target".to_string()],
                ..Default::default()
            },
            ..Default::default()
        };

        let cli_allow = vec!["root-config".to_string()];
        let cli_deny = vec!["separator-consistency".to_string()];
        let cli_exclude = vec!["*.tmp".to_string()];

        let merged = ConfigMerger::new(config).merge_check_args(
            &cli_allow,
            &cli_deny,
            &BTreeMap::new(),
            &cli_exclude,
            false,
            false,
            None,
        );

        assert_eq!(merged.allow, vec!["ordinal-*", "root-config"]);
        // Duplicate CLI entries are not repeated.
        assert_eq!(merged.deny, vec!["separator-consistency"]);
        assert_eq!(merged.exclude, vec!["target", "*.tmp"]);
    }

    #[test]
    fn test_merge_cli_severity_overrides_config() {
        let mut config = ProjlintConfig::default();
        config
            .severity
            .insert("root-config".to_string(), SeverityLevel::Warn);
        config
            .severity
            .insert("ordinal-prefix".to_string(), SeverityLevel::Off);

        let mut cli = BTreeMap::new();
        cli.insert("root-config".to_string(), SeverityLevel::Fail);

        let merged = ConfigMerger::new(config).merge_check_args(
            &[],
            &[],
            &cli,
            &[],
            false,
            false,
            None,
        );

        assert_eq!(
            merged.severity.get("root-config"),
            Some(&SeverityLevel::Fail)
        );
        assert_eq!(
            merged.severity.get("ordinal-prefix"),
            Some(&SeverityLevel::Off)
        );
    }

    #[test]
    fn test_merge_boolean_flags_or_together() {
        let config = ProjlintConfig {
            scan: ScanConfig {
                include_hidden: true,
                ..Default::default()
            },
            ..Default::default()
        };

        let merged = ConfigMerger::new(config).merge_check_args(
            &[],
            &[],
            &BTreeMap::new(),
            &[],
            false,
            true,
            None,
        );

        assert!(merged.include_hidden);
        assert!(merged.follow_links);
    }

    #[test]
    fn test_merge_root_config_precedence() {
        // CLI wins over config file.
        let config = ProjlintConfig {
            naming: NamingSection {
                root_config: Some("settings".to_string()),
                exempt: None,
            },
            ..Default::default()
        };
        let merged = ConfigMerger::new(config).merge_check_args(
            &[],
            &[],
            &BTreeMap::new(),
            &[],
            false,
            false,
            Some("params"),
        );
        assert_eq!(merged.root_config, "params");

        // Config file wins over the built-in default.
        let config = ProjlintConfig {
            naming: NamingSection {
                root_config: Some("settings".to_string()),
                exempt: None,
            },
            ..Default::default()
        };
        let merged = ConfigMerger::new(config).merge_check_args(
            &[],
            &[],
            &BTreeMap::new(),
            &[],
            false,
            false,
            None,
        );
        assert_eq!(merged.root_config, "settings");

        // Built-in default otherwise.
        let merged = ConfigMerger::new(ProjlintConfig::default()).merge_check_args(
            &[],
            &[],
            &BTreeMap::new(),
            &[],
            false,
            false,
            None,
        );
        assert_eq!(merged.root_config, DEFAULT_ROOT_CONFIG);
    }

    #[test]
    fn test_merge_exempt_defaults_when_unset() {
        let merged = ConfigMerger::new(ProjlintConfig::default()).merge_check_args(
            &[],
            &[],
            &BTreeMap::new(),
            &[],
            false,
            false,
            None,
        );
        assert_eq!(
            merged.exempt,
            DEFAULT_EXEMPT
                .iter()
                .map(|s| s.to_string())
                .collect::<Vec<_>>()
        );

        let config = ProjlintConfig {
            naming: NamingSection {
                root_config: None,
                exempt: Some(vec!["NOTES*".to_string()]),
            },
            ..Default::default()
        };
        let merged = ConfigMerger::new(config).merge_check_args(
            &[],
            &[],
            &BTreeMap::new(),
            &[],
            false,
            false,
            None,
        );
        assert_eq!(merged.exempt, vec!["NOTES*"]);
    }

    #[test]
    fn test_parse_severity_overrides_valid() {
        let entries = vec![
            "root-config=off".to_string(),
            "ordinal-prefix=warn".to_string(),
        ];
        let parsed = parse_severity_overrides(&entries).expect("parse overrides");
        assert_eq!(parsed.get("root-config"), Some(&SeverityLevel::Off));
        assert_eq!(parsed.get("ordinal-prefix"), Some(&SeverityLevel::Warn));
    }

    #[test]
    fn test_parse_severity_overrides_missing_rule() {
        let entries = vec!["=off".to_string()];
        let err = parse_severity_overrides(&entries).expect_err("missing rule");
        assert!(err.to_string().contains("missing rule id"));
    }

    #[test]
    fn test_parse_severity_overrides_missing_level() {
        let entries = vec!["root-config".to_string()];
        let err = parse_severity_overrides(&entries).expect_err("missing level");
        assert!(err.to_string().contains("missing level"));
    }

    #[test]
    fn test_parse_severity_overrides_bad_level() {
        let entries = vec!["root-config=error".to_string()];
        let err = parse_severity_overrides(&entries).expect_err("bad level");
        assert!(err.to_string().contains("invalid severity level"));
    }

    #[test]
    fn test_discover_config_some_and_none() {
        let temp = TempDir::new().expect("temp dir");
        let root = Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).expect("utf8");
        assert!(discover_config(&root).is_none());

        std::fs::write(root.join(CONFIG_FILE_NAME), "").expect("write config");
        assert!(discover_config(&root).is_some());
    }

    #[test]
    fn test_load_or_default_returns_default_when_missing() {
        let temp = TempDir::new().expect("temp dir");
        let root = Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).expect("utf8");
        let cfg = load_or_default(&root).expect("load default");
        assert!(cfg.rules.allow.is_empty());
        assert!(cfg.rules.deny.is_empty());
        assert!(cfg.naming.root_config.is_none());
    }
}
