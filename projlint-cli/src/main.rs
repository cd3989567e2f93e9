mod config;
mod explain;

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use config::ConfigMerger;
use projlint_core::adapters::{FsTreeSource, FsWritePort};
use projlint_core::pipeline::{CheckError, run_check, write_report_artifacts};
use projlint_core::settings::CheckSettings;
use projlint_render::render_report_text;
use projlint_rules::builtin_rules;
use projlint_types::report::ReportToolInfo;
use projlint_types::result::RuleStatus;
use projlint_types::wire::ReportV1;
use std::process::ExitCode;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "projlint",
    version,
    about = "Convention checker for ordinal-prefixed data-analysis project trees."
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Check a project tree against the naming conventions.
    Check(CheckArgs),
    /// List all rules with their default severities.
    ListRules(ListRulesArgs),
    /// Explain what a rule checks, why, and how to fix findings.
    Explain(ExplainArgs),
}

#[derive(Debug, Parser)]
struct CheckArgs {
    /// Root of the tree to check (default: current directory).
    #[arg(default_value = ".")]
    root: Utf8PathBuf,

    /// Allowlist patterns for rule ids; if given, only matching rules run.
    #[arg(long)]
    allow: Vec<String>,

    /// Denylist patterns for rule ids.
    #[arg(long)]
    deny: Vec<String>,

    /// Per-rule severity override as rule=level (level: off, warn, fail).
    #[arg(long)]
    severity: Vec<String>,

    /// Glob pruned from the scan, matched against root-relative paths.
    #[arg(long)]
    exclude: Vec<String>,

    /// Scan dot-prefixed entries instead of skipping them.
    #[arg(long, default_value_t = false)]
    include_hidden: bool,

    /// Follow symbolic links into directories.
    #[arg(long, default_value_t = false)]
    follow_links: bool,

    /// Stem of the configuration file expected at the tree root.
    #[arg(long)]
    root_config: Option<String>,

    /// Output format for the report on stdout.
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Directory to write report.json and report.md into.
    #[arg(long)]
    report_dir: Option<Utf8PathBuf>,
}

#[derive(Debug, Parser)]
struct ListRulesArgs {
    /// Output format (text, json).
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,
}

#[derive(Debug, Parser)]
struct ExplainArgs {
    /// Rule id to explain (e.g., "ordinal-prefix").
    rule: String,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> ExitCode {
    // Logs go to stderr; stdout carries the report.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match real_main() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("projlint: {:#}", e);
            ExitCode::from(2)
        }
    }
}

fn real_main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Check(args) => cmd_check(args),
        Command::ListRules(args) => cmd_list_rules(args).map(|()| ExitCode::from(0)),
        Command::Explain(args) => cmd_explain(args).map(|()| ExitCode::from(0)),
    }
}

fn cmd_check(args: CheckArgs) -> anyhow::Result<ExitCode> {
    // Load config file and merge with CLI arguments
    let file_config = config::load_or_default(&args.root).context("load projlint.toml config")?;
    let cli_severity = config::parse_severity_overrides(&args.severity)?;
    let merged = ConfigMerger::new(file_config).merge_check_args(
        &args.allow,
        &args.deny,
        &cli_severity,
        &args.exclude,
        args.include_hidden,
        args.follow_links,
        args.root_config.as_deref(),
    );

    // Severity keys must name real rules; allow/deny patterns may match none.
    let known = projlint_rules::rule_ids();
    for rule in merged.severity.keys() {
        if !known.contains(&rule.as_str()) {
            anyhow::bail!(
                "unknown rule '{}' in severity override\n\nAvailable rules: {}",
                rule,
                known.join(", ")
            );
        }
    }

    debug!(
        "merged config: allow={:?}, deny={:?}, exclude={:?}, root_config={}",
        merged.allow, merged.deny, merged.exclude, merged.root_config
    );

    let settings = CheckSettings {
        root: args.root,
        allow: merged.allow,
        deny: merged.deny,
        severity: merged.severity,
        exclude: merged.exclude,
        include_hidden: merged.include_hidden,
        follow_links: merged.follow_links,
        root_config: merged.root_config,
        exempt: merged.exempt,
        report_dir: args.report_dir,
    };

    let source = FsTreeSource::from_settings(&settings)?;
    let outcome = match run_check(&settings, &source, tool_info()) {
        Ok(outcome) => outcome,
        Err(CheckError::InvalidRoot(e)) => {
            eprintln!("projlint: {}", e);
            return Ok(ExitCode::from(2));
        }
        Err(CheckError::Internal(e)) => return Err(e),
    };

    match args.format {
        OutputFormat::Text => print!("{}", render_report_text(&outcome.report)),
        OutputFormat::Json => {
            let wire = ReportV1::from(&outcome.report);
            println!("{}", serde_json::to_string_pretty(&wire)?);
        }
    }

    if let Some(out_dir) = &settings.report_dir {
        write_report_artifacts(&outcome.report, out_dir, &FsWritePort)?;
        info!("wrote report artifacts to {}", out_dir);
    }

    Ok(if outcome.failed {
        ExitCode::from(1)
    } else {
        ExitCode::from(0)
    })
}

fn tool_info() -> ReportToolInfo {
    ReportToolInfo {
        name: "projlint".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        commit: None,
    }
}

fn severity_label(status: RuleStatus) -> &'static str {
    match status {
        RuleStatus::Pass => "pass",
        RuleStatus::Warn => "warn",
        RuleStatus::Fail => "fail",
    }
}

fn cmd_list_rules(args: ListRulesArgs) -> anyhow::Result<()> {
    let rules = builtin_rules();
    match args.format {
        OutputFormat::Text => {
            println!("Available rules:\n");
            println!("  {:<24} {:<8} SUMMARY", "ID", "DEFAULT");
            println!("  {:<24} {:<8} -------", "--", "-------");
            for rule in &rules {
                println!(
                    "  {:<24} {:<8} {}",
                    rule.id(),
                    severity_label(rule.default_severity()),
                    rule.summary()
                );
            }
            println!();
            println!("Use 'projlint explain <id>' for details.");
        }
        OutputFormat::Json => {
            let rules: Vec<_> = rules
                .iter()
                .map(|r| {
                    serde_json::json!({
                        "id": r.id(),
                        "default_severity": severity_label(r.default_severity()),
                        "summary": r.summary(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&rules)?);
        }
    }
    Ok(())
}

fn cmd_explain(args: ExplainArgs) -> anyhow::Result<()> {
    let Some(guide) = explain::lookup_rule(&args.rule) else {
        let available = explain::list_rule_keys().join(", ");
        anyhow::bail!("Unknown rule: '{}'\n\nAvailable rules: {}", args.rule, available);
    };

    let default = builtin_rules()
        .into_iter()
        .find(|r| r.id() == guide.id)
        .map(|r| severity_label(r.default_severity()))
        .unwrap_or("fail");

    // Title and basic info
    println!("================================================================================");
    println!("RULE: {}", guide.title);
    println!("================================================================================");
    println!();
    println!("Id:       {}", guide.id);
    println!("Default:  {}", default);
    println!();

    // Description
    println!("DESCRIPTION");
    println!("--------------------------------------------------------------------------------");
    println!("{}", guide.description);
    println!();

    // Severity rationale
    println!("DEFAULT SEVERITY");
    println!("--------------------------------------------------------------------------------");
    println!("{}", guide.rationale);
    println!();

    // Remediation guidance
    println!("REMEDIATION GUIDANCE");
    println!("--------------------------------------------------------------------------------");
    println!("{}", guide.remediation);
    println!();

    Ok(())
}
