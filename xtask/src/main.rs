use anyhow::Context;
use camino::Utf8Path;
use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use fs_err as fs;

#[derive(Debug, Parser)]
#[command(name = "xtask", about = "Workspace helper tasks")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print schema identifiers used by projlint.
    PrintSchemas,
    /// Scaffold a small conformant analysis tree for demos and manual testing.
    Scaffold {
        #[arg(long, default_value = "demo-tree")]
        dest: Utf8PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::PrintSchemas => {
            println!("{}", projlint_types::schema::PROJLINT_REPORT_V1);
        }
        Command::Scaffold { dest } => {
            scaffold_tree(&dest)?;
            println!("scaffolded conformant tree at {dest}");
        }
    }
    Ok(())
}

/// Lay out a minimal tree that passes every builtin rule. Useful as a
/// starting point for new projects and as a target for `projlint check`.
fn scaffold_tree(dest: &Utf8Path) -> anyhow::Result<()> {
    for dir in ["01_Data", "02_Analysis", "03_Results"] {
        let path = dest.join(dir);
        fs::create_dir_all(&path).with_context(|| format!("create {path}"))?;
    }
    let files: &[(&str, &str)] = &[
        ("config.yaml", "seed: 42\n"),
        ("README.md", "# Demo analysis tree\n"),
        ("01_Data/01_raw.csv", "id,value\n"),
        ("02_Analysis/01_explore.py", "print(\"hello\")\n"),
        ("03_Results/01_summary.md", "# Summary\n"),
    ];
    for (rel, contents) in files {
        let path = dest.join(rel);
        fs::write(&path, contents).with_context(|| format!("write {path}"))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scaffold_creates_conformant_layout() {
        let temp = tempfile::tempdir().unwrap();
        let dest = Utf8PathBuf::from_path_buf(temp.path().join("tree")).unwrap();

        scaffold_tree(&dest).unwrap();

        assert!(dest.join("01_Data").is_dir());
        assert!(dest.join("02_Analysis").is_dir());
        assert!(dest.join("03_Results").is_dir());
        assert!(dest.join("config.yaml").is_file());
        assert!(dest.join("README.md").is_file());
        assert!(dest.join("01_Data/01_raw.csv").is_file());
        assert!(dest.join("02_Analysis/01_explore.py").is_file());
        assert!(dest.join("03_Results/01_summary.md").is_file());
    }

    #[test]
    fn test_scaffold_is_idempotent() {
        let temp = tempfile::tempdir().unwrap();
        let dest = Utf8PathBuf::from_path_buf(temp.path().join("tree")).unwrap();

        scaffold_tree(&dest).unwrap();
        scaffold_tree(&dest).unwrap();

        assert!(dest.join("config.yaml").is_file());
    }
}
