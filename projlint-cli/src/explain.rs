//! Rule explanation module for the `projlint explain` command.
//!
//! Provides detailed explanations of each rule including:
//! - What the rule checks
//! - Why it defaults to its severity
//! - Remediation guidance

/// Long-form guide for one rule.
#[derive(Debug, Clone)]
pub struct RuleGuide {
    /// Rule id, identical to the engine's (e.g., "ordinal-prefix").
    pub id: &'static str,
    /// Human-readable title.
    pub title: &'static str,
    /// Detailed description of what the rule checks.
    pub description: &'static str,
    /// Why the rule defaults to its severity.
    pub rationale: &'static str,
    /// Remediation guidance for fixing or silencing findings.
    pub remediation: &'static str,
}

/// Registry of all rule guides, in engine registry order.
pub static RULE_GUIDE: &[RuleGuide] = &[
    // 1) Root configuration file
    RuleGuide {
        id: "root-config",
        title: "Root Configuration File",
        description: r#"Checks that a configuration file sits directly under the scanned root.

An analysis tree is reproducible only if its parameters travel with it. The
rule accepts any file whose name, extension aside, equals the configured stem
(default: `config`), so `config.yaml`, `config.toml`, and `config.json` all
qualify.

Only files directly under the root count. A `config.yaml` buried inside a
subdirectory does not satisfy the rule, and a directory named `config` does
not either."#,
        rationale: r#"This rule defaults to FAIL because:
- A tree without its parameters cannot be re-run as archived
- Collaborators look for the run configuration at the top level first
- Every naming finding is cosmetic next to a missing config"#,
        remediation: r#"Add a configuration file at the tree root:

    touch config.yaml

Any extension works; the stem is what counts. If your project keeps its
parameters under a different name, point the rule at it:

    projlint check --root-config settings

or set `naming.root_config` in projlint.toml."#,
    },
    // 2) Ordinal prefix
    RuleGuide {
        id: "ordinal-prefix",
        title: "Ordinal Prefix",
        description: r#"Checks that every directory and file name starts with an ordinal prefix:
one or more ASCII digits followed by `_`, `-`, or `.`.

Examples that carry a prefix:

    01_Data/
    02-Analysis/
    10.Archive/
    01_load_data.py

The prefix encodes execution order directly in the listing: a plain `ls`
shows the steps of the analysis in the order they are meant to run.

For files the extension is set aside first, so `01.csv` counts as prefixed
(digits `01`, separator `.`, empty stem). Names matching the exempt patterns
(README*, LICENSE*, CHANGELOG*, projlint.toml) are not checked at any depth;
neither is the root configuration file."#,
        rationale: r#"This rule defaults to FAIL because:
- Unprefixed entries sort arbitrarily among their prefixed siblings
- The step order stops being visible exactly where it is broken
- Renaming one entry now is cheaper than reconstructing the order later"#,
        remediation: r#"Rename the entry to start with its position in the pipeline:

    mv notes.txt 03_notes.txt
    mv Figures 04_Figures

Zero-padding keeps lexicographic and numeric order aligned (`01` sorts
before `10`; unpadded `1` and `10` interleave). If a name genuinely sits
outside the pipeline, add it to `naming.exempt` in projlint.toml instead of
prefixing it."#,
    },
    // 3) Ordinal collision
    RuleGuide {
        id: "ordinal-collision",
        title: "Ordinal Collision",
        description: r#"Checks that sibling entries do not share the same ordinal value.

Two siblings named `01_load.py` and `1_clean.py` both claim position one;
their execution order is ambiguous even though the names differ. The rule
compares numeric values, so zero padding does not hide a collision.

Entries in different directories never collide; only siblings compete for a
position."#,
        rationale: r#"This rule defaults to WARN because:
- A shared ordinal is ambiguous, not necessarily wrong
- Some trees intentionally run several steps under one number
- The tree still lists deterministically; only the intent is unclear"#,
        remediation: r#"Renumber one of the colliding siblings:

    mv 1_clean.py 02_clean.py

If the collision is intentional (parallel variants of one step), switch the
rule off for the tree:

    [severity]
    "ordinal-collision" = "off"

in projlint.toml, or pass --severity ordinal-collision=off for one run."#,
    },
    // 4) Directory name style
    RuleGuide {
        id: "dir-name-style",
        title: "Directory Name Style",
        description: r#"Checks that directory names, after the ordinal prefix, are written in
Capitalized_Words style: every word starts with an uppercase letter or a
digit, words joined by `_`, `-`, or spaces.

Accepted:

    01_Data
    02_Raw_Data
    03_Figures-Final
    2024_Report

Rejected:

    01_data          (word starts lowercase)
    02_RAW_DATA      (words are all caps, not capitalized)
    03_Data__Final   (doubled separator leaves an empty word)

A directory whose name is only an ordinal (`01_`) is rejected too: there
are no words to capitalize."#,
        rationale: r#"This rule defaults to FAIL because:
- Directories are the chapter headings of the tree and are read far more
  often than any single file
- One casing style per tree keeps listings scannable
- Mixed casing is the first convention to decay once several people add
  directories"#,
        remediation: r#"Rename the directory so each word starts with a capital:

    mv 01_raw_data 01_Raw_Data

Digits may lead a word (`2024_Report` is fine). If the directory holds
metadata rather than a pipeline stage, exempt it by pattern in
`naming.exempt`."#,
    },
    // 5) File name style
    RuleGuide {
        id: "file-name-style",
        title: "File Name Style",
        description: r#"Checks that file stems, after the ordinal prefix and without the
extension, contain no uppercase characters.

Accepted:

    01_load_data.py
    02_fit_model.R
    raw_counts.csv    (no prefix, but that is ordinal-prefix territory)

Rejected:

    01_Load_Data.py
    02_fitModel.py

The extension is not part of the stem, so `01_raw.CSV` passes this rule.
Exempt names (README*, LICENSE*, CHANGELOG*, projlint.toml) and the root
configuration file are not checked."#,
        rationale: r#"This rule defaults to FAIL because:
- Case-only name differences break moves between case-sensitive and
  case-insensitive filesystems
- Lowercase stems keep shell completion and scripting predictable
- File names are typed far more often than directory names"#,
        remediation: r#"Rename the file to a lowercase stem:

    mv 01_Load_Data.py 01_load_data.py

Keep the ordinal prefix and the extension as they are; only the stem
between them is checked."#,
    },
    // 6) Separator consistency
    RuleGuide {
        id: "separator-consistency",
        title: "Separator Consistency",
        description: r#"Checks that the tree sticks to one word separator.

Underscores, hyphens, and spaces are all legal separators, but mixing them
inside one tree makes names unpredictable. The rule counts, per entry, which
separator styles appear in the checked part of the name (the whole name for
directories, the stem for files), declares the most common one the tree's
convention, and flags entries using any other.

Extension dots never count as separators, and exempt names neither vote for
a convention nor get flagged (a LICENSE-MIT file does not make hyphens the
convention)."#,
        rationale: r#"This rule defaults to WARN because:
- The convention is inferred from the tree, not declared; on small trees
  the majority is thin evidence
- A mixed tree is a consistency smell, not a broken pipeline
- Renames to enforce it can be disruptive mid-analysis"#,
        remediation: r#"Rename the minority entries to the majority separator:

    mv 02_clean-data.py 02_clean_data.py

On a tie the rule prefers underscores, then hyphens, then spaces. If part
of the tree legitimately keeps upstream names (imported data, vendored
code), exclude that subtree:

    projlint check --exclude '01_Data/upstream*'"#,
    },
];

/// Look up a rule guide by id.
pub fn lookup_rule(query: &str) -> Option<&'static RuleGuide> {
    let query_normalized = query.to_lowercase().replace('_', "-");
    RULE_GUIDE.iter().find(|guide| guide.id == query_normalized)
}

/// List all guided rule ids.
pub fn list_rule_keys() -> Vec<&'static str> {
    RULE_GUIDE.iter().map(|g| g.id).collect()
}
