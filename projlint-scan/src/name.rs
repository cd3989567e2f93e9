//! Name parsing and classification.
//!
//! Everything here is pure string manipulation over a single path component.
//! The scanner calls [`parse_name`] once per entry; the rules call the
//! classification helpers on the parsed pieces.

use std::collections::BTreeSet;

use projlint_types::record::{Ordinal, ParsedName};

/// Word separators recognized inside names.
///
/// The `Ord` impl doubles as the tie-break order when a tree uses two
/// separators equally often: the smaller variant wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Separator {
    Underscore,
    Hyphen,
    Space,
}

impl Separator {
    pub fn label(self) -> &'static str {
        match self {
            Separator::Underscore => "underscore",
            Separator::Hyphen => "hyphen",
            Separator::Space => "space",
        }
    }

    fn from_char(c: char) -> Option<Self> {
        match c {
            '_' => Some(Separator::Underscore),
            '-' => Some(Separator::Hyphen),
            ' ' => Some(Separator::Space),
            _ => None,
        }
    }
}

/// Parse one path component into ordinal prefix, stem, and extension.
///
/// For files the extension is split off first, so `01.csv` parses as ordinal
/// `01` with an empty stem and extension `csv` rather than feeding `.csv` to
/// the ordinal parser. Directories never have an extension.
pub fn parse_name(name: &str, is_dir: bool) -> ParsedName {
    let (base, extension) = if is_dir {
        (name, None)
    } else {
        split_extension(name)
    };
    let (ordinal, stem) = split_ordinal(base);
    ParsedName {
        ordinal,
        stem: stem.to_string(),
        extension: extension.map(str::to_string),
    }
}

/// Name without its extension. Dotfiles and names without a dot are returned
/// whole.
pub fn file_stem(name: &str) -> &str {
    split_extension(name).0
}

fn split_extension(name: &str) -> (&str, Option<&str>) {
    match name.rfind('.') {
        Some(idx) if idx > 0 && idx + 1 < name.len() => (&name[..idx], Some(&name[idx + 1..])),
        _ => (name, None),
    }
}

/// An ordinal prefix is one or more leading ASCII digits. A single separator
/// (`_`, `-`, or `.`) directly after the digits belongs to the prefix and is
/// consumed; it is not part of the stem.
fn split_ordinal(base: &str) -> (Option<Ordinal>, &str) {
    let digits_len = base.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return (None, base);
    }

    let digits = &base[..digits_len];
    let mut stem = &base[digits_len..];
    if let Some(first) = stem.chars().next()
        && matches!(first, '_' | '-' | '.')
    {
        stem = &stem[first.len_utf8()..];
    }

    // Saturate instead of failing on absurdly long digit runs; the digit
    // string itself is preserved for display and zero-padding checks.
    let value = digits
        .bytes()
        .fold(0u64, |acc, b| acc.saturating_mul(10).saturating_add(u64::from(b - b'0')));

    (
        Some(Ordinal {
            digits: digits.to_string(),
            value,
        }),
        stem,
    )
}

fn words(stem: &str) -> impl Iterator<Item = &str> {
    stem.split(['_', '-', ' '])
}

/// True when every word in the stem starts with a non-lowercase character and
/// continues without uppercase, e.g. `Raw_Data` or `2024_Report`.
///
/// An empty stem is not Capitalized_Words, and neither is a stem with doubled
/// separators (the empty word between them fails the check).
pub fn is_capitalized_words(stem: &str) -> bool {
    if stem.is_empty() {
        return false;
    }
    words(stem).all(|word| {
        let mut chars = word.chars();
        match chars.next() {
            None => false,
            Some(first) => !first.is_lowercase() && !chars.any(char::is_uppercase),
        }
    })
}

/// True when the stem contains no uppercase characters. The empty stem of a
/// digits-only name is lowercase by this definition.
pub fn is_lowercase(stem: &str) -> bool {
    !stem.chars().any(char::is_uppercase)
}

/// The set of separator kinds a name uses.
pub fn separators_in(text: &str) -> BTreeSet<Separator> {
    text.chars().filter_map(Separator::from_char).collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn ordinal(digits: &str, value: u64) -> Option<Ordinal> {
        Some(Ordinal {
            digits: digits.to_string(),
            value,
        })
    }

    #[test]
    fn parses_directory_with_ordinal_and_stem() {
        let name = parse_name("01_Raw_Data", true);
        assert_eq!(name.ordinal, ordinal("01", 1));
        assert_eq!(name.stem, "Raw_Data");
        assert_eq!(name.extension, None);
    }

    #[test]
    fn parses_file_extension_before_ordinal() {
        let name = parse_name("02_load-data.py", false);
        assert_eq!(name.ordinal, ordinal("02", 2));
        assert_eq!(name.stem, "load-data");
        assert_eq!(name.extension, Some("py".to_string()));
    }

    #[test]
    fn digits_only_file_has_empty_stem() {
        let name = parse_name("01.csv", false);
        assert_eq!(name.ordinal, ordinal("01", 1));
        assert_eq!(name.stem, "");
        assert_eq!(name.extension, Some("csv".to_string()));
    }

    #[test]
    fn ordinal_consumes_one_separator_only() {
        let name = parse_name("03__gap", true);
        assert_eq!(name.ordinal, ordinal("03", 3));
        assert_eq!(name.stem, "_gap");
    }

    #[test]
    fn ordinal_without_separator_keeps_stem() {
        let name = parse_name("01Data", true);
        assert_eq!(name.ordinal, ordinal("01", 1));
        assert_eq!(name.stem, "Data");
    }

    #[test]
    fn dot_separator_is_consumed_for_directories() {
        let name = parse_name("10.Archive", true);
        assert_eq!(name.ordinal, ordinal("10", 10));
        assert_eq!(name.stem, "Archive");
    }

    #[test]
    fn name_without_digits_has_no_ordinal() {
        let name = parse_name("notes.txt", false);
        assert_eq!(name.ordinal, None);
        assert_eq!(name.stem, "notes");
        assert_eq!(name.extension, Some("txt".to_string()));
    }

    #[test]
    fn trailing_digits_are_not_an_ordinal() {
        let name = parse_name("data2", true);
        assert_eq!(name.ordinal, None);
        assert_eq!(name.stem, "data2");
    }

    #[test]
    fn dotfile_has_no_extension() {
        let name = parse_name(".gitignore", false);
        assert_eq!(name.ordinal, None);
        assert_eq!(name.stem, ".gitignore");
        assert_eq!(name.extension, None);
    }

    #[test]
    fn only_last_extension_is_split() {
        let name = parse_name("archive.tar.gz", false);
        assert_eq!(name.stem, "archive.tar");
        assert_eq!(name.extension, Some("gz".to_string()));
    }

    #[test]
    fn oversized_ordinal_saturates() {
        let digits = "9".repeat(40);
        let name = parse_name(&digits, true);
        let parsed = name.ordinal.expect("ordinal");
        assert_eq!(parsed.digits, digits);
        assert_eq!(parsed.value, u64::MAX);
    }

    #[test]
    fn zero_padding_is_preserved() {
        let name = parse_name("007_Secret", true);
        let parsed = name.ordinal.expect("ordinal");
        assert_eq!(parsed.digits, "007");
        assert_eq!(parsed.value, 7);
    }

    #[test]
    fn file_stem_strips_only_real_extensions() {
        assert_eq!(file_stem("config.yaml"), "config");
        assert_eq!(file_stem("config"), "config");
        assert_eq!(file_stem(".gitignore"), ".gitignore");
        assert_eq!(file_stem("trailing."), "trailing.");
    }

    #[test]
    fn capitalized_words_accepts_digit_led_words() {
        assert!(is_capitalized_words("Raw_Data"));
        assert!(is_capitalized_words("Analysis"));
        assert!(is_capitalized_words("2024_Report"));
        assert!(is_capitalized_words("Figures-Final"));
    }

    #[test]
    fn capitalized_words_rejects_lowercase_and_shouting() {
        assert!(!is_capitalized_words("raw_data"));
        assert!(!is_capitalized_words("Raw_data"));
        assert!(!is_capitalized_words("RAW"));
        assert!(!is_capitalized_words(""));
        assert!(!is_capitalized_words("Raw__Data"));
    }

    #[test]
    fn lowercase_check_ignores_non_letters() {
        assert!(is_lowercase("load-data"));
        assert!(is_lowercase("model_v2"));
        assert!(is_lowercase(""));
        assert!(!is_lowercase("loadData"));
        assert!(!is_lowercase("Load"));
    }

    #[test]
    fn separator_sets_are_collected() {
        let seps = separators_in("01_load-data v2");
        assert!(seps.contains(&Separator::Underscore));
        assert!(seps.contains(&Separator::Hyphen));
        assert!(seps.contains(&Separator::Space));
        assert!(separators_in("plain").is_empty());
    }

    #[test]
    fn separator_tie_break_order_is_stable() {
        assert!(Separator::Underscore < Separator::Hyphen);
        assert!(Separator::Hyphen < Separator::Space);
    }
}
