#![no_main]

//! Fuzz target for file name parsing.
//!
//! This fuzzes `parse_name` and the name predicates with arbitrary strings
//! to ensure the parser handles hostile input gracefully.

use libfuzzer_sys::fuzz_target;
use projlint_scan::{file_stem, is_capitalized_words, is_lowercase, parse_name, separators_in};

fuzz_target!(|data: &[u8]| {
    // Name parsing only sees UTF-8; the scanner skips everything else.
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };

    // Parse both ways - should never panic.
    for is_dir in [true, false] {
        let parsed = parse_name(s, is_dir);

        // An extracted ordinal is always a digit prefix of the raw name.
        if let Some(ordinal) = &parsed.ordinal {
            assert!(s.starts_with(ordinal.digits.as_str()));
            assert!(ordinal.digits.chars().all(|c| c.is_ascii_digit()));
            assert!(!ordinal.digits.is_empty());
        }
    }

    // Predicates are total over arbitrary strings.
    let _ = file_stem(s);
    let _ = is_capitalized_words(s);
    let _ = is_lowercase(s);
    let _ = separators_in(s);
});
