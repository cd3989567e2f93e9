#![no_main]

//! Fuzz target for report JSON parsing.
//!
//! This fuzzes the `ReportV1` deserialization with arbitrary JSON bytes
//! to ensure the parser handles malformed input gracefully.

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Try to parse arbitrary bytes as UTF-8 JSON into a ReportV1.
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };

    // Attempt to parse as ReportV1 - should never panic.
    let result = serde_json::from_str::<projlint_types::wire::ReportV1>(s);

    // If parsing succeeded, try serializing back to JSON.
    if let Ok(report) = result {
        let _ = serde_json::to_string(&report);
        let _ = serde_json::to_string_pretty(&report);
    }

    // Also try parsing individual report components.
    let _ = serde_json::from_str::<projlint_types::wire::ToolInfoV1>(s);
    let _ = serde_json::from_str::<projlint_types::report::ReportVerdict>(s);
    let _ = serde_json::from_str::<projlint_types::report::ReportCounts>(s);
    let _ = serde_json::from_str::<projlint_types::report::SkippedEntry>(s);
    let _ = serde_json::from_str::<projlint_types::result::RuleResult>(s);
    let _ = serde_json::from_str::<Vec<projlint_types::result::RuleResult>>(s);

    // Try parsing as generic JSON first, then attempting typed deserialization.
    if let Ok(val) = serde_json::from_str::<serde_json::Value>(s) {
        let _ = serde_json::from_value::<projlint_types::wire::ReportV1>(val);
    }
});
