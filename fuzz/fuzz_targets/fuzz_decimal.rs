#![no_main]
// SPDX-License-Identifier: MIT OR Apache-2.0
//! libFuzzer target for exact decimal parsing
//!
//! Tests:
//! - No panics on arbitrary literals
//! - Every literal serde_json accepts as a number is accepted too
//! - Normalization is idempotent through Display for in-range values

use difir_core::Decimal;
use libfuzzer_sys::fuzz_target;
use serde_json::Value;

fuzz_target!(|data: &[u8]| {
    if data.len() > 4_096 {
        return;
    }
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    let parsed = Decimal::parse(text);

    // Agreement with serde_json's number grammar
    if let Ok(Value::Number(_)) = serde_json::from_str::<Value>(text) {
        assert!(
            parsed.is_some(),
            "serde_json accepts {text:?} as a number but Decimal::parse rejects it"
        );
    }

    // Display output of a parsed value re-parses to an equal value
    if let Some(value) = parsed {
        let rendered = value.to_string();
        let reparsed = Decimal::parse(&rendered)
            .unwrap_or_else(|| panic!("display output {rendered:?} must re-parse"));
        assert_eq!(value, reparsed, "normalization must be stable for {text:?}");
    }
});
