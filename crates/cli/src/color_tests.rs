// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn codes_have_expected_values() {
    assert_eq!(codes::HEADER, 74);
    assert_eq!(codes::MUTED, 240);
}

#[test]
fn apply_header_wraps_text() {
    assert_eq!(
        apply_header("KEY"),
        format!("{}KEY{}", codes::HEADER_START, codes::RESET)
    );
}

#[yare::parameterized(
    zero = { "0", true },
    padded_zero = { "   0", true },
    nonzero = { "12", false },
)]
fn counts_are_muted_only_when_zero(text: &str, muted: bool) {
    let out = apply_count(text);
    assert_eq!(out.starts_with(codes::MUTED_START), muted);
    assert!(out.ends_with(codes::RESET));
    assert!(out.contains(text));
}
