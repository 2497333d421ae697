use super::*;
use crate::options::{Limit, Limits};

fn enabled(max: usize) -> Limit {
    Limit { max, enabled: true }
}

fn unrestricted() -> Verifier {
    Verifier::default()
}

// ---------------------------------------------------------------------------
// String scanner
// ---------------------------------------------------------------------------

#[test]
fn string_scan_stops_past_the_closing_quote() {
    // Called with the cursor just past the opening quote.
    assert_eq!(string::scan(b"abc\" tail", 0), Ok(4));
    assert_eq!(string::scan(b"\"", 0), Ok(1));
}

#[test]
fn string_scan_accepts_all_single_character_escapes() {
    let body = br#"\" \\ \/ \b \f \n \r \t""#;
    assert_eq!(string::scan(body, 0), Ok(body.len()));
}

#[test]
fn string_scan_accepts_unicode_escapes() {
    let body = br#"Example \u2764\ufe0f""#;
    assert_eq!(string::scan(body, 0), Ok(body.len()));
    // Mixed-case hex digits are fine.
    assert_eq!(string::scan(br#"\uAbCd""#, 0), Ok(7));
}

#[test]
fn string_scan_rejects_bad_escapes() {
    assert_eq!(string::scan(br#"\x41""#, 0), Err(Reject::Grammar));
    assert_eq!(string::scan(br#"\u12g4""#, 0), Err(Reject::Grammar));
    assert_eq!(string::scan(br#"\u123"#, 0), Err(Reject::Grammar));
    // Backslash at end of input.
    assert_eq!(string::scan(b"\\", 0), Err(Reject::Grammar));
}

#[test]
fn string_scan_rejects_raw_control_bytes() {
    assert_eq!(string::scan(b"a\x00b\"", 0), Err(Reject::Grammar));
    assert_eq!(string::scan(b"a\nb\"", 0), Err(Reject::Grammar));
    assert_eq!(string::scan(b"a\x1fb\"", 0), Err(Reject::Grammar));
}

#[test]
fn string_scan_rejects_missing_closing_quote() {
    assert_eq!(string::scan(b"never closed", 0), Err(Reject::Grammar));
    assert_eq!(string::scan(b"", 0), Err(Reject::Grammar));
}

// ---------------------------------------------------------------------------
// Length guard
// ---------------------------------------------------------------------------

#[test]
fn guard_counts_utf8_characters_not_bytes() {
    // "Hello, 世界" is 9 characters in 13 bytes; the span adds two quotes.
    let span = "\"Hello, 世界\"".as_bytes();
    assert_eq!(string::guard(span, enabled(9), string::Subject::Value), Ok(()));
    assert_eq!(
        string::guard(span, enabled(8), string::Subject::Value),
        Err(Reject::Threat(ThreatError::StringValueLength { max: 8, found: 9 }))
    );
}

#[test]
fn guard_reports_the_label_for_its_subject() {
    let span = b"\"Hello, World!\"";
    assert_eq!(
        string::guard(span, enabled(10), string::Subject::Value),
        Err(Reject::Threat(ThreatError::StringValueLength { max: 10, found: 13 }))
    );
    assert_eq!(
        string::guard(span, enabled(10), string::Subject::Key),
        Err(Reject::Threat(ThreatError::ObjectKeyLength { max: 10, found: 13 }))
    );
}

#[test]
fn guard_is_inert_when_disabled() {
    let span = b"\"far far far too long\"";
    assert_eq!(
        string::guard(span, Limit::default(), string::Subject::Value),
        Ok(())
    );
}

#[test]
fn guard_measures_the_raw_span_without_decoding_escapes() {
    // The span between the quotes is measured as written: `\n` is two
    // characters, not one.
    let span = br#""a\nb""#;
    assert_eq!(
        string::guard(span, enabled(3), string::Subject::Value),
        Err(Reject::Threat(ThreatError::StringValueLength { max: 3, found: 4 }))
    );
    assert_eq!(string::guard(span, enabled(4), string::Subject::Value), Ok(()));
}

// ---------------------------------------------------------------------------
// Number and literal scanners
// ---------------------------------------------------------------------------

#[test]
fn number_scan_accepts_the_rfc_grammar() {
    for (input, end) in [
        (&b"0"[..], 1),
        (b"-0", 2),
        (b"123", 3),
        (b"-9871", 5),
        (b"0.5", 3),
        (b"10.25e-3,", 8),
        (b"1e9", 3),
        (b"1E+10", 5),
        (b"2.5E6]", 5),
    ] {
        assert_eq!(scalar::number(input, 0), Ok(end), "input: {input:?}");
    }
}

#[test]
fn number_scan_stops_at_the_maximal_valid_prefix() {
    // A leading zero ends the integer part; the enclosing scan decides
    // whether the leftover digit is acceptable.
    assert_eq!(scalar::number(b"0123", 0), Ok(1));
}

#[test]
fn number_scan_rejects_malformed_segments() {
    for input in [
        &b"-"[..],
        b"-.5",
        b"-e1",
        b".5",
        b"1.",
        b"1.e3",
        b"1e",
        b"1e+",
        b"1e-",
        b"+1",
    ] {
        assert_eq!(scalar::number(input, 0), Err(Reject::Grammar), "input: {input:?}");
    }
}

#[test]
fn literal_tails_match_exactly() {
    assert_eq!(scalar::literal(b"true", 1, b"rue"), Ok(4));
    assert_eq!(scalar::literal(b"false", 1, b"alse"), Ok(5));
    assert_eq!(scalar::literal(b"null", 1, b"ull"), Ok(4));
    assert_eq!(scalar::literal(b"tru", 1, b"rue"), Err(Reject::Grammar));
    assert_eq!(scalar::literal(b"napalm", 1, b"ull"), Err(Reject::Grammar));
}

#[test]
fn whitespace_skip_covers_the_four_insignificant_bytes() {
    assert_eq!(skip_ws(b" \t\r\n x", 0), 5);
    assert_eq!(skip_ws(b"x", 0), 0);
    assert_eq!(skip_ws(b"   ", 0), 3);
}

// ---------------------------------------------------------------------------
// Dispatch and containers
// ---------------------------------------------------------------------------

#[test]
fn accepts_every_scalar_at_top_level() {
    for doc in ["true", "false", "null", "0", "-1.5e3", "\"hi\"", "  42  "] {
        assert_eq!(unrestricted().verify_str(doc), Ok(()), "doc: {doc}");
    }
}

#[test]
fn accepts_empty_containers() {
    assert_eq!(unrestricted().verify_str("{}"), Ok(()));
    assert_eq!(unrestricted().verify_str("[]"), Ok(()));
    assert_eq!(unrestricted().verify_str(" [ ] "), Ok(()));
    assert_eq!(unrestricted().verify_str("{ }"), Ok(()));
}

#[test]
fn rejects_grammar_deviations_as_malformed() {
    for doc in [
        "",
        "   ",
        "{",
        "[",
        "[1,]",
        "{\"a\":1,}",
        "{\"a\"1}",
        "{\"a\":}",
        "{1:2}",
        "tru",
        "truE",
        "nul",
        "\"abc",
        "1 2",
        "--1",
        "01",
        "[1 2]",
        "{\"a\":1 \"b\":2}",
        "}",
        "]",
        ",",
        "[1,2]]",
    ] {
        assert_eq!(
            unrestricted().verify_str(doc),
            Err(ThreatError::MalformedJson),
            "doc: {doc}"
        );
    }
}

#[test]
fn depth_boundary_allows_the_maximum_and_rejects_one_deeper() {
    let verifier = Verifier::with_limits(Limits {
        container_depth: enabled(3),
        ..Limits::default()
    });
    assert_eq!(verifier.verify_str("[[[]]]"), Ok(()));
    assert_eq!(verifier.verify_str("[[[1]]]"), Ok(()));
    assert_eq!(
        verifier.verify_str("[[[[]]]]"),
        Err(ThreatError::ContainerDepth { max: 3, found: 4 })
    );
    // Objects and arrays share the one depth budget.
    assert_eq!(
        verifier.verify_str("{\"a\":[{\"b\":[]}]}"),
        Err(ThreatError::ContainerDepth { max: 3, found: 4 })
    );
}

#[test]
fn array_count_boundary() {
    let verifier = Verifier::with_limits(Limits {
        array_element_count: enabled(2),
        ..Limits::default()
    });
    assert_eq!(verifier.verify_str("[1, 2]"), Ok(()));
    assert_eq!(
        verifier.verify_str("[1, 2, 3]"),
        Err(ThreatError::ArrayElementCount { max: 2, found: 3 })
    );
}

#[test]
fn truncated_array_is_malformed_even_when_over_count() {
    // The delimiter lookahead runs before the count check.
    let verifier = Verifier::with_limits(Limits {
        array_element_count: enabled(2),
        ..Limits::default()
    });
    assert_eq!(verifier.verify_str("[1, 2, 3"), Err(ThreatError::MalformedJson));
}

#[test]
fn object_entry_boundary() {
    let verifier = Verifier::with_limits(Limits {
        object_entry_count: enabled(2),
        ..Limits::default()
    });
    assert_eq!(verifier.verify_str("{\"a\":1, \"b\":2}"), Ok(()));
    assert_eq!(
        verifier.verify_str("{\"a\":1, \"b\":2, \"c\":3}"),
        Err(ThreatError::ObjectEntryCount { max: 2, found: 3 })
    );
}

#[test]
fn entry_count_fires_before_the_key_length_guard() {
    let verifier = Verifier::with_limits(Limits {
        object_entry_count: enabled(1),
        object_key_length: enabled(2),
        ..Limits::default()
    });
    // The second key is both one entry too many and far too long; the entry
    // check wins because it runs first.
    assert_eq!(
        verifier.verify_str("{\"a\":1,\"much_too_long\":2}"),
        Err(ThreatError::ObjectEntryCount { max: 1, found: 2 })
    );
}

#[test]
fn key_length_violation_aborts_before_the_member_value() {
    let verifier = Verifier::with_limits(Limits {
        object_key_length: enabled(2),
        ..Limits::default()
    });
    // The value after the oversized key is never inspected, so not even its
    // broken grammar is reported.
    assert_eq!(
        verifier.verify_str("{\"abc\": !!!}"),
        Err(ThreatError::ObjectKeyLength { max: 2, found: 3 })
    );
}

#[test]
fn key_and_value_limits_are_independent() {
    let verifier = Verifier::with_limits(Limits {
        object_key_length: enabled(10),
        string_value_length: enabled(2),
        ..Limits::default()
    });
    assert_eq!(
        verifier.verify_str("{\"key\": \"vvvv\"}"),
        Err(ThreatError::StringValueLength { max: 2, found: 4 })
    );
}

#[test]
fn string_length_boundary_at_top_level() {
    let verifier = Verifier::with_limits(Limits {
        string_value_length: enabled(3),
        ..Limits::default()
    });
    assert_eq!(verifier.verify_str("\"abc\""), Ok(()));
    assert_eq!(
        verifier.verify_str("\"abcd\""),
        Err(ThreatError::StringValueLength { max: 3, found: 4 })
    );
}

#[test]
fn first_violation_in_scan_order_wins() {
    let verifier = Verifier::with_limits(Limits {
        string_value_length: enabled(2),
        array_element_count: enabled(1),
        ..Limits::default()
    });
    // The oversized string sits in the first element, before the element
    // count can possibly trip.
    assert_eq!(
        verifier.verify_str("[\"long\", 1, 2]"),
        Err(ThreatError::StringValueLength { max: 2, found: 4 })
    );
}
