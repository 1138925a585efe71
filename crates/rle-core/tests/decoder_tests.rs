use rle_core::{decode, RleError};

fn assert_decode(input: &str, expected: &str) {
    let decoded = decode(input).expect("decode failed");
    assert_eq!(
        decoded, expected,
        "Decode mismatch:\n  input:    {input:?}\n  got:      {decoded:?}\n  expected: {expected:?}"
    );
}

/// Assert that decoding fails with `InvalidEncoding` at the given char index.
fn assert_invalid_at(input: &str, expected_position: usize) {
    match decode(input) {
        Err(RleError::InvalidEncoding { position, message }) => assert_eq!(
            position, expected_position,
            "wrong error position for {input:?} ({message})"
        ),
        other => panic!("expected InvalidEncoding for {input:?}, got {other:?}"),
    }
}

// ============================================================================
// Valid input
// ============================================================================

#[test]
fn decode_empty() {
    assert_decode("", "");
}

#[test]
fn decode_single_small_unit() {
    assert_decode("1a", "a");
}

#[test]
fn decode_small_units() {
    assert_decode("3a2b1c", "aaabbc");
}

#[test]
fn decode_count_nine() {
    assert_decode("9x", &"x".repeat(9));
}

#[test]
fn decode_fenced_unit() {
    assert_decode("#12#x", &"x".repeat(12));
}

#[test]
fn decode_fenced_unit_count_ten() {
    assert_decode("#10#x", &"x".repeat(10));
}

#[test]
fn decode_fenced_unit_long_numeral() {
    assert_decode("#100#y", &"y".repeat(100));
}

#[test]
fn decode_fenced_numeral_with_inner_zero() {
    assert_decode("#105#z", &"z".repeat(105));
}

#[test]
fn decode_mixed_units() {
    let expected = format!("{}b{}", "a".repeat(10), "c".repeat(9));
    assert_decode("#10#a1b9c", &expected);
}

// ============================================================================
// Payload position accepts any character
// ============================================================================

#[test]
fn decode_digit_payload() {
    assert_decode("25", "55");
}

#[test]
fn decode_zero_digit_payload() {
    assert_decode("30", "000");
}

#[test]
fn decode_sentinel_payload() {
    assert_decode("2#", "##");
}

#[test]
fn decode_sentinel_payload_after_fenced_count() {
    assert_decode("#11##", &"#".repeat(11));
}

#[test]
fn decode_unicode_payload() {
    assert_decode("3é", "ééé");
}

#[test]
fn decode_emoji_payload_fenced() {
    assert_decode("#10#🦀", &"🦀".repeat(10));
}

// ============================================================================
// Grammar violations at a unit boundary
// ============================================================================

#[test]
fn decode_rejects_zero_count() {
    assert_invalid_at("0a", 0);
}

#[test]
fn decode_rejects_non_digit_at_unit_boundary() {
    assert_invalid_at("abc", 0);
}

#[test]
fn decode_rejects_garbage_after_valid_unit() {
    assert_invalid_at("3a!", 2);
}

#[test]
fn decode_rejects_zero_count_after_valid_prefix() {
    assert_invalid_at("5a4b3c0d", 6);
}

// ============================================================================
// Grammar violations inside a fenced count
// ============================================================================

#[test]
fn decode_rejects_leading_zero_numeral() {
    assert_invalid_at("#01#a", 1);
}

#[test]
fn decode_rejects_empty_fence() {
    assert_invalid_at("##a", 1);
}

#[test]
fn decode_rejects_letter_as_first_numeral_digit() {
    assert_invalid_at("#x2#a", 1);
}

#[test]
fn decode_rejects_single_digit_fence() {
    // A fenced count needs at least two digits before the closing sentinel.
    assert_invalid_at("#5#a", 2);
}

#[test]
fn decode_rejects_letter_inside_numeral() {
    assert_invalid_at("#12z34#a", 3);
}

// ============================================================================
// Truncated input (dangling count or missing payload)
// ============================================================================

#[test]
fn decode_rejects_dangling_small_count() {
    assert_invalid_at("3", 1);
}

#[test]
fn decode_rejects_lone_sentinel() {
    assert_invalid_at("#", 1);
}

#[test]
fn decode_rejects_fence_cut_after_first_digit() {
    assert_invalid_at("#5", 2);
}

#[test]
fn decode_rejects_unclosed_numeral() {
    assert_invalid_at("#12", 3);
}

#[test]
fn decode_rejects_fenced_count_missing_payload() {
    assert_invalid_at("#12#", 4);
}

#[test]
fn decode_rejects_truncation_after_valid_units() {
    assert_invalid_at("3a2b1", 5);
}

// ============================================================================
// Count overflow
// ============================================================================

#[test]
fn decode_overflowing_numeral_is_count_overflow() {
    let numeral = "9".repeat(30);
    let input = format!("#{numeral}#x");
    match decode(&input) {
        Err(RleError::CountOverflow { position, numeral: got }) => {
            // Reported at the closing sentinel, with the offending numeral.
            assert_eq!(position, 31);
            assert_eq!(got, numeral);
        }
        other => panic!("expected CountOverflow, got {other:?}"),
    }
}

#[test]
fn decode_large_but_representable_numeral_is_not_overflow() {
    // Well inside usize range; the decode itself would allocate gigabytes,
    // so only check the classification via a modest count.
    assert!(decode("#4096#.").is_ok());
}

// ============================================================================
// Failure classification is stable regardless of prefix
// ============================================================================

#[test]
fn decode_error_kind_ignores_valid_prefix_length() {
    for input in ["0a", "3a0a", "3a2b1c0a", "#10#x0a"] {
        match decode(input) {
            Err(RleError::InvalidEncoding { .. }) => {}
            other => panic!("expected InvalidEncoding for {input:?}, got {other:?}"),
        }
    }
}
