//! Run-length decoder — a finite-state parser over the encoded grammar.
//!
//! The grammar is a sequence of units: a small unit is one digit `1`–`9`
//! followed by one payload character; a large unit is a sentinel-fenced
//! decimal count (at least two digits, no leading zero) followed by one
//! payload character. The parser walks the input once, one character of
//! lookahead at most, and rejects the first character that does not fit.
//!
//! # Key design decisions
//!
//! - **Closed state enum**: the parser states are a data-carrying enum with
//!   exhaustive matches, so every transition in the grammar is spelled out
//!   and an unhandled combination cannot compile.
//! - **Payload consumes anything**: once a count is in hand, the very next
//!   character is payload — digits and the sentinel included. This is what
//!   keeps the grammar unambiguous without escaping.
//! - **All-or-nothing**: the output buffer is built incrementally but only
//!   handed to the caller on success; any violation aborts the scan with the
//!   position where it was detected.

use crate::error::{Result, RleError};
use crate::grammar::{digit_value, nonzero_digit_value, SENTINEL};

/// Parser state between characters. `numeral` accumulates the digits of a
/// sentinel-fenced count; `count` is a fully resolved repeat count awaiting
/// its payload character.
enum State {
    /// At a unit boundary — the only accepting state.
    NewUnit,
    /// Opening sentinel seen; the first count digit (non-zero) is expected.
    LargeFirst,
    /// One count digit in hand; fenced counts have at least two digits.
    LargeSecond { numeral: String },
    /// Two or more digits in hand; more digits or the closing sentinel.
    LargeRest { numeral: String },
    /// Count resolved; the next character is the payload, unconditionally.
    Payload { count: usize },
}

/// Decode a run-length encoded string back into the original text.
///
/// Returns [`RleError::InvalidEncoding`] for any grammar violation —
/// unexpected character, zero or leading-zero count, or input ending in the
/// middle of a unit — and [`RleError::CountOverflow`] when a fenced count is
/// well-formed but too large to represent. The empty string decodes to the
/// empty string.
///
/// # Example
/// ```
/// use rle_core::decode;
/// assert_eq!(decode("3a2b1c").unwrap(), "aaabbc");
/// assert!(decode("0a").is_err());
/// ```
pub fn decode(input: &str) -> Result<String> {
    let mut out = String::new();
    let mut state = State::NewUnit;
    let mut scanned = 0;

    for (pos, c) in input.chars().enumerate() {
        scanned = pos + 1;
        state = step(state, c, pos, &mut out)?;
    }

    // Only a unit boundary may end the input; anything else is a dangling
    // count or a payload that never arrived.
    match state {
        State::NewUnit => Ok(out),
        State::LargeFirst | State::LargeSecond { .. } | State::LargeRest { .. } => Err(invalid(
            scanned,
            "input ended inside a sentinel-fenced count",
        )),
        State::Payload { .. } => Err(invalid(
            scanned,
            "input ended before the payload character",
        )),
    }
}

/// Advance the parser by one character, appending decoded payload as units
/// complete. Every `(state, character)` pair is handled here; the rows
/// mirror the grammar one to one.
fn step(state: State, c: char, pos: usize, out: &mut String) -> Result<State> {
    match state {
        State::NewUnit => {
            if c == SENTINEL {
                return Ok(State::LargeFirst);
            }
            if c == '0' {
                return Err(invalid(pos, "count must not be zero"));
            }
            match nonzero_digit_value(c) {
                Some(count) => Ok(State::Payload { count }),
                None => Err(invalid(
                    pos,
                    format!("expected a count digit or '{SENTINEL}', found {c:?}"),
                )),
            }
        }
        State::LargeFirst => {
            if c == '0' {
                return Err(invalid(pos, "fenced count must not start with zero"));
            }
            match nonzero_digit_value(c) {
                Some(_) => Ok(State::LargeSecond {
                    numeral: c.to_string(),
                }),
                None => Err(invalid(
                    pos,
                    format!("expected the first digit of a fenced count, found {c:?}"),
                )),
            }
        }
        State::LargeSecond { mut numeral } => match digit_value(c) {
            Some(_) => {
                numeral.push(c);
                Ok(State::LargeRest { numeral })
            }
            None => Err(invalid(
                pos,
                format!("fenced counts have at least two digits, found {c:?}"),
            )),
        },
        State::LargeRest { mut numeral } => {
            if c == SENTINEL {
                // The numeral is all ASCII digits, so the only way this
                // parse can fail is a count beyond the representable range.
                let count = numeral
                    .parse::<usize>()
                    .map_err(|_| RleError::CountOverflow {
                        position: pos,
                        numeral: numeral.clone(),
                    })?;
                return Ok(State::Payload { count });
            }
            match digit_value(c) {
                Some(_) => {
                    numeral.push(c);
                    Ok(State::LargeRest { numeral })
                }
                None => Err(invalid(
                    pos,
                    format!("expected a digit or closing '{SENTINEL}', found {c:?}"),
                )),
            }
        }
        State::Payload { count } => {
            out.extend(std::iter::repeat(c).take(count));
            Ok(State::NewUnit)
        }
    }
}

fn invalid(position: usize, message: impl Into<String>) -> RleError {
    RleError::InvalidEncoding {
        position,
        message: message.into(),
    }
}
