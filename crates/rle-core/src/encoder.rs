//! Run-length encoder — collapses character runs into count-prefixed units.
//!
//! The encoder makes a single left-to-right pass, closing a run whenever the
//! character changes and once more at end of input. Each run `(c, n)` emits:
//!
//! - `n <= 9`: the digit for `n`, then `c` — e.g. a run of three `a` → `3a`
//! - `n > 9`: sentinel, decimal `n`, sentinel, then `c` — e.g. twelve `x` →
//!   `#12#x` (since `n > 9`, the first digit is never zero)
//!
//! Encoding is total: any finite input encodes, and the empty input encodes
//! to the empty string.
//!
//! # Example
//! ```
//! use rle_core::encode;
//! assert_eq!(encode("aaabbc"), "3a2b1c");
//! ```

use crate::grammar::{count_digit, SENTINEL};

/// Encode a string as a sequence of run-length units.
///
/// Each maximal run of identical characters becomes one unit. The output is
/// unique for a given input and is exactly inverted by [`crate::decode`].
pub fn encode(input: &str) -> String {
    let mut out = String::new();
    let mut chars = input.chars();

    let Some(first) = chars.next() else {
        return out;
    };

    let mut run_char = first;
    let mut run_len: usize = 1;
    for c in chars {
        if c == run_char {
            run_len += 1;
        } else {
            push_run(&mut out, run_len, run_char);
            run_char = c;
            run_len = 1;
        }
    }
    push_run(&mut out, run_len, run_char);

    out
}

/// Emit one closed run as a small unit (`3a`) or a large unit (`#12#x`).
fn push_run(out: &mut String, count: usize, c: char) {
    if count > 9 {
        out.push(SENTINEL);
        out.push_str(&count.to_string());
        out.push(SENTINEL);
    } else {
        out.push(count_digit(count));
    }
    out.push(c);
}
