//! # rle-core
//!
//! Pure-Rust codec for a textual **run-length encoding** of character runs.
//!
//! A maximal run of `n` identical characters becomes a count-prefixed unit:
//! counts 1–9 are a single digit followed by the character (`"3a"`), counts
//! of 10 and above fence the decimal count between two `#` sentinels
//! (`"#12#x"`). Decoding validates the grammar with a finite-state parser
//! and rejects malformed input deterministically.
//!
//! ## Quick start
//!
//! ```rust
//! use rle_core::{encode, decode};
//!
//! let packed = encode("aaabbc");
//! assert_eq!(packed, "3a2b1c");
//!
//! // Exact inverse on validly-encoded input
//! assert_eq!(decode(&packed).unwrap(), "aaabbc");
//!
//! // Runs of 10 or more use the sentinel-fenced form
//! assert_eq!(encode(&"x".repeat(12)), "#12#x");
//! ```
//!
//! ## Modules
//!
//! - [`encoder`] — plain text → encoded text
//! - [`decoder`] — encoded text → plain text (state-machine parser)
//! - [`grammar`] — the sentinel constant and digit helpers shared by both
//! - [`error`] — error types for decode failures

pub mod decoder;
pub mod encoder;
pub mod error;
pub mod grammar;

pub use decoder::decode;
pub use encoder::encode;
pub use error::RleError;
pub use grammar::SENTINEL;
