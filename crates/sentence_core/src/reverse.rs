//! Character-order reversal over Unicode scalar values.
//!
//! Length and reversal must agree on what a "character" is, so both
//! operations here iterate `char`s rather than bytes.

/// Reverse the character order of `input` end-to-start.
///
/// Reversal is an involution: applying it twice yields the original string.
pub fn reverse_chars(input: &str) -> String {
    input.chars().rev().collect()
}

/// Count the characters in `input`, in the same unit `reverse_chars` operates on.
pub fn char_count(input: &str) -> usize {
    input.chars().count()
}
