use serde::{Deserialize, Serialize};

use crate::reverse::{char_count, reverse_chars};

/// Constant marker emitted verbatim in every response body. It has no
/// derivation and no mutation path; callers must not infer meaning from it.
pub const ITERATION_MARKER: u32 = 5;

/// Serialized body returned on every successful invocation.
///
/// `length` counts the characters of the sentence *before* reversal and
/// `sentence` is that sentence with character order inverted. Construct via
/// [`ResponseBody::from_sentence`] so the two fields cannot drift apart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResponseBody {
    pub sentence: String,
    pub length: usize,
    pub iteration: u32,
}

impl ResponseBody {
    /// Build the body from the original (pre-reversal) generated sentence.
    pub fn from_sentence(original: &str) -> Self {
        Self {
            sentence: reverse_chars(original),
            length: char_count(original),
            iteration: ITERATION_MARKER,
        }
    }
}
