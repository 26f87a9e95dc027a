use crate::runtime::lorem;

/// Injected word-generation capability.
///
/// Implementations must return a non-empty human-readable string of words
/// separated by spaces, ending in sentence punctuation. Content may differ
/// on every call.
pub trait SentenceSource {
    fn sentence(&self) -> Result<String, String>;
}

/// Production source backed by the entropy-seeded lorem generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoremSentenceSource;

impl SentenceSource for LoremSentenceSource {
    fn sentence(&self) -> Result<String, String> {
        Ok(lorem::sentence())
    }
}
