//! Lorem-style placeholder sentence generation.
//!
//! Sentences are nonsensical but grammatically shaped: a handful of words
//! from a fixed vocabulary pool, first letter capitalized, terminated with a
//! period. Content is nondeterministic per call unless a seeded RNG is
//! supplied.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Fixed vocabulary pool for generated sentences.
pub const LOREM_WORDS: &[&str] = &[
    "ad",
    "adipiscing",
    "aliqua",
    "aliquip",
    "amet",
    "anim",
    "aute",
    "cillum",
    "commodo",
    "consectetur",
    "consequat",
    "culpa",
    "cupidatat",
    "deserunt",
    "do",
    "dolor",
    "dolore",
    "duis",
    "ea",
    "eiusmod",
    "elit",
    "enim",
    "esse",
    "est",
    "et",
    "eu",
    "ex",
    "excepteur",
    "exercitation",
    "fugiat",
    "id",
    "in",
    "incididunt",
    "ipsum",
    "irure",
    "labore",
    "laboris",
    "laborum",
    "lorem",
    "magna",
    "minim",
    "mollit",
    "nisi",
    "non",
    "nostrud",
    "nulla",
    "occaecat",
    "officia",
    "pariatur",
    "proident",
    "qui",
    "quis",
    "reprehenderit",
    "sed",
    "sint",
    "sit",
    "sunt",
    "tempor",
    "ullamco",
    "ut",
    "velit",
    "veniam",
    "voluptate",
];

const MIN_WORDS: usize = 4;
const MAX_WORDS: usize = 9;

/// Generate one placeholder sentence using the supplied RNG.
///
/// The result is never empty: it contains between `MIN_WORDS` and
/// `MAX_WORDS` pool words separated by single spaces and ends with `'.'`.
pub fn sentence_with_rng(rng: &mut impl Rng) -> String {
    let word_count = rng.gen_range(MIN_WORDS..=MAX_WORDS);

    let mut sentence = String::new();
    for position in 0..word_count {
        let word = LOREM_WORDS[rng.gen_range(0..LOREM_WORDS.len())];
        if position == 0 {
            push_capitalized(&mut sentence, word);
        } else {
            sentence.push(' ');
            sentence.push_str(word);
        }
    }
    sentence.push('.');
    sentence
}

/// Generate one entropy-seeded placeholder sentence.
pub fn sentence() -> String {
    let mut rng = StdRng::from_entropy();
    sentence_with_rng(&mut rng)
}

fn push_capitalized(sentence: &mut String, word: &str) {
    let mut chars = word.chars();
    if let Some(first) = chars.next() {
        sentence.extend(first.to_uppercase());
        sentence.push_str(chars.as_str());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_generation_is_reproducible() {
        let mut rng_a = StdRng::seed_from_u64(42);
        let mut rng_b = StdRng::seed_from_u64(42);
        assert_eq!(sentence_with_rng(&mut rng_a), sentence_with_rng(&mut rng_b));
    }

    #[test]
    fn different_seeds_can_produce_different_sentences() {
        let sentences: Vec<String> = (0..16)
            .map(|seed| sentence_with_rng(&mut StdRng::seed_from_u64(seed)))
            .collect();
        let first = &sentences[0];
        assert!(sentences.iter().any(|candidate| candidate != first));
    }

    #[test]
    fn generated_sentences_have_expected_shape() {
        for seed in 0..64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let generated = sentence_with_rng(&mut rng);

            assert!(!generated.is_empty());
            assert!(generated.ends_with('.'));

            let first = generated.chars().next().expect("sentence is non-empty");
            assert!(first.is_uppercase());

            let trimmed = generated
                .strip_suffix('.')
                .expect("sentence ends with a period");
            let words: Vec<&str> = trimmed.split(' ').collect();
            assert!((MIN_WORDS..=MAX_WORDS).contains(&words.len()));
            for (position, word) in words.iter().enumerate() {
                assert!(!word.is_empty(), "words are separated by single spaces");
                let lowered = word.to_lowercase();
                assert!(
                    LOREM_WORDS.contains(&lowered.as_str()),
                    "unexpected word at position {position}: {word}"
                );
            }
        }
    }

    #[test]
    fn entropy_seeded_sentence_is_well_formed() {
        let generated = sentence();
        assert!(!generated.is_empty());
        assert!(generated.ends_with('.'));
    }
}
