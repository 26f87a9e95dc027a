pub mod sentence_source;
