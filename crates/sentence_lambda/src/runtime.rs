//! Module boundary for domain primitives consumed by handlers and bins.

pub use sentence_core::{contract, lorem, reverse};
