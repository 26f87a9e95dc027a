//! Shared placeholder-sentence domain primitives.
//!
//! This crate owns the response contract, character reversal, and the
//! lorem-style sentence generator. It intentionally excludes Lambda runtime
//! and host integration concerns.

pub mod contract;
pub mod lorem;
pub mod reverse;
