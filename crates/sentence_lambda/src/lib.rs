//! Lambda-oriented adapters and handlers for the placeholder sentence endpoint.
//!
//! This crate owns runtime integration details (the Lambda handler, the
//! word-source adapter, and entrypoint wiring) and exposes a single runtime
//! module boundary for the response contract and sentence primitives.

pub mod adapters;
pub mod handlers;
pub mod runtime;
