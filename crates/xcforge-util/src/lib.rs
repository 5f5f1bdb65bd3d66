//! Shared utilities for the xcforge target-cloning tool.
//!
//! This crate provides cross-cutting concerns used by all other xcforge
//! crates: error types, filesystem helpers, terminal status output, and
//! small text helpers.

pub mod errors;
pub mod fs;
pub mod progress;
pub mod text;
