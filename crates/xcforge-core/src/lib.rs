//! Core data types for the xcforge target-cloning tool.
//!
//! This crate defines the fundamental types that represent a project
//! description: the project graph with its targets, build configurations,
//! build phases, and logical group tree; the `.xcforge.json` manifest; and
//! pure plist derivation.
//!
//! This crate is intentionally free of async code and network I/O.

pub mod group;
pub mod manifest;
pub mod plist;
pub mod project;
pub mod target;
