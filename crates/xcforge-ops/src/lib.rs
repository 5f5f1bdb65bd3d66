//! High-level operations wiring CLI commands to the project graph: target
//! synthesis, settings merge, group mirroring, build-phase cloning, scheme
//! creation, and manifest scaffolding.

pub mod mirror;
pub mod ops_init;
pub mod ops_sync;
pub mod phases;
pub mod plist_path;
pub mod scheme;
pub mod settings;
