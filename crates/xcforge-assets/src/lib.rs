//! Remote asset pipeline: fetching catalog manifests, their images, and
//! launch videos over HTTP.
//!
//! Fetch failures are structured results, not errors; a missing image or
//! video never aborts target synthesis.

pub mod catalog;
pub mod fetch;
pub mod video;
