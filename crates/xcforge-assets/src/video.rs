//! Single-file launch-video download.

use std::path::Path;

use xcforge_util::errors::XcforgeError;
use xcforge_util::fs::ensure_dir;
use xcforge_util::progress::{status, status_err};

use crate::fetch::{FetchOutcome, ResourceFetcher};

/// Fetch one video URL and write the body to `dest_file`, creating parent
/// directories as needed.
///
/// Returns `Ok(false)` on a fetch failure; a missing video never aborts
/// target synthesis.
pub async fn fetch_video<F: ResourceFetcher>(
    fetcher: &F,
    url: &str,
    dest_file: &Path,
    quiet: bool,
) -> miette::Result<bool> {
    match fetcher.fetch(url).await {
        FetchOutcome::Success(bytes) => {
            if let Some(parent) = dest_file.parent() {
                ensure_dir(parent).map_err(XcforgeError::Io)?;
            }
            std::fs::write(dest_file, bytes).map_err(XcforgeError::Io)?;
            if !quiet {
                status("Downloaded", &dest_file.display().to_string());
            }
            Ok(true)
        }
        FetchOutcome::Failure(reason) => {
            if !quiet {
                status_err("Failed", &format!("downloading video: {reason}"));
            }
            Ok(false)
        }
    }
}
