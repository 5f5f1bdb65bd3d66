//! Operation: scaffold a `.xcforge.json` manifest.

use std::path::Path;

use xcforge_core::manifest::{Manifest, MANIFEST_FILE_NAME};
use xcforge_util::errors::XcforgeError;
use xcforge_util::progress::status;

/// Write a template manifest into `directory`. Refuses to overwrite an
/// existing one.
pub fn init(directory: &Path, quiet: bool) -> miette::Result<()> {
    let manifest_path = directory.join(MANIFEST_FILE_NAME);
    if manifest_path.exists() {
        return Err(XcforgeError::Generic {
            message: format!(
                "{MANIFEST_FILE_NAME} already exists at {}",
                manifest_path.display()
            ),
        }
        .into());
    }

    std::fs::write(&manifest_path, Manifest::template()).map_err(XcforgeError::Io)?;
    if !quiet {
        status("Created", &manifest_path.display().to_string());
    }
    Ok(())
}
