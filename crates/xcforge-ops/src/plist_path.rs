//! Derivation of per-target Info.plist paths from the main target's plist
//! path.

use std::path::{Path, PathBuf};

use xcforge_core::target::Target;
use xcforge_util::errors::XcforgeError;
use xcforge_util::fs::ensure_dir;
use xcforge_util::progress::status_info;

/// Path of the main target's Info.plist, relative to the project directory.
///
/// Read from the first configuration's `INFOPLIST_FILE` setting with a
/// leading `$(SRCROOT)/` stripped.
pub fn main_plist_relative(main_target: &Target) -> miette::Result<String> {
    let config = main_target
        .configurations
        .configurations
        .first()
        .ok_or_else(|| XcforgeError::Generic {
            message: format!("Target {} has no build configurations", main_target.name),
        })?;
    let raw = config
        .build_settings
        .get("INFOPLIST_FILE")
        .ok_or_else(|| XcforgeError::Generic {
            message: format!("Target {} has no INFOPLIST_FILE setting", main_target.name),
        })?;
    Ok(raw.strip_prefix("$(SRCROOT)/").unwrap_or(raw).to_string())
}

/// Relative plist path for a new target, sharing the main plist's base
/// directory.
pub fn target_plist_relative(main_plist: &str, target: &str, create_dir: bool) -> String {
    let base = main_plist.split('/').next().unwrap_or(main_plist);
    if create_dir {
        format!("{base}/{target}/{target}-Info.plist")
    } else {
        format!("{base}/{target}-Info.plist")
    }
}

/// Absolute plist path for a new target, creating the per-target directory
/// on disk when requested.
pub fn target_plist_path(
    directory: &Path,
    main_plist: &str,
    target: &str,
    create_dir: bool,
    quiet: bool,
) -> miette::Result<PathBuf> {
    if create_dir {
        let base = main_plist.split('/').next().unwrap_or(main_plist);
        let plist_dir = directory.join(base).join(target);
        ensure_dir(&plist_dir).map_err(XcforgeError::Io)?;
        if !quiet {
            status_info("Created", &format!("plist directory {}", plist_dir.display()));
        }
    }
    Ok(directory.join(target_plist_relative(main_plist, target, create_dir)))
}
