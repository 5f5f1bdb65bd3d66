//! Mirroring a filesystem subtree into the project's logical group tree.

use std::path::Path;

use xcforge_core::group::Group;
use xcforge_core::target::Target;
use xcforge_util::errors::XcforgeError;
use xcforge_util::progress::status_warn;

const ASSET_CATALOG_SUFFIX: &str = ".xcassets";
const SKIPPED_ENTRIES: &[&str] = &[".", ".DS_Store"];

/// Recursively mirror `dir` into `group`, registering every file as a
/// resource of `target`.
///
/// Asset catalogs (`*.xcassets` directories) are atomic leaves: the
/// directory itself becomes one resource file reference and its contents
/// are not walked; remaining siblings are still processed. Sibling order
/// follows filesystem enumeration order. An unreadable directory is
/// reported and skipped rather than aborting synthesis.
pub fn mirror_tree(
    dir: &Path,
    group: &mut Group,
    target: &mut Target,
    quiet: bool,
) -> miette::Result<()> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(_) => {
            if !quiet {
                status_warn("Skipped", &format!("{} (not readable)", dir.display()));
            }
            return Ok(());
        }
    };

    for entry in entries {
        let entry = entry.map_err(XcforgeError::Io)?;
        let file_name = entry.file_name();
        let name = file_name.to_string_lossy().to_string();
        if SKIPPED_ENTRIES.contains(&name.as_str()) {
            continue;
        }

        let path = entry.path();
        if path.is_dir() {
            if name.ends_with(ASSET_CATALOG_SUFFIX) {
                add_resource(&name, group, target);
                continue;
            }
            let child = group.new_group(&name);
            mirror_tree(&path, child, target, quiet)?;
        } else {
            add_resource(&name, group, target);
        }
    }

    Ok(())
}

fn add_resource(name: &str, group: &mut Group, target: &mut Target) {
    group.new_file(name);
    target.add_resource(name);
}
