//! Operation: synthesize every target listed in the manifest.
//!
//! Each manifest entry is processed independently and ends in its own
//! commit; one entry's failure is reported and does not block the next.
//! After the target object exists in the graph, later step failures still
//! reach the commit — there is no rollback, so a failed run can leave a
//! structurally created target with a partial asset catalog.

use std::path::Path;
use std::time::Duration;

use xcforge_assets::catalog::fetch_catalog;
use xcforge_assets::fetch::{HttpFetcher, ResourceFetcher, DEFAULT_TIMEOUT};
use xcforge_assets::video::fetch_video;
use xcforge_core::manifest::{Manifest, TargetEntry, MANIFEST_FILE_NAME};
use xcforge_core::project::Project;
use xcforge_core::target::Target;
use xcforge_util::errors::XcforgeError;
use xcforge_util::fs::ensure_dir;
use xcforge_util::progress::{status, status_err, status_warn};
use xcforge_util::text::stripped;

use crate::{mirror, phases, plist_path, scheme::Scheme, settings};

/// Configuration names removed from every synthesized target.
const DELETED_CONFIGURATIONS: &[&str] = &["Release", "Debug"];
/// Forced default configuration name after deletion.
const DEFAULT_CONFIGURATION: &str = "Dev";
/// Group path anchoring the per-target video assets.
const VIDEOS_GROUP_PATH: &str = "Distll/Resources/Assets/Videos";
/// Root group holding the per-target resource directories.
const APPS_GROUP: &str = "Apps";

/// Per-invocation options threaded through every component call.
#[derive(Debug, Clone)]
pub struct SyncOptions {
    /// Suppress status output.
    pub quiet: bool,
    /// HTTP timeout for asset and video downloads.
    pub timeout: Duration,
}

impl Default for SyncOptions {
    fn default() -> Self {
        Self {
            quiet: false,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Process the whole manifest found in `directory`.
///
/// A missing project file aborts the run before any mutation. Individual
/// entry failures are reported and counted; the batch keeps going, and the
/// operation fails at the end if any entry did.
pub async fn sync(directory: &Path, options: &SyncOptions) -> miette::Result<()> {
    let manifest = Manifest::from_path(&directory.join(MANIFEST_FILE_NAME))?;
    let fetcher = HttpFetcher::new(options.timeout)?;

    // Fail fast when the directory holds no project at all.
    let mut project = Project::open(directory)?;

    let mut failed = 0usize;
    for entry in &manifest.targets {
        match synthesize(&mut project, directory, entry, &manifest, &fetcher, options).await {
            Ok(()) => {
                if !options.quiet {
                    status("Created", &entry.name);
                }
            }
            Err(e) => {
                failed += 1;
                if !options.quiet {
                    status_err("Failed", &format!("{}: {e}", entry.name));
                }
            }
        }
        // Committed state is the baseline for the next entry.
        project = Project::open(directory)?;
    }

    if failed > 0 {
        return Err(XcforgeError::Generic {
            message: format!("{failed} target(s) could not be synthesized"),
        }
        .into());
    }
    Ok(())
}

/// Synthesize one target and commit the graph.
///
/// Rejects before any mutation when the name is taken. Once the target is
/// created, the commit runs even when a later step fails.
pub async fn synthesize<F: ResourceFetcher>(
    project: &mut Project,
    directory: &Path,
    entry: &TargetEntry,
    manifest: &Manifest,
    fetcher: &F,
    options: &SyncOptions,
) -> miette::Result<()> {
    tracing::debug!(target = %entry.name, "synthesizing target");
    if project.has_target(&entry.name) {
        return Err(XcforgeError::TargetExists {
            name: entry.name.clone(),
        }
        .into());
    }

    // Snapshot of the main target: the template for everything below.
    let main = project
        .targets
        .first()
        .cloned()
        .ok_or_else(|| XcforgeError::Generic {
            message: "Project has no main target to clone".to_string(),
        })?;
    let main_plist = plist_path::main_plist_relative(&main)?;

    project.new_target_from_main(&entry.name)?;
    let index = project.targets.len() - 1;

    let result = build_out(
        project, index, directory, entry, manifest, &main, &main_plist, fetcher, options,
    )
    .await;
    project.save()?;
    result
}

#[allow(clippy::too_many_arguments)]
async fn build_out<F: ResourceFetcher>(
    project: &mut Project,
    index: usize,
    directory: &Path,
    entry: &TargetEntry,
    manifest: &Manifest,
    main: &Target,
    main_plist: &str,
    fetcher: &F,
    options: &SyncOptions,
) -> miette::Result<()> {
    let quiet = options.quiet;
    let name = entry.name.as_str();

    // Build phases and configuration list.
    {
        let target = &mut project.targets[index];
        phases::clone_build_phases(main, target);
        target.remove_configurations(DELETED_CONFIGURATIONS);
        target.configurations.default_configuration_name = DEFAULT_CONFIGURATION.to_string();
    }

    // Shared scheme, persisted alongside the project.
    let scheme_path = Scheme::for_target(name).save(&project.path)?;
    if !quiet {
        status("Created", &format!("scheme {}", scheme_path.display()));
    }

    // Remote assets and launch video; failures are reported, never fatal.
    if let Some(assets_url) = entry.assets_url.as_deref() {
        fetch_assets(directory, main_plist, name, assets_url, fetcher, quiet).await?;
    }
    if let Some(video_url) = entry.video_url.as_deref() {
        let dest = directory
            .join(VIDEOS_GROUP_PATH)
            .join(name)
            .join("V5.mp4");
        fetch_video(fetcher, video_url, &dest, quiet).await?;
    }

    mirror_groups(project, index, directory, name, quiet)?;

    // Per-target plist derived from the main target's plist.
    let plist_source =
        std::fs::read_to_string(directory.join(main_plist)).map_err(XcforgeError::Io)?;
    let derived =
        xcforge_core::plist::derive(&plist_source, &manifest.global_info_keys, &entry.info_plist)?;
    let plist_file = plist_path::target_plist_path(
        directory,
        main_plist,
        name,
        entry.create_plist_directory,
        quiet,
    )?;
    std::fs::write(&plist_file, derived).map_err(XcforgeError::Io)?;
    if !quiet {
        status("Updated", &format!("{name}-Info.plist"));
    }

    // Settings merge into every destination configuration.
    let plist_relative = plist_path::target_plist_relative(main_plist, name, entry.create_plist_directory);
    let stripped_name = stripped(name);
    let ctx = settings::MergeContext {
        plist_relative_path: &plist_relative,
        icon: entry.wants_icon(),
        launch: entry.launch_images,
        stripped_name: &stripped_name,
        pods_present: directory.join("Pods").is_dir(),
    };
    let target = &mut project.targets[index];
    for config in &mut target.configurations.configurations {
        let source = main.configuration(&config.name);
        settings::merge_configuration(config, source, &ctx);
    }

    Ok(())
}

/// Create the asset-catalog directories and download the four catalogs.
async fn fetch_assets<F: ResourceFetcher>(
    directory: &Path,
    main_plist: &str,
    name: &str,
    assets_url: &str,
    fetcher: &F,
    quiet: bool,
) -> miette::Result<()> {
    let base = main_plist.split('/').next().unwrap_or(main_plist);
    let catalog_dir = directory
        .join(base)
        .join(name)
        .join(format!("AppIcons-{name}.xcassets"));

    let sets = [
        (format!("AppIcon{name}.appiconset"), "icon"),
        ("banner.appiconset".to_string(), "top"),
        (format!("LaunchImage{name}.launchimage"), "launch"),
        ("logo.imageset".to_string(), "logo"),
    ];

    let sp = if quiet {
        None
    } else {
        Some(xcforge_util::progress::spinner(&format!(
            "Downloading assets for {name}..."
        )))
    };

    let mut failures = 0usize;
    for (dir_name, asset_name) in &sets {
        let dest = catalog_dir.join(dir_name);
        ensure_dir(&dest).map_err(XcforgeError::Io)?;
        let report = fetch_catalog(fetcher, &dest, assets_url, asset_name, quiet).await?;
        failures += report.failures.len();
    }

    if let Some(sp) = sp {
        sp.finish_and_clear();
    }
    if failures > 0 && !quiet {
        status_warn(
            "Warning",
            &format!("{failures} asset(s) missing for {name}; catalog is partial"),
        );
    }
    Ok(())
}

/// Mirror the target's resource directory and its video directory into the
/// group tree, anchored at the two conventional root groups.
fn mirror_groups(
    project: &mut Project,
    index: usize,
    directory: &Path,
    name: &str,
    quiet: bool,
) -> miette::Result<()> {
    let main_group = &mut project.main_group;
    let target = &mut project.targets[index];

    let apps = main_group
        .child_group_mut(APPS_GROUP)
        .ok_or_else(|| XcforgeError::GroupNotFound {
            path: APPS_GROUP.to_string(),
        })?;
    let group = apps.new_group(name);
    group.path = Some(name.to_string());
    mirror::mirror_tree(&directory.join(APPS_GROUP).join(name), group, target, quiet)?;

    let videos = main_group
        .group_at_path_mut(VIDEOS_GROUP_PATH)
        .ok_or_else(|| XcforgeError::GroupNotFound {
            path: VIDEOS_GROUP_PATH.to_string(),
        })?;
    let group = videos.new_group(name);
    mirror::mirror_tree(
        &directory.join(VIDEOS_GROUP_PATH).join(name),
        group,
        target,
        quiet,
    )?;

    Ok(())
}
