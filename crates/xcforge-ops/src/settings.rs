//! Build-settings merge from a source configuration into a same-named
//! destination configuration.

use xcforge_core::target::BuildConfiguration;

/// Fixed per-target overrides applied after the source copy.
pub struct MergeContext<'a> {
    /// Per-target Info.plist path, relative to the project directory.
    pub plist_relative_path: &'a str,
    /// Whether the manifest requested an app-icon set.
    pub icon: bool,
    /// Whether the manifest requested a launch-image set.
    pub launch: bool,
    /// Target name reduced to alphanumerics, for asset-set names.
    pub stripped_name: &'a str,
    /// Whether the dependency-manager root (`Pods/`) exists on disk.
    pub pods_present: bool,
}

/// Copy every key from `source` into `dest`, then apply the fixed
/// overrides.
///
/// `source` is the main target's configuration of the same name, matched by
/// exact equality; when the main target has no such configuration only the
/// fixed overrides are applied. No setting is ever deleted from the
/// destination. Re-running leaves the fixed keys unchanged.
pub fn merge_configuration(
    dest: &mut BuildConfiguration,
    source: Option<&BuildConfiguration>,
    ctx: &MergeContext<'_>,
) {
    if let Some(source) = source {
        for (key, value) in &source.build_settings {
            dest.build_settings.insert(key.clone(), value.clone());
        }
    }

    dest.build_settings.insert(
        "INFOPLIST_FILE".to_string(),
        ctx.plist_relative_path.to_string(),
    );
    if ctx.icon {
        dest.build_settings.insert(
            "ASSETCATALOG_COMPILER_APPICON_NAME".to_string(),
            format!("AppIcon{}", ctx.stripped_name),
        );
    }
    if ctx.launch {
        dest.build_settings.insert(
            "ASSETCATALOG_COMPILER_LAUNCHIMAGE_NAME".to_string(),
            format!("LaunchImage{}", ctx.stripped_name),
        );
    }
    dest.build_settings
        .insert("SKIP_INSTALL".to_string(), "NO".to_string());

    if ctx.pods_present {
        dest.base_configuration = source.and_then(|s| s.base_configuration.clone());
        dest.build_settings
            .insert("PODS_ROOT".to_string(), "${SRCROOT}/Pods".to_string());
    }
}
