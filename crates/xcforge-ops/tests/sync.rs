use std::path::Path;

use tempfile::TempDir;
use xcforge_assets::fetch::{FetchOutcome, ResourceFetcher};
use xcforge_core::group::FileRef;
use xcforge_core::manifest::{Manifest, TargetEntry};
use xcforge_core::project::Project;
use xcforge_core::target::{
    BuildConfiguration, BuildPhase, ConfigurationList, PhaseKind, Target,
};
use xcforge_ops::ops_sync::{synthesize, SyncOptions};

/// Fetcher for runs that must not touch the network.
struct NullFetcher;

impl ResourceFetcher for NullFetcher {
    async fn fetch(&self, url: &str) -> FetchOutcome {
        FetchOutcome::Failure(format!("offline: {url}"))
    }
}

const MAIN_PLIST: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE plist PUBLIC "-//Apple//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd">
<plist version="1.0">
<dict>
	<key>CFBundleId</key>
	<string>com.x.main</string>
	<key>CFBundleName</key>
	<string>Main</string>
</dict>
</plist>
"#;

fn file(path: &str) -> FileRef {
    FileRef {
        path: path.to_string(),
    }
}

fn main_target() -> Target {
    let mut dev = BuildConfiguration::new("Dev");
    dev.build_settings.insert(
        "INFOPLIST_FILE".to_string(),
        "$(SRCROOT)/MainApp/Info.plist".to_string(),
    );
    dev.build_settings
        .insert("PRODUCT_NAME".to_string(), "Main".to_string());
    Target {
        name: "MainApp".to_string(),
        platform: "ios".to_string(),
        deployment_target: "13.0".to_string(),
        configurations: ConfigurationList {
            default_configuration_name: "Release".to_string(),
            configurations: vec![
                dev,
                BuildConfiguration::new("Production"),
                BuildConfiguration::new("Release"),
                BuildConfiguration::new("Debug"),
            ],
        },
        build_phases: vec![
            BuildPhase::Sources {
                files: vec![file("a.swift"), file("b.swift")],
            },
            BuildPhase::Frameworks {
                files: vec![file("UIKit.framework")],
            },
            BuildPhase::Resources {
                files: vec![file("Main.storyboard")],
            },
            BuildPhase::ShellScript {
                name: "Lint".to_string(),
                script: "swiftlint lint".to_string(),
            },
        ],
    }
}

/// Lay out a conventional base project in `dir` and return it, saved.
fn scaffold_project(dir: &Path) -> Project {
    let mut project = Project::new("Sample");
    project.targets.push(main_target());

    let apps = project.main_group.new_group("Apps");
    apps.path = Some("Apps".to_string());
    project
        .main_group
        .new_group("Distll")
        .new_group("Resources")
        .new_group("Assets")
        .new_group("Videos");

    std::fs::create_dir_all(dir.join("MainApp")).unwrap();
    std::fs::write(dir.join("MainApp/Info.plist"), MAIN_PLIST).unwrap();
    std::fs::create_dir_all(dir.join("Apps/CloneApp")).unwrap();
    std::fs::write(dir.join("Apps/CloneApp/Custom.storyboard"), b"ui").unwrap();

    project.path = dir.join("Sample.xcodeproj");
    project.save().unwrap();
    project
}

fn entry(name: &str) -> TargetEntry {
    serde_json::from_value(serde_json::json!({ "name": name })).unwrap()
}

fn manifest_with_overrides() -> Manifest {
    serde_json::from_value(serde_json::json!({
        "targets": [],
        "global_info_keys": { "CFBundleShortVersionString": "1.0" }
    }))
    .unwrap()
}

fn options() -> SyncOptions {
    SyncOptions {
        quiet: true,
        ..SyncOptions::default()
    }
}

#[tokio::test]
async fn end_to_end_clone() {
    let tmp = TempDir::new().unwrap();
    let mut project = scaffold_project(tmp.path());

    let mut entry = entry("CloneApp");
    entry.icon_url = Some("https://somewhere.net/img.png".to_string());
    entry.launch_images = true;
    entry
        .info_plist
        .insert("CFBundleId".to_string(), serde_json::json!("com.x.clone"));
    let manifest = manifest_with_overrides();

    synthesize(
        &mut project,
        tmp.path(),
        &entry,
        &manifest,
        &NullFetcher,
        &options(),
    )
    .await
    .unwrap();

    // The commit is observable from a fresh open.
    let reloaded = Project::open(tmp.path()).unwrap();
    let clone = reloaded.target("CloneApp").expect("target committed");

    // Default configurations removed, default name forced.
    let names: Vec<_> = clone
        .configurations
        .configurations
        .iter()
        .map(|c| c.name.as_str())
        .collect();
    assert_eq!(names, vec!["Dev", "Production"]);
    assert_eq!(clone.configurations.default_configuration_name, "Dev");

    // Settings merged from the same-named source configuration.
    let dev = clone.configuration("Dev").unwrap();
    assert_eq!(
        dev.build_settings.get("INFOPLIST_FILE").map(String::as_str),
        Some("MainApp/CloneApp-Info.plist")
    );
    assert_eq!(
        dev.build_settings.get("PRODUCT_NAME").map(String::as_str),
        Some("Main")
    );
    assert_eq!(
        dev.build_settings.get("SKIP_INSTALL").map(String::as_str),
        Some("NO")
    );
    assert_eq!(
        dev.build_settings
            .get("ASSETCATALOG_COMPILER_APPICON_NAME")
            .map(String::as_str),
        Some("AppIconCloneApp")
    );
    assert_eq!(
        dev.build_settings
            .get("ASSETCATALOG_COMPILER_LAUNCHIMAGE_NAME")
            .map(String::as_str),
        Some("LaunchImageCloneApp")
    );
    // Production has no source settings to copy, fixed overrides only.
    let production = clone.configuration("Production").unwrap();
    assert_eq!(
        production
            .build_settings
            .get("INFOPLIST_FILE")
            .map(String::as_str),
        Some("MainApp/CloneApp-Info.plist")
    );
    assert!(!production.build_settings.contains_key("PRODUCT_NAME"));

    // Phases cloned with order and script bodies intact.
    let sources: Vec<_> = clone
        .phase_files(PhaseKind::Sources)
        .iter()
        .map(|f| f.path.as_str())
        .collect();
    assert_eq!(sources, vec!["a.swift", "b.swift"]);
    assert_eq!(
        clone.shell_script_phases().collect::<Vec<_>>(),
        vec![("Lint", "swiftlint lint")]
    );

    // Derived plist: source < global < target.
    let plist = std::fs::read_to_string(tmp.path().join("MainApp/CloneApp-Info.plist")).unwrap();
    assert!(plist.contains("com.x.clone"));
    assert!(!plist.contains("com.x.main"));
    assert!(plist.contains("Main"));
    assert!(plist.contains("1.0"));

    // Scheme persisted alongside the project.
    assert!(tmp
        .path()
        .join("xcshareddata/xcschemes/CloneApp.xcscheme.json")
        .is_file());

    // Resource directory mirrored under the Apps group.
    let apps = reloaded.main_group.child_group("Apps").unwrap();
    let clone_group = apps.child_group("CloneApp").unwrap();
    let mirrored: Vec<_> = clone_group.files().map(|f| f.path.as_str()).collect();
    assert_eq!(mirrored, vec!["Custom.storyboard"]);
}

#[tokio::test]
async fn per_target_plist_directory() {
    let tmp = TempDir::new().unwrap();
    let mut project = scaffold_project(tmp.path());

    let mut entry = entry("CloneApp");
    entry.create_plist_directory = true;
    let manifest = Manifest::default();

    synthesize(
        &mut project,
        tmp.path(),
        &entry,
        &manifest,
        &NullFetcher,
        &options(),
    )
    .await
    .unwrap();

    assert!(tmp
        .path()
        .join("MainApp/CloneApp/CloneApp-Info.plist")
        .is_file());
    let reloaded = Project::open(tmp.path()).unwrap();
    let dev = reloaded
        .target("CloneApp")
        .and_then(|t| t.configuration("Dev"))
        .unwrap();
    assert_eq!(
        dev.build_settings.get("INFOPLIST_FILE").map(String::as_str),
        Some("MainApp/CloneApp/CloneApp-Info.plist")
    );
}

#[tokio::test]
async fn duplicate_name_leaves_graph_unmodified() {
    let tmp = TempDir::new().unwrap();
    let mut project = scaffold_project(tmp.path());
    let saved = std::fs::read_to_string(tmp.path().join("Sample.xcodeproj")).unwrap();

    let err = synthesize(
        &mut project,
        tmp.path(),
        &entry("MainApp"),
        &Manifest::default(),
        &NullFetcher,
        &options(),
    )
    .await
    .unwrap_err();

    assert!(err.to_string().contains("already exists"));
    assert_eq!(project.targets.len(), 1);
    // Nothing was committed either.
    let on_disk = std::fs::read_to_string(tmp.path().join("Sample.xcodeproj")).unwrap();
    assert_eq!(saved, on_disk);
}

#[tokio::test]
async fn missing_group_fails_but_still_commits() {
    let tmp = TempDir::new().unwrap();
    let mut project = scaffold_project(tmp.path());
    // Break the convention: drop the Apps group.
    project.main_group.children.retain(|child| {
        !matches!(child, xcforge_core::group::GroupChild::Group(g) if g.name == "Apps")
    });
    project.save().unwrap();

    let err = synthesize(
        &mut project,
        tmp.path(),
        &entry("CloneApp"),
        &Manifest::default(),
        &NullFetcher,
        &options(),
    )
    .await
    .unwrap_err();
    assert!(err.to_string().contains("Group not found"));

    // No rollback: the structurally created target was committed.
    let reloaded = Project::open(tmp.path()).unwrap();
    assert!(reloaded.has_target("CloneApp"));
}

#[tokio::test]
async fn asset_failures_do_not_abort_synthesis() {
    let tmp = TempDir::new().unwrap();
    let mut project = scaffold_project(tmp.path());

    let mut entry = entry("CloneApp");
    entry.assets_url = Some("https://unreachable.example.com/v1".to_string());
    entry.video_url = Some("https://unreachable.example.com/v1/video.mp4".to_string());

    synthesize(
        &mut project,
        tmp.path(),
        &entry,
        &Manifest::default(),
        &NullFetcher,
        &options(),
    )
    .await
    .unwrap();

    let reloaded = Project::open(tmp.path()).unwrap();
    assert!(reloaded.has_target("CloneApp"));
    // Catalog directories exist but no Contents.json was written.
    let catalog_dir = tmp
        .path()
        .join("MainApp/CloneApp/AppIcons-CloneApp.xcassets");
    assert!(catalog_dir.join("AppIconCloneApp.appiconset").is_dir());
    assert!(!catalog_dir
        .join("AppIconCloneApp.appiconset/Contents.json")
        .exists());
    assert!(!tmp
        .path()
        .join("Distll/Resources/Assets/Videos/CloneApp/V5.mp4")
        .exists());
}
