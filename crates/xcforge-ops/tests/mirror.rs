use tempfile::TempDir;
use xcforge_core::group::Group;
use xcforge_core::target::{BuildConfiguration, ConfigurationList, PhaseKind, Target};
use xcforge_ops::mirror::mirror_tree;

fn target() -> Target {
    Target {
        name: "CloneApp".to_string(),
        platform: "ios".to_string(),
        deployment_target: "13.0".to_string(),
        configurations: ConfigurationList {
            default_configuration_name: "Dev".to_string(),
            configurations: vec![BuildConfiguration::new("Dev")],
        },
        build_phases: Vec::new(),
    }
}

fn resource_paths(target: &Target) -> Vec<String> {
    target
        .phase_files(PhaseKind::Resources)
        .iter()
        .map(|f| f.path.clone())
        .collect()
}

#[test]
fn mirrors_files_and_nested_groups() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("a.png"), b"a").unwrap();
    let sub = tmp.path().join("sub");
    std::fs::create_dir(&sub).unwrap();
    std::fs::write(sub.join("b.txt"), b"b").unwrap();

    let mut group = Group::new("root");
    let mut target = target();
    mirror_tree(tmp.path(), &mut group, &mut target, true).unwrap();

    let resources = resource_paths(&target);
    assert!(resources.contains(&"a.png".to_string()));
    assert!(resources.contains(&"b.txt".to_string()));

    let sub_group = group.child_group("sub").unwrap();
    let sub_files: Vec<_> = sub_group.files().map(|f| f.path.as_str()).collect();
    assert_eq!(sub_files, vec!["b.txt"]);
}

#[test]
fn skips_os_metadata() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join(".DS_Store"), b"junk").unwrap();
    std::fs::write(tmp.path().join("real.png"), b"img").unwrap();

    let mut group = Group::new("root");
    let mut target = target();
    mirror_tree(tmp.path(), &mut group, &mut target, true).unwrap();

    let resources = resource_paths(&target);
    assert_eq!(resources, vec!["real.png"]);
}

#[test]
fn asset_catalog_is_an_atomic_leaf() {
    let tmp = TempDir::new().unwrap();
    let catalog = tmp.path().join("Images.xcassets");
    std::fs::create_dir(&catalog).unwrap();
    std::fs::write(catalog.join("inner.png"), b"x").unwrap();

    let mut group = Group::new("root");
    let mut target = target();
    mirror_tree(tmp.path(), &mut group, &mut target, true).unwrap();

    let resources = resource_paths(&target);
    assert_eq!(resources, vec!["Images.xcassets"]);
    // The catalog is a file reference, not a group, and is never descended into.
    assert!(group.child_group("Images.xcassets").is_none());
    let files: Vec<_> = group.files().map(|f| f.path.as_str()).collect();
    assert_eq!(files, vec!["Images.xcassets"]);
}

#[test]
fn siblings_after_a_catalog_are_still_processed() {
    let tmp = TempDir::new().unwrap();
    std::fs::create_dir(tmp.path().join("A.xcassets")).unwrap();
    std::fs::create_dir(tmp.path().join("B.xcassets")).unwrap();
    std::fs::write(tmp.path().join("z.txt"), b"z").unwrap();

    let mut group = Group::new("root");
    let mut target = target();
    mirror_tree(tmp.path(), &mut group, &mut target, true).unwrap();

    let resources = resource_paths(&target);
    // Enumeration order is not guaranteed; assert membership only.
    assert_eq!(resources.len(), 3);
    for expected in ["A.xcassets", "B.xcassets", "z.txt"] {
        assert!(resources.contains(&expected.to_string()), "{expected}");
    }
}

#[test]
fn missing_directory_is_skipped() {
    let tmp = TempDir::new().unwrap();
    let mut group = Group::new("root");
    let mut target = target();
    mirror_tree(&tmp.path().join("absent"), &mut group, &mut target, true).unwrap();
    assert!(resource_paths(&target).is_empty());
    assert!(group.children.is_empty());
}
