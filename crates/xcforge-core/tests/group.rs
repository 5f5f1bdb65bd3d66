use xcforge_core::group::Group;

fn sample_tree() -> Group {
    let mut root = Group::new("MainGroup");
    let apps = root.new_group("Apps");
    apps.path = Some("Apps".to_string());
    let distll = root.new_group("Distll");
    distll
        .new_group("Resources")
        .new_group("Assets")
        .new_group("Videos");
    root
}

#[test]
fn child_group_matches_path() {
    let root = sample_tree();
    assert!(root.child_group("Apps").is_some());
}

#[test]
fn child_group_falls_back_to_name() {
    let root = sample_tree();
    // Distll has no explicit path.
    assert!(root.child_group("Distll").is_some());
}

#[test]
fn child_group_missing() {
    let root = sample_tree();
    assert!(root.child_group("Nope").is_none());
}

#[test]
fn group_at_path_resolves_chain() {
    let root = sample_tree();
    let videos = root.group_at_path("Distll/Resources/Assets/Videos");
    assert_eq!(videos.map(|g| g.name.as_str()), Some("Videos"));
}

#[test]
fn group_at_path_missing_link() {
    let root = sample_tree();
    assert!(root.group_at_path("Distll/Resources/Missing/Videos").is_none());
}

#[test]
fn new_group_inherits_source_tree() {
    let mut root = Group::new("root");
    root.source_tree = "SOURCE_ROOT".to_string();
    let child = root.new_group("child");
    assert_eq!(child.source_tree, "SOURCE_ROOT");
}

#[test]
fn new_file_is_listed() {
    let mut root = Group::new("root");
    root.new_file("a.png");
    root.new_file("b.png");
    let files: Vec<_> = root.files().map(|f| f.path.as_str()).collect();
    assert_eq!(files, vec!["a.png", "b.png"]);
}
