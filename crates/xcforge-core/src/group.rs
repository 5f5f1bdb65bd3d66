use serde::{Deserialize, Serialize};

/// A logical reference to a file resource, used both in groups and in
/// build phases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRef {
    pub path: String,
}

/// A child node of a [`Group`]: either a nested group or a file reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GroupChild {
    Group(Group),
    File(FileRef),
}

/// A logical folder node in the project's navigation tree.
///
/// Groups often mirror the filesystem but are not required to; `path` is the
/// optional on-disk path relative to the parent's source tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Group {
    pub name: String,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default = "default_source_tree")]
    pub source_tree: String,
    #[serde(default)]
    pub children: Vec<GroupChild>,
}

fn default_source_tree() -> String {
    "<group>".to_string()
}

impl Group {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            path: None,
            source_tree: default_source_tree(),
            children: Vec::new(),
        }
    }

    /// Append a nested group inheriting this group's source tree, and return
    /// a mutable reference to it.
    pub fn new_group(&mut self, name: &str) -> &mut Group {
        let child = Group {
            name: name.to_string(),
            path: None,
            source_tree: self.source_tree.clone(),
            children: Vec::new(),
        };
        self.children.push(GroupChild::Group(child));
        match self.children.last_mut() {
            Some(GroupChild::Group(group)) => group,
            _ => unreachable!("group was just pushed"),
        }
    }

    /// Append a file reference to this group.
    pub fn new_file(&mut self, path: &str) {
        self.children.push(GroupChild::File(FileRef {
            path: path.to_string(),
        }));
    }

    /// Look up a direct child group by its on-disk path, falling back to its
    /// logical name for path-less groups.
    pub fn child_group(&self, name: &str) -> Option<&Group> {
        self.children.iter().find_map(|child| match child {
            GroupChild::Group(g) if g.path.as_deref() == Some(name) || g.name == name => Some(g),
            _ => None,
        })
    }

    /// Mutable variant of [`Group::child_group`].
    pub fn child_group_mut(&mut self, name: &str) -> Option<&mut Group> {
        self.children.iter_mut().find_map(|child| match child {
            GroupChild::Group(g) if g.path.as_deref() == Some(name) || g.name == name => Some(g),
            _ => None,
        })
    }

    /// Resolve a slash-separated logical path (e.g.
    /// `Distll/Resources/Assets/Videos`) from this group.
    pub fn group_at_path(&self, path: &str) -> Option<&Group> {
        path.split('/').try_fold(self, |g, part| g.child_group(part))
    }

    /// Mutable variant of [`Group::group_at_path`].
    pub fn group_at_path_mut(&mut self, path: &str) -> Option<&mut Group> {
        path.split('/')
            .try_fold(self, |g, part| g.child_group_mut(part))
    }

    /// File references directly under this group.
    pub fn files(&self) -> impl Iterator<Item = &FileRef> {
        self.children.iter().filter_map(|child| match child {
            GroupChild::File(f) => Some(f),
            _ => None,
        })
    }
}
