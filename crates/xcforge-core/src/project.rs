use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use xcforge_util::errors::XcforgeError;

use crate::group::Group;
use crate::target::{BuildConfiguration, ConfigurationList, Target};

/// The full build description: an ordered collection of targets, a tree of
/// logical groups, and a products group.
///
/// Owned exclusively by the running process for the duration of one command;
/// mutated in place and persisted at most once per synthesized target.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    #[serde(default)]
    pub targets: Vec<Target>,
    pub main_group: Group,
    pub products_group: Group,
    /// Storage location on disk; set by [`Project::open`], never serialized.
    #[serde(skip)]
    pub path: PathBuf,
}

impl Project {
    /// An empty project graph. The caller is responsible for setting
    /// [`Project::path`] before saving.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            targets: Vec::new(),
            main_group: Group::new("MainGroup"),
            products_group: Group::new("Products"),
            path: PathBuf::new(),
        }
    }

    /// Open the project graph found in `directory`.
    ///
    /// The directory is scanned for an entry whose name contains
    /// `.xcodeproj`; a directory entry stores the graph as `project.json`
    /// inside it, a file entry is the graph itself.
    pub fn open(directory: &Path) -> miette::Result<Self> {
        let storage = Self::locate(directory)
            // A `.xcodeproj` directory without a graph inside counts as no
            // project, the same as no `.xcodeproj` entry at all.
            .filter(|storage| storage.is_file())
            .ok_or_else(|| XcforgeError::ProjectNotFound {
                directory: directory.display().to_string(),
            })?;
        tracing::debug!(storage = %storage.display(), "opening project graph");
        let text = std::fs::read_to_string(&storage).map_err(XcforgeError::Io)?;
        let mut project: Project =
            serde_json::from_str(&text).map_err(|e| XcforgeError::Generic {
                message: format!("Malformed project graph at {}: {e}", storage.display()),
            })?;
        project.path = storage;
        Ok(project)
    }

    fn locate(directory: &Path) -> Option<PathBuf> {
        let entries = std::fs::read_dir(directory).ok()?;
        for entry in entries.flatten() {
            let file_name = entry.file_name();
            let name = file_name.to_string_lossy();
            if name.contains(".xcodeproj") {
                let path = entry.path();
                return Some(if path.is_dir() {
                    path.join("project.json")
                } else {
                    path
                });
            }
        }
        None
    }

    /// Commit: serialize the graph back to its storage location.
    pub fn save(&self) -> miette::Result<()> {
        let text = serde_json::to_string_pretty(self).map_err(|e| XcforgeError::Generic {
            message: format!("Failed to serialize project graph: {e}"),
        })?;
        std::fs::write(&self.path, text).map_err(XcforgeError::Io)?;
        Ok(())
    }

    pub fn target(&self, name: &str) -> Option<&Target> {
        self.targets.iter().find(|t| t.name == name)
    }

    pub fn has_target(&self, name: &str) -> bool {
        self.target(name).is_some()
    }

    /// Allocate a new application target using the first existing target as
    /// the template for platform and deployment version.
    ///
    /// Configuration names are cloned from the template's list with empty
    /// settings; values are filled in later by the settings merge. Fails on
    /// a name collision and when the project has no template target.
    pub fn new_target_from_main(&mut self, name: &str) -> miette::Result<&mut Target> {
        if self.has_target(name) {
            return Err(XcforgeError::TargetExists {
                name: name.to_string(),
            }
            .into());
        }
        let template = self.targets.first().ok_or_else(|| XcforgeError::Generic {
            message: "Project has no targets to use as a template".to_string(),
        })?;

        let configurations = ConfigurationList {
            default_configuration_name: template
                .configurations
                .default_configuration_name
                .clone(),
            configurations: template
                .configurations
                .configurations
                .iter()
                .map(|c| BuildConfiguration::new(&c.name))
                .collect(),
        };
        let target = Target {
            name: name.to_string(),
            platform: template.platform.clone(),
            deployment_target: template.deployment_target.clone(),
            configurations,
            build_phases: Vec::new(),
        };

        self.products_group.new_file(&format!("{name}.app"));
        self.targets.push(target);
        match self.targets.last_mut() {
            Some(target) => Ok(target),
            None => unreachable!("target was just pushed"),
        }
    }
}
