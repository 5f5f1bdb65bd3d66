use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::group::FileRef;

/// A named, independently buildable unit within the project graph.
///
/// Target names are unique across the project; creation fails rather than
/// overwriting an existing target.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Target {
    pub name: String,
    pub platform: String,
    pub deployment_target: String,
    pub configurations: ConfigurationList,
    #[serde(default)]
    pub build_phases: Vec<BuildPhase>,
}

/// Ordered list of build configurations plus the list's default name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigurationList {
    pub default_configuration_name: String,
    #[serde(default)]
    pub configurations: Vec<BuildConfiguration>,
}

/// A named variant of a target's build settings (e.g. `Dev`, `Production`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildConfiguration {
    pub name: String,
    #[serde(default)]
    pub build_settings: BTreeMap<String, String>,
    /// Reference to a base configuration file (e.g. a CocoaPods xcconfig).
    #[serde(default)]
    pub base_configuration: Option<String>,
}

impl BuildConfiguration {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            build_settings: BTreeMap::new(),
            base_configuration: None,
        }
    }
}

/// One ordered step category executed when building a target.
///
/// A target carries at most one phase each of `Sources`, `Frameworks`, and
/// `Resources`, and zero or more `ShellScript` phases.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BuildPhase {
    Sources { files: Vec<FileRef> },
    Frameworks { files: Vec<FileRef> },
    Resources { files: Vec<FileRef> },
    ShellScript { name: String, script: String },
}

/// Discriminant for the three file-reference phase kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseKind {
    Sources,
    Frameworks,
    Resources,
}

impl Target {
    /// Look up a configuration by exact name.
    pub fn configuration(&self, name: &str) -> Option<&BuildConfiguration> {
        self.configurations
            .configurations
            .iter()
            .find(|c| c.name == name)
    }

    /// File entries of the given phase kind, creating an empty phase if the
    /// target does not have one yet.
    pub fn phase_files_mut(&mut self, kind: PhaseKind) -> &mut Vec<FileRef> {
        let index = self.build_phases.iter().position(|phase| {
            matches!(
                (phase, kind),
                (BuildPhase::Sources { .. }, PhaseKind::Sources)
                    | (BuildPhase::Frameworks { .. }, PhaseKind::Frameworks)
                    | (BuildPhase::Resources { .. }, PhaseKind::Resources)
            )
        });
        let index = match index {
            Some(i) => i,
            None => {
                self.build_phases.push(match kind {
                    PhaseKind::Sources => BuildPhase::Sources { files: Vec::new() },
                    PhaseKind::Frameworks => BuildPhase::Frameworks { files: Vec::new() },
                    PhaseKind::Resources => BuildPhase::Resources { files: Vec::new() },
                });
                self.build_phases.len() - 1
            }
        };
        match &mut self.build_phases[index] {
            BuildPhase::Sources { files }
            | BuildPhase::Frameworks { files }
            | BuildPhase::Resources { files } => files,
            BuildPhase::ShellScript { .. } => unreachable!("index points at a file phase"),
        }
    }

    /// Read-only view of the given phase kind's file entries.
    pub fn phase_files(&self, kind: PhaseKind) -> &[FileRef] {
        self.build_phases
            .iter()
            .find_map(|phase| match (phase, kind) {
                (BuildPhase::Sources { files }, PhaseKind::Sources)
                | (BuildPhase::Frameworks { files }, PhaseKind::Frameworks)
                | (BuildPhase::Resources { files }, PhaseKind::Resources) => {
                    Some(files.as_slice())
                }
                _ => None,
            })
            .unwrap_or(&[])
    }

    /// Register a file as a copied resource of this target.
    pub fn add_resource(&mut self, path: &str) {
        self.phase_files_mut(PhaseKind::Resources).push(FileRef {
            path: path.to_string(),
        });
    }

    /// Append a new shell-script phase copying name and script verbatim.
    pub fn new_shell_script_phase(&mut self, name: &str, script: &str) {
        self.build_phases.push(BuildPhase::ShellScript {
            name: name.to_string(),
            script: script.to_string(),
        });
    }

    /// Shell-script phases in declaration order.
    pub fn shell_script_phases(&self) -> impl Iterator<Item = (&str, &str)> {
        self.build_phases.iter().filter_map(|phase| match phase {
            BuildPhase::ShellScript { name, script } => Some((name.as_str(), script.as_str())),
            _ => None,
        })
    }

    /// Drop the named configurations from the list if present.
    pub fn remove_configurations(&mut self, names: &[&str]) {
        self.configurations
            .configurations
            .retain(|c| !names.contains(&c.name.as_str()));
    }
}
