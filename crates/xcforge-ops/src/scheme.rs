//! Shared scheme creation for synthesized targets.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use xcforge_util::errors::XcforgeError;
use xcforge_util::fs::ensure_dir;

/// A shared build/launch/archive scheme persisted next to the project graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scheme {
    pub name: String,
    pub build_action: BuildAction,
    pub launch_action: LaunchAction,
    pub archive_action: ArchiveAction,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildAction {
    pub targets: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaunchAction {
    pub build_configuration: String,
    pub runnable: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchiveAction {
    pub build_configuration: String,
}

impl Scheme {
    /// Build+launch+archive scheme bound to one target; launch and archive
    /// use the Production configuration.
    pub fn for_target(target: &str) -> Self {
        Self {
            name: target.to_string(),
            build_action: BuildAction {
                targets: vec![target.to_string()],
            },
            launch_action: LaunchAction {
                build_configuration: "Production".to_string(),
                runnable: format!("{target}.app"),
            },
            archive_action: ArchiveAction {
                build_configuration: "Production".to_string(),
            },
        }
    }

    /// Persist as a shared scheme under `xcshareddata/xcschemes` alongside
    /// the project storage. Returns the written path.
    pub fn save(&self, project_storage: &Path) -> miette::Result<PathBuf> {
        let dir = project_storage
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join("xcshareddata")
            .join("xcschemes");
        ensure_dir(&dir).map_err(XcforgeError::Io)?;
        let path = dir.join(format!("{}.xcscheme.json", self.name));
        let text = serde_json::to_string_pretty(self).map_err(|e| XcforgeError::Generic {
            message: format!("Failed to serialize scheme: {e}"),
        })?;
        std::fs::write(&path, text).map_err(XcforgeError::Io)?;
        Ok(path)
    }
}
