use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::Path;

use xcforge_util::errors::XcforgeError;

/// File name of the manifest, placed next to the project file.
pub const MANIFEST_FILE_NAME: &str = ".xcforge.json";

/// The parsed representation of a `.xcforge.json` manifest.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub targets: Vec<TargetEntry>,

    /// Plist overrides applied to every synthesized target, below the
    /// per-target `info_plist` keys in precedence.
    #[serde(default)]
    pub global_info_keys: BTreeMap<String, Value>,
}

/// One desired target: its name, asset sources, and plist overrides.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetEntry {
    pub name: String,

    /// Remote icon source; its presence requests an app-icon set.
    #[serde(default)]
    pub icon_url: Option<String>,

    /// Local icon source; its presence also requests an app-icon set.
    #[serde(default)]
    pub icon_path: Option<String>,

    /// Whether to name a launch-image set in build settings.
    #[serde(default)]
    pub launch_images: bool,

    /// Place the derived plist in a per-target directory.
    #[serde(default)]
    pub create_plist_directory: bool,

    /// Base URL for the remote asset catalogs (icon, banner, launch, logo).
    #[serde(default)]
    pub assets_url: Option<String>,

    /// URL of the launch video.
    #[serde(default)]
    pub video_url: Option<String>,

    /// Per-target plist overrides; highest precedence.
    #[serde(default)]
    pub info_plist: BTreeMap<String, Value>,
}

impl TargetEntry {
    /// An icon set is only named in build settings when the manifest
    /// requested one, by URL or by local path.
    pub fn wants_icon(&self) -> bool {
        self.icon_url.is_some() || self.icon_path.is_some()
    }
}

impl Manifest {
    pub fn from_path(path: &Path) -> miette::Result<Self> {
        let text = std::fs::read_to_string(path).map_err(XcforgeError::Io)?;
        serde_json::from_str(&text).map_err(|e| {
            XcforgeError::Manifest {
                message: format!("{}: {e}", path.display()),
            }
            .into()
        })
    }

    /// Template manifest written by `xcforge init`.
    pub fn template() -> &'static str {
        r#"{
  "targets": [
    {
      "name": "TargetName",
      "icon_url": "https://somewhere.net/img.png",
      "info_plist": {
        "CFBundleId": "com.company.target"
      }
    },
    {
      "name": "Target2",
      "icon_path": "relative/path/to/file.png",
      "info_plist": {
        "CFBundleId": "com.company.target"
      }
    }
  ],
  "global_info_keys": {
    "somekey": "somevalue"
  }
}
"#
    }
}
