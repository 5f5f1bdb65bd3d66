use std::path::Path;
use std::time::Duration;

use miette::Result;

use xcforge_assets::fetch::DEFAULT_TIMEOUT;
use xcforge_ops::ops_sync::{self, SyncOptions};
use xcforge_util::errors::XcforgeError;

pub async fn exec(directory: Option<&Path>, timeout: Option<u64>, quiet: bool) -> Result<()> {
    let dir = match directory {
        Some(dir) => dir.to_path_buf(),
        None => std::env::current_dir().map_err(XcforgeError::Io)?,
    };
    let options = SyncOptions {
        quiet,
        timeout: timeout.map(Duration::from_secs).unwrap_or(DEFAULT_TIMEOUT),
    };
    ops_sync::sync(&dir, &options).await
}
