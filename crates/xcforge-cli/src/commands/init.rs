use std::path::Path;

use miette::Result;

use xcforge_util::errors::XcforgeError;

pub fn exec(directory: Option<&Path>, quiet: bool) -> Result<()> {
    let dir = match directory {
        Some(dir) => dir.to_path_buf(),
        None => std::env::current_dir().map_err(XcforgeError::Io)?,
    };
    xcforge_ops::ops_init::init(&dir, quiet)
}
