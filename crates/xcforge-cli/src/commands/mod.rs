//! Command dispatch and handler modules.

mod init;
mod sync;

use miette::Result;

use crate::cli::{Cli, Command};

/// Route a parsed CLI invocation to the appropriate command handler.
pub async fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Init { directory } => init::exec(directory.as_deref(), cli.quiet),
        Command::Sync { directory, timeout } => {
            sync::exec(directory.as_deref(), timeout, cli.quiet).await
        }
    }
}
