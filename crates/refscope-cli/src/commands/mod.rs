//! Command dispatch and handler modules.

mod redirects;
mod scan;

use miette::Result;

use crate::cli::{Cli, Command};

/// Route a parsed CLI invocation to the appropriate command handler.
pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Scan {
            dir,
            all,
            system,
            redirects,
            json,
        } => scan::exec(dir, all, system, redirects, json),
        Command::Redirects { dir, system } => redirects::exec(dir, system),
    }
}
