//! Handler for `refscope scan`.

use std::path::PathBuf;

use miette::Result;

use refscope_ops::ops_scan::{self, ScanOptions};

pub fn exec(
    dir: Option<PathBuf>,
    all: bool,
    system: bool,
    redirects: bool,
    json: bool,
) -> Result<()> {
    let dir = match dir {
        Some(dir) => dir,
        None => std::env::current_dir().map_err(refscope_util::errors::RefscopeError::Io)?,
    };

    ops_scan::scan(
        &dir,
        &ScanOptions {
            all,
            system,
            redirects,
            json,
        },
    )
}
