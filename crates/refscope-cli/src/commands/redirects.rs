//! Handler for `refscope redirects`.

use std::path::PathBuf;

use miette::Result;

use refscope_ops::ops_redirects;

pub fn exec(dir: Option<PathBuf>, system: bool) -> Result<()> {
    let dir = match dir {
        Some(dir) => dir,
        None => std::env::current_dir().map_err(refscope_util::errors::RefscopeError::Io)?,
    };

    ops_redirects::redirects(&dir, system)
}
