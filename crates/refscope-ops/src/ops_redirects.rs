//! Operation: emit binding-redirect configuration fragments.

use std::path::Path;

use refscope_resolver::conflict::ResolveOptions;
use refscope_resolver::redirect;

use crate::ops_scan::analyze;

/// Scan `dir` and print the redirect fragment for every conflicting
/// reference whose assembly is installed there.
pub fn redirects(dir: &Path, include_system: bool) -> miette::Result<()> {
    let report = analyze(
        dir,
        ResolveOptions {
            include_all: false,
            skip_system: !include_system,
            redirects: true,
        },
    )?;

    if report.redirects.is_empty() {
        println!("No redirect candidates (no conflicting reference is installed here).");
        return Ok(());
    }

    println!("{}", redirect::to_config_fragment(&report.redirects)?);
    Ok(())
}
