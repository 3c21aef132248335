//! Operation: scan a directory and report reference version conflicts.

use std::path::Path;

use console::Style;

use refscope_loader::scan::scan_directory;
use refscope_resolver::conflict::{self, ConflictReport, GroupReport, Marker, ResolveOptions};
use refscope_resolver::index::{build_index, installed_lookup, IndexResult};
use refscope_resolver::redirect;
use refscope_util::errors::RefscopeError;
use refscope_util::progress;

/// Options for `refscope scan`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ScanOptions {
    /// Report references with a single requested version too.
    pub all: bool,
    /// Include System/mscorlib references.
    pub system: bool,
    /// Append binding-redirect fragments for installed assemblies.
    pub redirects: bool,
    /// Emit the report as JSON instead of the terminal view.
    pub json: bool,
}

/// Scan `dir` and print the conflict report.
pub fn scan(dir: &Path, opts: &ScanOptions) -> miette::Result<()> {
    let report = analyze(
        dir,
        ResolveOptions {
            include_all: opts.all,
            skip_system: !opts.system,
            redirects: opts.redirects,
        },
    )?;

    if opts.json {
        let json = serde_json::to_string_pretty(&report).map_err(|e| RefscopeError::Report {
            message: format!("failed to serialize report: {e}"),
        })?;
        println!("{json}");
        return Ok(());
    }

    if report.is_empty() {
        println!("No version conflicts.");
    } else {
        for group in &report.groups {
            print_group(group);
        }
    }

    if opts.redirects && !report.redirects.is_empty() {
        println!("{}", redirect::to_config_fragment(&report.redirects)?);
    }

    Ok(())
}

/// Scan `dir` and resolve its reference index. Shared by the scan and
/// redirects operations; skipped files and invalid references become
/// warnings on stderr.
pub(crate) fn analyze(dir: &Path, options: ResolveOptions) -> miette::Result<ConflictReport> {
    let spinner = progress::spinner(&format!("Scanning {}", dir.display()));
    let outcome = scan_directory(dir)?;
    spinner.finish_and_clear();

    progress::status(
        "Scanned",
        &format!("{} assemblies in {}", outcome.assemblies.len(), dir.display()),
    );
    for skipped in &outcome.skipped {
        progress::status_warn(
            "Skipped",
            &format!("{}: {}", skipped.path.display(), skipped.reason),
        );
    }

    let IndexResult { index, invalid } = build_index(&outcome.assemblies);
    for bad in &invalid {
        progress::status_warn("Invalid", &bad.to_string());
    }

    let installed = installed_lookup(&outcome.assemblies);
    Ok(conflict::resolve(&index, &installed, options))
}

fn marker_style(marker: Marker) -> Style {
    match marker {
        Marker::Green => Style::new().green(),
        Marker::Red => Style::new().red(),
        Marker::Yellow => Style::new().yellow(),
        Marker::Cyan => Style::new().cyan(),
        Marker::Blue => Style::new().blue(),
        Marker::Magenta => Style::new().magenta(),
    }
}

fn print_group(group: &GroupReport) {
    println!("Reference: {}", group.name);
    if let Some(installed) = group.installed {
        // Pinned to the front of the ordering, so always slot 0
        let style = marker_style(Marker::from_slot(0));
        println!("  installed: {}", style.apply_to(installed));
    }
    for row in &group.rows {
        let style = marker_style(row.marker);
        println!(
            "  {} referenced by {}",
            style.apply_to(&row.version),
            row.referenced_by
        );
    }
    println!();
}
