//! Conflict detection and resolution reporting.
//!
//! A group conflicts when its references disagree on the requested version
//! *string*. Distinctness is exact string equality; the parsed values only
//! drive the display ordering. Keeping the two operations separate makes
//! the edge case of textually different but numerically equal strings
//! (`"1.0"` vs `"1.0.0.0"`) an explicit, tested behavior: they count as a
//! conflict.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use refscope_core::identity::AssemblyIdentity;
use refscope_core::version::AssemblyVersion;

use crate::index::{ReferenceGroup, ReferenceIndex};
use crate::redirect::BindingRedirect;

/// Name prefixes treated as framework assemblies by `skip_system`.
/// Prefix match, not substring match, and case-sensitive.
pub const SYSTEM_PREFIXES: [&str; 2] = ["System", "mscorlib"];

/// Number of distinct visual markers.
const PALETTE_SIZE: usize = 6;

/// Mode flags for [`resolve`].
#[derive(Debug, Default, Clone, Copy)]
pub struct ResolveOptions {
    /// Also report groups where every reference agrees on one version.
    pub include_all: bool,
    /// Skip groups whose name starts with a [`SYSTEM_PREFIXES`] entry.
    pub skip_system: bool,
    /// Compute binding redirects for groups with an installed assembly.
    pub redirects: bool,
}

/// An abstract visual marker for one version slot.
///
/// Within a group the same version string always gets the same marker;
/// assignment is the pure function `slot mod 6` over the display ordering,
/// so marker identity is deterministic but carries no meaning across groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Marker {
    Green,
    Red,
    Yellow,
    Cyan,
    Blue,
    Magenta,
}

impl Marker {
    pub fn from_slot(slot: usize) -> Self {
        match slot % PALETTE_SIZE {
            0 => Marker::Green,
            1 => Marker::Red,
            2 => Marker::Yellow,
            3 => Marker::Cyan,
            4 => Marker::Blue,
            _ => Marker::Magenta,
        }
    }
}

/// One report row: a declared reference, in original scan order.
#[derive(Debug, Clone, Serialize)]
pub struct ReferenceRow {
    pub version: String,
    pub referenced_by: String,
    pub marker: Marker,
}

/// The resolved report for one reference group.
#[derive(Debug, Clone, Serialize)]
pub struct GroupReport {
    pub name: String,
    /// Version of the assembly physically present under this name, if any.
    pub installed: Option<AssemblyVersion>,
    /// Distinct requested version strings in display order: descending by
    /// parsed value, with the installed version pinned to the front.
    pub versions: Vec<String>,
    pub rows: Vec<ReferenceRow>,
    pub conflicting: bool,
}

/// All resolved groups, plus binding redirects when they were requested.
#[derive(Debug, Default, Serialize)]
pub struct ConflictReport {
    pub groups: Vec<GroupReport>,
    pub redirects: Vec<BindingRedirect>,
}

impl ConflictReport {
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Resolve every group in the index, in ascending-by-name order.
///
/// Each group is processed independently against the read-only `installed`
/// lookup; a name with no installed assembly simply has no installed
/// version and no redirect.
pub fn resolve(
    index: &ReferenceIndex,
    installed: &HashMap<String, Arc<AssemblyIdentity>>,
    options: ResolveOptions,
) -> ConflictReport {
    let mut report = ConflictReport::default();

    for group in index.groups_by_name() {
        if options.skip_system && is_system(&group.name) {
            continue;
        }

        let distinct = distinct_version_strings(group);
        let conflicting = distinct.len() > 1;
        if !options.include_all && !conflicting {
            continue;
        }

        let bin = installed.get(&group.name.to_lowercase());
        let versions = display_ordering(group, bin.map(|b| b.version));

        let slots: HashMap<&str, usize> = versions
            .iter()
            .enumerate()
            .map(|(slot, version)| (version.as_str(), slot))
            .collect();

        let rows: Vec<ReferenceRow> = group
            .references
            .iter()
            .map(|reference| {
                let slot = *slots
                    .get(reference.version_string.as_str())
                    .expect("requested version present in display ordering");
                ReferenceRow {
                    version: reference.version_string.clone(),
                    referenced_by: reference.referenced_by.name.clone(),
                    marker: Marker::from_slot(slot),
                }
            })
            .collect();

        if options.redirects {
            if let Some(bin) = bin {
                report.redirects.push(BindingRedirect {
                    name: group.name.clone(),
                    public_key_token: bin.public_key_token_hex(),
                    culture: bin.culture_or_neutral().to_string(),
                    old_version_ceiling: max_requested(group),
                    new_version: bin.version,
                });
            }
        }

        report.groups.push(GroupReport {
            name: group.name.clone(),
            installed: bin.map(|b| b.version),
            versions,
            rows,
            conflicting,
        });
    }

    debug!(
        groups = report.groups.len(),
        redirects = report.redirects.len(),
        "resolved reference index"
    );

    report
}

/// The distinct requested version strings of a group, by exact string
/// equality, in first-appearance order.
pub fn distinct_version_strings(group: &ReferenceGroup) -> Vec<String> {
    let mut distinct: Vec<String> = Vec::new();
    for reference in &group.references {
        if !distinct.iter().any(|seen| seen == &reference.version_string) {
            distinct.push(reference.version_string.clone());
        }
    }
    distinct
}

/// Display ordering for a group's distinct version strings: descending by
/// parsed value, ties broken by first appearance, with the installed
/// version's string moved (or inserted) at the front when one exists.
///
/// This ordering assigns each version its classification slot; it does not
/// pick the redirect target.
pub fn display_ordering(
    group: &ReferenceGroup,
    installed: Option<AssemblyVersion>,
) -> Vec<String> {
    let mut distinct: Vec<(String, AssemblyVersion)> = Vec::new();
    for reference in &group.references {
        if !distinct.iter().any(|(seen, _)| seen == &reference.version_string) {
            distinct.push((reference.version_string.clone(), reference.version));
        }
    }
    distinct.sort_by(|a, b| b.1.cmp(&a.1));

    let mut ordering: Vec<String> = distinct.into_iter().map(|(version, _)| version).collect();
    if let Some(installed) = installed {
        let pinned = installed.to_string();
        ordering.retain(|version| version != &pinned);
        ordering.insert(0, pinned);
    }
    ordering
}

/// The highest parsed version any reference in the group requested, used
/// as the redirect range ceiling. The ceiling is the requested maximum
/// even when the installed version is lower.
fn max_requested(group: &ReferenceGroup) -> AssemblyVersion {
    group
        .references
        .iter()
        .map(|reference| reference.version)
        .max()
        .expect("reference groups are never empty")
}

fn is_system(name: &str) -> bool {
    SYSTEM_PREFIXES.iter().any(|prefix| name.starts_with(prefix))
}

impl fmt::Display for GroupReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Reference: {}", self.name)?;
        if let Some(installed) = self.installed {
            writeln!(f, "  installed: {installed}")?;
        }
        for row in &self.rows {
            writeln!(f, "  {} referenced by {}", row.version, row.referenced_by)?;
        }
        Ok(())
    }
}

impl fmt::Display for ConflictReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.groups.is_empty() {
            return write!(f, "No version conflicts.");
        }
        for group in &self.groups {
            write!(f, "{group}")?;
        }
        Ok(())
    }
}
