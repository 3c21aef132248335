//! The reference index: every declared reference, grouped by the name of
//! the assembly it refers to.
//!
//! Aggregation is a pure pass over the scanned assemblies in the order the
//! caller presents them (the loader sorts ascending by assembly name), with
//! insertion order preserved inside each group. No deduplication happens
//! here: two assemblies requesting the identical version both appear,
//! each attributed to its requester.

use std::collections::HashMap;
use std::sync::Arc;

use indexmap::IndexMap;
use thiserror::Error;
use tracing::debug;

use refscope_core::identity::AssemblyIdentity;
use refscope_core::reference::{AssemblyReference, ScannedAssembly};
use refscope_core::version::ParseVersionError;

/// All references to one assembly name, in scan order.
///
/// Invariant: never empty, and every entry's `name` equals the group name
/// under case-insensitive comparison. `name` keeps the first-seen casing.
#[derive(Debug, Clone)]
pub struct ReferenceGroup {
    pub name: String,
    pub references: Vec<AssemblyReference>,
}

/// A declared reference whose version text failed validation. The single
/// entry is dropped and reported; the rest of the run continues.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{assembly}: reference '{reference}': {error}")]
pub struct InvalidReference {
    pub assembly: String,
    pub reference: String,
    pub error: ParseVersionError,
}

/// Insertion-ordered map from case-insensitive assembly name to its group.
#[derive(Debug, Default)]
pub struct ReferenceIndex {
    groups: IndexMap<String, ReferenceGroup>,
}

impl ReferenceIndex {
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Look up a group by name, case-insensitively.
    pub fn get(&self, name: &str) -> Option<&ReferenceGroup> {
        self.groups.get(&name.to_lowercase())
    }

    /// Groups in insertion (first-sight) order.
    pub fn iter(&self) -> impl Iterator<Item = &ReferenceGroup> {
        self.groups.values()
    }

    /// Groups in ascending case-insensitive name order, the order the
    /// resolver processes them in.
    pub fn groups_by_name(&self) -> Vec<&ReferenceGroup> {
        let mut groups: Vec<&ReferenceGroup> = self.groups.values().collect();
        groups.sort_by_key(|g| g.name.to_lowercase());
        groups
    }

    fn push(&mut self, reference: AssemblyReference) {
        self.groups
            .entry(reference.name.to_lowercase())
            .or_insert_with(|| ReferenceGroup {
                name: reference.name.clone(),
                references: Vec::new(),
            })
            .references
            .push(reference);
    }
}

/// The index plus the references that failed version validation.
#[derive(Debug)]
pub struct IndexResult {
    pub index: ReferenceIndex,
    pub invalid: Vec<InvalidReference>,
}

/// Build the reference index from scanned assemblies, in input order.
///
/// A reference whose version string is not a 4-part numeric version yields
/// an [`InvalidReference`] entry instead of aborting the run.
pub fn build_index(assemblies: &[ScannedAssembly]) -> IndexResult {
    let mut index = ReferenceIndex::default();
    let mut invalid = Vec::new();

    for assembly in assemblies {
        for raw in &assembly.references {
            match raw.version.parse() {
                Ok(version) => index.push(AssemblyReference {
                    name: raw.name.clone(),
                    version_string: raw.version.clone(),
                    version,
                    referenced_by: Arc::clone(&assembly.identity),
                }),
                Err(error) => invalid.push(InvalidReference {
                    assembly: assembly.identity.name.clone(),
                    reference: raw.name.clone(),
                    error,
                }),
            }
        }
    }

    debug!(
        assemblies = assemblies.len(),
        groups = index.len(),
        invalid = invalid.len(),
        "built reference index"
    );

    IndexResult { index, invalid }
}

/// Map each assembly name (case-insensitive) to the identity physically
/// present under that name. First scanned identity wins per name.
pub fn installed_lookup(
    assemblies: &[ScannedAssembly],
) -> HashMap<String, Arc<AssemblyIdentity>> {
    let mut lookup = HashMap::new();
    for assembly in assemblies {
        lookup
            .entry(assembly.identity.name_key())
            .or_insert_with(|| Arc::clone(&assembly.identity));
    }
    lookup
}
