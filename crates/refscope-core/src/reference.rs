//! Declared assembly references, raw and attributed.

use std::sync::Arc;

use crate::identity::AssemblyIdentity;
use crate::version::AssemblyVersion;

/// One declared reference as read from an assembly's metadata, before
/// version validation: the referenced name and the exact version text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawReference {
    pub name: String,
    pub version: String,
}

/// A successfully parsed assembly together with its declared references.
///
/// This is the record the metadata reader hands to the index builder.
#[derive(Debug, Clone)]
pub struct ScannedAssembly {
    pub identity: Arc<AssemblyIdentity>,
    pub references: Vec<RawReference>,
}

/// A validated reference attributed to the assembly that declared it.
///
/// `version_string` is the exact text from the metadata and drives
/// distinctness checks; `version` is its parsed value and drives ordering.
/// The referencing identity is shared read-only.
#[derive(Debug, Clone)]
pub struct AssemblyReference {
    pub name: String,
    pub version_string: String,
    pub version: AssemblyVersion,
    pub referenced_by: Arc<AssemblyIdentity>,
}
