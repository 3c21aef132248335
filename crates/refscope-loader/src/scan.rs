//! Directory scanning: locate candidate binaries and read their metadata.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use dotscope::CilObject;
use thiserror::Error;
use tracing::debug;

use refscope_core::identity::AssemblyIdentity;
use refscope_core::reference::{RawReference, ScannedAssembly};
use refscope_core::version::AssemblyVersion;
use refscope_util::errors::RefscopeError;

use crate::token;

/// Why a candidate file contributed no assembly.
#[derive(Debug, Error)]
pub enum SkipReason {
    /// The file could not be parsed as a .NET binary.
    #[error("not a readable .NET assembly: {0}")]
    Unreadable(String),
    /// The file is a module without an assembly manifest.
    #[error("no assembly manifest")]
    NoManifest,
}

/// A candidate file that was left out of the scan.
#[derive(Debug)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: SkipReason,
}

/// Result of scanning one directory.
#[derive(Debug, Default)]
pub struct ScanOutcome {
    /// Parsed assemblies, ascending by assembly name (case-insensitive).
    pub assemblies: Vec<ScannedAssembly>,
    pub skipped: Vec<SkippedFile>,
}

/// Scan `dir` (non-recursively) for `.dll`/`.exe` files and read each one's
/// identity and declared references.
///
/// Files that fail to parse land in [`ScanOutcome::skipped`] with a typed
/// reason; only a missing or unreadable directory is fatal.
pub fn scan_directory(dir: &Path) -> Result<ScanOutcome, RefscopeError> {
    if !dir.is_dir() {
        return Err(RefscopeError::Scan {
            message: format!("{} is not a directory", dir.display()),
        });
    }

    let mut candidates: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| is_candidate(path))
        .collect();
    candidates.sort();

    let mut outcome = ScanOutcome::default();
    for path in candidates {
        match load_assembly(&path) {
            Ok(assembly) => {
                debug!(path = %path.display(), name = %assembly.identity.name, "loaded assembly");
                outcome.assemblies.push(assembly);
            }
            Err(reason) => {
                debug!(path = %path.display(), %reason, "skipping file");
                outcome.skipped.push(SkippedFile { path, reason });
            }
        }
    }

    // Deterministic input order for the index builder; ties between file
    // names (Foo.dll + Foo.exe) keep path order.
    outcome
        .assemblies
        .sort_by_key(|assembly| assembly.identity.name.to_lowercase());

    Ok(outcome)
}

fn is_candidate(path: &Path) -> bool {
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());
    matches!(ext.as_deref(), Some("dll") | Some("exe")) && path.is_file()
}

fn load_assembly(path: &Path) -> Result<ScannedAssembly, SkipReason> {
    let object =
        CilObject::from_file(path).map_err(|e| SkipReason::Unreadable(e.to_string()))?;
    let assembly = object.assembly().ok_or(SkipReason::NoManifest)?;

    let public_key_token = match assembly.public_key.as_ref() {
        Some(key) if !key.is_empty() => token::from_public_key(key, assembly.hash_alg_id),
        _ => Vec::new(),
    };

    let identity = Arc::new(AssemblyIdentity {
        name: assembly.name.clone(),
        version: AssemblyVersion::new(
            assembly.major_version,
            assembly.minor_version,
            assembly.build_number,
            assembly.revision_number,
        ),
        public_key_token,
        culture: assembly.culture.clone().unwrap_or_default(),
    });

    let references = object
        .refs_assembly()
        .iter()
        .map(|entry| {
            let reference = entry.value();
            RawReference {
                name: reference.name.clone(),
                version: format!(
                    "{}.{}.{}.{}",
                    reference.major_version,
                    reference.minor_version,
                    reference.build_number,
                    reference.revision_number
                ),
            }
        })
        .collect();

    Ok(ScannedAssembly {
        identity,
        references,
    })
}
