//! Assembly version parsing and comparison.
//!
//! .NET assembly versions are 4-part numeric versions (`major.minor.build.
//! revision`) compared lexicographically component by component. Shorter
//! forms are accepted on input with the missing components read as zero, so
//! `"1.0"` parses equal to `"1.0.0.0"` while remaining a distinct string.
//! Semver cannot represent four numeric components, hence the hand-written
//! type.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};
use thiserror::Error;

/// A parsed 4-part assembly version.
///
/// Ordering is the strict total order on `(major, minor, build, revision)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AssemblyVersion {
    pub major: u32,
    pub minor: u32,
    pub build: u32,
    pub revision: u32,
}

/// Failure to parse a version string as a 4-part numeric version.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseVersionError {
    #[error("empty version string")]
    Empty,
    #[error("too many components in version '{0}' (at most 4)")]
    TooManyComponents(String),
    #[error("invalid component '{component}' in version '{version}'")]
    InvalidComponent { version: String, component: String },
}

impl AssemblyVersion {
    pub fn new(major: u32, minor: u32, build: u32, revision: u32) -> Self {
        Self {
            major,
            minor,
            build,
            revision,
        }
    }
}

impl fmt::Display for AssemblyVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}.{}",
            self.major, self.minor, self.build, self.revision
        )
    }
}

impl FromStr for AssemblyVersion {
    type Err = ParseVersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseVersionError::Empty);
        }

        let mut components = [0u32; 4];
        let mut count = 0;
        for part in s.split('.') {
            if count == 4 {
                return Err(ParseVersionError::TooManyComponents(s.to_string()));
            }
            components[count] = part.parse::<u32>().map_err(|_| {
                ParseVersionError::InvalidComponent {
                    version: s.to_string(),
                    component: part.to_string(),
                }
            })?;
            count += 1;
        }

        Ok(Self {
            major: components[0],
            minor: components[1],
            build: components[2],
            revision: components[3],
        })
    }
}

impl Serialize for AssemblyVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
