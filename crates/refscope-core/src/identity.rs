//! Assembly identities as read from a compiled assembly's manifest.

use std::fmt;

use serde::Serialize;

use crate::version::AssemblyVersion;

/// The identity of an assembly physically present in the scanned directory.
///
/// `name` is a case-insensitive identity; `public_key_token` is empty for
/// unsigned assemblies and `culture` is empty for culture-neutral ones.
/// Created once when an assembly file is successfully parsed, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssemblyIdentity {
    pub name: String,
    pub version: AssemblyVersion,
    pub public_key_token: Vec<u8>,
    pub culture: String,
}

impl AssemblyIdentity {
    /// The case-insensitive lookup key for this assembly's name.
    pub fn name_key(&self) -> String {
        self.name.to_lowercase()
    }

    /// The public-key token as lowercase hex, or the literal `"null"` for
    /// an unsigned assembly, as binding-redirect fragments expect it.
    pub fn public_key_token_hex(&self) -> String {
        if self.public_key_token.is_empty() {
            "null".to_string()
        } else {
            refscope_util::hex::encode(&self.public_key_token)
        }
    }

    /// The culture, with empty mapped to `"neutral"`.
    pub fn culture_or_neutral(&self) -> &str {
        if self.culture.is_empty() {
            "neutral"
        } else {
            &self.culture
        }
    }
}

impl fmt::Display for AssemblyIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, Version={}", self.name, self.version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(name: &str, token: Vec<u8>, culture: &str) -> AssemblyIdentity {
        AssemblyIdentity {
            name: name.to_string(),
            version: "1.0.0.0".parse().unwrap(),
            public_key_token: token,
            culture: culture.to_string(),
        }
    }

    #[test]
    fn empty_token_renders_null() {
        assert_eq!(identity("Lib", vec![], "").public_key_token_hex(), "null");
    }

    #[test]
    fn token_renders_lowercase_hex() {
        assert_eq!(
            identity("Lib", vec![0xAB, 0x01], "").public_key_token_hex(),
            "ab01"
        );
    }

    #[test]
    fn empty_culture_is_neutral() {
        assert_eq!(identity("Lib", vec![], "").culture_or_neutral(), "neutral");
        assert_eq!(
            identity("Lib", vec![], "en-US").culture_or_neutral(),
            "en-US"
        );
    }

    #[test]
    fn name_key_is_lowercase() {
        assert_eq!(identity("MyLib", vec![], "").name_key(), "mylib");
    }
}
