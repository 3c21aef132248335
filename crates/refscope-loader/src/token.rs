//! Public-key-token derivation.
//!
//! The token is the last 8 bytes of the public key's digest, reversed.
//! The digest algorithm comes from the assembly manifest's
//! `AssemblyHashAlgorithm`: MD5 when declared, SHA-1 for everything else
//! (including the unspecified algorithm 0).

use md5::{Digest, Md5};
use sha1::Sha1;

/// `AssemblyHashAlgorithm` identifier for MD5.
pub const HASH_ALG_MD5: u32 = 0x8003;
/// `AssemblyHashAlgorithm` identifier for SHA-1.
pub const HASH_ALG_SHA1: u32 = 0x8004;

/// Derive the 8-byte public-key token from a full public key.
pub fn from_public_key(public_key: &[u8], hash_alg_id: u32) -> Vec<u8> {
    let digest: Vec<u8> = match hash_alg_id {
        HASH_ALG_MD5 => Md5::digest(public_key).to_vec(),
        _ => Sha1::digest(public_key).to_vec(),
    };

    let mut token = digest[digest.len() - 8..].to_vec();
    token.reverse();
    token
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The ECMA-335 standard public key, whose token is the well-known
    /// `b77a5c561934e089` of the framework assemblies.
    const ECMA_KEY: [u8; 16] = [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x04, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00,
    ];

    #[test]
    fn ecma_key_yields_the_framework_token() {
        let token = from_public_key(&ECMA_KEY, HASH_ALG_SHA1);
        assert_eq!(refscope_util::hex::encode(&token), "b77a5c561934e089");
    }

    #[test]
    fn unspecified_algorithm_falls_back_to_sha1() {
        assert_eq!(
            from_public_key(&ECMA_KEY, 0),
            from_public_key(&ECMA_KEY, HASH_ALG_SHA1)
        );
    }

    #[test]
    fn sha1_token_for_short_key() {
        let token = from_public_key(&[0xAB, 0x01], HASH_ALG_SHA1);
        assert_eq!(refscope_util::hex::encode(&token), "240d5afa3371eb4f");
    }

    #[test]
    fn md5_token_for_short_key() {
        let token = from_public_key(&[0xAB, 0x01], HASH_ALG_MD5);
        assert_eq!(refscope_util::hex::encode(&token), "2b257d2a9f6f07ef");
    }

    #[test]
    fn token_is_eight_bytes() {
        assert_eq!(from_public_key(&ECMA_KEY, HASH_ALG_SHA1).len(), 8);
        assert_eq!(from_public_key(&ECMA_KEY, HASH_ALG_MD5).len(), 8);
    }
}
