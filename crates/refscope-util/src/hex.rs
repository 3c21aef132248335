//! Lowercase hex encoding for public-key-token bytes.

/// Encode a byte slice as a lowercase hex string, zero-padded per byte.
pub fn encode(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}
