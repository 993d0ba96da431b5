//! Shared types used across the `mum-hash` library.

use core::fmt;

// =============================================================================
// MUM512 DIGEST
// =============================================================================

/// A `MUM512` digest: 512 bits, stored as 64 bytes (each of the eight
/// 64-bit limbs little-endian).
///
/// `Digest512` has no cryptographic pretensions — it exists so callers get a
/// value with a stable byte layout, an `AsRef<[u8]>` view, and a `Display`
/// impl instead of a bare `[u64; 8]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest512([u8; 64]);

impl Digest512 {
    /// Wrap eight limbs, as produced by `kernels::portable::mum512::hash512`.
    #[must_use]
    pub fn from_limbs(limbs: [u64; 8]) -> Self {
        let mut bytes = [0u8; 64];
        for (i, limb) in limbs.iter().enumerate() {
            bytes[i * 8..i * 8 + 8].copy_from_slice(&limb.to_le_bytes());
        }
        Self(bytes)
    }

    /// The digest as eight 64-bit limbs, little-endian order.
    #[must_use]
    pub fn as_limbs(&self) -> [u64; 8] {
        let mut limbs = [0u64; 8];
        for (i, limb) in limbs.iter_mut().enumerate() {
            let mut buf = [0u8; 8];
            buf.copy_from_slice(&self.0[i * 8..i * 8 + 8]);
            *limb = u64::from_le_bytes(buf);
        }
        limbs
    }

    /// The digest as 64 bytes, each limb little-endian.
    #[must_use]
    pub const fn to_bytes(&self) -> [u8; 64] {
        self.0
    }
}

impl AsRef<[u8]> for Digest512 {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Digest512 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl From<[u64; 8]> for Digest512 {
    fn from(limbs: [u64; 8]) -> Self {
        Self::from_limbs(limbs)
    }
}
