//! Public API layer: `MUM64`/`VMUM` and `MUM512` one-shot hashing.

use crate::engine;
use crate::kernels::portable::mum64;
use crate::types::Digest512;

// =============================================================================
// MUM64 / VMUM
// =============================================================================

/// 64-bit `MUM`/`VMUM` hash of `key` under `seed`.
///
/// Runs the scalar `MUM64` mixer end to end for keys under 512 bytes. Once
/// `key` reaches 512 bytes the vector MUM32 lane layer additionally folds
/// every complete 32-byte step before the scalar block/tail mixer picks up
/// the remainder — this is the `VMUM` construction, engaged automatically
/// rather than through a separate entry point.
///
/// # Example
/// ```rust
/// let digest = mum_hash::hash64(b"Performance Matters", 0);
/// assert_eq!(digest, mum_hash::hash64(b"Performance Matters", 0));
/// ```
#[must_use]
#[inline]
pub fn hash64(key: &[u8], seed: u64) -> u64 {
    if !engine::vector_gate(key.len()) {
        return mum64::scalar_hash64(key, seed);
    }
    drive_vector_hash64(key, seed)
}

/// Alias for [`hash64`]. `VMUM` is not a distinct algorithm from `MUM64`; it
/// is `MUM64` with the vector lane layer engaged above the 512-byte
/// threshold, which `hash64` already does on its own. Kept as a separate
/// name so callers can say which construction they mean without it changing
/// behaviour.
#[must_use]
#[inline]
pub fn vhash64(key: &[u8], seed: u64) -> u64 {
    hash64(key, seed)
}

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
fn drive_vector_hash64(key: &[u8], seed: u64) -> u64 {
    use crate::kernels::vector;

    let state = mum64::initial_state(seed, key.len());
    let vector_len = (key.len() / vector::VECTOR_BLOCK_SIZE) * vector::VECTOR_BLOCK_SIZE;
    let (vector_part, rest) = key.split_at(vector_len);

    let vacc = vector::fold(vector_part);
    let folded = vacc[0] ^ vacc[1] ^ vacc[2] ^ vacc[3];
    mum64::continue_hash64(state ^ folded, rest)
}

#[cfg(not(any(target_arch = "x86", target_arch = "x86_64")))]
fn drive_vector_hash64(key: &[u8], seed: u64) -> u64 {
    // No vector kernel exists on this architecture; `VMUM`'s 512-byte gate
    // still selects this path, but it degrades to the scalar mixer.
    mum64::scalar_hash64(key, seed)
}

// =============================================================================
// MUM512
// =============================================================================

/// 512-bit `MUM512` digest of `key` under a two-limb `seed`.
///
/// # Example
/// ```rust
/// let digest = mum_hash::hash512(b"Performance Matters", [0, 0]);
/// assert_eq!(digest, mum_hash::hash512(b"Performance Matters", [0, 0]));
/// ```
#[must_use]
#[inline]
pub fn hash512(key: &[u8], seed: [u64; 2]) -> Digest512 {
    Digest512::from_limbs(crate::kernels::portable::hash512(key, seed))
}
