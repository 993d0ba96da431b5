//! Scalar MUM64 / VMUM driver: seed/length fold, block mixer, tail mixer,
//! finalisation.

use super::primitive::{mum, mum_add};
use crate::kernels::constants::{BLOCK_CONSTS, C_FINAL, C_INIT, C_LEN, TAIL_CONSTS, TAIL_PARTIAL_CONST};

/// Bytes per full block mixer iteration: 8 words of 8 bytes each.
pub const BLOCK_SIZE: usize = 64;

/// Read one little-endian `u64` word out of a slice known to hold at least
/// 8 bytes. Unaligned loads are tolerated on every target this crate
/// supports; where they are not, the byte-wise `from_le_bytes` assembly
/// below degrades to an explicit byte-by-byte load with no change in
/// result, keeping digests architecture-independent.
#[inline]
fn load_u64_le(bytes: &[u8]) -> u64 {
    let mut buf = [0u8; 8];
    buf.copy_from_slice(&bytes[..8]);
    u64::from_le_bytes(buf)
}

/// Read a little-endian `u64` from a residual slice shorter than 8 bytes,
/// zero-padding the missing high-order bytes.
#[inline]
fn load_partial_u64_le(bytes: &[u8]) -> u64 {
    let mut buf = [0u8; 8];
    buf[..bytes.len()].copy_from_slice(bytes);
    u64::from_le_bytes(buf)
}

/// Mix one 64-byte block into `state`. The inner loop is a fixed `0..8`
/// bound over a constant array so the compiler can unroll it fully, the
/// same discipline the rest of this codebase applies to its own
/// fixed-round mixing loops.
pub fn block_mixer(state: u64, block: &[u8]) -> u64 {
    debug_assert_eq!(block.len(), BLOCK_SIZE);
    let mut state = state;
    for j in 0..8 {
        let word = load_u64_le(&block[j * 8..j * 8 + 8]);
        state ^= mum_add(word, BLOCK_CONSTS[j]);
    }
    state
}

/// Mix the residual tail (`R = L mod 64` bytes, `R < 64`) into `state`:
/// full trailing 8-byte words first, then one zero-padded partial word if
/// `R` is not a multiple of 8.
pub fn tail_mixer(state: u64, tail: &[u8]) -> u64 {
    debug_assert!(tail.len() < BLOCK_SIZE);
    let mut state = state;
    let full_words = tail.len() / 8;
    for i in 0..full_words {
        let word = load_u64_le(&tail[i * 8..i * 8 + 8]);
        state ^= mum_add(word, TAIL_CONSTS[i]);
    }
    let consumed = full_words * 8;
    if consumed < tail.len() {
        let partial = load_partial_u64_le(&tail[consumed..]);
        state ^= mum_add(partial, TAIL_PARTIAL_CONST);
    }
    state
}

/// Scalar MUM64 one-shot hash over `key`, with no vector-layer
/// participation (the driver that engages the vector layer lives in
/// `oneshot.rs`; this function is also the bit-identical fallback used to
/// verify the vector layer's claim of equivalence).
#[must_use]
pub fn scalar_hash64(key: &[u8], seed: u64) -> u64 {
    let len = key.len() as u64;
    let mut state = mum(seed ^ C_INIT, len ^ C_LEN);

    let mut off = 0;
    while key.len() - off >= BLOCK_SIZE {
        state = block_mixer(state, &key[off..off + BLOCK_SIZE]);
        off += BLOCK_SIZE;
    }
    state = tail_mixer(state, &key[off..]);

    mum(state, C_FINAL)
}

/// Continue a MUM64 computation whose seed/length fold and some prefix of
/// the key have already been absorbed by the vector layer, picking up with
/// `state` as the running accumulator and `rest` as the unconsumed
/// remainder of the key (always `< 512` bytes after a vector pass, per the
/// 32-byte vector step granularity).
#[must_use]
pub fn continue_hash64(mut state: u64, rest: &[u8]) -> u64 {
    let mut off = 0;
    while rest.len() - off >= BLOCK_SIZE {
        state = block_mixer(state, &rest[off..off + BLOCK_SIZE]);
        off += BLOCK_SIZE;
    }
    state = tail_mixer(state, &rest[off..]);
    mum(state, C_FINAL)
}

/// The seed/length fold alone, exposed so the vector-engaging driver in
/// `oneshot.rs` can compute the same initial state before dispatching to a
/// vector kernel.
#[must_use]
pub fn initial_state(seed: u64, len: usize) -> u64 {
    mum(seed ^ C_INIT, len as u64 ^ C_LEN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_key_is_deterministic() {
        assert_eq!(scalar_hash64(&[], 0), scalar_hash64(&[], 0));
    }

    #[test]
    fn differing_seeds_usually_differ() {
        assert_ne!(scalar_hash64(b"abc", 0), scalar_hash64(b"abc", 1));
    }

    #[test]
    fn block_and_tail_cover_every_residual_length() {
        // Exercise every residual length 0..=63 (every arm of the tail
        // mixer's dispatch, including the partial-word branch).
        let key: Vec<u8> = (0..600u32).map(|i| i as u8).collect();
        let mut seen = std::collections::HashSet::new();
        for len in 0..key.len() {
            seen.insert(scalar_hash64(&key[..len], 7));
        }
        assert_eq!(seen.len(), key.len());
    }
}
