//! Scalar-equivalent implementation of the vector MUM32 lane layer.
//!
//! Used directly on non-x86 targets, and as the reference every real SIMD
//! kernel in this module is checked against: all three code paths must
//! fold the same 32-byte chunk into the same accumulator.

use crate::kernels::constants::VECTOR_LANE_CONSTS;

/// Process `data` (length a multiple of 32) as a sequence of vector steps
/// and return the folded per-lane accumulators.
#[must_use]
pub fn fold(data: &[u8]) -> [u64; 4] {
    debug_assert_eq!(data.len() % 32, 0);
    let mut vacc = [0u64; 4];
    for chunk in data.chunks_exact(32) {
        for (lane, acc) in vacc.iter_mut().enumerate() {
            let mut a_buf = [0u8; 4];
            let mut b_buf = [0u8; 4];
            a_buf.copy_from_slice(&chunk[lane * 8..lane * 8 + 4]);
            b_buf.copy_from_slice(&chunk[lane * 8 + 4..lane * 8 + 8]);
            let a = u32::from_le_bytes(a_buf);
            let b = u32::from_le_bytes(b_buf);
            let prod = u64::from(a) * u64::from(b);
            let folded = (prod >> 32) as u32 ^ prod as u32;
            *acc = acc.wrapping_add(u64::from(folded) ^ VECTOR_LANE_CONSTS[lane]);
        }
    }
    vacc
}
