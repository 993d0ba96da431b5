//! AVX2 implementation of the vector MUM32 lane layer: one 256-bit register
//! holds all 4 lanes of a 32-byte step.

#[cfg(target_arch = "x86")]
use core::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::*;

use crate::kernels::constants::VECTOR_LANE_CONSTS;

/// Fold `data` (length a multiple of 32) into per-lane accumulators using
/// one `vpmuludq` per 32-byte step.
///
/// # Safety
/// Caller must have verified AVX2 is available (via runtime detection or a
/// compile-time `target_feature`).
#[target_feature(enable = "avx2")]
#[allow(unsafe_code)]
pub unsafe fn fold(data: &[u8]) -> [u64; 4] {
    debug_assert_eq!(data.len() % 32, 0);
    let mut vacc = [0u64; 4];
    for chunk in data.chunks_exact(32) {
        // Each 64-bit lane of `v`, loaded little-endian, already holds
        // w[2i] in its low 32 bits and w[2i+1] in its high 32 bits.
        let v = _mm256_loadu_si256(chunk.as_ptr().cast());
        let lo = _mm256_and_si256(v, _mm256_set1_epi64x(0xFFFF_FFFF));
        let hi = _mm256_srli_epi64(v, 32);
        let prod = _mm256_mul_epu32(lo, hi);

        let mut lanes = [0u64; 4];
        _mm256_storeu_si256(lanes.as_mut_ptr().cast(), prod);
        for (i, acc) in vacc.iter_mut().enumerate() {
            let folded = (lanes[i] >> 32) as u32 ^ lanes[i] as u32;
            *acc = acc.wrapping_add(u64::from(folded) ^ VECTOR_LANE_CONSTS[i]);
        }
    }
    vacc
}
