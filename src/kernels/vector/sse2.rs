//! SSE2 implementation of the vector MUM32 lane layer: a 32-byte step is
//! processed as two back-to-back 128-bit (2-lane) halves.

#[cfg(target_arch = "x86")]
use core::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::*;

use crate::kernels::constants::VECTOR_LANE_CONSTS;

/// Fold one 16-byte (2-lane) half of a vector step into `vacc[base..base+2]`.
///
/// # Safety
/// Caller must have verified SSE2 is available.
#[target_feature(enable = "sse2")]
#[allow(unsafe_code)]
unsafe fn fold_half(half: &[u8], base: usize, vacc: &mut [u64; 4]) {
    let v = _mm_loadu_si128(half.as_ptr().cast());
    let lo = _mm_and_si128(v, _mm_set1_epi64x(0xFFFF_FFFF));
    let hi = _mm_srli_epi64(v, 32);
    let prod = _mm_mul_epu32(lo, hi);

    let mut lanes = [0u64; 2];
    _mm_storeu_si128(lanes.as_mut_ptr().cast(), prod);
    for (i, lane) in lanes.iter().enumerate() {
        let folded = (lane >> 32) as u32 ^ *lane as u32;
        vacc[base + i] = vacc[base + i].wrapping_add(u64::from(folded) ^ VECTOR_LANE_CONSTS[base + i]);
    }
}

/// Fold `data` (length a multiple of 32) into per-lane accumulators, two
/// lanes per `vpmuludq`-equivalent SSE2 instruction.
///
/// # Safety
/// Caller must have verified SSE2 is available (via runtime detection or a
/// compile-time `target_feature`; SSE2 is part of the x86_64 baseline, so
/// this is effectively always satisfied there).
#[target_feature(enable = "sse2")]
#[allow(unsafe_code)]
pub unsafe fn fold(data: &[u8]) -> [u64; 4] {
    debug_assert_eq!(data.len() % 32, 0);
    let mut vacc = [0u64; 4];
    for chunk in data.chunks_exact(32) {
        fold_half(&chunk[0..16], 0, &mut vacc);
        fold_half(&chunk[16..32], 2, &mut vacc);
    }
    vacc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_scalar_fallback() {
        if !std::is_x86_feature_detected!("sse2") {
            return;
        }
        let data: Vec<u8> = (0..96u32).map(|i| i as u8).collect();
        let sse2 = unsafe { fold(&data) };
        let scalar = crate::kernels::vector::fallback::fold(&data);
        assert_eq!(sse2, scalar);
    }
}
