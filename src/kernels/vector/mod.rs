//! Vector-accelerated `VMUM` lane layer, engaged by the driver in
//! `oneshot.rs` whenever the key is at least 512 bytes long.
//!
//! AVX2, SSE2, and the pure-Rust scalar-equivalent fallback all visit the
//! same 32-byte chunks in the same lane order and must produce identical
//! accumulators; `tests/vector_equivalence.rs` checks this directly against
//! the `kernels::portable` scalar path.

pub mod avx2;
pub mod fallback;
pub mod sse2;

/// Bytes consumed per vector step; also the granularity at which the
/// vector layer hands the remainder back to the scalar block/tail mixer.
pub const VECTOR_BLOCK_SIZE: usize = 32;

/// Fold `data` (length a multiple of `VECTOR_BLOCK_SIZE`) using the best
/// vector kernel available on this CPU, falling back to the
/// scalar-equivalent implementation when no accelerated kernel applies.
#[must_use]
#[allow(unsafe_code)]
pub fn fold(data: &[u8]) -> [u64; 4] {
    #[cfg(feature = "std")]
    {
        if std::is_x86_feature_detected!("avx2") {
            // SAFETY: runtime-detected AVX2 support.
            return unsafe { avx2::fold(data) };
        }
        if std::is_x86_feature_detected!("sse2") {
            // SAFETY: runtime-detected SSE2 support.
            return unsafe { sse2::fold(data) };
        }
    }
    #[cfg(not(feature = "std"))]
    {
        #[cfg(target_feature = "avx2")]
        // SAFETY: AVX2 required at compile time for this build.
        return unsafe { avx2::fold(data) };

        #[cfg(all(not(target_feature = "avx2"), target_feature = "sse2"))]
        // SAFETY: SSE2 required at compile time for this build.
        return unsafe { sse2::fold(data) };
    }
    fallback::fold(data)
}

/// Name of the vector kernel `fold` would currently dispatch to.
#[must_use]
pub fn active_name() -> &'static str {
    #[cfg(feature = "std")]
    {
        if std::is_x86_feature_detected!("avx2") {
            return "avx2";
        }
        if std::is_x86_feature_detected!("sse2") {
            return "sse2";
        }
    }
    #[cfg(not(feature = "std"))]
    {
        #[cfg(target_feature = "avx2")]
        return "avx2";
        #[cfg(all(not(target_feature = "avx2"), target_feature = "sse2"))]
        return "sse2";
    }
    "scalar"
}
