//! Portable (architecture-independent) implementation of the MUM family.
//!
//! Every kernel in this module produces identical digests on every target.
//! The vector layer in `kernels::vector` is a distinct mixing step (it folds
//! the key through the MUM32 lane accumulator before the scalar block/tail
//! mixer ever sees it), not an alternate path to the same state this module
//! reaches alone — `hash64` on a key of at least 512 bytes therefore differs
//! from `scalar_hash64`/`hash64` (this module's) over the same bytes. What
//! must agree bit-for-bit is the vector layer's own kernels against each
//! other: AVX2, SSE2, and `kernels::vector::fallback` must fold any given
//! 32-byte-aligned input to the same accumulator, which is what makes the
//! vector layer safe to select by CPU feature at runtime without changing
//! the digest.

pub mod mum512;
pub mod mum64;
pub mod primitive;

pub use mum512::hash512;
pub use mum64::scalar_hash64 as hash64;
