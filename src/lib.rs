#![cfg_attr(not(feature = "std"), no_std)]

//! # mum-hash
//!
//! `MUM`, `VMUM`, and `MUM512`: widening-multiply non-cryptographic hash
//! functions, built on a single primitive — multiply two words, fold the
//! high and low halves of the product together — applied at three scales.
//!
//! # Usage
//! ```rust
//! // 1. MUM64 / VMUM (the 512-byte vector gate engages automatically)
//! let digest = mum_hash::hash64(b"Performance Matters", 0);
//! assert!(mum_hash::hash64(b"Performance Matters", 0) == digest);
//!
//! // 2. MUM512
//! let wide = mum_hash::hash512(b"Performance Matters", [0, 0]);
//! println!("{wide}");
//!
//! // 3. Seedable PRNGs built on the same mixers
//! use mum_hash::MumPrng;
//! let mut prng = MumPrng::new(42);
//! let a = prng.next();
//! let b = prng.next();
//! assert_ne!(a, b);
//! ```

// =============================================================================
// MODULES
// =============================================================================

mod engine;
#[doc(hidden)]
pub mod kernels; // Public for test/example use only
mod oneshot;
mod prng;
pub(crate) mod types;

// =============================================================================
// EXPORTS
// =============================================================================

pub use oneshot::{hash512, hash64, vhash64};
pub use prng::{Mum512Prng, MumPrng};
pub use types::Digest512;

/// Returns the name of the vector kernel currently backing `VMUM`
/// (`"avx2"`, `"sse2"`, or `"scalar"`).
#[must_use]
pub fn active_backend() -> &'static str {
    engine::get_active_backend_name()
}
